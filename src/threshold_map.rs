//! Shadow threshold maps from nested masks
//!
//! Masks are ordered from the innermost (smallest) region outwards. Between
//! every adjacent pair the value ramps linearly from 1 on the inner contour
//! to 0 on the outer one; the final map is the mean of all pair ramps.
//!
//! ```text
//!   mask[0] ⊂ mask[1] ⊂ ... ⊂ mask[n-1]
//!   inside mask[0]        → 1
//!   outside mask[n-1]     → 0
//!   between i and i + 1   → interpolated
//! ```
//!
//! Author: Moroya Sakamoto

use rayon::prelude::*;

use crate::distance::SignedDistanceField;
use crate::error::SdfError;
use crate::mask::{extract_inside_mask, ChannelThresholds, Mask};
use crate::pixel::RgbaBuffer;

/// Continuous blend of several masks, values in [0, 1].
#[derive(Debug, Clone, PartialEq)]
pub struct ThresholdMap {
    width: u32,
    height: u32,
    values: Vec<f64>,
}

impl ThresholdMap {
    /// Width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Values in row-major order.
    #[inline]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Value at `(x, y)`, or `None` when out of bounds.
    #[inline]
    pub fn sample(&self, x: u32, y: u32) -> Option<f64> {
        if x < self.width && y < self.height {
            Some(self.values[(y * self.width + x) as usize])
        } else {
            None
        }
    }

    /// Encode as opaque grayscale, `floor(value * 255)`.
    pub fn to_rgba(&self) -> RgbaBuffer {
        let values = self.values.iter().map(|&v| (v * 255.0) as u8).collect();
        RgbaBuffer::from_gray(self.width, self.height, values)
    }
}

/// Ramp value for one pixel between an inner and an outer mask.
///
/// `inner_distance` is negative whenever the pixel is outside the inner mask.
/// A zero denominator only happens when neither mask has a boundary to
/// measure against; it resolves to 1, the limit as the inner distance
/// approaches 0.
#[inline]
pub fn gradation(
    inside_inner: bool,
    inside_outer: bool,
    inner_distance: f64,
    outer_distance: f64,
) -> f64 {
    if inside_inner {
        1.0
    } else if !inside_outer {
        0.0
    } else {
        let denominator = inner_distance - outer_distance;
        if denominator == 0.0 {
            1.0
        } else {
            1.0 - inner_distance / denominator
        }
    }
}

/// Blend pre-extracted masks. Needs at least two masks of identical size.
pub fn blend_masks(masks: &[Mask]) -> Result<ThresholdMap, SdfError> {
    let (width, height) = check_sequence(masks.iter().map(Mask::dimensions))?;
    let pixel_count = width as usize * height as usize;

    let fields: Vec<SignedDistanceField> =
        masks.par_iter().map(SignedDistanceField::compute).collect();
    log::debug!("computed {} distance fields ({}x{})", fields.len(), width, height);

    let pair_count = masks.len() - 1;
    let gradations: Vec<Vec<f64>> = (0..pair_count)
        .into_par_iter()
        .map(|i| {
            let inner = masks[i].cells();
            let outer = masks[i + 1].cells();
            let inner_d = fields[i].distances();
            let outer_d = fields[i + 1].distances();
            (0..pixel_count)
                .map(|idx| gradation(inner[idx], outer[idx], inner_d[idx], outer_d[idx]))
                .collect()
        })
        .collect();

    let values = (0..pixel_count)
        .into_par_iter()
        .map(|idx| {
            let sum: f64 = gradations.iter().map(|g| g[idx]).sum();
            (sum / pair_count as f64).clamp(0.0, 1.0)
        })
        .collect();

    Ok(ThresholdMap {
        width,
        height,
        values,
    })
}

/// Threshold map from RGBA masks, thresholded at 0 on every channel.
pub fn generate_threshold_map(buffers: &[RgbaBuffer]) -> Result<RgbaBuffer, SdfError> {
    generate_threshold_map_with(buffers, &ChannelThresholds::default())
}

/// Threshold map from RGBA masks with explicit channel thresholds.
pub fn generate_threshold_map_with(
    buffers: &[RgbaBuffer],
    thresholds: &ChannelThresholds,
) -> Result<RgbaBuffer, SdfError> {
    check_sequence(buffers.iter().map(RgbaBuffer::dimensions))?;
    thresholds.validate()?;

    let masks = buffers
        .iter()
        .map(|b| extract_inside_mask(b, thresholds))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(blend_masks(&masks)?.to_rgba())
}

/// At least two entries, all with the first entry's dimensions.
fn check_sequence(
    mut dims: impl ExactSizeIterator<Item = (u32, u32)>,
) -> Result<(u32, u32), SdfError> {
    let count = dims.len();
    if count < 2 {
        return Err(SdfError::TooFewMasks(count));
    }
    let first = dims.next().ok_or(SdfError::TooFewMasks(0))?;
    for d in dims {
        if d != first {
            return Err(SdfError::size_mismatch(first, d));
        }
    }
    Ok(first)
}
