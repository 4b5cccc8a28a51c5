//! 8-bit quantization of signed distance fields
//!
//! `spread` pixels inside the shape map to white, `spread` pixels outside map
//! to black, and the boundary sits at mid-gray. Quantization truncates, so
//! distance 0 encodes to 127 rather than 128. Outputs are meant to be
//! re-imported as linear, uncompressed data, which makes the exact rounding
//! rule part of the format.
//!
//! Author: Moroya Sakamoto

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::distance::SignedDistanceField;
use crate::error::SdfError;
use crate::pixel::RgbaBuffer;

/// Largest accepted spread.
pub const MAX_SPREAD: u32 = 127;

/// Spread used when none is given.
pub const DEFAULT_SPREAD: u32 = 127;

/// Distance in pixels mapped to full saturation. Always in `1..=127`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Spread(u8);

impl Spread {
    /// Validate and wrap a spread.
    pub fn new(spread: u32) -> Result<Self, SdfError> {
        if (1..=MAX_SPREAD).contains(&spread) {
            Ok(Self(spread as u8))
        } else {
            Err(SdfError::InvalidSpread(spread))
        }
    }

    /// The spread in pixels.
    #[inline]
    pub fn get(self) -> u32 {
        self.0 as u32
    }
}

impl Default for Spread {
    fn default() -> Self {
        Self(DEFAULT_SPREAD as u8)
    }
}

impl TryFrom<u32> for Spread {
    type Error = SdfError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Spread> for u32 {
    fn from(spread: Spread) -> Self {
        spread.get()
    }
}

/// Quantize one signed distance to a byte.
#[inline]
pub fn quantize_distance(distance: f64, spread: Spread) -> u8 {
    let normalized = (distance / spread.get() as f64).clamp(-1.0, 1.0);
    let value = (normalized * 0.5 + 0.5).clamp(0.0, 1.0);
    (value * 255.0) as u8
}

/// Encode a signed distance field as an opaque grayscale RGBA buffer.
pub fn encode_sdf(field: &SignedDistanceField, spread: Spread) -> RgbaBuffer {
    let values = field
        .distances()
        .par_iter()
        .map(|&d| quantize_distance(d, spread))
        .collect();
    RgbaBuffer::from_gray(field.width(), field.height(), values)
}

/// Encode raw distances after checking the grid size and the spread.
pub fn encode_distances(
    width: u32,
    height: u32,
    distances: &[f64],
    spread: u32,
) -> Result<RgbaBuffer, SdfError> {
    let spread = Spread::new(spread)?;
    let count = crate::pixel::pixel_count(width, height)?;
    if distances.len() != count {
        return Err(SdfError::len_mismatch(count, distances.len()));
    }
    let values = distances
        .par_iter()
        .map(|&d| quantize_distance(d, spread))
        .collect();
    Ok(RgbaBuffer::from_gray(width, height, values))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mask::Mask;

    fn spread(n: u32) -> Spread {
        Spread::new(n).unwrap()
    }

    #[test]
    fn spread_range() {
        assert!(Spread::new(0).is_err());
        assert!(Spread::new(1).is_ok());
        assert!(Spread::new(127).is_ok());
        assert!(matches!(Spread::new(128), Err(SdfError::InvalidSpread(128))));
        assert_eq!(Spread::default().get(), 127);
    }

    #[test]
    fn saturates_at_spread() {
        for s in [1, 8, 64, 127] {
            assert_eq!(quantize_distance(s as f64, spread(s)), 255);
            assert_eq!(quantize_distance(-(s as f64), spread(s)), 0);
            assert_eq!(quantize_distance(10.0 * s as f64, spread(s)), 255);
            assert_eq!(quantize_distance(-10.0 * s as f64, spread(s)), 0);
        }
    }

    #[test]
    fn zero_truncates_to_127() {
        assert_eq!(quantize_distance(0.0, spread(16)), 127);
    }

    #[test]
    fn half_spread_values() {
        // 0.75 * 255 = 191.25, 0.25 * 255 = 63.75
        assert_eq!(quantize_distance(4.0, spread(8)), 191);
        assert_eq!(quantize_distance(-4.0, spread(8)), 63);
    }

    #[test]
    fn monotonic() {
        let s = spread(10);
        let mut prev = 0u8;
        for i in -200..=200 {
            let v = quantize_distance(i as f64 * 0.1, s);
            assert!(v >= prev);
            prev = v;
        }
    }

    #[test]
    fn encoded_pixels_are_opaque_gray() {
        let mask = Mask::from_fn(6, 6, |x, y| x >= 2 && y >= 2 && x < 4 && y < 4).unwrap();
        let field = SignedDistanceField::compute(&mask);
        let out = encode_sdf(&field, spread(3));
        assert_eq!(out.dimensions(), (6, 6));
        for &[r, g, b, a] in out.pixels() {
            assert_eq!(r, g);
            assert_eq!(g, b);
            assert_eq!(a, 255);
        }
    }

    #[test]
    fn encode_distances_checks_arguments() {
        assert!(matches!(
            encode_distances(2, 2, &[0.0; 4], 0),
            Err(SdfError::InvalidSpread(0))
        ));
        assert!(matches!(
            encode_distances(2, 2, &[0.0; 3], 4),
            Err(SdfError::DimensionMismatch { .. })
        ));
        let out = encode_distances(2, 1, &[1.0, -1.0], 1).unwrap();
        assert_eq!(out.pixels(), &[[255, 255, 255, 255], [0, 0, 0, 255]]);
    }

    #[test]
    fn spread_serde() {
        let s: Spread = serde_json::from_str("12").unwrap();
        assert_eq!(s.get(), 12);
        assert!(serde_json::from_str::<Spread>("300").is_err());
        assert_eq!(serde_json::to_string(&s).unwrap(), "12");
    }
}
