//! Inside/outside masks and their extraction from RGBA pixels
//!
//! A pixel is inside when any of its red, green, or blue bytes exceeds the
//! matching channel threshold. Alpha is ignored.
//!
//! Author: Moroya Sakamoto

use serde::{Deserialize, Serialize};

use crate::error::SdfError;
use crate::pixel::{pixel_count, RgbaBuffer};

// ── Mask ─────────────────────────────────────────────────────

/// Boolean inside/outside classification of a pixel grid.
///
/// `true` = inside the shape. Row-major, index = `y * width + x`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mask {
    width: u32,
    height: u32,
    cells: Vec<bool>,
}

impl Mask {
    /// Wrap a cell vector, checking that it holds exactly `width * height` entries.
    pub fn new(width: u32, height: u32, cells: Vec<bool>) -> Result<Self, SdfError> {
        let count = pixel_count(width, height)?;
        if cells.len() != count {
            return Err(SdfError::len_mismatch(count, cells.len()));
        }
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Build by evaluating `f(x, y)` for every pixel.
    pub fn from_fn(
        width: u32,
        height: u32,
        mut f: impl FnMut(u32, u32) -> bool,
    ) -> Result<Self, SdfError> {
        let count = pixel_count(width, height)?;
        let mut cells = Vec::with_capacity(count);
        for y in 0..height {
            for x in 0..width {
                cells.push(f(x, y));
            }
        }
        Ok(Self {
            width,
            height,
            cells,
        })
    }

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

    /// `(width, height)`
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Cells in row-major order.
    #[inline]
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// Whether `(x, y)` is inside. Out-of-bounds pixels count as outside.
    #[inline]
    pub fn is_inside(&self, x: u32, y: u32) -> bool {
        x < self.width && y < self.height && self.cells[(y * self.width + x) as usize]
    }

    /// Logical complement: inside becomes outside and vice versa.
    pub fn complement(&self) -> Self {
        Self {
            width: self.width,
            height: self.height,
            cells: self.cells.iter().map(|&c| !c).collect(),
        }
    }

    /// Number of inside pixels.
    pub fn inside_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }
}

// ── Thresholds ───────────────────────────────────────────────

/// Per-channel thresholds in [0, 1].
///
/// Each is truncated to a byte (`floor(t * 255)`) and a channel counts as
/// set when its byte is strictly greater.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ChannelThresholds {
    /// Red threshold
    pub red: f32,
    /// Green threshold
    pub green: f32,
    /// Blue threshold
    pub blue: f32,
}

impl ChannelThresholds {
    /// Thresholds for each channel.
    pub fn new(red: f32, green: f32, blue: f32) -> Self {
        Self { red, green, blue }
    }

    /// Same threshold on every channel.
    pub fn uniform(value: f32) -> Self {
        Self::new(value, value, value)
    }

    /// Reject NaN or anything outside [0, 1].
    pub fn validate(&self) -> Result<(), SdfError> {
        for (channel, value) in [("red", self.red), ("green", self.green), ("blue", self.blue)] {
            if !(0.0..=1.0).contains(&value) {
                return Err(SdfError::InvalidThreshold { channel, value });
            }
        }
        Ok(())
    }

    /// Byte thresholds `[r, g, b]`.
    pub fn to_bytes(&self) -> [u8; 3] {
        [
            threshold_byte(self.red),
            threshold_byte(self.green),
            threshold_byte(self.blue),
        ]
    }
}

/// `floor(t * 255)` as a byte. Expects `t` in [0, 1].
#[inline]
pub fn threshold_byte(t: f32) -> u8 {
    (t * 255.0) as u8
}

// ── Extraction ───────────────────────────────────────────────

/// Classify every pixel of `buffer` as inside or outside.
pub fn extract_inside_mask(
    buffer: &RgbaBuffer,
    thresholds: &ChannelThresholds,
) -> Result<Mask, SdfError> {
    thresholds.validate()?;
    let [tr, tg, tb] = thresholds.to_bytes();

    let cells = buffer
        .pixels()
        .iter()
        .map(|&[r, g, b, _]| r > tr || g > tg || b > tb)
        .collect();

    let mask = Mask::new(buffer.width(), buffer.height(), cells)?;
    log::trace!(
        "extracted mask {}x{} ({} inside, thresholds {:?})",
        mask.width,
        mask.height,
        mask.inside_count(),
        [tr, tg, tb]
    );
    Ok(mask)
}
