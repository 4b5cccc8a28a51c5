//! Error types for mask-to-SDF baking
//!
//! Every public operation validates its arguments before touching any pixel
//! and reports failures through [`SdfError`].
//!
//! Author: Moroya Sakamoto

use thiserror::Error;

/// Errors produced while extracting masks, computing distance fields,
/// or encoding textures.
#[derive(Error, Debug)]
pub enum SdfError {
    /// Width or height is zero
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Requested width
        width: u32,
        /// Requested height
        height: u32,
    },

    /// A buffer, mask, or input texture does not match the expected size
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Expected size description
        expected: String,
        /// Actual size description
        actual: String,
    },

    /// Spread outside the 1..=127 range
    #[error("Spread {0} is out of range (1..=127)")]
    InvalidSpread(u32),

    /// Channel threshold outside [0, 1] or NaN
    #[error("Threshold for {channel} channel is out of range [0, 1]: {value}")]
    InvalidThreshold {
        /// Channel name ("red", "green", "blue")
        channel: &'static str,
        /// Rejected value
        value: f32,
    },

    /// Threshold map requested with fewer than two masks
    #[error("Threshold map needs at least 2 masks, got {0}")]
    TooFewMasks(usize),

    /// I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Image decoding or encoding error
    #[error("Image error: {0}")]
    Image(String),

    /// Configuration parse error
    #[error("Config error: {0}")]
    Config(String),
}

impl SdfError {
    /// Build a [`SdfError::DimensionMismatch`] from two `width x height` pairs.
    pub fn size_mismatch(expected: (u32, u32), actual: (u32, u32)) -> Self {
        SdfError::DimensionMismatch {
            expected: format!("{}x{}", expected.0, expected.1),
            actual: format!("{}x{}", actual.0, actual.1),
        }
    }

    /// Build a [`SdfError::DimensionMismatch`] from two element counts.
    pub fn len_mismatch(expected: usize, actual: usize) -> Self {
        SdfError::DimensionMismatch {
            expected: format!("{} pixels", expected),
            actual: format!("{} pixels", actual),
        }
    }
}

#[cfg(feature = "image")]
impl From<image::ImageError> for SdfError {
    fn from(e: image::ImageError) -> Self {
        SdfError::Image(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_mismatch_message() {
        let err = SdfError::size_mismatch((4, 4), (8, 2));
        assert_eq!(err.to_string(), "Dimension mismatch: expected 4x4, got 8x2");
    }

    #[test]
    fn spread_message() {
        let err = SdfError::InvalidSpread(200);
        assert!(err.to_string().contains("200"));
    }

    #[test]
    fn io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: SdfError = io.into();
        assert!(matches!(err, SdfError::Io(_)));
    }
}
