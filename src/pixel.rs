//! RGBA pixel buffer shared by every stage of the pipeline
//!
//! Row-major, 4 bytes per pixel, index = `y * width + x`. The origin
//! (top-left or bottom-left) is whatever the caller uses, as long as all
//! inputs of one call agree.
//!
//! Author: Moroya Sakamoto

use crate::error::SdfError;

/// One RGBA pixel.
pub type Rgba8 = [u8; 4];

/// Opaque black.
pub const BLACK: Rgba8 = [0, 0, 0, 255];

/// Opaque white.
pub const WHITE: Rgba8 = [255, 255, 255, 255];

/// A width x height grid of RGBA pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbaBuffer {
    width: u32,
    height: u32,
    pixels: Vec<Rgba8>,
}

impl RgbaBuffer {
    /// Wrap a pixel vector, checking that it holds exactly `width * height` entries.
    pub fn new(width: u32, height: u32, pixels: Vec<Rgba8>) -> Result<Self, SdfError> {
        let count = pixel_count(width, height)?;
        if pixels.len() != count {
            return Err(SdfError::len_mismatch(count, pixels.len()));
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Build from a flat byte array (4 bytes per pixel).
    pub fn from_raw(width: u32, height: u32, bytes: Vec<u8>) -> Result<Self, SdfError> {
        let count = pixel_count(width, height)?;
        if bytes.len() != count * 4 {
            return Err(SdfError::DimensionMismatch {
                expected: format!("{} bytes", count * 4),
                actual: format!("{} bytes", bytes.len()),
            });
        }
        let pixels = bytes
            .chunks_exact(4)
            .map(|c| [c[0], c[1], c[2], c[3]])
            .collect();
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// A buffer with every pixel set to `color`.
    pub fn filled(width: u32, height: u32, color: Rgba8) -> Result<Self, SdfError> {
        let count = pixel_count(width, height)?;
        Ok(Self {
            width,
            height,
            pixels: vec![color; count],
        })
    }

    /// Build by evaluating `f(x, y)` for every pixel.
    pub fn from_fn(
        width: u32,
        height: u32,
        mut f: impl FnMut(u32, u32) -> Rgba8,
    ) -> Result<Self, SdfError> {
        let count = pixel_count(width, height)?;
        let mut pixels = Vec::with_capacity(count);
        for y in 0..height {
            for x in 0..width {
                pixels.push(f(x, y));
            }
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Opaque grayscale buffer from one byte per pixel (R = G = B = value, A = 255).
    pub(crate) fn from_gray(width: u32, height: u32, values: Vec<u8>) -> Self {
        debug_assert_eq!(values.len(), width as usize * height as usize);
        Self {
            width,
            height,
            pixels: values.into_iter().map(|v| [v, v, v, 255]).collect(),
        }
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

    /// Pixels in row-major order.
    #[inline]
    pub fn pixels(&self) -> &[Rgba8] {
        &self.pixels
    }

    /// Pixel at `(x, y)`, or `None` when out of bounds.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Option<Rgba8> {
        if x < self.width && y < self.height {
            Some(self.pixels[(y * self.width + x) as usize])
        } else {
            None
        }
    }

    /// Overwrite the pixel at `(x, y)`. Out-of-bounds writes are ignored.
    #[inline]
    pub fn set(&mut self, x: u32, y: u32, color: Rgba8) {
        if x < self.width && y < self.height {
            self.pixels[(y * self.width + x) as usize] = color;
        }
    }

    /// Flatten to 4 bytes per pixel.
    pub fn into_raw(self) -> Vec<u8> {
        self.pixels.into_iter().flatten().collect()
    }

    /// Convert into an `image` crate buffer for encoding.
    #[cfg(feature = "image")]
    pub fn to_image(&self) -> image::RgbaImage {
        let raw: Vec<u8> = self.pixels.iter().flatten().copied().collect();
        // Length is width * height * 4 by construction
        image::RgbaImage::from_raw(self.width, self.height, raw)
            .unwrap_or_else(|| image::RgbaImage::new(self.width, self.height))
    }
}

#[cfg(feature = "image")]
impl From<image::RgbaImage> for RgbaBuffer {
    fn from(img: image::RgbaImage) -> Self {
        let (width, height) = img.dimensions();
        let pixels = img.pixels().map(|p| p.0).collect();
        Self {
            width,
            height,
            pixels,
        }
    }
}

/// `width * height`, rejecting empty grids.
pub(crate) fn pixel_count(width: u32, height: u32) -> Result<usize, SdfError> {
    if width == 0 || height == 0 {
        return Err(SdfError::InvalidDimensions { width, height });
    }
    Ok(width as usize * height as usize)
}
