//! Image file adapters (requires the `image` feature)
//!
//! Decodes any format the `image` crate understands into an [`RgbaBuffer`]
//! and writes results as lossless PNG. These sit outside the bake pipeline,
//! which only ever sees in-memory buffers.
//!
//! Author: Moroya Sakamoto

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use crate::error::SdfError;
use crate::pixel::RgbaBuffer;

/// Decode an image file into RGBA8 pixels.
pub fn load_rgba(path: impl AsRef<Path>) -> Result<RgbaBuffer, SdfError> {
    let img = image::open(path.as_ref())?;
    Ok(RgbaBuffer::from(img.into_rgba8()))
}

/// Decode in-memory image bytes (PNG, JPEG) into RGBA8 pixels.
pub fn load_rgba_from_memory(bytes: &[u8]) -> Result<RgbaBuffer, SdfError> {
    let img = image::load_from_memory(bytes)?;
    Ok(RgbaBuffer::from(img.into_rgba8()))
}

/// Write a buffer as a PNG file.
pub fn save_png(buffer: &RgbaBuffer, path: impl AsRef<Path>) -> Result<(), SdfError> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    buffer
        .to_image()
        .write_to(&mut writer, image::ImageFormat::Png)?;
    Ok(())
}

/// Encode a buffer as PNG bytes.
pub fn encode_png(buffer: &RgbaBuffer) -> Result<Vec<u8>, SdfError> {
    let mut bytes = std::io::Cursor::new(Vec::new());
    buffer
        .to_image()
        .write_to(&mut bytes, image::ImageFormat::Png)?;
    Ok(bytes.into_inner())
}
