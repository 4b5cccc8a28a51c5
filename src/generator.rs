//! One-call bake pipelines
//!
//! RGBA → mask → signed distance field → RGBA. All arguments are validated
//! before any pixel work starts.
//!
//! Author: Moroya Sakamoto

use crate::config::{SdfConfig, ThresholdMapConfig};
use crate::distance::SignedDistanceField;
use crate::encode::{encode_sdf, Spread};
use crate::error::SdfError;
use crate::mask::{extract_inside_mask, ChannelThresholds};
use crate::pixel::RgbaBuffer;
use crate::threshold_map::generate_threshold_map_with;

/// Bake an SDF texture from an RGBA mask.
pub fn generate_sdf(buffer: &RgbaBuffer, config: &SdfConfig) -> Result<RgbaBuffer, SdfError> {
    let field = generate_signed_distance(buffer, &config.thresholds)?;
    let out = encode_sdf(&field, config.spread);
    log::debug!(
        "baked SDF {}x{} (spread {})",
        out.width(),
        out.height(),
        config.spread.get()
    );
    Ok(out)
}

/// Raw signed distance field of an RGBA mask, without quantization.
pub fn generate_signed_distance(
    buffer: &RgbaBuffer,
    thresholds: &ChannelThresholds,
) -> Result<SignedDistanceField, SdfError> {
    let mask = extract_inside_mask(buffer, thresholds)?;
    let field = SignedDistanceField::compute(&mask);
    let (lo, hi) = field.min_max();
    log::debug!(
        "signed distance field {}x{}: range [{:.3}, {:.3}]",
        field.width(),
        field.height(),
        lo,
        hi
    );
    Ok(field)
}

/// Red-channel converter: a pixel is inside when its red byte is non-zero.
pub fn convert_to_sdf(buffer: &RgbaBuffer, spread: u32) -> Result<RgbaBuffer, SdfError> {
    let config = SdfConfig {
        spread: Spread::new(spread)?,
        thresholds: ChannelThresholds::new(0.0, 1.0, 1.0),
    };
    generate_sdf(buffer, &config)
}

/// Bake a threshold map using the thresholds from `config`.
pub fn generate_threshold_map_with_config(
    buffers: &[RgbaBuffer],
    config: &ThresholdMapConfig,
) -> Result<RgbaBuffer, SdfError> {
    let out = generate_threshold_map_with(buffers, &config.thresholds)?;
    log::debug!(
        "baked threshold map {}x{} from {} masks",
        out.width(),
        out.height(),
        buffers.len()
    );
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pixel::{BLACK, WHITE};

    fn center_dot() -> RgbaBuffer {
        RgbaBuffer::from_fn(3, 3, |x, y| if x == 1 && y == 1 { WHITE } else { BLACK }).unwrap()
    }

    #[test]
    fn center_dot_spread_one() {
        let out = generate_sdf(&center_dot(), &SdfConfig::with_spread(1).unwrap()).unwrap();
        assert_eq!(out.get(1, 1), Some([255, 255, 255, 255]));
        for (x, y) in [(1, 0), (0, 1), (2, 1), (1, 2)] {
            assert_eq!(out.get(x, y), Some([0, 0, 0, 255]));
        }
    }

    #[test]
    fn all_outside_is_neutral_gray() {
        let buffer = RgbaBuffer::filled(4, 4, BLACK).unwrap();
        let out = generate_sdf(&buffer, &SdfConfig::default()).unwrap();
        assert!(out.pixels().iter().all(|&p| p == [127, 127, 127, 255]));
    }

    #[test]
    fn red_channel_converter_ignores_green() {
        let buffer = RgbaBuffer::from_fn(3, 1, |x, _| match x {
            0 => [255, 0, 0, 255],
            _ => [0, 255, 0, 255],
        })
        .unwrap();
        let field = generate_signed_distance(&buffer, &ChannelThresholds::new(0.0, 1.0, 1.0))
            .unwrap();
        assert!(field.sample(0, 0).unwrap() > 0.0);
        assert!(field.sample(1, 0).unwrap() < 0.0);

        let out = convert_to_sdf(&buffer, 2).unwrap();
        // 1 px inside, spread 2: 0.75 * 255
        assert_eq!(out.get(0, 0), Some([191, 191, 191, 255]));
    }

    #[test]
    fn invalid_spread_fails_before_work() {
        assert!(matches!(
            convert_to_sdf(&center_dot(), 128),
            Err(SdfError::InvalidSpread(128))
        ));
    }

    #[test]
    fn threshold_map_with_config() {
        let dim = RgbaBuffer::filled(2, 2, [100, 0, 0, 255]).unwrap();
        let config = ThresholdMapConfig {
            thresholds: ChannelThresholds::new(0.5, 1.0, 1.0),
        };
        // 100 is below the 127 threshold, so both masks are empty
        let out = generate_threshold_map_with_config(&[dim.clone(), dim], &config).unwrap();
        assert!(out.pixels().iter().all(|&p| p == [0, 0, 0, 255]));
    }
}
