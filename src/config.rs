//! Bake settings
//!
//! Both configs deserialize from JSON with every field optional:
//!
//! ```json
//! { "spread": 16, "thresholds": { "red": 0.5 } }
//! ```
//!
//! Author: Moroya Sakamoto

use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::encode::Spread;
use crate::error::SdfError;
use crate::mask::ChannelThresholds;

/// Settings for single-mask SDF generation.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SdfConfig {
    /// Distance in pixels mapped to full white / black (default 127).
    pub spread: Spread,
    /// Inside-mask channel thresholds (default 0 on every channel).
    pub thresholds: ChannelThresholds,
}

impl SdfConfig {
    /// Config with the given spread and default thresholds.
    pub fn with_spread(spread: u32) -> Result<Self, SdfError> {
        Ok(Self {
            spread: Spread::new(spread)?,
            ..Self::default()
        })
    }

    /// Parse from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self, SdfError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| SdfError::Config(e.to_string()))?;
        config.thresholds.validate()?;
        Ok(config)
    }

    /// Load from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SdfError> {
        let config: Self = read_json(path)?;
        config.thresholds.validate()?;
        Ok(config)
    }
}

/// Settings for threshold map generation.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ThresholdMapConfig {
    /// Channel thresholds applied to every input mask.
    pub thresholds: ChannelThresholds,
}

impl ThresholdMapConfig {
    /// Parse from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self, SdfError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| SdfError::Config(e.to_string()))?;
        config.thresholds.validate()?;
        Ok(config)
    }

    /// Load from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SdfError> {
        let config: Self = read_json(path)?;
        config.thresholds.validate()?;
        Ok(config)
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: impl AsRef<Path>) -> Result<T, SdfError> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|e| SdfError::Config(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = SdfConfig::default();
        assert_eq!(config.spread.get(), 127);
        assert_eq!(config.thresholds, ChannelThresholds::default());
    }

    #[test]
    fn empty_json_is_default() {
        assert_eq!(SdfConfig::from_json_str("{}").unwrap(), SdfConfig::default());
        assert_eq!(
            ThresholdMapConfig::from_json_str("{}").unwrap(),
            ThresholdMapConfig::default()
        );
    }

    #[test]
    fn partial_json() {
        let config =
            SdfConfig::from_json_str(r#"{ "spread": 16, "thresholds": { "red": 0.5 } }"#).unwrap();
        assert_eq!(config.spread.get(), 16);
        assert_eq!(config.thresholds.red, 0.5);
        assert_eq!(config.thresholds.blue, 0.0);
    }

    #[test]
    fn invalid_spread_rejected() {
        let err = SdfConfig::from_json_str(r#"{ "spread": 0 }"#).unwrap_err();
        assert!(matches!(err, SdfError::Config(_)));
    }

    #[test]
    fn invalid_threshold_rejected() {
        let err = ThresholdMapConfig::from_json_str(r#"{ "thresholds": { "blue": 2.0 } }"#)
            .unwrap_err();
        assert!(matches!(err, SdfError::InvalidThreshold { channel: "blue", .. }));
    }

    #[test]
    fn load_from_file() {
        let path = std::env::temp_dir().join("mask_sdf_test_config.json");
        std::fs::write(&path, r#"{ "spread": 8 }"#).unwrap();
        let config = SdfConfig::load(&path).unwrap();
        assert_eq!(config.spread.get(), 8);
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = SdfConfig::load("/nonexistent/mask_sdf/config.json").unwrap_err();
        assert!(matches!(err, SdfError::Io(_)));
    }

    #[test]
    fn with_spread_validates() {
        assert!(SdfConfig::with_spread(0).is_err());
        assert_eq!(SdfConfig::with_spread(4).unwrap().spread.get(), 4);
    }
}
