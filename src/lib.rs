//! # mask-sdf
//!
//! Bakes binary pixel masks into signed distance field textures and blends
//! nested masks into shadow threshold maps for toon shading.
//!
//! ## Features
//!
//! - **Mask extraction**: per-channel RGB thresholds, any channel marks a pixel inside
//! - **Distance transform**: exact best-first vector propagation on the 8-connected lattice
//! - **SDF encoding**: spread-normalized, truncating 8-bit quantization
//! - **Threshold maps**: linear ramps between adjacent nested masks, averaged
//! - **Parallel**: per-mask and per-pair work fans out over rayon
//! - **Image I/O** (`image` feature): PNG/JPEG decode, PNG encode
//!
//! ## Example
//!
//! ```rust
//! use mask_sdf::prelude::*;
//!
//! // 8x8 mask with a 4x4 square in the middle
//! let mask = RgbaBuffer::from_fn(8, 8, |x, y| {
//!     if (2..6).contains(&x) && (2..6).contains(&y) { WHITE } else { BLACK }
//! }).unwrap();
//!
//! let sdf = generate_sdf(&mask, &SdfConfig::with_spread(4).unwrap()).unwrap();
//! assert_eq!(sdf.dimensions(), (8, 8));
//!
//! // Grow the square outward for a second, larger mask
//! let outer = RgbaBuffer::from_fn(8, 8, |x, y| {
//!     if (1..7).contains(&x) && (1..7).contains(&y) { WHITE } else { BLACK }
//! }).unwrap();
//! let map = generate_threshold_map(&[mask, outer]).unwrap();
//! assert_eq!(map.get(3, 3), Some([255, 255, 255, 255]));
//! ```
//!
//! ## Author
//!
//! Moroya Sakamoto

#![warn(missing_docs)]

pub mod collections;
pub mod config;
pub mod distance;
pub mod encode;
pub mod error;
pub mod generator;
pub mod mask;
pub mod pixel;
pub mod threshold_map;

#[cfg(feature = "image")]
pub mod io;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude - commonly used types and functions
pub mod prelude {
    pub use crate::collections::PriorityQueue;
    pub use crate::config::{SdfConfig, ThresholdMapConfig};
    pub use crate::distance::{
        signed_distance_field, unsigned_boundary_distance, SignedDistanceField,
    };
    pub use crate::encode::{
        encode_distances, encode_sdf, quantize_distance, Spread, DEFAULT_SPREAD, MAX_SPREAD,
    };
    pub use crate::error::SdfError;
    pub use crate::generator::{
        convert_to_sdf, generate_sdf, generate_signed_distance, generate_threshold_map_with_config,
    };
    pub use crate::mask::{extract_inside_mask, ChannelThresholds, Mask};
    pub use crate::pixel::{Rgba8, RgbaBuffer, BLACK, WHITE};
    pub use crate::threshold_map::{
        blend_masks, generate_threshold_map, generate_threshold_map_with, gradation, ThresholdMap,
    };
    #[cfg(feature = "image")]
    pub use crate::io::{load_rgba, save_png};
}

// Re-exports for convenience
pub use error::SdfError;
pub use generator::{convert_to_sdf, generate_sdf};
pub use pixel::RgbaBuffer;
pub use threshold_map::generate_threshold_map;
