//! Common test helpers for mask-sdf integration tests
//!
//! Author: Moroya Sakamoto

use mask_sdf::prelude::*;

// ============================================================================
// Standard test masks
// ============================================================================

/// Filled disc of `radius` pixels centred in a `size` x `size` buffer
#[allow(dead_code)]
pub fn disc(size: u32, radius: f64) -> RgbaBuffer {
    let c = (size as f64 - 1.0) * 0.5;
    RgbaBuffer::from_fn(size, size, |x, y| {
        let dx = x as f64 - c;
        let dy = y as f64 - c;
        if dx * dx + dy * dy <= radius * radius {
            WHITE
        } else {
            BLACK
        }
    })
    .unwrap()
}

/// Axis-aligned filled rectangle `[x0, x1) x [y0, y1)`
#[allow(dead_code)]
pub fn rect(width: u32, height: u32, x0: u32, y0: u32, x1: u32, y1: u32) -> RgbaBuffer {
    RgbaBuffer::from_fn(width, height, |x, y| {
        if x >= x0 && x < x1 && y >= y0 && y < y1 {
            WHITE
        } else {
            BLACK
        }
    })
    .unwrap()
}

/// Single inside pixel at `(px, py)`
#[allow(dead_code)]
pub fn dot(width: u32, height: u32, px: u32, py: u32) -> RgbaBuffer {
    rect(width, height, px, py, px + 1, py + 1)
}

/// Every pixel set to `color`
#[allow(dead_code)]
pub fn solid(width: u32, height: u32, color: Rgba8) -> RgbaBuffer {
    RgbaBuffer::filled(width, height, color).unwrap()
}

/// Mask extracted with default thresholds
#[allow(dead_code)]
pub fn mask_of(buffer: &RgbaBuffer) -> Mask {
    extract_inside_mask(buffer, &ChannelThresholds::default()).unwrap()
}

// ============================================================================
// Reference implementation
// ============================================================================

/// O(n^2) distance from `(x, y)` to the nearest pixel of opposite membership
#[allow(dead_code)]
pub fn brute_force_distance(mask: &Mask, x: u32, y: u32) -> f64 {
    let own = mask.is_inside(x, y);
    let mut best = f64::MAX;
    for oy in 0..mask.height() {
        for ox in 0..mask.width() {
            if mask.is_inside(ox, oy) != own {
                let dx = ox as f64 - x as f64;
                let dy = oy as f64 - y as f64;
                best = best.min((dx * dx + dy * dy).sqrt());
            }
        }
    }
    best
}

// ============================================================================
// Assertion helpers
// ============================================================================

/// Assert two f64 values are close within tolerance
#[allow(dead_code)]
pub fn assert_close(a: f64, b: f64, tol: f64, msg: &str) {
    assert!(
        (a - b).abs() < tol,
        "{}: {} vs {} (diff={}, tol={})",
        msg,
        a,
        b,
        (a - b).abs(),
        tol
    );
}

/// Assert every pixel is opaque gray (R = G = B, A = 255)
#[allow(dead_code)]
pub fn assert_opaque_gray(buffer: &RgbaBuffer) {
    for (i, &[r, g, b, a]) in buffer.pixels().iter().enumerate() {
        assert!(
            r == g && g == b && a == 255,
            "pixel {} is not opaque gray: {:?}",
            i,
            [r, g, b, a]
        );
    }
}
