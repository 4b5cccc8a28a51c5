//! Exact Euclidean distance transform for binary masks
//!
//! Multi-source best-first expansion over the 8-connected pixel lattice.
//! Every outside pixel next to an inside pixel is a seed; the queue always
//! expands the globally nearest unresolved candidate, and candidates carry
//! the accumulated offset *vector* to their seed rather than a path length.
//! The first time a pixel is popped it therefore holds the offset to its
//! nearest inside pixel.
//!
//! Offsets are stored in half-pixel units (doubled) so all lattice arithmetic
//! stays in integers until the final `sqrt`.
//!
//! Author: Moroya Sakamoto

use glam::IVec2;

use crate::collections::PriorityQueue;
use crate::mask::Mask;

/// 8-connected neighbourhood, row-major.
const NEIGHBOURS: [IVec2; 8] = [
    IVec2::new(-1, -1),
    IVec2::new(0, -1),
    IVec2::new(1, -1),
    IVec2::new(-1, 0),
    IVec2::new(1, 0),
    IVec2::new(-1, 1),
    IVec2::new(0, 1),
    IVec2::new(1, 1),
];

/// A queued pixel with its tentative offset.
#[derive(Debug, Clone, Copy)]
struct Candidate {
    index: usize,
    offset: IVec2,
    distance: f64,
}

impl Candidate {
    #[inline]
    fn new(index: usize, offset: IVec2) -> Self {
        Self {
            index,
            offset,
            distance: offset_length(offset),
        }
    }
}

/// Length of an offset vector, still in half-pixel units.
#[inline]
fn offset_length(offset: IVec2) -> f64 {
    offset.as_dvec2().length()
}

/// In-bounds 8-neighbours of `(x, y)` as `(step, index)` pairs.
#[inline]
fn neighbours(x: i32, y: i32, width: i32, height: i32) -> impl Iterator<Item = (IVec2, usize)> {
    NEIGHBOURS.into_iter().filter_map(move |step| {
        let nx = x + step.x;
        let ny = y + step.y;
        if nx < 0 || nx >= width || ny < 0 || ny >= height {
            None
        } else {
            Some((step, (ny * width + nx) as usize))
        }
    })
}

/// Displacement from each outside pixel's nearest inside pixel to the pixel
/// itself, in half-pixel units.
///
/// Inside pixels, and every pixel when the mask has no inside pixels at all,
/// keep `IVec2::ZERO`.
pub fn unsigned_boundary_distance(mask: &Mask) -> Vec<IVec2> {
    let width = mask.width() as i32;
    let height = mask.height() as i32;
    let inside = mask.cells();
    let len = inside.len();

    let mut resolved = vec![false; len];
    let mut offsets = vec![IVec2::ZERO; len];
    let mut queue = PriorityQueue::with_capacity(len, |a: &Candidate, b: &Candidate| {
        a.distance.total_cmp(&b.distance)
    });

    // Seed with outside pixels touching the shape
    for y in 0..height {
        for x in 0..width {
            if !inside[(y * width + x) as usize] {
                continue;
            }
            for (step, n) in neighbours(x, y, width, height) {
                if !inside[n] {
                    queue.push(Candidate::new(n, step * 2));
                }
            }
        }
    }
    let seeds = queue.len();

    let mut pops = 0usize;
    while let Some(current) = queue.try_pop_min() {
        pops += 1;
        if resolved[current.index] {
            continue;
        }
        resolved[current.index] = true;
        offsets[current.index] = current.offset;

        let x = (current.index % width as usize) as i32;
        let y = (current.index / width as usize) as i32;
        for (step, n) in neighbours(x, y, width, height) {
            if resolved[n] || inside[n] {
                continue;
            }
            queue.push(Candidate::new(n, current.offset + step * 2));
        }
    }

    log::trace!(
        "distance transform {}x{}: {} seeds, {} pops",
        width,
        height,
        seeds,
        pops
    );
    offsets
}

// ── Signed field ─────────────────────────────────────────────

/// Per-pixel signed distance in pixels: positive inside, negative outside.
#[derive(Debug, Clone, PartialEq)]
pub struct SignedDistanceField {
    width: u32,
    height: u32,
    distances: Vec<f64>,
}

impl SignedDistanceField {
    /// Run the transform for both polarities and combine them.
    ///
    /// The two transforms are independent and run on separate rayon tasks.
    pub fn compute(mask: &Mask) -> Self {
        let complement = mask.complement();
        let (outside_offsets, inside_offsets) = rayon::join(
            || unsigned_boundary_distance(mask),
            || unsigned_boundary_distance(&complement),
        );
        debug_assert_eq!(outside_offsets.len(), mask.cells().len());
        debug_assert_eq!(inside_offsets.len(), mask.cells().len());

        let distances = mask
            .cells()
            .iter()
            .zip(outside_offsets.iter().zip(inside_offsets.iter()))
            .map(|(&inside, (&outside_offset, &inside_offset))| {
                if inside {
                    offset_length(inside_offset) / 2.0
                } else {
                    -offset_length(outside_offset) / 2.0
                }
            })
            .collect();

        Self {
            width: mask.width(),
            height: mask.height(),
            distances,
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

    /// Distances in row-major order.
    #[inline]
    pub fn distances(&self) -> &[f64] {
        &self.distances
    }

    /// Distance at `(x, y)`, or `None` when out of bounds.
    #[inline]
    pub fn sample(&self, x: u32, y: u32) -> Option<f64> {
        if x < self.width && y < self.height {
            Some(self.distances[(y * self.width + x) as usize])
        } else {
            None
        }
    }

    /// Smallest and largest distance in the field.
    pub fn min_max(&self) -> (f64, f64) {
        self.distances
            .iter()
            .fold((f64::MAX, f64::MIN), |(lo, hi), &d| (lo.min(d), hi.max(d)))
    }

    /// Count pixels with a positive distance.
    pub fn inside_pixel_count(&self) -> usize {
        self.distances.iter().filter(|&&d| d > 0.0).count()
    }
}

/// Convenience wrapper around [`SignedDistanceField::compute`].
#[inline]
pub fn signed_distance_field(mask: &Mask) -> SignedDistanceField {
    SignedDistanceField::compute(mask)
}

// ── Tests ────────────────────────────────────────────────────
