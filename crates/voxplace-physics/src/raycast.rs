//! Fixed-step ray marching through the block grid.
//!
//! This is deliberately not a DDA traversal. The ray advances by
//! [`RAY_STEP`] world units per sample, so consecutive samples often land in
//! the same cell and a ray grazing a corner can skip a cell entirely. Which
//! cell gets hit first depends on that sampling, and callers rely on it.

use std::iter::FusedIterator;

use glam::Vec3;
use voxplace_core::constants::RAY_STEP;
use voxplace_core::math::normalize;
use voxplace_core::GridCell;

/// Number of samples taken for a ray of the given length (always at least one).
///
/// The division is done in `f32`, so a decimal reach counts the samples it
/// reads as: `0.3` gives 3, not the 2 that an `f64` quotient would floor to.
#[inline]
pub fn sample_count(max_distance: f32) -> usize {
    ((max_distance / RAY_STEP).floor() as usize).max(1)
}

/// Lazy sequence of the cells sampled along a ray.
///
/// The first item is the cell containing the origin. Each `cast` builds an
/// independent iterator, so dropping one early costs nothing.
#[derive(Debug, Clone)]
pub struct GridRaycast {
    position: Vec3,
    step: Vec3,
    cell_size: Vec3,
    taken: usize,
    total: usize,
}

impl GridRaycast {
    /// Start a march from `origin` along `direction`.
    ///
    /// `direction` is normalized here; a zero direction yields the origin
    /// cell for every sample. `max_distance` and every `cell_size` component
    /// must be positive.
    pub fn new(origin: Vec3, direction: Vec3, max_distance: f32, cell_size: Vec3) -> Self {
        debug_assert!(max_distance > 0.0);
        debug_assert!(cell_size.cmpgt(Vec3::ZERO).all());
        Self {
            position: origin,
            step: normalize(direction) * RAY_STEP,
            cell_size,
            taken: 0,
            total: sample_count(max_distance),
        }
    }

    /// Distance marched to reach the next sample.
    #[inline]
    pub fn distance(&self) -> f32 {
        self.taken as f32 * RAY_STEP
    }
}

impl Iterator for GridRaycast {
    type Item = GridCell;

    fn next(&mut self) -> Option<Self::Item> {
        if self.taken >= self.total {
            return None;
        }
        let cell = GridCell::containing(self.position, self.cell_size);
        self.position += self.step;
        self.taken += 1;
        Some(cell)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.total - self.taken;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for GridRaycast {}

impl FusedIterator for GridRaycast {}

/// Cells sampled along a ray, see [`GridRaycast::new`].
#[inline]
pub fn cast(origin: Vec3, direction: Vec3, max_distance: f32, cell_size: Vec3) -> GridRaycast {
    GridRaycast::new(origin, direction, max_distance, cell_size)
}
