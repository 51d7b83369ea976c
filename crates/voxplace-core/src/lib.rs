//! Core types, math, and coordinates for Voxplace.
//!
//! This crate provides the foundational types used throughout the workspace:
//! - Grid cells and face normals
//! - Vector helpers and bounding boxes
//! - Shared error types

pub mod coords;
pub mod error;
pub mod math;

pub use coords::{FaceNormal, GridCell};
pub use error::{Error, Result};
pub use math::BoundingBox;

/// Workspace-wide constants
pub mod constants {
    use glam::Vec3;

    /// Distance travelled along the ray between two grid samples
    pub const RAY_STEP: f32 = 0.1;
    /// Default reach of a targeting ray in world units
    pub const DEFAULT_MAX_DISTANCE: f32 = 10.0;
    /// Default edge lengths of a grid cell
    pub const DEFAULT_CELL_SIZE: Vec3 = Vec3::ONE;
    /// Default world extent in cells (x, y, z)
    pub const DEFAULT_WORLD_SIZE: [i32; 3] = [20, 10, 20];
}
