//! Per-frame output handed to the drawing layer.

use glam::Vec3;
use voxplace_core::{FaceNormal, GridCell};

use crate::targeting::{PlacementOutcome, RemovalOutcome, Target};

/// Face outline colour (yellow).
pub const FACE_HIGHLIGHT_COLOR: [f32; 3] = [1.0, 1.0, 0.0];

/// Floor cell outline colour (green).
pub const FLOOR_HIGHLIGHT_COLOR: [f32; 3] = [0.0, 1.0, 0.0];

/// Result of one [`Session::tick`](crate::Session::tick).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameOutput {
    /// Frames ticked before this one.
    pub frame_number: u64,
    pub placement: PlacementOutcome,
    pub removal: RemovalOutcome,
    /// What the player points at after this frame's edits.
    pub target: Option<Target>,
    /// Occupied cell count after this frame's edits.
    pub block_count: usize,
}

/// Outline geometry in world space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum HighlightShape {
    /// Closed loop around one face of a cell.
    Face([Vec3; 4]),
    /// All eight corners of a cell, bottom loop then top loop.
    Cube([Vec3; 8]),
}

/// Outline to draw around the current target.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Highlight {
    pub color: [f32; 3],
    pub shape: HighlightShape,
}

impl Highlight {
    /// Outline for a target: the struck face of a block, or the whole floor cell.
    pub fn for_target(target: Target, cell_size: Vec3) -> Self {
        match target {
            Target::Face { cell, normal } => Self {
                color: FACE_HIGHLIGHT_COLOR,
                shape: HighlightShape::Face(face_corners(cell, normal, cell_size)),
            },
            Target::Floor { cell } => Self {
                color: FLOOR_HIGHLIGHT_COLOR,
                shape: HighlightShape::Cube(cube_corners(cell, cell_size)),
            },
        }
    }
}

fn cube_corners(cell: GridCell, cell_size: Vec3) -> [Vec3; 8] {
    let min = cell.to_vec3() * cell_size;
    let max = min + cell_size;
    [
        Vec3::new(min.x, min.y, min.z),
        Vec3::new(max.x, min.y, min.z),
        Vec3::new(max.x, min.y, max.z),
        Vec3::new(min.x, min.y, max.z),
        Vec3::new(min.x, max.y, min.z),
        Vec3::new(max.x, max.y, min.z),
        Vec3::new(max.x, max.y, max.z),
        Vec3::new(min.x, max.y, max.z),
    ]
}

fn face_corners(cell: GridCell, normal: FaceNormal, cell_size: Vec3) -> [Vec3; 4] {
    let min = cell.to_vec3() * cell_size;
    let axis = normal.axis();
    let (u, v) = ((axis + 1) % 3, (axis + 2) % 3);

    let mut base = min;
    if normal.is_positive() {
        base[axis] += cell_size[axis];
    }
    let mut du = Vec3::ZERO;
    du[u] = cell_size[u];
    let mut dv = Vec3::ZERO;
    dv[v] = cell_size[v];

    [base, base + du, base + du + dv, base + dv]
}
