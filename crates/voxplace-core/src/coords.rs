//! Grid coordinates and face normals.

use bytemuck::{Pod, Zeroable};
use glam::{IVec3, Vec3};
use serde::{Deserialize, Serialize};

/// A unit cube of the world grid.
///
/// Laid out as three `i32` so a slice of cells can be uploaded directly as
/// per-instance data.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Pod, Zeroable, Serialize, Deserialize,
)]
#[repr(C)]
pub struct GridCell {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl GridCell {
    /// Create a new grid cell
    #[inline]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Cell containing a continuous position, `floor(position / cell_size)` per axis
    #[inline]
    pub fn containing(position: Vec3, cell_size: Vec3) -> Self {
        let scaled = (position / cell_size).floor();
        Self::new(scaled.x as i32, scaled.y as i32, scaled.z as i32)
    }

    /// Neighbouring cell across the given face
    #[inline]
    #[must_use]
    pub fn offset(self, normal: FaceNormal) -> Self {
        Self::from(self.to_ivec3() + normal.to_ivec3())
    }

    /// Returns `true` if the cell sits on the floor layer (y == 0)
    #[inline]
    pub const fn is_floor(self) -> bool {
        self.y == 0
    }

    /// Convert to glam IVec3
    #[inline]
    pub const fn to_ivec3(self) -> IVec3 {
        IVec3::new(self.x, self.y, self.z)
    }

    /// Convert to floating point Vec3 (minimum corner for unit cells)
    #[inline]
    pub fn to_vec3(self) -> Vec3 {
        Vec3::new(self.x as f32, self.y as f32, self.z as f32)
    }
}

impl From<IVec3> for GridCell {
    fn from(v: IVec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<(i32, i32, i32)> for GridCell {
    fn from((x, y, z): (i32, i32, i32)) -> Self {
        Self::new(x, y, z)
    }
}

/// One of the six axis-aligned faces of a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FaceNormal {
    PosX,
    NegX,
    PosY,
    NegY,
    PosZ,
    NegZ,
}

impl FaceNormal {
    /// All six faces in axis order.
    pub const ALL: [Self; 6] = [
        Self::PosX,
        Self::NegX,
        Self::PosY,
        Self::NegY,
        Self::PosZ,
        Self::NegZ,
    ];

    /// Face on the given axis (0 = x, 1 = y, 2 = z) with the given sign.
    ///
    /// Axis indices past 2 are treated as z.
    #[inline]
    pub const fn from_axis(axis: usize, positive: bool) -> Self {
        match (axis, positive) {
            (0, true) => Self::PosX,
            (0, false) => Self::NegX,
            (1, true) => Self::PosY,
            (1, false) => Self::NegY,
            (_, true) => Self::PosZ,
            (_, false) => Self::NegZ,
        }
    }

    /// Axis index of the single nonzero component
    #[inline]
    pub const fn axis(self) -> usize {
        match self {
            Self::PosX | Self::NegX => 0,
            Self::PosY | Self::NegY => 1,
            Self::PosZ | Self::NegZ => 2,
        }
    }

    #[inline]
    pub const fn is_positive(self) -> bool {
        matches!(self, Self::PosX | Self::PosY | Self::PosZ)
    }

    #[inline]
    pub const fn to_ivec3(self) -> IVec3 {
        match self {
            Self::PosX => IVec3::X,
            Self::NegX => IVec3::NEG_X,
            Self::PosY => IVec3::Y,
            Self::NegY => IVec3::NEG_Y,
            Self::PosZ => IVec3::Z,
            Self::NegZ => IVec3::NEG_Z,
        }
    }

    #[inline]
    pub fn to_vec3(self) -> Vec3 {
        self.to_ivec3().as_vec3()
    }
}
