//! Vector helpers and bounding boxes.

use glam::Vec3;

/// Normalize a vector, returning zero for a zero-length input.
#[inline]
#[must_use]
pub fn normalize(v: Vec3) -> Vec3 {
    let length = v.length();
    if length > 0.0 {
        v / length
    } else {
        Vec3::ZERO
    }
}

#[inline]
#[must_use]
pub fn dot(a: Vec3, b: Vec3) -> f32 {
    a.x * b.x + a.y * b.y + a.z * b.z
}

#[inline]
#[must_use]
pub fn cross(a: Vec3, b: Vec3) -> Vec3 {
    Vec3::new(
        a.y * b.z - a.z * b.y,
        a.z * b.x - a.x * b.z,
        a.x * b.y - a.y * b.x,
    )
}

/// Restrict `value` to `[lo, hi]`. Callers guarantee `lo <= hi`.
#[inline]
#[must_use]
pub fn clamp(value: f32, lo: f32, hi: f32) -> f32 {
    debug_assert!(lo <= hi);
    lo.max(hi.min(value))
}

/// Axis-aligned box constraining a continuous position.
///
/// Both ends of every axis are inclusive.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BoundingBox {
    /// Minimum corner
    pub min: Vec3,
    /// Maximum corner
    pub max: Vec3,
}

impl BoundingBox {
    /// Create a new box from min and max corners
    #[inline]
    #[must_use]
    pub const fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Create a box from per-axis `(min, max)` pairs
    #[inline]
    #[must_use]
    pub const fn from_axes(x: (f32, f32), y: (f32, f32), z: (f32, f32)) -> Self {
        Self {
            min: Vec3::new(x.0, y.0, z.0),
            max: Vec3::new(x.1, y.1, z.1),
        }
    }

    /// Get the size of the box
    #[inline]
    #[must_use]
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// Returns `true` if every axis has `min <= max`
    #[inline]
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.min.cmple(self.max).all()
    }

    /// Check if a point is inside the box
    #[inline]
    #[must_use]
    pub fn contains_point(&self, point: Vec3) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
            && point.z >= self.min.z
            && point.z <= self.max.z
    }

    /// Clamp a point into the box axis by axis
    #[inline]
    #[must_use]
    pub fn clamp_point(&self, point: Vec3) -> Vec3 {
        Vec3::new(
            clamp(point.x, self.min.x, self.max.x),
            clamp(point.y, self.min.y, self.max.y),
            clamp(point.z, self.min.z, self.max.z),
        )
    }
}
