//! Grid raycasting and player movement for Voxplace.
//!
//! - [`GridRaycast`]: fixed-step march from a continuous ray to grid cells
//! - [`resolve_face`]: which face of a hit cell the viewer is pointing at
//! - [`Player`]: first-person movement, gravity and mouse look

pub mod face;
pub mod player;
pub mod raycast;

pub use face::resolve_face;
pub use player::Player;
pub use raycast::{cast, GridRaycast};
