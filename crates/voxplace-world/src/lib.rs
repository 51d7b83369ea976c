//! Bounded sparse block world for Voxplace.

pub mod store;

pub use store::{AddResult, World, WorldSize};
