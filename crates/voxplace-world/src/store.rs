//! Occupied-cell storage with bounds checking.

use std::ops::Range;

use hashbrown::HashSet;
use serde::{Deserialize, Serialize};
use tracing::debug;
use voxplace_core::constants::DEFAULT_WORLD_SIZE;
use voxplace_core::GridCell;

/// World extent in cells.
///
/// x and z are centred on the origin, y starts at the floor (0). Odd sizes
/// put the extra cell on the negative side: a width of 5 spans `-3..2`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WorldSize {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Default for WorldSize {
    fn default() -> Self {
        let [x, y, z] = DEFAULT_WORLD_SIZE;
        Self { x, y, z }
    }
}

impl WorldSize {
    #[inline]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Valid x coordinates, `[floor(-x/2), floor(x/2))`
    #[inline]
    pub const fn x_range(self) -> Range<i32> {
        centred(self.x)
    }

    /// Valid y coordinates, `[0, y)`
    #[inline]
    pub const fn y_range(self) -> Range<i32> {
        0..self.y
    }

    /// Valid z coordinates, `[floor(-z/2), floor(z/2))`
    #[inline]
    pub const fn z_range(self) -> Range<i32> {
        centred(self.z)
    }

    /// Returns `true` if the coordinates fall inside the world
    #[inline]
    pub const fn contains(self, x: i32, y: i32, z: i32) -> bool {
        let xs = self.x_range();
        let ys = self.y_range();
        let zs = self.z_range();
        xs.start <= x && x < xs.end && ys.start <= y && y < ys.end && zs.start <= z && z < zs.end
    }
}

const fn centred(size: i32) -> Range<i32> {
    (-size).div_euclid(2)..size.div_euclid(2)
}

/// Result of an insertion attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AddResult {
    /// The cell was empty and is now occupied.
    Added,
    /// The cell was already occupied; nothing changed.
    AlreadyOccupied,
    /// The cell lies outside the world; nothing changed.
    OutOfBounds,
}

impl AddResult {
    /// Returns `true` unless the cell was rejected by the bounds check.
    #[inline]
    pub const fn is_accepted(self) -> bool {
        !matches!(self, Self::OutOfBounds)
    }
}

/// Set of occupied cells inside a fixed extent.
///
/// Every stored cell passed [`World::is_within_bounds`] when it was inserted.
/// Reads never re-validate.
#[derive(Debug, Default, Clone)]
pub struct World {
    size: WorldSize,
    blocks: HashSet<GridCell>,
}

impl World {
    /// Create an empty world.
    pub fn new(size: WorldSize) -> Self {
        Self {
            size,
            blocks: HashSet::new(),
        }
    }

    #[inline]
    pub const fn size(&self) -> WorldSize {
        self.size
    }

    /// Bounds check for raw coordinates.
    #[inline]
    pub const fn is_within_bounds(&self, x: i32, y: i32, z: i32) -> bool {
        self.size.contains(x, y, z)
    }

    /// Bounds check for a cell.
    #[inline]
    pub const fn cell_in_bounds(&self, cell: GridCell) -> bool {
        self.is_within_bounds(cell.x, cell.y, cell.z)
    }

    /// Occupy `cell` if it lies inside the world. Out-of-bounds cells are
    /// silently dropped.
    pub fn add_block(&mut self, cell: GridCell) -> AddResult {
        if !self.cell_in_bounds(cell) {
            debug!(?cell, "rejected out-of-bounds block");
            return AddResult::OutOfBounds;
        }
        if self.blocks.insert(cell) {
            debug!(?cell, "added block");
            AddResult::Added
        } else {
            AddResult::AlreadyOccupied
        }
    }

    /// Free `cell`. Returns `true` if it was occupied.
    pub fn remove_block(&mut self, cell: GridCell) -> bool {
        let removed = self.blocks.remove(&cell);
        if removed {
            debug!(?cell, "removed block");
        }
        removed
    }

    #[inline]
    pub fn contains(&self, cell: GridCell) -> bool {
        self.blocks.contains(&cell)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Occupied cells in no particular order.
    pub fn cells(&self) -> impl Iterator<Item = GridCell> + '_ {
        self.blocks.iter().copied()
    }

    /// Occupied cells sorted by (y, z, x), ready to upload as instance data.
    pub fn instance_data(&self) -> Vec<GridCell> {
        let mut cells: Vec<GridCell> = self.cells().collect();
        cells.sort_unstable_by_key(|c| (c.y, c.z, c.x));
        cells
    }

    /// Remove every block.
    pub fn clear(&mut self) {
        self.blocks.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn world() -> World {
        World::new(WorldSize::new(20, 10, 20))
    }

    #[test]
    fn bounds_are_half_open() {
        let world = world();
        assert!(world.is_within_bounds(0, 0, 0));
        assert!(!world.is_within_bounds(10, 0, 0));
        assert!(world.is_within_bounds(-10, 0, 0));
        assert!(!world.is_within_bounds(-11, 0, 0));
        assert!(!world.is_within_bounds(0, 10, 0));
        assert!(world.is_within_bounds(0, 9, 0));
        assert!(!world.is_within_bounds(0, -1, 0));
        assert!(world.is_within_bounds(0, 0, -10));
        assert!(!world.is_within_bounds(0, 0, 10));
    }

    #[test]
    fn odd_sizes_floor_towards_negative() {
        let size = WorldSize::new(5, 3, 7);
        assert_eq!(size.x_range(), -3..2);
        assert_eq!(size.z_range(), -4..3);
        assert!(size.contains(-3, 0, -4));
        assert!(!size.contains(2, 0, 0));
    }

    #[test]
    fn out_of_bounds_add_is_dropped() {
        let mut world = world();
        assert_eq!(world.add_block(GridCell::new(10, 0, 0)), AddResult::OutOfBounds);
        assert_eq!(world.add_block(GridCell::new(0, -1, 0)), AddResult::OutOfBounds);
        assert!(world.is_empty());
    }

    #[test]
    fn add_then_remove_restores() {
        let mut world = world();
        world.add_block(GridCell::new(3, 0, 3));
        let before = world.instance_data();

        let cell = GridCell::new(-2, 4, 7);
        assert_eq!(world.add_block(cell), AddResult::Added);
        assert!(world.contains(cell));
        assert!(world.remove_block(cell));
        assert_eq!(world.instance_data(), before);
    }

    #[test]
    fn duplicate_add_and_absent_remove_are_noops() {
        let mut world = world();
        let cell = GridCell::new(1, 1, 1);
        assert_eq!(world.add_block(cell), AddResult::Added);
        assert_eq!(world.add_block(cell), AddResult::AlreadyOccupied);
        assert_eq!(world.len(), 1);
        assert!(!world.remove_block(GridCell::new(5, 5, 5)));
        assert_eq!(world.len(), 1);
    }

    #[test]
    fn instance_data_is_sorted() {
        let mut world = world();
        world.add_block(GridCell::new(1, 1, 0));
        world.add_block(GridCell::new(0, 0, 1));
        world.add_block(GridCell::new(2, 0, 0));
        assert_eq!(
            world.instance_data(),
            vec![
                GridCell::new(2, 0, 0),
                GridCell::new(0, 0, 1),
                GridCell::new(1, 1, 0),
            ]
        );
    }
}
