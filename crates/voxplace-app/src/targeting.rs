//! Turning the player's view ray into place, remove and highlight targets.
//!
//! Every intent runs its own raycast and stops at the first sample that
//! matches, checked in this order:
//! 1. an occupied cell: the hit, with a face picked by [`resolve_face`];
//! 2. an in-bounds floor cell (y == 0): placement and highlight stop here,
//!    removal marches past it;
//! 3. anything else: keep marching.

use glam::Vec3;
use tracing::trace;
use voxplace_core::{FaceNormal, GridCell};
use voxplace_input::ButtonState;
use voxplace_physics::{cast, resolve_face};
use voxplace_world::{AddResult, World};

/// What the player is pointing at.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Target {
    /// An occupied cell and the face taken to be under the crosshair.
    Face { cell: GridCell, normal: FaceNormal },
    /// An empty floor cell.
    Floor { cell: GridCell },
}

impl Target {
    #[inline]
    pub const fn cell(self) -> GridCell {
        match self {
            Self::Face { cell, .. } | Self::Floor { cell } => cell,
        }
    }

    /// Cell a placement against this target would fill.
    #[inline]
    pub fn placement_cell(self) -> GridCell {
        match self {
            Self::Face { cell, normal } => cell.offset(normal),
            Self::Floor { cell } => cell,
        }
    }
}

/// Result of a placement intent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlacementOutcome {
    /// Primary action not held.
    Idle,
    /// Already placed during this press.
    Debounced,
    /// Nothing targetable within reach.
    NoTarget,
    /// A block was added at the cell.
    Placed(GridCell),
    /// The cell next to the hit face lies outside the world.
    Rejected(GridCell),
    /// The cell next to the hit face is already occupied.
    Occupied(GridCell),
}

impl PlacementOutcome {
    #[inline]
    pub const fn placed(self) -> Option<GridCell> {
        match self {
            Self::Placed(cell) => Some(cell),
            _ => None,
        }
    }
}

/// Result of a removal intent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RemovalOutcome {
    /// Secondary action not held.
    Idle,
    /// No occupied cell within reach.
    NoTarget,
    /// The block at the cell was removed.
    Removed(GridCell),
}

impl RemovalOutcome {
    #[inline]
    pub const fn removed(self) -> Option<GridCell> {
        match self {
            Self::Removed(cell) => Some(cell),
            _ => None,
        }
    }
}

/// Runs targeting raycasts against a [`World`].
///
/// Holds the one piece of cross-frame state targeting needs: the latch that
/// limits placement to once per press of the primary button.
#[derive(Debug, Clone)]
pub struct TargetingController {
    max_distance: f32,
    cell_size: Vec3,
    placed_this_press: bool,
}

impl TargetingController {
    pub const fn new(max_distance: f32, cell_size: Vec3) -> Self {
        Self {
            max_distance,
            cell_size,
            placed_this_press: false,
        }
    }

    #[inline]
    pub const fn max_distance(&self) -> f32 {
        self.max_distance
    }

    #[inline]
    pub const fn cell_size(&self) -> Vec3 {
        self.cell_size
    }

    /// Returns `true` if a placement already fired during the current press.
    #[inline]
    pub const fn is_latched(&self) -> bool {
        self.placed_this_press
    }

    /// First block face or floor cell along the view ray.
    ///
    /// Used both for highlighting and as the placement target.
    pub fn target(&self, world: &World, viewer: Vec3, direction: Vec3) -> Option<Target> {
        for cell in cast(viewer, direction, self.max_distance, self.cell_size) {
            if world.contains(cell) {
                let normal = resolve_face(viewer, direction, cell);
                return Some(Target::Face { cell, normal });
            }
            if cell.is_floor() && world.cell_in_bounds(cell) {
                return Some(Target::Floor { cell });
            }
        }
        None
    }

    /// First occupied cell along the view ray.
    pub fn hit_block(&self, world: &World, viewer: Vec3, direction: Vec3) -> Option<GridCell> {
        cast(viewer, direction, self.max_distance, self.cell_size).find(|&cell| world.contains(cell))
    }

    /// Place a block where the player is pointing.
    ///
    /// Fires at most once per press: after the first attempt, further frames
    /// with the button held report [`PlacementOutcome::Debounced`] until the
    /// button is released. The attempt consumes the press even when nothing
    /// was placed.
    pub fn place(
        &mut self,
        world: &mut World,
        viewer: Vec3,
        direction: Vec3,
        primary: ButtonState,
    ) -> PlacementOutcome {
        if !primary.is_pressed() {
            self.placed_this_press = false;
            return PlacementOutcome::Idle;
        }
        if self.placed_this_press {
            return PlacementOutcome::Debounced;
        }
        self.placed_this_press = true;

        let outcome = match self.target(world, viewer, direction) {
            None => PlacementOutcome::NoTarget,
            Some(target) => {
                let cell = target.placement_cell();
                match world.add_block(cell) {
                    AddResult::Added => PlacementOutcome::Placed(cell),
                    AddResult::AlreadyOccupied => PlacementOutcome::Occupied(cell),
                    AddResult::OutOfBounds => PlacementOutcome::Rejected(cell),
                }
            }
        };
        trace!(?outcome, held_frames = primary.held_frames(), "placement");
        outcome
    }

    /// Remove the block the player is pointing at, every frame the button is held.
    pub fn remove(
        &self,
        world: &mut World,
        viewer: Vec3,
        direction: Vec3,
        secondary: ButtonState,
    ) -> RemovalOutcome {
        if !secondary.is_pressed() {
            return RemovalOutcome::Idle;
        }
        let outcome = match self.hit_block(world, viewer, direction) {
            Some(cell) => {
                world.remove_block(cell);
                RemovalOutcome::Removed(cell)
            }
            None => RemovalOutcome::NoTarget,
        };
        trace!(?outcome, held_frames = secondary.held_frames(), "removal");
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use voxplace_world::WorldSize;

    fn controller() -> TargetingController {
        TargetingController::new(10.0, Vec3::ONE)
    }

    fn world() -> World {
        World::new(WorldSize::new(20, 10, 20))
    }

    #[test]
    fn level_view_above_floor_has_no_target() {
        let world = world();
        let target = controller().target(&world, Vec3::new(0.0, 2.0, 0.0), Vec3::NEG_Z);
        assert_eq!(target, None);
    }

    #[test]
    fn floor_target_is_first_floor_sample() {
        let world = world();
        let viewer = Vec3::new(0.5, 1.5, 0.5);
        let target = controller().target(&world, viewer, Vec3::new(0.0, -1.0, -1.0));
        // y drops below 1.0 on the 8th step, just after z crosses 0.
        assert_eq!(
            target,
            Some(Target::Floor {
                cell: GridCell::new(0, 0, -1)
            })
        );
    }

    #[test]
    fn floor_outside_world_is_skipped() {
        let world = world();
        // Standing past the +x edge, looking further out.
        let target = controller().target(&world, Vec3::new(12.5, 0.5, 0.5), Vec3::X);
        assert_eq!(target, None);
    }

    #[test]
    fn block_hit_wins_over_floor() {
        let mut world = world();
        world.add_block(GridCell::new(0, 0, 0));
        let viewer = Vec3::new(0.5, 0.5, 0.5);
        let target = controller().target(&world, viewer, Vec3::NEG_X);
        assert_eq!(
            target,
            Some(Target::Face {
                cell: GridCell::new(0, 0, 0),
                normal: FaceNormal::NegX,
            })
        );
    }

    #[test]
    fn face_placement_uses_view_direction_sign() {
        let mut world = world();
        world.add_block(GridCell::new(0, 1, 0));
        let mut controller = controller();

        let outcome = controller.place(
            &mut world,
            Vec3::new(5.0, 1.5, 0.5),
            Vec3::NEG_X,
            ButtonState::held_for(1),
        );
        // |offset| = (5, 0.5, 0.5): x axis, direction.x < 0.
        assert_eq!(outcome, PlacementOutcome::Placed(GridCell::new(-1, 1, 0)));
        assert!(world.contains(GridCell::new(-1, 1, 0)));
    }

    #[test]
    fn face_placement_outside_world_is_rejected() {
        let mut world = World::new(WorldSize::new(2, 10, 20));
        world.add_block(GridCell::new(-1, 1, 0));
        let mut controller = controller();

        let outcome = controller.place(
            &mut world,
            Vec3::new(0.5, 1.5, 0.5),
            Vec3::NEG_X,
            ButtonState::held_for(1),
        );
        assert_eq!(outcome, PlacementOutcome::Rejected(GridCell::new(-2, 1, 0)));
        assert_eq!(world.len(), 1);
    }

    #[test]
    fn face_placement_into_occupied_cell() {
        let mut world = world();
        world.add_block(GridCell::new(0, 1, 0));
        world.add_block(GridCell::new(-1, 1, 0));
        let mut controller = controller();

        let outcome = controller.place(
            &mut world,
            Vec3::new(5.0, 1.5, 0.5),
            Vec3::NEG_X,
            ButtonState::held_for(1),
        );
        assert_eq!(outcome, PlacementOutcome::Occupied(GridCell::new(-1, 1, 0)));
        assert_eq!(world.len(), 2);
    }

    #[test]
    fn placement_latches_until_release() {
        let mut world = world();
        let mut controller = controller();
        let viewer = Vec3::new(0.5, 1.5, 0.5);
        let down = Vec3::new(0.0, -1.0, -1.0);

        let first = controller.place(&mut world, viewer, down, ButtonState::held_for(1));
        assert_eq!(first, PlacementOutcome::Placed(GridCell::new(0, 0, -1)));
        assert!(controller.is_latched());

        let held = controller.place(&mut world, viewer, down, ButtonState::held_for(2));
        assert_eq!(held, PlacementOutcome::Debounced);
        assert_eq!(world.len(), 1);

        let released = controller.place(&mut world, viewer, down, ButtonState::RELEASED);
        assert_eq!(released, PlacementOutcome::Idle);
        assert!(!controller.is_latched());

        let behind = Vec3::new(0.0, -1.0, 1.0);
        let again = controller.place(&mut world, viewer, behind, ButtonState::held_for(1));
        assert_eq!(again.placed(), Some(GridCell::new(0, 0, 1)));
        assert_eq!(world.len(), 2);
    }

    #[test]
    fn press_with_no_target_still_latches() {
        let mut world = world();
        let mut controller = controller();
        let viewer = Vec3::new(0.0, 2.0, 0.0);

        let outcome = controller.place(&mut world, viewer, Vec3::NEG_Z, ButtonState::held_for(1));
        assert_eq!(outcome, PlacementOutcome::NoTarget);
        let outcome = controller.place(&mut world, viewer, Vec3::NEG_Y, ButtonState::held_for(2));
        assert_eq!(outcome, PlacementOutcome::Debounced);
        assert!(world.is_empty());
    }

    #[test]
    fn removal_marches_past_floor_cells() {
        let mut world = world();
        world.add_block(GridCell::new(-3, 0, 0));
        let controller = controller();

        let outcome = controller.remove(
            &mut world,
            Vec3::new(0.5, 0.5, 0.5),
            Vec3::NEG_X,
            ButtonState::held_for(2),
        );
        assert_eq!(outcome, RemovalOutcome::Removed(GridCell::new(-3, 0, 0)));
        assert!(world.is_empty());
    }

    #[test]
    fn removal_repeats_while_held() {
        let mut world = world();
        world.add_block(GridCell::new(0, 1, -2));
        world.add_block(GridCell::new(0, 1, -4));
        let controller = controller();
        let viewer = Vec3::new(0.5, 1.5, 0.5);

        let first = controller.remove(&mut world, viewer, Vec3::NEG_Z, ButtonState::held_for(1));
        let second = controller.remove(&mut world, viewer, Vec3::NEG_Z, ButtonState::held_for(2));
        let third = controller.remove(&mut world, viewer, Vec3::NEG_Z, ButtonState::held_for(2));

        assert_eq!(first.removed(), Some(GridCell::new(0, 1, -2)));
        assert_eq!(second.removed(), Some(GridCell::new(0, 1, -4)));
        assert_eq!(third, RemovalOutcome::NoTarget);
    }

    #[test]
    fn idle_buttons_do_nothing() {
        let mut world = world();
        world.add_block(GridCell::new(0, 0, -1));
        let mut controller = controller();
        let viewer = Vec3::new(0.5, 0.5, 0.5);

        assert_eq!(
            controller.place(&mut world, viewer, Vec3::NEG_Z, ButtonState::RELEASED),
            PlacementOutcome::Idle
        );
        assert_eq!(
            controller.remove(&mut world, viewer, Vec3::NEG_Z, ButtonState::RELEASED),
            RemovalOutcome::Idle
        );
        assert_eq!(world.len(), 1);
    }
}
