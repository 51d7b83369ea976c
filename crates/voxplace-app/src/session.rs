//! The session: world, player, input and targeting under one owner.

use tracing::{debug, info};
use voxplace_core::{GridCell, Result};
use voxplace_input::{FrameInput, InputState};
use voxplace_physics::Player;
use voxplace_world::World;

use crate::config::SessionConfig;
use crate::frame::{FrameOutput, Highlight};
use crate::targeting::{Target, TargetingController};

/// Everything that lives for the length of a play session.
///
/// All mutation goes through `&mut self`, so a frame's raycast and the edit
/// it leads to are never interleaved with another writer.
#[derive(Debug)]
pub struct Session {
    config: SessionConfig,
    world: World,
    player: Player,
    input: InputState,
    targeting: TargetingController,
    frame_number: u64,
}

impl Session {
    /// Create a session with an empty world.
    pub fn new(config: SessionConfig) -> Result<Self> {
        config.validate()?;
        info!(
            max_distance = config.max_distance,
            cell_size = %config.cell_size,
            world_size = ?config.world_size,
            start = %config.start_position,
            "session created"
        );

        Ok(Self {
            world: World::new(config.world_size),
            player: Player::new(config.player_bounds, config.start_position),
            input: InputState::new(),
            targeting: TargetingController::new(config.max_distance, config.cell_size),
            frame_number: 0,
            config,
        })
    }

    /// Advance one frame.
    ///
    /// Order matches an event-driven loop: mouse look and jump (delivered as
    /// events) apply first, then movement, then placement, then removal. The
    /// reported target is computed last so it reflects this frame's edits.
    pub fn tick(&mut self, dt: f32, frame: &FrameInput) -> FrameOutput {
        self.input.update(frame);

        if let Some(delta) = self.input.look_delta() {
            self.player
                .handle_mouse(delta.x, delta.y, self.config.mouse_sensitivity);
        }
        if self.input.jump_requested() {
            self.player.jump();
        }
        self.player.update(dt, self.input.movement());

        let viewer = self.player.position;
        let direction = self.player.camera_direction();

        let placement =
            self.targeting
                .place(&mut self.world, viewer, direction, self.input.primary());
        let removal =
            self.targeting
                .remove(&mut self.world, viewer, direction, self.input.secondary());
        let target = self.targeting.target(&self.world, viewer, direction);

        self.input.end_frame();

        let output = FrameOutput {
            frame_number: self.frame_number,
            placement,
            removal,
            target,
            block_count: self.world.len(),
        };
        self.frame_number += 1;
        debug!(?output, "frame");
        output
    }

    /// Current target without advancing the frame.
    pub fn current_target(&self) -> Option<Target> {
        self.targeting
            .target(&self.world, self.player.position, self.player.camera_direction())
    }

    /// Outline for the current target, if any.
    pub fn highlight(&self) -> Option<Highlight> {
        self.current_target()
            .map(|target| Highlight::for_target(target, self.config.cell_size))
    }

    /// Occupied cells for drawing solid blocks.
    pub fn occupied_cells(&self) -> Vec<GridCell> {
        self.world.instance_data()
    }

    pub const fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub const fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub const fn player(&self) -> &Player {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    pub const fn frame_number(&self) -> u64 {
        self.frame_number
    }
}
