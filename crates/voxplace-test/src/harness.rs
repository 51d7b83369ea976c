//! Scripted frame driver.

use glam::Vec3;
use tracing::debug;
use voxplace_app::{FrameOutput, Session, SessionConfig};
use voxplace_core::GridCell;
use voxplace_input::FrameInput;

use crate::{Result, TestError};

/// Fixed frame time used by scripted frames.
pub const FRAME_DT: f32 = 1.0 / 60.0;

/// Wraps a [`Session`] and records every frame's output.
pub struct SessionHarness {
    session: Session,
    dt: f32,
    outputs: Vec<FrameOutput>,
}

impl SessionHarness {
    /// Harness over a fresh session.
    pub fn new(config: SessionConfig) -> Result<Self> {
        Ok(Self {
            session: Session::new(config)?,
            dt: FRAME_DT,
            outputs: Vec::new(),
        })
    }

    /// Harness with the default configuration.
    pub fn with_defaults() -> Result<Self> {
        Self::new(SessionConfig::default())
    }

    /// Use `dt` for subsequent frames. A zero `dt` freezes player physics.
    #[must_use]
    pub fn with_frame_time(mut self, dt: f32) -> Self {
        self.dt = dt;
        self
    }

    /// Occupy cells before the script starts.
    #[must_use]
    pub fn with_blocks(mut self, cells: &[GridCell]) -> Self {
        for &cell in cells {
            self.session.world_mut().add_block(cell);
        }
        self
    }

    /// Put the camera at `position` looking along `direction`.
    pub fn pose(&mut self, position: Vec3, direction: Vec3) -> &mut Self {
        let player = self.session.player_mut();
        player.position = position;
        player.set_camera_direction(direction);
        self
    }

    /// Run one frame.
    pub fn frame(&mut self, input: FrameInput) -> FrameOutput {
        let output = self.session.tick(self.dt, &input);
        debug!(
            frame = output.frame_number,
            placement = ?output.placement,
            removal = ?output.removal,
            "scripted frame"
        );
        self.outputs.push(output);
        output
    }

    /// Run `count` frames with the same input.
    pub fn frames(&mut self, input: FrameInput, count: usize) -> &mut Self {
        for _ in 0..count {
            self.frame(input);
        }
        self
    }

    /// Frames with the primary button held.
    pub fn hold_primary(&mut self, count: usize) -> &mut Self {
        self.frames(FrameInput::new().with_primary(), count)
    }

    /// Frames with the secondary button held.
    pub fn hold_secondary(&mut self, count: usize) -> &mut Self {
        self.frames(FrameInput::new().with_secondary(), count)
    }

    /// One frame with nothing held.
    pub fn release(&mut self) -> &mut Self {
        self.frames(FrameInput::new(), 1)
    }

    pub const fn session(&self) -> &Session {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    /// Outputs of every frame run so far.
    pub fn outputs(&self) -> &[FrameOutput] {
        &self.outputs
    }

    /// Cells placed over the whole script, in order.
    pub fn placed_cells(&self) -> Vec<GridCell> {
        self.outputs
            .iter()
            .filter_map(|o| o.placement.placed())
            .collect()
    }

    /// Check the world holds exactly `expected` (any order).
    pub fn expect_blocks(&self, expected: &[GridCell]) -> Result<()> {
        let mut expected = expected.to_vec();
        expected.sort_unstable_by_key(|c| (c.y, c.z, c.x));
        let actual = self.session.occupied_cells();
        if actual == expected {
            Ok(())
        } else {
            Err(TestError::Expectation(format!(
                "expected blocks {expected:?}, found {actual:?}"
            )))
        }
    }
}
