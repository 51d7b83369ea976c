//! The scripted frame sequence the demo plays.

use glam::Vec3;
use tracing::info;
use voxplace_app::{FrameOutput, Session};
use voxplace_core::GridCell;
use voxplace_input::FrameInput;

/// Frame time for every scripted frame.
pub const FRAME_DT: f32 = 1.0 / 60.0;

/// Idle frames before the first edit, enough to land on the floor from the
/// default start height.
const SETTLE_FRAMES: usize = 120;

/// Distance ahead of the player at which the marker block is seeded.
const MARKER_DISTANCE: f32 = 3.0;

/// One scripted action.
#[derive(Clone, Copy, Debug)]
pub enum Step {
    /// Idle frames.
    Wait(usize),
    /// Turn the camera to `direction` without advancing a frame.
    Look(Vec3),
    /// Occupy the cell `offset` away from the player, out of band.
    Seed(Vec3),
    /// One frame with the primary button held.
    Place,
    /// One frame with the secondary button held.
    Remove,
}

/// Place on the floor, place against a block face, then remove.
pub fn default_script() -> Vec<Step> {
    vec![
        Step::Wait(SETTLE_FRAMES),
        Step::Look(Vec3::new(0.0, -1.0, -1.0)),
        Step::Place,
        Step::Wait(1),
        Step::Seed(Vec3::new(0.0, 0.0, -MARKER_DISTANCE)),
        Step::Look(Vec3::NEG_Z),
        Step::Place,
        Step::Wait(1),
        Step::Remove,
        Step::Wait(1),
    ]
}

/// Play `script` against `session`, returning the output of every edit frame.
pub fn run(session: &mut Session, script: &[Step]) -> Vec<FrameOutput> {
    let mut edits = Vec::new();

    for step in script {
        match *step {
            Step::Wait(frames) => {
                for _ in 0..frames {
                    session.tick(FRAME_DT, &FrameInput::new());
                }
            }
            Step::Look(direction) => {
                session.player_mut().set_camera_direction(direction);
            }
            Step::Seed(offset) => {
                let cell = GridCell::containing(
                    session.player().position + offset,
                    session.config().cell_size,
                );
                let result = session.world_mut().add_block(cell);
                info!(?cell, ?result, "seeded block");
            }
            Step::Place => {
                let output = session.tick(FRAME_DT, &FrameInput::new().with_primary());
                info!(
                    frame = output.frame_number,
                    placement = ?output.placement,
                    target = ?output.target,
                    "place"
                );
                edits.push(output);
            }
            Step::Remove => {
                let output = session.tick(FRAME_DT, &FrameInput::new().with_secondary());
                info!(
                    frame = output.frame_number,
                    removal = ?output.removal,
                    target = ?output.target,
                    "remove"
                );
                edits.push(output);
            }
        }
    }

    edits
}
