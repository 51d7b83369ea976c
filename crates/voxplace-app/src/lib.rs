//! Frame-driven session for Voxplace.
//!
//! The windowing layer owns the event loop and drawing. Once per frame it
//! calls [`Session::tick`] with a [`FrameInput`](voxplace_input::FrameInput)
//! snapshot and draws from the returned [`FrameOutput`] and
//! [`Session::world`].
//!
//! # Example
//!
//! ```no_run
//! use voxplace_app::{Session, SessionConfig};
//! use voxplace_input::FrameInput;
//!
//! fn main() -> voxplace_core::Result<()> {
//!     voxplace_app::init_logging();
//!     let mut session = Session::new(SessionConfig::default())?;
//!     let output = session.tick(1.0 / 60.0, &FrameInput::new().with_primary());
//!     println!("{:?} -> {} blocks", output.placement, session.world().len());
//!     Ok(())
//! }
//! ```

mod config;
mod frame;
mod logging;
mod session;
mod targeting;

pub use config::SessionConfig;
pub use frame::{FrameOutput, Highlight, HighlightShape};
pub use logging::init_logging;
pub use session::Session;
pub use targeting::{PlacementOutcome, RemovalOutcome, Target, TargetingController};
