//! Test harness for Voxplace.
//!
//! Drives a [`Session`](voxplace_app::Session) through scripted frames and
//! checks the resulting world.

pub mod harness;

pub use harness::SessionHarness;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TestError {
    #[error("Session setup failed: {0}")]
    Setup(#[from] voxplace_core::Error),
    #[error("Expectation failed: {0}")]
    Expectation(String),
}

pub type Result<T> = std::result::Result<T, TestError>;
