//! Error types for configuration and startup.

use thiserror::Error;

/// Workspace-wide error type.
///
/// Targeting and world mutation never fail; these variants only cover the
/// edges where user-supplied values enter the system.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Configuration value out of its valid range
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Command line argument could not be parsed
    #[error("Invalid argument `{name}`: {reason}")]
    InvalidArgument { name: String, reason: String },
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;
