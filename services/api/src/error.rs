//! services/api/src/error.rs
//!
//! The top-level error type the service binaries bubble failures into.

use crate::config::ConfigError;
use nearbyskillz_core::ports::PortError;

/// Anything that can take the `api` binary down.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Directory error: {0}")]
    Port(#[from] PortError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A catch-all for failures without a structured variant.
    #[error("An unexpected internal error occurred: {0}")]
    Internal(String),
}
