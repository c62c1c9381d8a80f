//! # Mesh Errors
//!
//! Error types for grid mesh generation. Every error is a precondition
//! failure detected before any geometry is produced.

use thiserror::Error;

/// Errors that can occur during grid mesh generation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MeshError {
    /// Grid parameters are out of range
    #[error("Invalid parameter: {message}")]
    InvalidParameter {
        /// What was wrong with the parameters
        message: String,
    },
}

impl MeshError {
    /// Creates an invalid parameter error.
    pub fn invalid_parameter(message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            message: message.into(),
        }
    }
}

/// Result type alias for mesh generation.
pub type MeshResult<T> = Result<T, MeshError>;
