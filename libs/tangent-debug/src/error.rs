//! # Visualization Errors
//!
//! Error types for tangent-frame visualization. All checks happen before
//! any marker is produced; there is no partial output.

use grid_mesh::MeshError;
use thiserror::Error;

/// Errors that can occur while building debug markers.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum VisualizeError {
    /// Basis length differs from the mesh vertex count
    #[error("Basis mismatch: {actual} basis entries for {expected} vertices")]
    BasisMismatch {
        /// Number of mesh vertices
        expected: usize,
        /// Number of basis entries supplied
        actual: usize,
    },

    /// Marker sphere parameters are out of range
    #[error("Invalid marker: {message}")]
    InvalidMarker {
        /// What was wrong with the marker
        message: String,
    },

    /// The injected basis source could not derive a basis
    #[error("Basis derivation failed: {message}")]
    BasisSource {
        /// Reason reported by the source
        message: String,
    },

    /// Grid generation failed
    #[error("Mesh error: {0}")]
    Mesh(#[from] MeshError),
}

impl VisualizeError {
    /// Creates a basis mismatch error.
    pub fn basis_mismatch(expected: usize, actual: usize) -> Self {
        Self::BasisMismatch { expected, actual }
    }

    /// Creates an invalid marker error.
    pub fn invalid_marker(message: impl Into<String>) -> Self {
        Self::InvalidMarker {
            message: message.into(),
        }
    }

    /// Creates a basis source error.
    pub fn basis_source(message: impl Into<String>) -> Self {
        Self::BasisSource {
            message: message.into(),
        }
    }
}

/// Result type alias for visualization.
pub type VisualizeResult<T> = Result<T, VisualizeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = VisualizeError::basis_mismatch(36, 35);
        assert_eq!(
            err.to_string(),
            "Basis mismatch: 35 basis entries for 36 vertices"
        );

        let err = VisualizeError::from(MeshError::invalid_parameter("cell size must be positive"));
        assert!(err.to_string().contains("cell size"));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<VisualizeError>();
    }
}
