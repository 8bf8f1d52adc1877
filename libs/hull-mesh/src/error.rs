//! # Hull Errors
//!
//! Error types for hull construction. Input-shape problems (too few
//! points, degenerate dimensionality, non-coplanar planar input) surface
//! as explicit errors; numerical edge cases are absorbed by the epsilon
//! branching inside the algorithms and never reach this type.

use thiserror::Error;

/// Errors that can occur during hull construction.
#[derive(Debug, Error)]
pub enum HullError {
    /// Fewer points than the algorithm can seed from.
    #[error("Too few points: {actual} (need at least {required})")]
    TooFewPoints { required: usize, actual: usize },

    /// The point set does not span the required dimensionality.
    #[error("Degenerate input: {message}")]
    DegenerateInput { message: String },

    /// A 3D point set handed to the planar hull is not coplanar.
    #[error("Not coplanar: {message}")]
    NotCoplanar { message: String },
}

impl HullError {
    /// Creates a degenerate-input error.
    pub fn degenerate(message: impl Into<String>) -> Self {
        Self::DegenerateInput {
            message: message.into(),
        }
    }

    /// Creates a not-coplanar error.
    pub fn not_coplanar(message: impl Into<String>) -> Self {
        Self::NotCoplanar {
            message: message.into(),
        }
    }
}

/// Result type alias for hull operations.
pub type HullResult<T> = Result<T, HullError>;
