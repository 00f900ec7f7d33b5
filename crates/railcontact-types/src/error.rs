//! Error types for the railcontact workspace.
//!
//! All crates return `ContactResult<T>` from fallible operations.

use thiserror::Error;

/// Unified error type for contact solving.
#[derive(Debug, Error)]
pub enum ContactError {
    /// The normal load was specified inconsistently (both or neither of
    /// penetration and normal force, or a non-positive value).
    #[error("Invalid load: {0}")]
    InvalidLoad(String),

    /// Curvatures, semi-axes or creepages are out of range.
    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    /// Material parameter is out of valid range.
    #[error("Invalid material parameter: {0}")]
    InvalidMaterial(String),

    /// Configuration value is invalid.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// The derivative-free minimiser could not be set up or run.
    #[error("Optimizer error: {0}")]
    Optimizer(String),

    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization failure.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Convenience alias for `Result<T, ContactError>`.
pub type ContactResult<T> = Result<T, ContactError>;
