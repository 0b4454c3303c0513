//! Error types for the Janus routing model

use thiserror::Error;

/// Result alias for model operations.
pub type ModelResult<T> = Result<T, ModelError>;

/// Errors surfaced while validating the routing model, before any directive
/// builder runs. Builders themselves are infallible; a model that reaches
/// them has already passed this layer.
#[derive(Error, Debug)]
pub enum ModelError {
    /// A location references a backend that does not exist.
    #[error("location '{path}' references unknown backend '{backend}'")]
    UnknownBackend { path: String, backend: String },

    /// Field validation failed on a model entity.
    #[error("invalid routing model: {0}")]
    Invalid(#[from] validator::ValidationErrors),
}
