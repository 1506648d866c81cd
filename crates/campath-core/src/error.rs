//! Error types for Campath Core

use thiserror::Error;

/// Result type alias using Campath's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Campath error types
///
/// Unknown locations and unreachable destinations are not errors; path
/// queries report those as `None`.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Edge endpoint not in graph: {0}")]
    MissingEndpoint(String),

    #[error("Invalid length: {0} (must be finite and greater than zero)")]
    InvalidLength(f64),

    #[error("Invalid coordinates: ({x}, {y})")]
    InvalidCoordinates { x: f64, y: f64 },

    #[error("Validation error: {0}")]
    Validation(String),
}
