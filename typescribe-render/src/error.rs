//! Error types for type-name rendering.

use thiserror::Error;

/// Error type for rendering operations.
///
/// Rendering either fully succeeds or fails fast on invalid input; there is
/// no recovery, retry, or partial result.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RenderError {
    /// No descriptor was supplied to the boundary operation.
    #[error("no type descriptor supplied")]
    MissingDescriptor,
}

/// Result type alias for rendering operations.
pub type Result<T> = std::result::Result<T, RenderError>;
