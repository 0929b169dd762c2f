//! Error types for the headline library.

use std::io;
use thiserror::Error;

/// Result type alias for headline operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur at the I/O and serialization boundary.
///
/// The core outline operations (`BlockGrouper::group`, `OutlineClassifier::build`)
/// never fail for well-formed input; they degrade to sentinel results instead.
/// Errors only arise when reading page dumps or serializing output.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Error deserializing page input or serializing outline output.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The page input violates the extraction contract.
    #[error("Invalid page input: {0}")]
    InvalidInput(String),

    /// Error during output rendering.
    #[error("Rendering error: {0}")]
    Render(String),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}
