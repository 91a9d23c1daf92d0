//! Adapter error types.

use thiserror::Error;

/// Errors that can occur when talking to a catalog backend.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Backend returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the backend.
        status: u16,
        /// Error message or response body.
        message: String,
    },

    /// The requested record does not exist.
    #[error("record not found")]
    NotFound,

    /// A value could not be converted for the wire (e.g. a non-numeric id
    /// where the backend keys records by integer).
    #[error("parse error: {0}")]
    Parse(String),

    /// The configured backend flavor is not recognized.
    #[error("unsupported backend flavor: {0}")]
    UnsupportedFlavor(String),
}
