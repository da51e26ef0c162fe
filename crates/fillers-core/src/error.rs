//! Error types for the filler guide
//!
//! The range codec and show model are total and never fail; every variant
//! here comes from the collaborators that fetch filler lists and season data.

use thiserror::Error;

/// Error type for filler guide operations
#[derive(Error, Debug)]
pub enum FillerError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Response body could not be decoded as JSON
    #[error("Failed to decode JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Failed to parse HTML or a show definition
    #[error("Failed to parse: {0}")]
    ParseError(String),

    /// Required HTML element was not found
    #[error("Element not found: {0}")]
    ElementNotFound(String),

    /// Requested resource was not found (HTTP 404)
    #[error("Not found: {0}")]
    NotFound(String),

    /// TVDB rejected the API token (HTTP 401)
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Server answered with a status that is neither success nor an error
    #[error("Unexpected HTTP status {status}: {url}")]
    UnexpectedStatus { status: u16, url: String },

    /// Empty or otherwise unusable show name / search query
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    /// A search returned nothing to choose from
    #[error("No results for: {0}")]
    NoResults(String),
}

/// Result type alias for filler guide operations
pub type Result<T> = std::result::Result<T, FillerError>;
