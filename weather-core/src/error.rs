use thiserror::Error;

/// Ways a single lookup can end without a weather record.
#[derive(Debug, Error)]
pub enum LookupError {
    /// Geocoding returned no candidates.
    #[error("Location not found")]
    NotFound,

    /// The weather payload failed schema validation.
    #[error("Invalid weather payload: {0}")]
    Invalid(String),

    /// Non-success status or unusable body from either endpoint.
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),
}
