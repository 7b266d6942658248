//! Error types for the Graphouse adaptor.

use thiserror::Error;

/// Errors produced while talking to the Graphouse backend.
///
/// Missing per-path data is never an error: a path the backend does not
/// know about comes back as an empty series.
#[derive(Debug, Error)]
pub enum FinderError {
    /// The HTTP call failed to complete or came back with a failure
    /// status. Propagated immediately; the adaptor never retries.
    #[error("backend unavailable: {0}")]
    BackendUnavailable(#[from] reqwest::Error),

    /// The backend body was not the expected JSON shape.
    #[error("failed to parse metric data: {0}")]
    Parse(#[from] serde_json::Error),

    /// The configured backend URL does not parse.
    #[error("invalid backend url: {0}")]
    InvalidUrl(String),
}
