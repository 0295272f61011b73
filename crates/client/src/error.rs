//! Error taxonomy for the fruit API client.

use thiserror::Error;

/// Errors surfaced by the data access layer.
///
/// Payloads are plain strings rather than wrapped source errors so the type
/// is `Clone`; the single-flight bulk fetch hands the same failure to every
/// waiting caller, and the last error is mirrored into the observable
/// catalog status.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// No response received at all (connectivity failure).
    #[error("network error: {0}")]
    Network(String),

    /// The server answered with a non-2xx status other than not-found.
    #[error("server error: HTTP {status} {message}")]
    Server { status: u16, message: String },

    /// The single-fruit lookup came back 404. Carries the queried name.
    #[error("no fruit found for \"{0}\"")]
    NotFound(String),

    /// Empty or whitespace-only search input, rejected before any network
    /// call is made.
    #[error("search query must not be empty")]
    EmptyQuery,

    /// The response body could not be decoded.
    #[error("malformed response: {0}")]
    Parse(String),
}

impl ApiError {
    /// True for the not-found case of the single-fruit lookup.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}
