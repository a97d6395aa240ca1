//! Failure type for remote calls.

use thiserror::Error;

/// What went wrong during a remote call.
///
/// Flows never branch on the variant; every failure is handled the same
/// way, as one transient notice. The split exists only so the underlying
/// cause stays attached for logs.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport-level failure (connect, timeout, TLS, body I/O).
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("server answered {status}")]
    Status { status: u16 },

    /// The response body did not decode into the expected shape.
    #[error("malformed response: {0}")]
    Decode(#[source] serde_json::Error),
}
