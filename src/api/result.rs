//! Outcome type and the safe-call adapter.

use std::future::Future;

use crate::api::error::ApiError;

/// Outcome of one remote call: payload or cause, nothing in between.
pub type ApiResult<T> = Result<T, ApiError>;

/// Runs one remote operation and hands back its outcome as a value.
///
/// This is the only boundary between the transport and the flows: nothing
/// downstream of it ever sees a raised failure. One attempt, no logging,
/// no retry, no classification. The initiating flow decides what the
/// user sees.
pub async fn safe_call<T, E, Fut, F>(operation: F) -> ApiResult<T>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: Into<ApiError>,
{
    match operation().await {
        Ok(value) => Ok(value),
        Err(cause) => Err(cause.into()),
    }
}
