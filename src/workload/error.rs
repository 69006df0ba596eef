//! Errors raised while performing simulated work.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WorkError {
    /// The simulated sleep was cancelled before it elapsed.
    #[error("wait interrupted after {waited_ms}ms of {requested_ms}ms")]
    InterruptedWait { requested_ms: u64, waited_ms: u64 },
}

impl IntoResponse for WorkError {
    fn into_response(self) -> Response {
        match self {
            WorkError::InterruptedWait { .. } => {
                (StatusCode::SERVICE_UNAVAILABLE, "work interrupted").into_response()
            }
        }
    }
}
