//! Shared response envelope types for API handlers.
//!
//! Successful responses carry `"result": true`; failures are rendered by
//! [`crate::error::AppError`] with `"result": false` and an `error` object.

use serde::Serialize;

/// Bare `{ "result": true }` acknowledgement for writes with nothing to return.
#[derive(Debug, Serialize)]
pub struct ResultResponse {
    pub result: bool,
}

impl ResultResponse {
    pub fn ok() -> Self {
        Self { result: true }
    }
}

/// `{ "result": true, "response": T }` envelope for reads.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub result: bool,
    pub response: T,
}

impl<T: Serialize> DataResponse<T> {
    pub fn ok(response: T) -> Self {
        Self {
            result: true,
            response,
        }
    }
}
