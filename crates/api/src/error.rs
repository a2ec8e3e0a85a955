use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use maintrack_core::error::CoreError;
use maintrack_core::maintenance::JobAssetError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] and [`JobAssetError`] for domain errors and adds
/// HTTP-specific variants. Every variant renders the same envelope:
///
/// ```json
/// { "result": false, "error": { "code": "NOT-FOUND", "message": "..." } }
/// ```
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `maintrack_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A tagged failure of the job-asset quantity update.
    #[error(transparent)]
    JobAsset(#[from] JobAssetError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Generic not-found used when a request must not reveal why it was
    /// refused (missing credentials, missing permission, missing parameters).
    #[error("Not found")]
    NotFound,
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

const INTERNAL_MESSAGE: &str = "An internal error occurred";

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    "NOT-FOUND",
                    format!("{entity} with id {id} not found"),
                ),
                CoreError::Unauthorized(msg) => {
                    (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg.clone())
                }
            },

            AppError::JobAsset(err) => (job_asset_status(err), err.code(), err.to_string()),

            AppError::Database(err) => classify_sqlx_error(err),

            AppError::NotFound => (StatusCode::NOT_FOUND, "NOT-FOUND", "Not found".to_string()),
        };

        let body = json!({
            "result": false,
            "error": {
                "code": code,
                "message": message,
            },
        });

        (status, axum::Json(body)).into_response()
    }
}

fn job_asset_status(err: &JobAssetError) -> StatusCode {
    match err {
        JobAssetError::InvalidQuantity(_) | JobAssetError::QuantityExceeds { .. } => {
            StatusCode::BAD_REQUEST
        }
        JobAssetError::NotFound => StatusCode::NOT_FOUND,
        JobAssetError::UpdateFailed => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Classify a sqlx error into an HTTP status, error code, and message.
///
/// - `RowNotFound` maps to 404.
/// - Unique constraint violations (constraint name starting with `uq_`) map to 409.
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    match err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            "NOT-FOUND",
            "Resource not found".to_string(),
        ),
        sqlx::Error::Database(db_err) => {
            // PostgreSQL unique_violation
            if db_err.code().as_deref() == Some("23505") {
                let constraint = db_err.constraint().unwrap_or("unknown");
                if constraint.starts_with("uq_") {
                    return (
                        StatusCode::CONFLICT,
                        "CONFLICT",
                        format!("Duplicate value violates unique constraint: {constraint}"),
                    );
                }
            }
            tracing::error!(error = %db_err, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL-ERROR",
                INTERNAL_MESSAGE.to_string(),
            )
        }
        other => {
            tracing::error!(error = %other, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL-ERROR",
                INTERNAL_MESSAGE.to_string(),
            )
        }
    }
}
