use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::fmt;
use storage::dto::result::FieldErrors;
use storage::error::StorageError;
use storage::services::result_form::RESULT_FAILED;

/// Web layer errors
#[derive(Debug)]
pub enum WebError {
    /// A read for the reference lists failed
    Storage(StorageError),
    /// The entry form failed validation
    Validation(FieldErrors),
    /// The submission workflow failed after validation
    Submission(StorageError),
}

impl fmt::Display for WebError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Storage(e) => write!(f, "Storage error: {}", e),
            Self::Validation(e) => write!(f, "Validation error: {} field(s)", e.len()),
            Self::Submission(e) => write!(f, "Submission error: {}", e),
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let status_code = match &self {
            Self::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Submission(e) if e.is_rejection() => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Submission(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = match &self {
            Self::Storage(e) => {
                tracing::error!("Storage error: {:?}", e);
                json!({
                    "error": "An internal error occurred"
                })
            }
            Self::Validation(fields) => {
                json!({
                    "error": "Validation failed",
                    "fields": fields
                })
            }
            Self::Submission(e) => {
                if e.is_rejection() {
                    tracing::warn!("Result rejected: {}", e);
                } else {
                    tracing::error!("Result submission failed: {:?}", e);
                }
                json!({
                    "error": RESULT_FAILED
                })
            }
        };

        (status_code, Json(body)).into_response()
    }
}

impl From<StorageError> for WebError {
    fn from(error: StorageError) -> Self {
        Self::Storage(error)
    }
}

impl From<FieldErrors> for WebError {
    fn from(errors: FieldErrors) -> Self {
        Self::Validation(errors)
    }
}
