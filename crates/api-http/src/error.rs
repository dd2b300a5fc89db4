//! HTTP Error Mapping
//!
//! Maps application errors to status codes and JSON error bodies.

use crate::types::ErrorResponse;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use jobboard_core::error::AppError;
use tracing::{error, warn};

/// Error codes carried in [`ErrorResponse::error`]
pub mod code {
    pub const VALIDATION_ERROR: &str = "validation_error";
    pub const NOT_FOUND: &str = "not_found";
    pub const CONSTRAINT_VIOLATION: &str = "constraint_violation";
    pub const INTERNAL_ERROR: &str = "internal_error";
    pub const DB_ERROR: &str = "db_error";
}

/// AppError wrapper so handlers can return `Result<_, ApiError>`
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        ApiError(err)
    }
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError(AppError::Validation(message.into()))
    }

    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match &self.0 {
            AppError::Validation(_) | AppError::Domain(_) | AppError::Serialization(_) => {
                (StatusCode::BAD_REQUEST, code::VALIDATION_ERROR)
            }
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, code::NOT_FOUND),
            AppError::Constraint(_) => (StatusCode::CONFLICT, code::CONSTRAINT_VIOLATION),
            AppError::Database(_) => (StatusCode::INTERNAL_SERVER_ERROR, code::DB_ERROR),
            AppError::Io(_) | AppError::Config(_) | AppError::Internal(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, code::INTERNAL_ERROR)
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();
        let message = self.0.to_string();

        if status.is_server_error() {
            error!(error = %message, "Request failed");
        } else {
            warn!(status = status.as_u16(), error = %message, "Request rejected");
        }

        (
            status,
            Json(ErrorResponse {
                error: code.to_string(),
                message,
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (AppError::Validation("bad".into()), StatusCode::BAD_REQUEST),
            (AppError::NotFound("gone".into()), StatusCode::NOT_FOUND),
            (AppError::Constraint("dup".into()), StatusCode::CONFLICT),
            (
                AppError::Database("locked".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (err, expected) in cases {
            assert_eq!(ApiError(err).into_response().status(), expected);
        }
    }
}
