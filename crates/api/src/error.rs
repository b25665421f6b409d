use alps_core::error::CoreError;
use alps_core::validation::FieldErrors;
use alps_db::DbError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] and [`DbError`] and adds request validation failures.
/// Implements [`IntoResponse`] to produce the `{ success: false, .. }`
/// envelope every endpoint uses for failures.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `alps_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A storage error from `alps_db`.
    #[error("Database error: {0}")]
    Database(#[from] DbError),

    /// A request body that failed validation, with per-field messages.
    #[error("{message}: {errors}")]
    Invalid {
        message: &'static str,
        errors: FieldErrors,
    },
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

/// Failure envelope.
#[derive(Debug, Serialize)]
struct ErrorBody {
    success: bool,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    errors: Option<FieldErrors>,
}

const INTERNAL_MESSAGE: &str = "Internal server error";

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message, errors) = match self {
            // --- CoreError variants ---
            AppError::Core(CoreError::Validation(msg)) => (StatusCode::BAD_REQUEST, msg, None),

            // --- Storage errors ---
            AppError::Database(err) => {
                tracing::error!(error = %err, "Database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    INTERNAL_MESSAGE.to_string(),
                    None,
                )
            }

            // --- Request validation ---
            AppError::Invalid { message, errors } => {
                (StatusCode::BAD_REQUEST, message.to_string(), Some(errors))
            }
        };

        let body = ErrorBody {
            success: false,
            message,
            errors,
        };

        (status, axum::Json(body)).into_response()
    }
}
