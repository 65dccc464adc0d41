use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Application-level error taxonomy, translated to HTTP at the boundary.
///
/// Validation and conflict errors render as a `{"errors": [...]}` body;
/// everything else renders as `{"message": ...}`. `Unauthorized` carries no
/// detail on purpose: every authentication failure produces the same
/// response, so a client cannot distinguish an unknown user from a bad
/// password.
#[derive(Debug)]
pub enum AppError {
    /// One message per violated field rule, all collected before responding.
    Validation(Vec<String>),
    Unauthorized,
    Forbidden(String),
    NotFound(String),
    /// A unique-field collision reported by the store.
    Conflict(String),
    /// Unexpected store or infrastructure fault. Detail goes to server
    /// diagnostics only.
    Internal(anyhow::Error),
}

impl AppError {
    pub fn validation(errors: Vec<String>) -> Self {
        Self::Validation(errors)
    }

    pub fn unauthorized() -> Self {
        Self::Unauthorized
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }

    pub fn internal<E>(err: E) -> Self
    where
        E: Into<anyhow::Error>,
    {
        Self::Internal(err.into())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Validation(errors) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "errors": errors }))).into_response()
            }
            AppError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "message": "Access Denied" })),
            )
                .into_response(),
            AppError::Forbidden(message) => {
                (StatusCode::FORBIDDEN, Json(json!({ "message": message }))).into_response()
            }
            AppError::NotFound(message) => {
                (StatusCode::NOT_FOUND, Json(json!({ "message": message }))).into_response()
            }
            AppError::Conflict(message) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "errors": [message] }))).into_response()
            }
            AppError::Internal(err) => {
                tracing::error!(error = ?err, "unhandled internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "message": "An unexpected error occurred" })),
                )
                    .into_response()
            }
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::internal(err)
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err)
    }
}
