//! Crate-wide error type and its HTTP mapping.
//!
//! Every fallible path funnels into [`AppError`]; the single
//! [`IntoResponse`] impl is the only place status codes and response
//! bodies are chosen.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// A single violated input constraint, reported back to the client.
#[derive(Debug, Clone, Serialize)]
pub struct FieldError {
    pub field: String,
    pub code: String,
    pub message: String,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Request failed schema validation.
    #[error("validation failed")]
    Validation { errors: Vec<FieldError> },

    /// No link matches the requested code.
    #[error("link not found")]
    LinkNotFound,

    /// The short code is already taken.
    #[error("duplicated code")]
    DuplicateCode,

    /// Unexpected store or runtime failure. The detail is logged
    /// server-side and never sent to the client.
    #[error("internal error: {message}")]
    Internal { message: String },
}

impl AppError {
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

#[derive(Serialize)]
struct ValidationBody {
    errors: Vec<FieldError>,
}

#[derive(Serialize)]
struct MessageBody {
    message: &'static str,
}

#[derive(Serialize)]
struct ConflictBody {
    error: &'static str,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Validation { errors } => {
                (StatusCode::BAD_REQUEST, Json(ValidationBody { errors })).into_response()
            }
            // Unknown codes report 400, not 404; existing clients depend on it.
            AppError::LinkNotFound => (
                StatusCode::BAD_REQUEST,
                Json(MessageBody {
                    message: "Link not found",
                }),
            )
                .into_response(),
            AppError::DuplicateCode => (
                StatusCode::CONFLICT,
                Json(ConflictBody {
                    error: "Duplicated code",
                }),
            )
                .into_response(),
            AppError::Internal { message } => {
                tracing::error!("Internal error: {message}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(MessageBody {
                        message: "Internal server error",
                    }),
                )
                    .into_response()
            }
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let errors = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, violations)| {
                violations.iter().map(move |violation| FieldError {
                    field: field.to_string(),
                    code: violation.code.to_string(),
                    message: violation
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("Constraint '{}' violated", violation.code)),
                })
            })
            .collect();

        Self::Validation { errors }
    }
}

// A body that does not deserialize is a schema failure like any other,
// not a framework-level 415/422.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Validation {
            errors: vec![FieldError {
                field: "body".to_string(),
                code: "invalid_body".to_string(),
                message: rejection.body_text(),
            }],
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if let Some(db) = e.as_database_error() {
            if db.is_unique_violation() {
                return Self::DuplicateCode;
            }
        }

        Self::internal(format!("Database error: {e}"))
    }
}

impl From<redis::RedisError> for AppError {
    fn from(e: redis::RedisError) -> Self {
        Self::internal(format!("Metrics store error: {e}"))
    }
}
