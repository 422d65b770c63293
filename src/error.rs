//! Application error type and HTTP response mapping.
//!
//! Every non-2xx response carries the same JSON body shape:
//!
//! ```json
//! { "message": "Validation error", "errors": ["title: Session title can't be null"] }
//! ```
//!
//! The `errors` array is only present for validation failures.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

/// JSON body returned for all error responses.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
}

/// Application-level error taxonomy.
///
/// Each variant maps to exactly one HTTP status:
///
/// | Variant        | Status |
/// |----------------|--------|
/// | `Validation`   | 400    |
/// | `Unauthorized` | 401    |
/// | `Forbidden`    | 403    |
/// | `NotFound`     | 404    |
/// | `Internal`     | 500    |
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{message}")]
    Validation {
        message: String,
        errors: Vec<String>,
    },
    #[error("{message}")]
    Unauthorized { message: String },
    #[error("{message}")]
    Forbidden { message: String },
    #[error("{message}")]
    NotFound { message: String },
    #[error("{message}")]
    Internal { message: String },
}

impl AppError {
    /// Validation failure with field-level error messages.
    pub fn validation(errors: Vec<String>) -> Self {
        Self::Validation {
            message: "Validation error".to_string(),
            errors,
        }
    }

    /// Missing or invalid credentials.
    pub fn unauthorized() -> Self {
        Self::Unauthorized {
            message: "Unauthorized access. Authentication required.".to_string(),
        }
    }

    /// Authenticated caller lacks permission for the resource.
    pub fn forbidden() -> Self {
        Self::Forbidden {
            message: "You do not have permission to access this resource".to_string(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Unexpected failure. The client-facing message is deliberately generic;
    /// details belong in the logs.
    pub fn internal() -> Self {
        Self::Internal {
            message: "An unknown error occurred".to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message, errors) = match self {
            AppError::Validation { message, errors } => {
                (StatusCode::BAD_REQUEST, message, Some(errors))
            }
            AppError::Unauthorized { message } => (StatusCode::UNAUTHORIZED, message, None),
            AppError::Forbidden { message } => (StatusCode::FORBIDDEN, message, None),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message, None),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message, None),
        };

        (status, Json(ErrorBody { message, errors })).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        tracing::error!(error = ?e, "Database error");
        AppError::internal()
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        // Malformed or wrong-typed request bodies get the same 400 shape as
        // field validation failures, not axum's plain-text rejection.
        AppError::validation(vec![format!("body: {}", rejection.body_text())])
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(e: validator::ValidationErrors) -> Self {
        let mut errors: Vec<String> = e
            .field_errors()
            .iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |err| {
                    let message = err
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| err.code.to_string());
                    format!("{field}: {message}")
                })
            })
            .collect();

        // HashMap iteration order is unstable; sort for deterministic output.
        errors.sort();

        AppError::validation(errors)
    }
}
