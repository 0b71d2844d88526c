/// Error types for Postline
///
/// Every failure a handler can produce maps onto one `AppError` variant, and
/// the `ResponseError` impl translates them into the responses the API
/// promises: 422 form re-renders, 302 sign-in redirects, 403 denials.
use actix_web::http::{header, StatusCode};
use actix_web::{error::ResponseError, HttpResponse};
use serde::Serialize;
use std::collections::BTreeMap;
use thiserror::Error;
use utoipa::ToSchema;

/// Path guests are redirected to when a request requires a signed-in user.
pub const SIGN_IN_PATH: &str = "/api/v1/users/sign_in";

/// Per-field validation messages, keyed by field name.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// Result type for postline operations
pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    /// Record validation failed. The response re-renders the submitted form:
    /// field errors plus the attributes as submitted (passwords stripped).
    #[error("Validation failed")]
    Validation {
        record: serde_json::Value,
        errors: FieldErrors,
    },

    /// The caller is a guest but the action requires a signed-in user.
    #[error("You need to sign in or sign up before continuing.")]
    SignInRequired,

    /// The signed-in caller is not allowed to touch this resource.
    #[error("{0}")]
    Forbidden(String),

    /// Sign-in failed.
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// JSON shape of non-validation error responses.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    pub error: String,
    pub status: u16,
}

/// A `FieldErrors` map holding a single message, for checks that live
/// outside the derive-driven validation pass (uniqueness, self-reference).
pub fn field_error(field: &str, message: &str) -> FieldErrors {
    let mut errors = FieldErrors::new();
    errors.insert(field.to_string(), vec![message.to_string()]);
    errors
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::SignInRequired => StatusCode::FOUND,
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
            AppError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::Validation { record, errors } => {
                HttpResponse::UnprocessableEntity().json(serde_json::json!({
                    "errors": errors,
                    "record": record,
                }))
            }
            AppError::SignInRequired => HttpResponse::Found()
                .append_header((header::LOCATION, SIGN_IN_PATH))
                .json(ErrorBody {
                    error: self.to_string(),
                    status: StatusCode::FOUND.as_u16(),
                }),
            _ => {
                let status = self.status_code();
                HttpResponse::build(status).json(ErrorBody {
                    error: self.to_string(),
                    status: status.as_u16(),
                })
            }
        }
    }
}
