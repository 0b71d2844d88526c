use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// An account record. The password hash never leaves the process; the
/// serializer skips it so a `User` can be embedded in a response safely.
#[derive(Debug, Clone, Serialize)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub created_at: DateTime<Utc>,
}

/// Registration payload. Every field is required; email shape and password
/// length are checked here, email uniqueness at the store.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct RegisterUserRequest {
    #[validate(custom(function = "crate::validators::email"))]
    pub email: String,
    #[validate(custom(function = "crate::validators::password"))]
    pub password: String,
    #[validate(custom(function = "crate::validators::not_blank"))]
    pub first_name: String,
    #[validate(custom(function = "crate::validators::not_blank"))]
    pub last_name: String,
}

impl RegisterUserRequest {
    /// The submitted attributes, minus the password, for 422 re-renders.
    pub fn record(&self) -> serde_json::Value {
        serde_json::json!({
            "email": self.email,
            "first_name": self.first_name,
            "last_name": self.last_name,
        })
    }
}

/// Sign-in payload.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}
