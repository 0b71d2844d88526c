/// User registration and public profiles
use actix_web::{web, HttpResponse};
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::auth::{password, token};
use crate::error::{AppError, FieldErrors, Result};
use crate::metrics;
use crate::models::{RegisterUserRequest, User};
use crate::state::AppState;
use crate::validators;

/// Response to a successful registration or sign-in: the account plus a
/// bearer token for subsequent requests.
#[derive(Debug, Serialize, ToSchema)]
pub struct SessionResponse {
    pub user_id: Uuid,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
}

impl SessionResponse {
    pub(crate) fn for_user(user: &User, state: &AppState) -> Result<Self> {
        let ttl_hours = state.config.auth.token_ttl_hours;
        let access_token =
            token::issue_token(user.id, state.config.auth.jwt_secret.as_bytes(), ttl_hours)?;
        Ok(Self {
            user_id: user.id,
            email: user.email.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            access_token,
            token_type: "Bearer".to_string(),
            expires_in: ttl_hours * 3600,
        })
    }
}

/// Public profile projection. No email, no timestamps beyond join date.
#[derive(Debug, Serialize, ToSchema)]
pub struct ProfileResponse {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub post_count: usize,
    pub created_at: DateTime<Utc>,
}

/// Register a new account.
///
/// Every check runs before anything persists, so the 422 response reports
/// all failing fields at once alongside the submitted attributes.
#[utoipa::path(
    post,
    path = "/api/v1/users",
    tag = "Users",
    request_body = RegisterUserRequest,
    responses(
        (status = 201, description = "Account created", body = SessionResponse),
        (status = 422, description = "Validation failed; body re-renders the form")
    )
)]
pub async fn register(
    state: web::Data<AppState>,
    payload: web::Json<RegisterUserRequest>,
) -> Result<HttpResponse> {
    let req = payload.into_inner();

    let mut errors = match req.validate() {
        Ok(()) => FieldErrors::new(),
        Err(e) => validators::field_errors(&e),
    };
    // Uniqueness only makes sense against a well-formed address, and its
    // message should not pile onto a shape error for the same field.
    if !errors.contains_key("email") && state.store.users.email_taken(&req.email) {
        errors
            .entry("email".to_string())
            .or_default()
            .push(validators::EMAIL_TAKEN.to_string());
    }
    if !errors.is_empty() {
        return Err(AppError::Validation {
            record: req.record(),
            errors,
        });
    }

    let password_hash = password::hash_password(&req.password)?;
    let user = state
        .store
        .users
        .create(&req.email, &password_hash, &req.first_name, &req.last_name)
        .map_err(|_| {
            // Lost a race with a concurrent registration of the same address.
            AppError::Validation {
                record: req.record(),
                errors: crate::error::field_error("email", validators::EMAIL_TAKEN),
            }
        })?;

    metrics::inc_registrations();
    tracing::info!(user_id = %user.id, "user registered");

    let session = SessionResponse::for_user(&user, &state)?;
    Ok(HttpResponse::Created().json(session))
}

/// Public profile for one user.
#[utoipa::path(
    get,
    path = "/api/v1/users/{id}",
    tag = "Users",
    params(("id" = Uuid, Path, description = "User id")),
    responses(
        (status = 200, description = "The profile", body = ProfileResponse),
        (status = 404, description = "Unknown user", body = crate::error::ErrorBody)
    )
)]
pub async fn show_user(state: web::Data<AppState>, path: web::Path<Uuid>) -> Result<HttpResponse> {
    let id = path.into_inner();
    let user = state.store.users.find(id).ok_or(AppError::NotFound("User"))?;
    Ok(HttpResponse::Ok().json(ProfileResponse {
        id: user.id,
        first_name: user.first_name,
        last_name: user.last_name,
        post_count: state.store.posts.count_by_author(user.id),
        created_at: user.created_at,
    }))
}
