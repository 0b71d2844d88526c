/// Sign-in endpoints
///
/// Tokens are stateless, so there is no server-side session to destroy;
/// signing out is a client concern. The GET route exists because it is the
/// redirect target for guests and has to answer with how to authenticate.
use actix_web::{web, HttpResponse};

use crate::auth::password;
use crate::error::{AppError, Result};
use crate::handlers::users::SessionResponse;
use crate::metrics;
use crate::models::SignInRequest;
use crate::state::AppState;

/// Describe the sign-in exchange. Guests denied elsewhere land here.
#[utoipa::path(
    get,
    path = "/api/v1/users/sign_in",
    tag = "Sessions",
    responses((status = 200, description = "How to authenticate"))
)]
pub async fn sign_in_form() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "message": "Sign in with your email and password.",
        "method": "POST",
        "fields": ["email", "password"],
    }))
}

/// Exchange credentials for a bearer token.
///
/// The rejection is identical for an unknown email and a wrong password, so
/// the endpoint does not leak which addresses are registered.
#[utoipa::path(
    post,
    path = "/api/v1/users/sign_in",
    tag = "Sessions",
    request_body = SignInRequest,
    responses(
        (status = 200, description = "Signed in", body = SessionResponse),
        (status = 401, description = "Bad credentials", body = crate::error::ErrorBody)
    )
)]
pub async fn sign_in(
    state: web::Data<AppState>,
    payload: web::Json<SignInRequest>,
) -> Result<HttpResponse> {
    let req = payload.into_inner();

    let Some(user) = state.store.users.find_by_email(&req.email) else {
        metrics::inc_sign_in_failures();
        return Err(AppError::InvalidCredentials);
    };
    if !password::verify_password(&req.password, &user.password_hash) {
        metrics::inc_sign_in_failures();
        tracing::warn!(user_id = %user.id, "failed sign-in attempt");
        return Err(AppError::InvalidCredentials);
    }

    metrics::inc_sign_ins();
    tracing::info!(user_id = %user.id, "user signed in");

    let session = SessionResponse::for_user(&user, &state)?;
    Ok(HttpResponse::Ok().json(session))
}
