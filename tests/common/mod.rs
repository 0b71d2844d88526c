#![allow(dead_code)]
/// Shared helpers for the HTTP tests: state wired the same way `main` wires
/// it, plus factories that put records straight into the store.
use actix_web::web;
use postline::auth::{password, token};
use postline::models::{Post, User};
use postline::{AppState, Config};
use uuid::Uuid;

/// Password every factory user is created with.
pub const PASSWORD: &str = "password";

pub fn test_state() -> web::Data<AppState> {
    let config = Config::from_env().expect("test configuration");
    web::Data::new(AppState::new(config))
}

/// A persisted, valid user.
pub fn create_user(state: &AppState, email: &str) -> User {
    let hash = password::hash_password(PASSWORD).expect("hash password");
    state
        .store
        .users
        .create(email, &hash, "Jane", "Doe")
        .expect("create user")
}

/// A persisted post owned by `author_id`.
pub fn create_post(state: &AppState, author_id: Uuid, content: &str) -> Post {
    state.store.posts.create(author_id, content)
}

/// An Authorization header value for `user_id`, as issued at sign-in.
pub fn bearer_for(state: &AppState, user_id: Uuid) -> String {
    let token = token::issue_token(
        user_id,
        state.config.auth.jwt_secret.as_bytes(),
        state.config.auth.token_ttl_hours,
    )
    .expect("issue token");
    format!("Bearer {token}")
}
