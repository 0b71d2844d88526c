/// Post endpoints
///
/// Reading is public. Everything else runs through `crate::policy` before a
/// single record is touched, so denied requests never change a count.
use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::auth::Actor;
use crate::error::{AppError, Result};
use crate::metrics;
use crate::models::Post;
use crate::policy::{self, PostAction};
use crate::state::AppState;
use crate::validators;

/// Create and update payload for a post.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct PostParams {
    #[validate(custom(function = "crate::validators::post_content"))]
    pub content: String,
}

impl PostParams {
    fn record(&self) -> serde_json::Value {
        serde_json::json!({ "content": self.content })
    }

    fn check(&self) -> Result<()> {
        if let Err(e) = self.validate() {
            return Err(AppError::Validation {
                record: self.record(),
                errors: validators::field_errors(&e),
            });
        }
        Ok(())
    }
}

/// Blank form for a new post. Requires sign-in; any signed-in user gets the
/// form since what it submits to is checked at create time.
#[utoipa::path(
    get,
    path = "/api/v1/users/{user_id}/posts/new",
    tag = "Posts",
    params(("user_id" = Uuid, Path, description = "Collection owner")),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Blank form"),
        (status = 302, description = "Guest; redirected to sign-in")
    )
)]
pub async fn new_post_form(actor: Actor, path: web::Path<Uuid>) -> Result<HttpResponse> {
    let user_id = path.into_inner();
    policy::authorize_post(actor, PostAction::New, user_id)?;
    Ok(HttpResponse::Ok().json(serde_json::json!({ "post": { "content": "" } })))
}

/// Create a post in the caller's own collection.
#[utoipa::path(
    post,
    path = "/api/v1/posts",
    tag = "Posts",
    request_body = PostParams,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Post created", body = Post),
        (status = 302, description = "Guest; redirected to sign-in"),
        (status = 422, description = "Validation failed; body re-renders the form")
    )
)]
pub async fn create_post(
    state: web::Data<AppState>,
    actor: Actor,
    payload: web::Json<PostParams>,
) -> Result<HttpResponse> {
    let owner = policy::require_user(actor)?;
    create_for(&state, actor, owner, payload.into_inner())
}

/// Create a post in an explicit user's collection. The collection owner
/// must be the caller; posting onto someone else's page is denied and
/// nothing is recorded anywhere.
#[utoipa::path(
    post,
    path = "/api/v1/users/{user_id}/posts",
    tag = "Posts",
    params(("user_id" = Uuid, Path, description = "Collection owner")),
    request_body = PostParams,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Post created", body = Post),
        (status = 302, description = "Guest; redirected to sign-in"),
        (status = 403, description = "Not the collection owner", body = crate::error::ErrorBody),
        (status = 422, description = "Validation failed; body re-renders the form")
    )
)]
pub async fn create_user_post(
    state: web::Data<AppState>,
    actor: Actor,
    path: web::Path<Uuid>,
    payload: web::Json<PostParams>,
) -> Result<HttpResponse> {
    let owner = path.into_inner();
    create_for(&state, actor, owner, payload.into_inner())
}

// Authorization runs before validation: a guest submitting an invalid form
// still gets the sign-in redirect, not a 422.
fn create_for(
    state: &AppState,
    actor: Actor,
    owner: Uuid,
    params: PostParams,
) -> Result<HttpResponse> {
    policy::authorize_post(actor, PostAction::Create, owner)?;
    params.check()?;

    let post = state.store.posts.create(owner, &params.content);
    metrics::inc_posts_created();
    tracing::info!(post_id = %post.id, author_id = %post.author_id, "post created");

    Ok(HttpResponse::Created().json(post))
}

/// Show one post. Public.
#[utoipa::path(
    get,
    path = "/api/v1/posts/{id}",
    tag = "Posts",
    params(("id" = Uuid, Path, description = "Post id")),
    responses(
        (status = 200, description = "The post", body = Post),
        (status = 404, description = "Unknown post", body = crate::error::ErrorBody)
    )
)]
pub async fn show_post(state: web::Data<AppState>, path: web::Path<Uuid>) -> Result<HttpResponse> {
    let post = state
        .store
        .posts
        .find(path.into_inner())
        .ok_or(AppError::NotFound("Post"))?;
    Ok(HttpResponse::Ok().json(post))
}

/// All posts by one user, newest first. Public.
#[utoipa::path(
    get,
    path = "/api/v1/users/{user_id}/posts",
    tag = "Posts",
    params(("user_id" = Uuid, Path, description = "Author")),
    responses(
        (status = 200, description = "The user's posts", body = [Post]),
        (status = 404, description = "Unknown user", body = crate::error::ErrorBody)
    )
)]
pub async fn user_posts(state: web::Data<AppState>, path: web::Path<Uuid>) -> Result<HttpResponse> {
    let user_id = path.into_inner();
    if !state.store.users.contains(user_id) {
        return Err(AppError::NotFound("User"));
    }
    Ok(HttpResponse::Ok().json(state.store.posts.by_author(user_id)))
}

/// Edit form for a post, pre-filled with its current content. Owner only.
#[utoipa::path(
    get,
    path = "/api/v1/posts/{id}/edit",
    tag = "Posts",
    params(("id" = Uuid, Path, description = "Post id")),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Pre-filled form"),
        (status = 302, description = "Guest; redirected to sign-in"),
        (status = 403, description = "Not the owner", body = crate::error::ErrorBody),
        (status = 404, description = "Unknown post", body = crate::error::ErrorBody)
    )
)]
pub async fn edit_post_form(
    state: web::Data<AppState>,
    actor: Actor,
    path: web::Path<Uuid>,
) -> Result<HttpResponse> {
    // Authentication gate runs before record lookup.
    policy::require_user(actor)?;
    let post = state
        .store
        .posts
        .find(path.into_inner())
        .ok_or(AppError::NotFound("Post"))?;
    policy::authorize_post(actor, PostAction::Edit, post.author_id)?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "post": { "id": post.id, "content": post.content }
    })))
}

/// Replace a post's content. Owner only.
#[utoipa::path(
    put,
    path = "/api/v1/posts/{id}",
    tag = "Posts",
    params(("id" = Uuid, Path, description = "Post id")),
    request_body = PostParams,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Updated post", body = Post),
        (status = 302, description = "Guest; redirected to sign-in"),
        (status = 403, description = "Not the owner", body = crate::error::ErrorBody),
        (status = 404, description = "Unknown post", body = crate::error::ErrorBody),
        (status = 422, description = "Validation failed; body re-renders the form")
    )
)]
pub async fn update_post(
    state: web::Data<AppState>,
    actor: Actor,
    path: web::Path<Uuid>,
    payload: web::Json<PostParams>,
) -> Result<HttpResponse> {
    policy::require_user(actor)?;
    let post = state
        .store
        .posts
        .find(path.into_inner())
        .ok_or(AppError::NotFound("Post"))?;
    policy::authorize_post(actor, PostAction::Update, post.author_id)?;

    let params = payload.into_inner();
    params.check()?;

    let updated = state
        .store
        .posts
        .update_content(post.id, &params.content)
        .ok_or(AppError::NotFound("Post"))?;
    tracing::info!(post_id = %updated.id, "post updated");

    Ok(HttpResponse::Ok().json(updated))
}

/// Delete a post. Owner only; comments and likes on it go with it.
#[utoipa::path(
    delete,
    path = "/api/v1/posts/{id}",
    tag = "Posts",
    params(("id" = Uuid, Path, description = "Post id")),
    security(("bearer_auth" = [])),
    responses(
        (status = 204, description = "Post deleted"),
        (status = 302, description = "Guest; redirected to sign-in"),
        (status = 403, description = "Not the owner", body = crate::error::ErrorBody),
        (status = 404, description = "Unknown post", body = crate::error::ErrorBody)
    )
)]
pub async fn destroy_post(
    state: web::Data<AppState>,
    actor: Actor,
    path: web::Path<Uuid>,
) -> Result<HttpResponse> {
    policy::require_user(actor)?;
    let post = state
        .store
        .posts
        .find(path.into_inner())
        .ok_or(AppError::NotFound("Post"))?;
    policy::authorize_post(actor, PostAction::Destroy, post.author_id)?;

    if state.store.posts.delete(post.id) {
        let comments = state.store.comments.remove_for_post(post.id);
        let likes = state.store.likes.remove_for_post(post.id);
        metrics::inc_posts_deleted();
        tracing::info!(
            post_id = %post.id,
            author_id = %post.author_id,
            comments_removed = comments,
            likes_removed = likes,
            "post deleted"
        );
    }
    Ok(HttpResponse::NoContent().finish())
}
