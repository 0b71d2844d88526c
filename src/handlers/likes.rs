/// Like endpoints
use actix_web::{web, HttpResponse};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::auth::Actor;
use crate::error::{AppError, Result};
use crate::models::Like;
use crate::policy;
use crate::state::AppState;

/// Like summary for one post.
#[derive(Debug, Serialize, ToSchema)]
pub struct PostLikes {
    pub post_id: Uuid,
    pub count: usize,
    pub user_ids: Vec<Uuid>,
}

/// Like a post. Idempotent: liking twice returns the existing like with a
/// 200 instead of a 201, and the count stays put.
#[utoipa::path(
    post,
    path = "/api/v1/posts/{post_id}/like",
    tag = "Likes",
    params(("post_id" = Uuid, Path, description = "Post id")),
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Like created", body = Like),
        (status = 200, description = "Already liked", body = Like),
        (status = 302, description = "Guest; redirected to sign-in"),
        (status = 404, description = "Unknown post", body = crate::error::ErrorBody)
    )
)]
pub async fn like_post(
    state: web::Data<AppState>,
    actor: Actor,
    path: web::Path<Uuid>,
) -> Result<HttpResponse> {
    let user_id = policy::require_user(actor)?;
    let post_id = path.into_inner();
    if state.store.posts.find(post_id).is_none() {
        return Err(AppError::NotFound("Post"));
    }

    let (like, created) = state.store.likes.like(post_id, user_id);
    if created {
        tracing::info!(post_id = %post_id, user_id = %user_id, "post liked");
        Ok(HttpResponse::Created().json(like))
    } else {
        Ok(HttpResponse::Ok().json(like))
    }
}

/// Withdraw a like.
#[utoipa::path(
    delete,
    path = "/api/v1/posts/{post_id}/like",
    tag = "Likes",
    params(("post_id" = Uuid, Path, description = "Post id")),
    security(("bearer_auth" = [])),
    responses(
        (status = 204, description = "Like removed"),
        (status = 302, description = "Guest; redirected to sign-in"),
        (status = 404, description = "No like to remove", body = crate::error::ErrorBody)
    )
)]
pub async fn unlike_post(
    state: web::Data<AppState>,
    actor: Actor,
    path: web::Path<Uuid>,
) -> Result<HttpResponse> {
    let user_id = policy::require_user(actor)?;
    let post_id = path.into_inner();
    if state.store.posts.find(post_id).is_none() {
        return Err(AppError::NotFound("Post"));
    }

    if state.store.likes.unlike(post_id, user_id) {
        tracing::info!(post_id = %post_id, user_id = %user_id, "like removed");
        Ok(HttpResponse::NoContent().finish())
    } else {
        Err(AppError::NotFound("Like"))
    }
}

/// Who liked a post. Public.
#[utoipa::path(
    get,
    path = "/api/v1/posts/{post_id}/likes",
    tag = "Likes",
    params(("post_id" = Uuid, Path, description = "Post id")),
    responses(
        (status = 200, description = "Like summary", body = PostLikes),
        (status = 404, description = "Unknown post", body = crate::error::ErrorBody)
    )
)]
pub async fn post_likes(state: web::Data<AppState>, path: web::Path<Uuid>) -> Result<HttpResponse> {
    let post_id = path.into_inner();
    if state.store.posts.find(post_id).is_none() {
        return Err(AppError::NotFound("Post"));
    }
    Ok(HttpResponse::Ok().json(PostLikes {
        post_id,
        count: state.store.likes.count_for_post(post_id),
        user_ids: state.store.likes.users_for_post(post_id),
    }))
}
