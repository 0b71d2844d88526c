/// Comment endpoints
use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::auth::Actor;
use crate::error::{AppError, Result};
use crate::models::Comment;
use crate::policy;
use crate::state::AppState;
use crate::validators;

/// Comment creation payload.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CommentParams {
    #[validate(custom(function = "crate::validators::comment_content"))]
    pub content: String,
}

/// Comment on a post. Any signed-in user may comment on any post.
#[utoipa::path(
    post,
    path = "/api/v1/posts/{post_id}/comments",
    tag = "Comments",
    params(("post_id" = Uuid, Path, description = "Post id")),
    request_body = CommentParams,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Comment created", body = Comment),
        (status = 302, description = "Guest; redirected to sign-in"),
        (status = 404, description = "Unknown post", body = crate::error::ErrorBody),
        (status = 422, description = "Validation failed; body re-renders the form")
    )
)]
pub async fn create_comment(
    state: web::Data<AppState>,
    actor: Actor,
    path: web::Path<Uuid>,
    payload: web::Json<CommentParams>,
) -> Result<HttpResponse> {
    let author = policy::require_user(actor)?;
    let post_id = path.into_inner();
    if state.store.posts.find(post_id).is_none() {
        return Err(AppError::NotFound("Post"));
    }

    let params = payload.into_inner();
    if let Err(e) = params.validate() {
        return Err(AppError::Validation {
            record: serde_json::json!({ "content": params.content }),
            errors: validators::field_errors(&e),
        });
    }

    let comment = state.store.comments.create(post_id, author, &params.content);
    tracing::info!(comment_id = %comment.id, post_id = %post_id, "comment created");

    Ok(HttpResponse::Created().json(comment))
}

/// Comments on a post, oldest first. Public.
#[utoipa::path(
    get,
    path = "/api/v1/posts/{post_id}/comments",
    tag = "Comments",
    params(("post_id" = Uuid, Path, description = "Post id")),
    responses(
        (status = 200, description = "Comments on the post", body = [Comment]),
        (status = 404, description = "Unknown post", body = crate::error::ErrorBody)
    )
)]
pub async fn post_comments(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse> {
    let post_id = path.into_inner();
    if state.store.posts.find(post_id).is_none() {
        return Err(AppError::NotFound("Post"));
    }
    Ok(HttpResponse::Ok().json(state.store.comments.for_post(post_id)))
}

/// Delete a comment. Author only.
#[utoipa::path(
    delete,
    path = "/api/v1/comments/{id}",
    tag = "Comments",
    params(("id" = Uuid, Path, description = "Comment id")),
    security(("bearer_auth" = [])),
    responses(
        (status = 204, description = "Comment deleted"),
        (status = 302, description = "Guest; redirected to sign-in"),
        (status = 403, description = "Not the author", body = crate::error::ErrorBody),
        (status = 404, description = "Unknown comment", body = crate::error::ErrorBody)
    )
)]
pub async fn destroy_comment(
    state: web::Data<AppState>,
    actor: Actor,
    path: web::Path<Uuid>,
) -> Result<HttpResponse> {
    policy::require_user(actor)?;
    let comment = state
        .store
        .comments
        .find(path.into_inner())
        .ok_or(AppError::NotFound("Comment"))?;
    policy::authorize_comment_delete(actor, comment.author_id)?;

    state.store.comments.delete(comment.id);
    tracing::info!(comment_id = %comment.id, "comment deleted");

    Ok(HttpResponse::NoContent().finish())
}
