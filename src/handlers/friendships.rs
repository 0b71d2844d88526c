/// Friendship endpoints
///
/// A friendship is one record per user pair. Asking first creates a pending
/// request; the other side asking back accepts it. Either side can dissolve
/// the record at any stage.
use actix_web::{web, HttpResponse};
use uuid::Uuid;

use crate::auth::Actor;
use crate::error::{field_error, AppError, Result};
use crate::models::Friendship;
use crate::policy;
use crate::state::AppState;
use crate::store::FriendRequestOutcome;

/// Request friendship with the user in the path, or accept theirs.
#[utoipa::path(
    post,
    path = "/api/v1/users/{user_id}/friendships",
    tag = "Friendships",
    params(("user_id" = Uuid, Path, description = "The other user")),
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Request created", body = Friendship),
        (status = 200, description = "Accepted or already present", body = Friendship),
        (status = 302, description = "Guest; redirected to sign-in"),
        (status = 404, description = "Unknown user", body = crate::error::ErrorBody),
        (status = 422, description = "Befriending yourself")
    )
)]
pub async fn create_friendship(
    state: web::Data<AppState>,
    actor: Actor,
    path: web::Path<Uuid>,
) -> Result<HttpResponse> {
    let requester = policy::require_user(actor)?;
    let addressee = path.into_inner();

    if addressee == requester {
        return Err(AppError::Validation {
            record: serde_json::json!({ "friend_id": addressee }),
            errors: field_error("friend_id", "can't be yourself"),
        });
    }
    if !state.store.users.contains(addressee) {
        return Err(AppError::NotFound("User"));
    }

    match state.store.friendships.request(requester, addressee) {
        FriendRequestOutcome::Requested(friendship) => {
            tracing::info!(
                requester_id = %requester,
                addressee_id = %addressee,
                "friend request sent"
            );
            Ok(HttpResponse::Created().json(friendship))
        }
        FriendRequestOutcome::Accepted(friendship) => {
            tracing::info!(
                requester_id = %friendship.requester_id,
                addressee_id = %friendship.addressee_id,
                "friend request accepted"
            );
            Ok(HttpResponse::Ok().json(friendship))
        }
        FriendRequestOutcome::Unchanged(friendship) => Ok(HttpResponse::Ok().json(friendship)),
    }
}

/// The caller's friendships, pending and accepted, oldest first.
#[utoipa::path(
    get,
    path = "/api/v1/friendships",
    tag = "Friendships",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "The caller's friendships", body = [Friendship]),
        (status = 302, description = "Guest; redirected to sign-in")
    )
)]
pub async fn my_friendships(state: web::Data<AppState>, actor: Actor) -> Result<HttpResponse> {
    let user_id = policy::require_user(actor)?;
    Ok(HttpResponse::Ok().json(state.store.friendships.for_user(user_id)))
}

/// Dissolve the friendship with the user in the path, whatever its stage.
#[utoipa::path(
    delete,
    path = "/api/v1/users/{user_id}/friendships",
    tag = "Friendships",
    params(("user_id" = Uuid, Path, description = "The other user")),
    security(("bearer_auth" = [])),
    responses(
        (status = 204, description = "Friendship removed"),
        (status = 302, description = "Guest; redirected to sign-in"),
        (status = 404, description = "No friendship with that user", body = crate::error::ErrorBody)
    )
)]
pub async fn destroy_friendship(
    state: web::Data<AppState>,
    actor: Actor,
    path: web::Path<Uuid>,
) -> Result<HttpResponse> {
    let user_id = policy::require_user(actor)?;
    let other = path.into_inner();

    if state.store.friendships.remove(user_id, other) {
        tracing::info!(user_id = %user_id, other_id = %other, "friendship removed");
        Ok(HttpResponse::NoContent().finish())
    } else {
        Err(AppError::NotFound("Friendship"))
    }
}
