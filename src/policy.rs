/// Access control for posts and the records hanging off them
///
/// The rules, in one place:
/// - reading is public: index and show need no identity
/// - authoring needs a signed-in user, and only into the caller's own
///   collection
/// - edit, update and destroy are owner-only
///
/// Denials split by actor. A guest gets `SignInRequired`, which the HTTP
/// layer renders as a redirect to the sign-in path. A signed-in non-owner
/// gets `Forbidden` and the target record is left untouched.
use uuid::Uuid;

use crate::auth::Actor;
use crate::error::{AppError, Result};

/// Post actions subject to authorization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostAction {
    Index,
    Show,
    New,
    Create,
    Edit,
    Update,
    Destroy,
}

/// Decide whether `actor` may perform `action` against a post collection or
/// record owned by `owner`.
pub fn authorize_post(actor: Actor, action: PostAction, owner: Uuid) -> Result<()> {
    if matches!(action, PostAction::Index | PostAction::Show) {
        return Ok(());
    }
    let user_id = require_user(actor)?;
    let allowed = match action {
        PostAction::Index | PostAction::Show => true,
        // The blank form is available to any signed-in user; what it posts
        // to is checked at Create.
        PostAction::New => true,
        PostAction::Create | PostAction::Edit | PostAction::Update | PostAction::Destroy => {
            owner == user_id
        }
    };
    if allowed {
        Ok(())
    } else {
        Err(AppError::Forbidden(deny_message(action)))
    }
}

/// Guests may not pass; everyone else yields their user id.
pub fn require_user(actor: Actor) -> Result<Uuid> {
    actor.user_id().ok_or(AppError::SignInRequired)
}

/// Comments are removable only by their author.
pub fn authorize_comment_delete(actor: Actor, comment_author: Uuid) -> Result<()> {
    let user_id = require_user(actor)?;
    if user_id == comment_author {
        Ok(())
    } else {
        Err(AppError::Forbidden(
            "You don't have permission to delete this comment".to_string(),
        ))
    }
}

fn deny_message(action: PostAction) -> String {
    match action {
        PostAction::Create => "You can only add posts to your own page".to_string(),
        _ => "You don't have permission to modify this post".to_string(),
    }
}
