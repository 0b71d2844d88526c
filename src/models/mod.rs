/// Domain records
///
/// This module contains:
/// - Users: account records plus the validated registration/sign-in payloads
/// - Posts: text posts owned by a user
/// - Comments, likes and friendships: the social records hanging off them
pub mod comment;
pub mod friendship;
pub mod like;
pub mod post;
pub mod user;

// Re-export record types at module level
pub use comment::Comment;
pub use friendship::{Friendship, FriendshipStatus};
pub use like::Like;
pub use post::Post;
pub use user::{RegisterUserRequest, SignInRequest, User};
