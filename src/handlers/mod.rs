/// HTTP handlers for the posting API
///
/// This module contains handlers for:
/// - Users: registration, sign-in, public profiles
/// - Posts: forms, create, read, update, delete under the ownership rules
/// - Comments, likes, friendships: the social records around posts
pub mod comments;
pub mod friendships;
pub mod health;
pub mod likes;
pub mod posts;
pub mod sessions;
pub mod users;

// Re-export handler functions at module level
pub use comments::{create_comment, destroy_comment, post_comments};
pub use friendships::{create_friendship, destroy_friendship, my_friendships};
pub use health::health;
pub use likes::{like_post, post_likes, unlike_post};
pub use posts::{
    create_post, create_user_post, destroy_post, edit_post_form, new_post_form, show_post,
    update_post, user_posts,
};
pub use sessions::{sign_in, sign_in_form};
pub use users::{register, show_user};
