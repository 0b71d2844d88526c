/// In-memory repositories
///
/// Persistence is process-local. Every record type lives in a `DashMap`
/// keyed by id (or by a natural pair key), so a single insert or remove is
/// atomic without a coarse lock around the whole store.
mod comments;
mod friendships;
mod likes;
mod posts;
mod users;

pub use comments::CommentStore;
pub use friendships::{FriendRequestOutcome, FriendshipStore};
pub use likes::LikeStore;
pub use posts::PostStore;
pub use users::{email_key, UserStore};

/// All repositories bundled for sharing through `web::Data`.
#[derive(Debug, Default)]
pub struct Store {
    pub users: UserStore,
    pub posts: PostStore,
    pub comments: CommentStore,
    pub likes: LikeStore,
    pub friendships: FriendshipStore,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }
}
