use chrono::Utc;
use dashmap::DashMap;
use uuid::Uuid;

use crate::models::Post;

/// Post repository.
#[derive(Debug, Default)]
pub struct PostStore {
    by_id: DashMap<Uuid, Post>,
}

impl PostStore {
    pub fn create(&self, author_id: Uuid, content: &str) -> Post {
        let now = Utc::now();
        let post = Post {
            id: Uuid::new_v4(),
            author_id,
            content: content.to_string(),
            created_at: now,
            updated_at: now,
        };
        self.by_id.insert(post.id, post.clone());
        post
    }

    pub fn find(&self, id: Uuid) -> Option<Post> {
        self.by_id.get(&id).map(|p| p.clone())
    }

    /// Posts by one author, newest first. Ties on timestamp break by id so
    /// the ordering is total.
    pub fn by_author(&self, author_id: Uuid) -> Vec<Post> {
        let mut posts: Vec<Post> = self
            .by_id
            .iter()
            .filter(|p| p.author_id == author_id)
            .map(|p| p.clone())
            .collect();
        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        posts
    }

    pub fn count_by_author(&self, author_id: Uuid) -> usize {
        self.by_id.iter().filter(|p| p.author_id == author_id).count()
    }

    /// Rewrite the post body. The author never changes.
    pub fn update_content(&self, id: Uuid, content: &str) -> Option<Post> {
        self.by_id.get_mut(&id).map(|mut post| {
            post.content = content.to_string();
            post.updated_at = Utc::now();
            post.clone()
        })
    }

    pub fn delete(&self, id: Uuid) -> bool {
        self.by_id.remove(&id).is_some()
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn by_author_returns_newest_first() {
        let store = PostStore::default();
        let author = Uuid::new_v4();
        let first = store.create(author, "first");
        let second = store.create(author, "second");
        store.create(Uuid::new_v4(), "someone else");

        let posts = store.by_author(author);
        assert_eq!(posts.len(), 2);
        assert!(posts[0].created_at >= posts[1].created_at);
        let ids: Vec<Uuid> = posts.iter().map(|p| p.id).collect();
        assert!(ids.contains(&first.id) && ids.contains(&second.id));
    }

    #[test]
    fn update_touches_updated_at_only() {
        let store = PostStore::default();
        let post = store.create(Uuid::new_v4(), "before");
        let updated = store.update_content(post.id, "after").unwrap();
        assert_eq!(updated.content, "after");
        assert_eq!(updated.author_id, post.author_id);
        assert_eq!(updated.created_at, post.created_at);
        assert!(updated.updated_at >= post.updated_at);
    }

    #[test]
    fn delete_is_idempotent() {
        let store = PostStore::default();
        let post = store.create(Uuid::new_v4(), "gone soon");
        assert!(store.delete(post.id));
        assert!(!store.delete(post.id));
        assert!(store.is_empty());
    }
}
