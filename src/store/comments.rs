use chrono::Utc;
use dashmap::DashMap;
use uuid::Uuid;

use crate::models::Comment;

/// Comment repository.
#[derive(Debug, Default)]
pub struct CommentStore {
    by_id: DashMap<Uuid, Comment>,
}

impl CommentStore {
    pub fn create(&self, post_id: Uuid, author_id: Uuid, content: &str) -> Comment {
        let comment = Comment {
            id: Uuid::new_v4(),
            post_id,
            author_id,
            content: content.to_string(),
            created_at: Utc::now(),
        };
        self.by_id.insert(comment.id, comment.clone());
        comment
    }

    pub fn find(&self, id: Uuid) -> Option<Comment> {
        self.by_id.get(&id).map(|c| c.clone())
    }

    /// Comments on one post, oldest first.
    pub fn for_post(&self, post_id: Uuid) -> Vec<Comment> {
        let mut comments: Vec<Comment> = self
            .by_id
            .iter()
            .filter(|c| c.post_id == post_id)
            .map(|c| c.clone())
            .collect();
        comments.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        comments
    }

    pub fn delete(&self, id: Uuid) -> bool {
        self.by_id.remove(&id).is_some()
    }

    /// Drop every comment on `post_id`. Used when the post itself goes away.
    pub fn remove_for_post(&self, post_id: Uuid) -> usize {
        let ids: Vec<Uuid> = self
            .by_id
            .iter()
            .filter(|c| c.post_id == post_id)
            .map(|c| c.id)
            .collect();
        let mut removed = 0;
        for id in ids {
            if self.by_id.remove(&id).is_some() {
                removed += 1;
            }
        }
        removed
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
    fn for_post_returns_oldest_first() {
        let store = CommentStore::default();
        let post_id = Uuid::new_v4();
        let first = store.create(post_id, Uuid::new_v4(), "first");
        let second = store.create(post_id, Uuid::new_v4(), "second");
        store.create(Uuid::new_v4(), Uuid::new_v4(), "other post");

        let comments = store.for_post(post_id);
        assert_eq!(comments.len(), 2);
        assert_eq!(comments[0].id, first.id);
        assert_eq!(comments[1].id, second.id);
    }

    #[test]
    fn remove_for_post_only_touches_that_post() {
        let store = CommentStore::default();
        let doomed = Uuid::new_v4();
        let kept = Uuid::new_v4();
        store.create(doomed, Uuid::new_v4(), "one");
        store.create(doomed, Uuid::new_v4(), "two");
        store.create(kept, Uuid::new_v4(), "stays");

        assert_eq!(store.remove_for_post(doomed), 2);
        assert_eq!(store.len(), 1);
        assert_eq!(store.for_post(kept).len(), 1);
    }
}
