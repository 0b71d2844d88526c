use chrono::Utc;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use uuid::Uuid;

use crate::models::Like;

/// Like repository, keyed by (post, user) so a pair can hold at most one
/// like and re-liking is naturally idempotent.
#[derive(Debug, Default)]
pub struct LikeStore {
    by_pair: DashMap<(Uuid, Uuid), Like>,
}

impl LikeStore {
    /// Like a post. Returns the like and whether it was newly created.
    pub fn like(&self, post_id: Uuid, user_id: Uuid) -> (Like, bool) {
        match self.by_pair.entry((post_id, user_id)) {
            Entry::Occupied(existing) => (existing.get().clone(), false),
            Entry::Vacant(slot) => {
                let like = Like {
                    id: Uuid::new_v4(),
                    post_id,
                    user_id,
                    created_at: Utc::now(),
                };
                slot.insert(like.clone());
                (like, true)
            }
        }
    }

    /// Remove a like. Returns whether one existed.
    pub fn unlike(&self, post_id: Uuid, user_id: Uuid) -> bool {
        self.by_pair.remove(&(post_id, user_id)).is_some()
    }

    pub fn liked(&self, post_id: Uuid, user_id: Uuid) -> bool {
        self.by_pair.contains_key(&(post_id, user_id))
    }

    pub fn count_for_post(&self, post_id: Uuid) -> usize {
        self.by_pair.iter().filter(|l| l.post_id == post_id).count()
    }

    /// Ids of the users who liked `post_id`, earliest like first.
    pub fn users_for_post(&self, post_id: Uuid) -> Vec<Uuid> {
        let mut likes: Vec<Like> = self
            .by_pair
            .iter()
            .filter(|l| l.post_id == post_id)
            .map(|l| l.clone())
            .collect();
        likes.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        likes.into_iter().map(|l| l.user_id).collect()
    }

    /// Drop every like on `post_id`. Used when the post itself goes away.
    pub fn remove_for_post(&self, post_id: Uuid) -> usize {
        let keys: Vec<(Uuid, Uuid)> = self
            .by_pair
            .iter()
            .filter(|l| l.post_id == post_id)
            .map(|l| *l.key())
            .collect();
        let mut removed = 0;
        for key in keys {
            if self.by_pair.remove(&key).is_some() {
                removed += 1;
            }
        }
        removed
    }
}
