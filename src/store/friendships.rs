use chrono::Utc;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use uuid::Uuid;

use crate::models::{Friendship, FriendshipStatus};

/// What a friend request did.
#[derive(Debug, Clone)]
pub enum FriendRequestOutcome {
    /// No prior relationship existed; a pending request now does.
    Requested(Friendship),
    /// The other side had already asked; the friendship is now accepted.
    Accepted(Friendship),
    /// Nothing changed; the existing record is returned as-is.
    Unchanged(Friendship),
}

/// Order-independent key: the same pair of users maps to the same slot no
/// matter who initiated.
fn pair_key(a: Uuid, b: Uuid) -> (Uuid, Uuid) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Friendship repository. One record per user pair; a request toward
/// someone who already asked flips the record to accepted.
#[derive(Debug, Default)]
pub struct FriendshipStore {
    by_pair: DashMap<(Uuid, Uuid), Friendship>,
}

impl FriendshipStore {
    pub fn request(&self, requester_id: Uuid, addressee_id: Uuid) -> FriendRequestOutcome {
        match self.by_pair.entry(pair_key(requester_id, addressee_id)) {
            Entry::Occupied(mut existing) => {
                let friendship = existing.get_mut();
                if friendship.status == FriendshipStatus::Pending
                    && friendship.addressee_id == requester_id
                {
                    friendship.status = FriendshipStatus::Accepted;
                    friendship.updated_at = Utc::now();
                    FriendRequestOutcome::Accepted(friendship.clone())
                } else {
                    FriendRequestOutcome::Unchanged(friendship.clone())
                }
            }
            Entry::Vacant(slot) => {
                let now = Utc::now();
                let friendship = Friendship {
                    id: Uuid::new_v4(),
                    requester_id,
                    addressee_id,
                    status: FriendshipStatus::Pending,
                    created_at: now,
                    updated_at: now,
                };
                slot.insert(friendship.clone());
                FriendRequestOutcome::Requested(friendship)
            }
        }
    }

    pub fn between(&self, a: Uuid, b: Uuid) -> Option<Friendship> {
        self.by_pair.get(&pair_key(a, b)).map(|f| f.clone())
    }

    /// Every friendship `user_id` is part of, oldest first.
    pub fn for_user(&self, user_id: Uuid) -> Vec<Friendship> {
        let mut friendships: Vec<Friendship> = self
            .by_pair
            .iter()
            .filter(|f| f.involves(user_id))
            .map(|f| f.clone())
            .collect();
        friendships.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        friendships
    }

    /// Dissolve whatever exists between the pair, pending or accepted.
    pub fn remove(&self, a: Uuid, b: Uuid) -> bool {
        self.by_pair.remove(&pair_key(a, b)).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_request_is_pending() {
        let store = FriendshipStore::default();
        let (a, b) = (Uuid::new_v4(), Uuid::new_v4());

        match store.request(a, b) {
            FriendRequestOutcome::Requested(f) => {
                assert_eq!(f.status, FriendshipStatus::Pending);
                assert_eq!(f.requester_id, a);
                assert_eq!(f.addressee_id, b);
            }
            other => panic!("expected Requested, got {other:?}"),
        }
    }

    #[test]
    fn counter_request_accepts() {
        let store = FriendshipStore::default();
        let (a, b) = (Uuid::new_v4(), Uuid::new_v4());
        store.request(a, b);

        match store.request(b, a) {
            FriendRequestOutcome::Accepted(f) => {
                assert_eq!(f.status, FriendshipStatus::Accepted)
            }
            other => panic!("expected Accepted, got {other:?}"),
        }
        assert_eq!(
            store.between(a, b).unwrap().status,
            FriendshipStatus::Accepted
        );
    }

    #[test]
    fn repeating_a_request_changes_nothing() {
        let store = FriendshipStore::default();
        let (a, b) = (Uuid::new_v4(), Uuid::new_v4());
        store.request(a, b);

        match store.request(a, b) {
            FriendRequestOutcome::Unchanged(f) => {
                assert_eq!(f.status, FriendshipStatus::Pending)
            }
            other => panic!("expected Unchanged, got {other:?}"),
        }
    }

    #[test]
    fn both_sides_see_the_friendship() {
        let store = FriendshipStore::default();
        let (a, b) = (Uuid::new_v4(), Uuid::new_v4());
        store.request(a, b);

        assert_eq!(store.for_user(a).len(), 1);
        assert_eq!(store.for_user(b).len(), 1);
        assert!(store.for_user(Uuid::new_v4()).is_empty());
    }

    #[test]
    fn remove_works_from_either_side_of_the_pair() {
        let store = FriendshipStore::default();
        let (a, b) = (Uuid::new_v4(), Uuid::new_v4());
        store.request(a, b);

        assert!(store.remove(b, a));
        assert!(store.between(a, b).is_none());
        assert!(!store.remove(a, b));
    }
}
