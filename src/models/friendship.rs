use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Lifecycle of a friendship record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum FriendshipStatus {
    /// The requester asked and the addressee has not answered yet.
    Pending,
    /// Both sides asked; the friendship is mutual.
    Accepted,
}

/// A friendship between two users. At most one record exists per pair,
/// whichever direction it was initiated in.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Friendship {
    pub id: Uuid,
    pub requester_id: Uuid,
    pub addressee_id: Uuid,
    pub status: FriendshipStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Friendship {
    /// Whether `user_id` is on either side of this friendship.
    pub fn involves(&self, user_id: Uuid) -> bool {
        self.requester_id == user_id || self.addressee_id == user_id
    }
}
