use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;
use uuid::Uuid;

/// Public view of an account. The stored password hash never leaves the
/// database layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub username: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: Uuid,
    pub content: String,
    pub sender_id: Uuid,
    pub receiver_id: Uuid,
    pub created_at: DateTime<Utc>,
}

/// A directed friendship edge. (A,B) existing says nothing about (B,A);
/// only the initiating side ever sees the edge in its friend list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Friend {
    pub id: Uuid,
    pub user_id: Uuid,
    pub friend_id: Uuid,
}

/// Lifecycle state of a match. Only `Pending` is written today; `Accepted`
/// and `Rejected` are reserved for the accept/reject flow, which has no
/// server operation yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchStatus {
    Pending,
    Accepted,
    Rejected,
}

impl MatchStatus {
    /// Parse the stored status column. Unknown values fall back to
    /// `Pending` and are logged.
    pub fn from_db(raw: &str) -> Self {
        match raw {
            "pending" => Self::Pending,
            "accepted" => Self::Accepted,
            "rejected" => Self::Rejected,
            other => {
                warn!("Unknown match status '{}', treating as pending", other);
                Self::Pending
            }
        }
    }
}

/// A match proposal as written: directed from `user_id` (proposer) to
/// `match_id` (target).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    pub id: Uuid,
    pub user_id: Uuid,
    pub match_id: Uuid,
    pub status: MatchStatus,
    pub created_at: DateTime<Utc>,
}

/// A match as read back: the directed row plus the full account record of
/// both participants, regardless of which side proposed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchWithUsers {
    pub id: Uuid,
    pub user_id: Uuid,
    pub match_id: Uuid,
    pub status: MatchStatus,
    pub created_at: DateTime<Utc>,
    pub proposer: User,
    pub target: User,
}
