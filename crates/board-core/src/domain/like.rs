use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Like row - at most one per (post, client address) pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Like {
    pub post_id: Uuid,
    pub client_addr: String,
    pub created_at: DateTime<Utc>,
}

impl Like {
    pub fn new(post_id: Uuid, client_addr: &str) -> Self {
        Self {
            post_id,
            client_addr: client_addr.to_owned(),
            created_at: Utc::now(),
        }
    }
}

/// Outcome of a like toggle: the caller's membership after the flip and the
/// post's counter, which always equals the number of like rows.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LikeState {
    pub liked: bool,
    pub like_count: i64,
}
