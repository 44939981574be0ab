use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::post::validate_required;
use crate::error::DomainError;

/// Comment entity - append-only, owned by a post and deleted with it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    pub id: Uuid,
    pub post_id: Uuid,
    pub author: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    /// Create a new comment, rejecting empty author or content.
    pub fn new(post_id: Uuid, author: &str, content: &str) -> Result<Self, DomainError> {
        validate_required("author", author)?;
        validate_required("content", content)?;

        Ok(Self {
            id: Uuid::new_v4(),
            post_id,
            author: author.trim().to_owned(),
            content: content.trim().to_owned(),
            created_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comment_requires_author_and_content() {
        let post_id = Uuid::new_v4();
        assert!(Comment::new(post_id, "bob", "nice post").is_ok());
        assert!(Comment::new(post_id, "", "nice post").is_err());
        assert!(Comment::new(post_id, "bob", "  ").is_err());
    }
}
