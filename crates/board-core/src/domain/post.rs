use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Post entity - a board entry with derived counters.
///
/// `view_count` grows on every detail read; `like_count` mirrors the number
/// of like rows for this post and must only change together with them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub author: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    /// None until the first edit.
    pub updated_at: Option<DateTime<Utc>>,
    pub view_count: i64,
    pub like_count: i64,
}

impl Post {
    /// Create a new post, rejecting empty title, author, or content.
    pub fn new(title: &str, author: &str, content: &str) -> Result<Self, DomainError> {
        validate_required("title", title)?;
        validate_required("author", author)?;
        validate_required("content", content)?;

        Ok(Self {
            id: Uuid::new_v4(),
            title: title.trim().to_owned(),
            author: author.trim().to_owned(),
            content: content.trim().to_owned(),
            created_at: Utc::now(),
            updated_at: None,
            view_count: 0,
            like_count: 0,
        })
    }

    /// Validate an edit. The author is immutable, so only title and content
    /// are checked.
    pub fn validate_edit(title: &str, content: &str) -> Result<(), DomainError> {
        validate_required("title", title)?;
        validate_required("content", content)?;
        Ok(())
    }
}

/// Listing projection - everything the board index shows, without content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostSummary {
    pub id: Uuid,
    pub title: String,
    pub author: String,
    pub created_at: DateTime<Utc>,
    pub view_count: i64,
    pub like_count: i64,
}

pub(crate) fn validate_required(field: &str, value: &str) -> Result<(), DomainError> {
    if value.trim().is_empty() {
        return Err(DomainError::Validation(format!("{field} must not be empty")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_post_starts_with_zero_counters() {
        let post = Post::new("Hello", "alice", "First post").unwrap();
        assert_eq!(post.view_count, 0);
        assert_eq!(post.like_count, 0);
        assert!(post.updated_at.is_none());
    }

    #[test]
    fn new_post_trims_fields() {
        let post = Post::new("  Hello  ", "alice", "body").unwrap();
        assert_eq!(post.title, "Hello");
    }

    #[test]
    fn empty_or_blank_fields_are_rejected() {
        assert!(Post::new("", "alice", "body").is_err());
        assert!(Post::new("Hello", "   ", "body").is_err());
        assert!(Post::new("Hello", "alice", "").is_err());
    }

    #[test]
    fn edit_requires_title_and_content() {
        assert!(Post::validate_edit("Hello", "body").is_ok());
        assert!(Post::validate_edit("", "body").is_err());
        assert!(Post::validate_edit("Hello", " ").is_err());
    }
}
