use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{
    ChickRecord, Comment, Company, LikeState, Page, Post, PostSummary,
};
use crate::error::RepoError;

/// Generic repository trait defining standard CRUD operations.
///
/// `insert` is deliberately not an upsert: entity ids are generated by the
/// domain constructors, so "create" and "update" never share a code path.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Insert a freshly created entity.
    async fn insert(&self, entity: T) -> Result<T, RepoError>;

    /// Delete an entity by its ID.
    async fn delete(&self, id: ID) -> Result<(), RepoError>;
}

/// Post repository with the board-specific read and write paths.
#[async_trait]
pub trait PostRepository: BaseRepository<Post, Uuid> {
    /// All posts, newest first, in the listing projection.
    async fn list_recent(&self) -> Result<Vec<PostSummary>, RepoError>;

    /// Detail read: bumps `view_count` by one and returns the refreshed
    /// post. Every read counts; there is no debounce.
    async fn view(&self, id: Uuid) -> Result<Option<Post>, RepoError>;

    /// Apply an edit. The author is immutable; `updated_at` is set to now on
    /// every successful call, even when nothing changed.
    async fn update_content(
        &self,
        id: Uuid,
        title: &str,
        content: &str,
    ) -> Result<Option<Post>, RepoError>;
}

/// Comment repository - append and list only.
#[async_trait]
pub trait CommentRepository: Send + Sync {
    async fn add(&self, comment: Comment) -> Result<Comment, RepoError>;

    /// Comments for a post, oldest first.
    async fn list_for_post(&self, post_id: Uuid) -> Result<Vec<Comment>, RepoError>;
}

/// Like repository - membership toggle keeping the denormalized counter in
/// step with the rows.
#[async_trait]
pub trait LikeRepository: Send + Sync {
    /// Flip like membership for `(post_id, client_addr)` in one transaction.
    /// Returns `RepoError::NotFound` when the post does not exist.
    async fn toggle(&self, post_id: Uuid, client_addr: &str) -> Result<LikeState, RepoError>;

    /// Whether this address currently likes the post.
    async fn is_liked(&self, post_id: Uuid, client_addr: &str) -> Result<bool, RepoError>;
}

/// Read-only pager over the reference dataset.
#[async_trait]
pub trait RecordRepository: Send + Sync {
    /// Fetch the given 1-indexed page (10 rows per page).
    async fn page(&self, page: u64) -> Result<Page<ChickRecord>, RepoError>;
}

/// Read-only access to the companies table for the analytics summary.
#[async_trait]
pub trait CompanyRepository: Send + Sync {
    /// The `limit` companies with the most employees, descending.
    async fn top_by_employees(&self, limit: u64) -> Result<Vec<Company>, RepoError>;
}
