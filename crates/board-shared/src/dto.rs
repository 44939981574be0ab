//! Data Transfer Objects - request/response types for the API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use board_core::domain::{ChickRecord, Comment, CompanySummary, LikeState, Page, Post, PostSummary};

/// Request to create a new post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePostRequest {
    pub title: String,
    pub author: String,
    pub content: String,
}

/// Request to edit a post. The author cannot be changed after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdatePostRequest {
    pub title: String,
    pub content: String,
}

/// Request to append a comment to a post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddCommentRequest {
    pub author: String,
    pub content: String,
}

/// Full post representation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostResponse {
    pub id: Uuid,
    pub title: String,
    pub author: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub view_count: i64,
    pub like_count: i64,
}

impl From<Post> for PostResponse {
    fn from(post: Post) -> Self {
        Self {
            id: post.id,
            title: post.title,
            author: post.author,
            content: post.content,
            created_at: post.created_at,
            updated_at: post.updated_at,
            view_count: post.view_count,
            like_count: post.like_count,
        }
    }
}

/// Listing entry - the index never ships post bodies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostSummaryResponse {
    pub id: Uuid,
    pub title: String,
    pub author: String,
    pub created_at: DateTime<Utc>,
    pub view_count: i64,
    pub like_count: i64,
}

impl From<PostSummary> for PostSummaryResponse {
    fn from(summary: PostSummary) -> Self {
        Self {
            id: summary.id,
            title: summary.title,
            author: summary.author,
            created_at: summary.created_at,
            view_count: summary.view_count,
            like_count: summary.like_count,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentResponse {
    pub id: Uuid,
    pub author: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl From<Comment> for CommentResponse {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id,
            author: comment.author,
            content: comment.content,
            created_at: comment.created_at,
        }
    }
}

/// Detail view: the post (view already counted), its comments oldest first,
/// and whether the calling address currently likes it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostDetailResponse {
    #[serde(flatten)]
    pub post: PostResponse,
    pub comments: Vec<CommentResponse>,
    pub liked: bool,
}

/// Result of a like toggle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LikeResponse {
    pub liked: bool,
    pub like_count: i64,
}

impl From<LikeState> for LikeResponse {
    fn from(state: LikeState) -> Self {
        Self {
            liked: state.liked,
            like_count: state.like_count,
        }
    }
}

/// One page of a listing plus pager metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageResponse<T> {
    pub items: Vec<T>,
    pub page: u64,
    pub per_page: u64,
    pub total_items: u64,
    pub total_pages: u64,
}

impl<T, U: From<T>> From<Page<T>> for PageResponse<U> {
    fn from(page: Page<T>) -> Self {
        Self {
            items: page.items.into_iter().map(U::from).collect(),
            page: page.page,
            per_page: page.per_page,
            total_items: page.total_items,
            total_pages: page.total_pages,
        }
    }
}

/// Row of the paginated reference dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordResponse {
    pub id: i64,
    pub breed: String,
    pub gender: String,
    pub weight_g: i32,
    pub arrived_at: DateTime<Utc>,
}

impl From<ChickRecord> for RecordResponse {
    fn from(record: ChickRecord) -> Self {
        Self {
            id: record.id,
            breed: record.breed,
            gender: record.gender,
            weight_g: record.weight_g,
            arrived_at: record.arrived_at,
        }
    }
}

/// Aggregates over the top companies by headcount.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanySummaryResponse {
    pub total_employees: i64,
    pub average_price_usd: f64,
    pub largest_employer: String,
    pub highest_priced: String,
    pub top_country: String,
}

impl From<CompanySummary> for CompanySummaryResponse {
    fn from(summary: CompanySummary) -> Self {
        Self {
            total_employees: summary.total_employees,
            average_price_usd: summary.average_price_usd,
            largest_employer: summary.largest_employer,
            highest_priced: summary.highest_priced,
            top_country: summary.top_country,
        }
    }
}
