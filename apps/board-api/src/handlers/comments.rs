//! Comment handlers.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use board_core::domain::Comment;
use board_core::ports::BaseRepository;
use board_shared::dto::{AddCommentRequest, CommentResponse};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/posts/{id}/comments
pub async fn add(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    body: web::Json<AddCommentRequest>,
) -> AppResult<HttpResponse> {
    let post_id = path.into_inner();
    let req = body.into_inner();

    let new_comment = Comment::new(post_id, &req.author, &req.content)?;

    // Comments cannot outlive their post, so the post must still exist.
    state
        .posts
        .find_by_id(post_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("post {post_id} not found")))?;

    let saved = state.comments.add(new_comment).await?;

    Ok(HttpResponse::Created().json(CommentResponse::from(saved)))
}
