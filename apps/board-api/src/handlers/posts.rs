//! Post lifecycle handlers.

use actix_web::{HttpRequest, HttpResponse, web};
use uuid::Uuid;

use board_core::domain::Post;
use board_core::ports::BaseRepository;
use board_shared::dto::{
    CreatePostRequest, PostDetailResponse, PostResponse, PostSummaryResponse, UpdatePostRequest,
};

use super::client_addr;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/posts - all posts, newest first.
pub async fn list(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.list_recent().await?;
    let body: Vec<PostSummaryResponse> = posts.into_iter().map(Into::into).collect();

    Ok(HttpResponse::Ok().json(body))
}

/// POST /api/posts
pub async fn create(
    state: web::Data<AppState>,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    // Validation happens before any statement; a rejected request writes nothing.
    let post = Post::new(&req.title, &req.author, &req.content)?;
    let saved = state.posts.insert(post).await?;

    tracing::info!(post_id = %saved.id, "Post created");

    Ok(HttpResponse::Created().json(PostResponse::from(saved)))
}

/// GET /api/posts/{id}
///
/// Every fetch counts as a view, refreshes included.
pub async fn detail(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    req: HttpRequest,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    let post = state
        .posts
        .view(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("post {id} not found")))?;

    let comments = state.comments.list_for_post(id).await?;

    let liked = match client_addr(&req) {
        Some(addr) => state.likes.is_liked(id, &addr).await?,
        None => false,
    };

    Ok(HttpResponse::Ok().json(PostDetailResponse {
        post: post.into(),
        comments: comments.into_iter().map(Into::into).collect(),
        liked,
    }))
}

/// PUT /api/posts/{id}
pub async fn update(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    body: web::Json<UpdatePostRequest>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let req = body.into_inner();

    Post::validate_edit(&req.title, &req.content)?;

    let updated = state
        .posts
        .update_content(id, &req.title, &req.content)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("post {id} not found")))?;

    Ok(HttpResponse::Ok().json(PostResponse::from(updated)))
}

/// DELETE /api/posts/{id}
///
/// Unconditional; comments and likes go with the post.
pub async fn delete(state: web::Data<AppState>, path: web::Path<Uuid>) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    state.posts.delete(id).await?;

    tracing::info!(post_id = %id, "Post deleted");

    Ok(HttpResponse::NoContent().finish())
}
