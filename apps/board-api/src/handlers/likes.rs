//! Like toggle handler.

use actix_web::{HttpRequest, HttpResponse, web};
use uuid::Uuid;

use board_core::error::RepoError;
use board_shared::dto::LikeResponse;

use super::client_addr;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/posts/{id}/like
///
/// Flips like membership for the caller's address. A second call from the
/// same address undoes the first.
pub async fn toggle(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    req: HttpRequest,
) -> AppResult<HttpResponse> {
    let post_id = path.into_inner();

    let addr = client_addr(&req)
        .ok_or_else(|| AppError::BadRequest("client address unavailable".to_string()))?;

    let like_state = state.likes.toggle(post_id, &addr).await.map_err(|e| match e {
        RepoError::NotFound => AppError::NotFound(format!("post {post_id} not found")),
        other => other.into(),
    })?;

    tracing::debug!(post_id = %post_id, liked = like_state.liked, "Like toggled");

    Ok(HttpResponse::Ok().json(LikeResponse::from(like_state)))
}
