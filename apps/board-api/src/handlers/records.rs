//! Paginated reference-dataset handler.

use actix_web::{HttpResponse, web};
use serde::Deserialize;

use board_core::domain::normalize_page;
use board_shared::dto::{PageResponse, RecordResponse};

use crate::middleware::error::AppResult;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct RecordsQuery {
    // Kept as a raw string so malformed values (`?page=abc`, `?page=-1`)
    // fall back to the first page instead of a 400.
    pub page: Option<String>,
}

/// GET /api/records?page=N
pub async fn list(
    state: web::Data<AppState>,
    query: web::Query<RecordsQuery>,
) -> AppResult<HttpResponse> {
    let page = normalize_page(query.page.as_deref().and_then(|p| p.parse().ok()));

    let page_data = state.records.page(page).await?;
    let body: PageResponse<RecordResponse> = page_data.into();

    Ok(HttpResponse::Ok().json(body))
}
