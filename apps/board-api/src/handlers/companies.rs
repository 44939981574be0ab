//! Analytics summary handler.

use actix_web::{HttpResponse, web};

use board_core::domain::CompanySummary;
use board_shared::dto::CompanySummaryResponse;

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// Companies considered for the summary, by headcount.
const TOP_COMPANIES: u64 = 10;

/// GET /api/companies/summary
pub async fn summary(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let companies = state.companies.top_by_employees(TOP_COMPANIES).await?;

    let summary = CompanySummary::from_companies(&companies)
        .ok_or_else(|| AppError::NotFound("no companies to summarize".to_string()))?;

    Ok(HttpResponse::Ok().json(CompanySummaryResponse::from(summary)))
}
