//! Dashboard aggregation handler.

use std::collections::BTreeMap;

use actix_web::{HttpResponse, web};
use chrono::Utc;

use crate::db::DbPool;
use crate::error::AppResult;
use crate::models::{
    CompanySummary, DashboardResponse, EntrySheetResponse, ScheduleResponse, StatusCount,
    UserContext,
};
use crate::services::status;

/// Upcoming-events panel size.
const UPCOMING_LIMIT: u64 = 5;

/// The dashboard: companies by preference with status labels, per-status
/// counts, the next few events, and the entry-sheet deadline widget.
#[utoipa::path(
    get,
    path = "/api/v1/dashboard",
    tag = "Dashboard",
    responses(
        (status = 200, description = "Dashboard aggregation", body = DashboardResponse),
    )
)]
pub async fn get_dashboard(
    pool: web::Data<DbPool>,
    ctx: web::Data<UserContext>,
) -> AppResult<HttpResponse> {
    let rows = pool.list_companies_with_selections(ctx.user_id).await?;

    let mut counts: BTreeMap<&'static str, u32> = BTreeMap::new();
    let companies: Vec<CompanySummary> = rows
        .into_iter()
        .map(|(company, selections)| {
            let derived = status::current_status(&selections);
            *counts.entry(derived.label()).or_insert(0) += 1;
            CompanySummary::from_model(company, derived)
        })
        .collect();

    let status_counts = counts
        .into_iter()
        .map(|(label, count)| StatusCount {
            status: label.to_string(),
            count,
        })
        .collect();

    let upcoming = pool
        .list_upcoming_schedules(ctx.user_id, Utc::now(), UPCOMING_LIMIT)
        .await?
        .into_iter()
        .map(ScheduleResponse::from)
        .collect();

    let es_deadlines = pool
        .list_entry_sheet_deadlines(ctx.user_id)
        .await?
        .into_iter()
        .map(|(es, company)| EntrySheetResponse::from_model(es, company.map(|c| c.name)))
        .collect();

    let response = DashboardResponse {
        companies,
        status_counts,
        upcoming,
        es_deadlines,
    };

    Ok(HttpResponse::Ok().json(response))
}

/// Configure dashboard routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/dashboard").route(web::get().to(get_dashboard)));
}
