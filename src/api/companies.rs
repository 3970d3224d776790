//! Company API handlers.

use actix_web::{HttpResponse, web};
use tracing::info;

use crate::db::DbPool;
use crate::error::{AppError, AppResult};
use crate::models::{
    AxisScoreItem, CompanyDetailResponse, CompanyListResponse, CompanyNameItem, CompanyStatus,
    CompanySummary, CreateCompanyRequest, EntrySheetResponse, MotivationResponse,
    SelectionResponse, UpdateCompanyRequest, UserContext,
};
use crate::services::status;

/// List the user's companies with derived status labels, preference first.
#[utoipa::path(
    get,
    path = "/api/v1/companies",
    tag = "Companies",
    responses(
        (status = 200, description = "List of companies", body = CompanyListResponse),
    )
)]
pub async fn list_companies(
    pool: web::Data<DbPool>,
    ctx: web::Data<UserContext>,
) -> AppResult<HttpResponse> {
    let rows = pool.list_companies_with_selections(ctx.user_id).await?;

    let companies = rows
        .into_iter()
        .map(|(company, selections)| {
            let derived = status::current_status(&selections);
            CompanySummary::from_model(company, derived)
        })
        .collect();

    Ok(HttpResponse::Ok().json(CompanyListResponse { companies }))
}

/// List {id, name} pairs for all companies, ordered by name.
/// Feeds the calendar's company dropdown.
#[utoipa::path(
    get,
    path = "/api/v1/companies/names",
    tag = "Companies",
    responses(
        (status = 200, description = "Company names", body = [CompanyNameItem]),
    )
)]
pub async fn list_company_names(
    pool: web::Data<DbPool>,
    ctx: web::Data<UserContext>,
) -> AppResult<HttpResponse> {
    let companies = pool.list_company_names(ctx.user_id).await?;

    let items: Vec<CompanyNameItem> = companies
        .into_iter()
        .map(|c| CompanyNameItem {
            id: c.id,
            name: c.name,
        })
        .collect();

    Ok(HttpResponse::Ok().json(items))
}

/// Register a new company.
#[utoipa::path(
    post,
    path = "/api/v1/companies",
    tag = "Companies",
    request_body = CreateCompanyRequest,
    responses(
        (status = 201, description = "Company created", body = CompanySummary),
        (status = 400, description = "Invalid request", body = crate::error::ErrorResponse),
    )
)]
pub async fn create_company(
    pool: web::Data<DbPool>,
    ctx: web::Data<UserContext>,
    body: web::Json<CreateCompanyRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    if req.name.trim().is_empty() {
        return Err(AppError::InvalidInput("name must not be empty".to_string()));
    }

    let company = pool.insert_company(ctx.user_id, req).await?;

    info!("Company created: id={}, name={}", company.id, company.name);

    let summary = CompanySummary::from_model(company, CompanyStatus::NotYetApplied);
    Ok(HttpResponse::Created().json(summary))
}

/// Get one company with its selections, motivations, entry sheets and axis
/// scores.
#[utoipa::path(
    get,
    path = "/api/v1/companies/{company_id}",
    tag = "Companies",
    params(
        ("company_id" = i32, Path, description = "Company ID")
    ),
    responses(
        (status = 200, description = "Company detail", body = CompanyDetailResponse),
        (status = 404, description = "Company not found", body = crate::error::ErrorResponse),
    )
)]
pub async fn get_company(
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let company_id = path.into_inner();

    let company = pool
        .get_company(company_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Company {}", company_id)))?;

    let selections = pool.list_selections_by_company(company_id).await?;
    let derived = status::current_status(&selections);

    let mut selection_responses = Vec::with_capacity(selections.len());
    for selection in selections {
        let notes = pool.list_interview_notes(selection.id).await?;
        selection_responses.push(SelectionResponse::from_model(selection, notes));
    }

    let motivations: Vec<MotivationResponse> = pool
        .list_motivations_by_company(company_id)
        .await?
        .into_iter()
        .map(MotivationResponse::from)
        .collect();

    let entry_sheets: Vec<EntrySheetResponse> = pool
        .list_entry_sheets_by_company(company_id)
        .await?
        .into_iter()
        .map(|es| EntrySheetResponse::from_model(es, None))
        .collect();

    let axis_scores: Vec<AxisScoreItem> = pool
        .list_axis_scores_for_company(company_id)
        .await?
        .into_iter()
        .map(|(m, axis)| AxisScoreItem {
            axis_id: m.axis_id,
            axis_name: axis.map(|a| a.name).unwrap_or_default(),
            score: m.score,
        })
        .collect();

    let response = CompanyDetailResponse {
        id: company.id,
        name: company.name,
        industry: company.industry,
        job_type: company.job_type,
        description: company.description,
        preference: company.preference,
        mypage_url: company.mypage_url,
        mypage_id: company.mypage_id,
        mypage_password: company.mypage_password,
        notes: company.notes,
        status_label: derived.label().to_string(),
        created_at: company.created_at,
        selections: selection_responses,
        motivations,
        entry_sheets,
        axis_scores,
    };

    Ok(HttpResponse::Ok().json(response))
}

/// Update a company. Only supplied fields are changed.
#[utoipa::path(
    put,
    path = "/api/v1/companies/{company_id}",
    tag = "Companies",
    params(
        ("company_id" = i32, Path, description = "Company ID")
    ),
    request_body = UpdateCompanyRequest,
    responses(
        (status = 200, description = "Updated company", body = CompanySummary),
        (status = 404, description = "Company not found", body = crate::error::ErrorResponse),
    )
)]
pub async fn update_company(
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
    body: web::Json<UpdateCompanyRequest>,
) -> AppResult<HttpResponse> {
    let company_id = path.into_inner();

    let company = pool.update_company(company_id, &body.into_inner()).await?;
    let selections = pool.list_selections_by_company(company_id).await?;
    let derived = status::current_status(&selections);

    Ok(HttpResponse::Ok().json(CompanySummary::from_model(company, derived)))
}

/// Delete a company and everything that belongs to it. Calendar events
/// pointing at the company survive with the reference cleared.
#[utoipa::path(
    delete,
    path = "/api/v1/companies/{company_id}",
    tag = "Companies",
    params(
        ("company_id" = i32, Path, description = "Company ID")
    ),
    responses(
        (status = 204, description = "Company deleted"),
        (status = 404, description = "Company not found", body = crate::error::ErrorResponse),
    )
)]
pub async fn delete_company(
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let company_id = path.into_inner();

    pool.delete_company(company_id).await?;

    info!("Company deleted: id={}", company_id);

    Ok(HttpResponse::NoContent().finish())
}

/// Configure company routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/companies")
            .route(web::get().to(list_companies))
            .route(web::post().to(create_company)),
    )
    .service(web::resource("/companies/names").route(web::get().to(list_company_names)))
    .service(
        web::resource("/companies/{company_id}")
            .route(web::get().to(get_company))
            .route(web::put().to(update_company))
            .route(web::delete().to(delete_company)),
    );
}
