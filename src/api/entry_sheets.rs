//! Entry-sheet API handlers.

use actix_web::{HttpResponse, web};

use crate::db::DbPool;
use crate::error::{AppError, AppResult};
use crate::models::{
    CreateEntrySheetRequest, EntrySheetListResponse, EntrySheetResponse, UpdateEntrySheetRequest,
    UserContext,
};
use crate::services::datetime;

/// Full entry-sheet list across all companies: deadline ascending with
/// missing deadlines last, then newest first.
#[utoipa::path(
    get,
    path = "/api/v1/entry-sheets",
    tag = "EntrySheets",
    responses(
        (status = 200, description = "List of entry sheets", body = EntrySheetListResponse),
    )
)]
pub async fn list_entry_sheets(
    pool: web::Data<DbPool>,
    ctx: web::Data<UserContext>,
) -> AppResult<HttpResponse> {
    let entry_sheets = pool
        .list_entry_sheets(ctx.user_id)
        .await?
        .into_iter()
        .map(|(es, company)| EntrySheetResponse::from_model(es, company.map(|c| c.name)))
        .collect();

    Ok(HttpResponse::Ok().json(EntrySheetListResponse { entry_sheets }))
}

/// Create an entry-sheet item.
#[utoipa::path(
    post,
    path = "/api/v1/entry-sheets",
    tag = "EntrySheets",
    request_body = CreateEntrySheetRequest,
    responses(
        (status = 201, description = "Entry sheet created", body = EntrySheetResponse),
        (status = 400, description = "Invalid request", body = crate::error::ErrorResponse),
        (status = 404, description = "Company not found", body = crate::error::ErrorResponse),
    )
)]
pub async fn create_entry_sheet(
    pool: web::Data<DbPool>,
    body: web::Json<CreateEntrySheetRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    pool.get_company(req.company_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Company {}", req.company_id)))?;

    let deadline = datetime::parse_optional_date(req.deadline.as_deref())
        .map_err(|e| AppError::InvalidInput(e.to_string()))?;

    let es = pool.insert_entry_sheet(req, deadline).await?;

    Ok(HttpResponse::Created().json(EntrySheetResponse::from_model(es, None)))
}

/// Update an entry sheet. Only supplied fields are changed; an empty
/// `deadline` clears it.
#[utoipa::path(
    put,
    path = "/api/v1/entry-sheets/{es_id}",
    tag = "EntrySheets",
    params(
        ("es_id" = i32, Path, description = "Entry sheet ID")
    ),
    request_body = UpdateEntrySheetRequest,
    responses(
        (status = 200, description = "Updated entry sheet", body = EntrySheetResponse),
        (status = 400, description = "Invalid request", body = crate::error::ErrorResponse),
        (status = 404, description = "Entry sheet not found", body = crate::error::ErrorResponse),
    )
)]
pub async fn update_entry_sheet(
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
    body: web::Json<UpdateEntrySheetRequest>,
) -> AppResult<HttpResponse> {
    let es_id = path.into_inner();
    let req = body.into_inner();

    if let Some(company_id) = req.company_id {
        pool.get_company(company_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Company {}", company_id)))?;
    }

    // Absent field leaves the deadline unchanged; empty string clears it.
    let deadline = match req.deadline.as_deref() {
        None => None,
        Some(s) => Some(
            datetime::parse_optional_date(Some(s))
                .map_err(|e| AppError::InvalidInput(e.to_string()))?,
        ),
    };

    let es = pool.update_entry_sheet(es_id, &req, deadline).await?;

    Ok(HttpResponse::Ok().json(EntrySheetResponse::from_model(es, None)))
}

/// Delete an entry sheet.
#[utoipa::path(
    delete,
    path = "/api/v1/entry-sheets/{es_id}",
    tag = "EntrySheets",
    params(
        ("es_id" = i32, Path, description = "Entry sheet ID")
    ),
    responses(
        (status = 204, description = "Entry sheet deleted"),
        (status = 404, description = "Entry sheet not found", body = crate::error::ErrorResponse),
    )
)]
pub async fn delete_entry_sheet(
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let es_id = path.into_inner();

    pool.delete_entry_sheet(es_id).await?;

    Ok(HttpResponse::NoContent().finish())
}

/// Configure entry-sheet routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/entry-sheets")
            .route(web::get().to(list_entry_sheets))
            .route(web::post().to(create_entry_sheet)),
    )
    .service(
        web::resource("/entry-sheets/{es_id}")
            .route(web::put().to(update_entry_sheet))
            .route(web::delete().to(delete_entry_sheet)),
    );
}
