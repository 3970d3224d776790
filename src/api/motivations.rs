//! Motivation-statement API handlers.

use actix_web::{HttpResponse, web};
use tracing::info;

use crate::db::DbPool;
use crate::error::{AppError, AppResult};
use crate::models::{
    CreateMotivationRequest, MotivationGroup, MotivationListResponse, MotivationResponse,
    UpdateMotivationRequest, UserContext,
};

/// List motivations grouped per company (preference first), newest version
/// first within each company.
#[utoipa::path(
    get,
    path = "/api/v1/motivations",
    tag = "Motivations",
    responses(
        (status = 200, description = "Motivations grouped per company", body = MotivationListResponse),
    )
)]
pub async fn list_motivations(
    pool: web::Data<DbPool>,
    ctx: web::Data<UserContext>,
) -> AppResult<HttpResponse> {
    let groups = pool
        .list_motivations_grouped(ctx.user_id)
        .await?
        .into_iter()
        .map(|(company, motivations)| MotivationGroup {
            company_id: company.id,
            company_name: company.name,
            motivations: motivations
                .into_iter()
                .map(MotivationResponse::from)
                .collect(),
        })
        .collect();

    Ok(HttpResponse::Ok().json(MotivationListResponse { groups }))
}

/// Create a motivation draft. The server assigns the next version number
/// for the company.
#[utoipa::path(
    post,
    path = "/api/v1/motivations",
    tag = "Motivations",
    request_body = CreateMotivationRequest,
    responses(
        (status = 201, description = "Motivation created", body = MotivationResponse),
        (status = 404, description = "Company not found", body = crate::error::ErrorResponse),
    )
)]
pub async fn create_motivation(
    pool: web::Data<DbPool>,
    body: web::Json<CreateMotivationRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    pool.get_company(req.company_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Company {}", req.company_id)))?;

    let motivation = pool.create_motivation(req).await?;

    info!(
        "Motivation created: company_id={}, version={}",
        motivation.company_id, motivation.version
    );

    Ok(HttpResponse::Created().json(MotivationResponse::from(motivation)))
}

/// Update a motivation's content and annotations. The version is immutable.
#[utoipa::path(
    put,
    path = "/api/v1/motivations/{motivation_id}",
    tag = "Motivations",
    params(
        ("motivation_id" = i32, Path, description = "Motivation ID")
    ),
    request_body = UpdateMotivationRequest,
    responses(
        (status = 200, description = "Updated motivation", body = MotivationResponse),
        (status = 404, description = "Motivation not found", body = crate::error::ErrorResponse),
    )
)]
pub async fn update_motivation(
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
    body: web::Json<UpdateMotivationRequest>,
) -> AppResult<HttpResponse> {
    let motivation_id = path.into_inner();

    let motivation = pool
        .update_motivation(motivation_id, &body.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(MotivationResponse::from(motivation)))
}

/// Delete a motivation draft. Its version number is never reassigned.
#[utoipa::path(
    delete,
    path = "/api/v1/motivations/{motivation_id}",
    tag = "Motivations",
    params(
        ("motivation_id" = i32, Path, description = "Motivation ID")
    ),
    responses(
        (status = 204, description = "Motivation deleted"),
        (status = 404, description = "Motivation not found", body = crate::error::ErrorResponse),
    )
)]
pub async fn delete_motivation(
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let motivation_id = path.into_inner();

    pool.delete_motivation(motivation_id).await?;

    Ok(HttpResponse::NoContent().finish())
}

/// Configure motivation routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/motivations")
            .route(web::get().to(list_motivations))
            .route(web::post().to(create_motivation)),
    )
    .service(
        web::resource("/motivations/{motivation_id}")
            .route(web::put().to(update_motivation))
            .route(web::delete().to(delete_motivation)),
    );
}
