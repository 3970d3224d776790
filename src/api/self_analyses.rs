//! Self-analysis API handlers.

use actix_web::{HttpResponse, web};

use crate::db::DbPool;
use crate::error::AppResult;
use crate::models::{
    AnalysisCategory, CreateSelfAnalysisRequest, SelfAnalysisGroup, SelfAnalysisListResponse,
    SelfAnalysisResponse, UpdateSelfAnalysisRequest, UserContext,
};

/// List self-analysis entries, one group per category in display order,
/// newest version first within each group.
#[utoipa::path(
    get,
    path = "/api/v1/self-analyses",
    tag = "SelfAnalyses",
    responses(
        (status = 200, description = "Entries grouped per category", body = SelfAnalysisListResponse),
    )
)]
pub async fn list_self_analyses(
    pool: web::Data<DbPool>,
    ctx: web::Data<UserContext>,
) -> AppResult<HttpResponse> {
    let entries = pool.list_self_analyses(ctx.user_id).await?;

    let groups = AnalysisCategory::ALL
        .iter()
        .map(|category| SelfAnalysisGroup {
            category: category.as_str().to_string(),
            entries: entries
                .iter()
                .filter(|sa| sa.category == category.as_str())
                .cloned()
                .map(SelfAnalysisResponse::from)
                .collect(),
        })
        .collect();

    Ok(HttpResponse::Ok().json(SelfAnalysisListResponse { groups }))
}

/// Create a self-analysis entry. The server assigns the next version number
/// for the (user, category) scope.
#[utoipa::path(
    post,
    path = "/api/v1/self-analyses",
    tag = "SelfAnalyses",
    request_body = CreateSelfAnalysisRequest,
    responses(
        (status = 201, description = "Entry created", body = SelfAnalysisResponse),
        (status = 400, description = "Invalid request", body = crate::error::ErrorResponse),
    )
)]
pub async fn create_self_analysis(
    pool: web::Data<DbPool>,
    ctx: web::Data<UserContext>,
    body: web::Json<CreateSelfAnalysisRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let entry = pool
        .create_self_analysis(ctx.user_id, req.category, req.content)
        .await?;

    Ok(HttpResponse::Created().json(SelfAnalysisResponse::from(entry)))
}

/// Rewrite an entry's content. Category and version never change.
#[utoipa::path(
    put,
    path = "/api/v1/self-analyses/{sa_id}",
    tag = "SelfAnalyses",
    params(
        ("sa_id" = i32, Path, description = "Self-analysis ID")
    ),
    request_body = UpdateSelfAnalysisRequest,
    responses(
        (status = 200, description = "Updated entry", body = SelfAnalysisResponse),
        (status = 404, description = "Entry not found", body = crate::error::ErrorResponse),
    )
)]
pub async fn update_self_analysis(
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
    body: web::Json<UpdateSelfAnalysisRequest>,
) -> AppResult<HttpResponse> {
    let sa_id = path.into_inner();

    let entry = pool
        .update_self_analysis(sa_id, body.into_inner().content)
        .await?;

    Ok(HttpResponse::Ok().json(SelfAnalysisResponse::from(entry)))
}

/// Delete an entry. Its version number is never reassigned.
#[utoipa::path(
    delete,
    path = "/api/v1/self-analyses/{sa_id}",
    tag = "SelfAnalyses",
    params(
        ("sa_id" = i32, Path, description = "Self-analysis ID")
    ),
    responses(
        (status = 204, description = "Entry deleted"),
        (status = 404, description = "Entry not found", body = crate::error::ErrorResponse),
    )
)]
pub async fn delete_self_analysis(
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let sa_id = path.into_inner();

    pool.delete_self_analysis(sa_id).await?;

    Ok(HttpResponse::NoContent().finish())
}

/// Configure self-analysis routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/self-analyses")
            .route(web::get().to(list_self_analyses))
            .route(web::post().to(create_self_analysis)),
    )
    .service(
        web::resource("/self-analyses/{sa_id}")
            .route(web::put().to(update_self_analysis))
            .route(web::delete().to(delete_self_analysis)),
    );
}
