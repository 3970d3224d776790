//! Job-axis and matrix API handlers.

use actix_web::{HttpResponse, web};
use tracing::info;

use crate::db::DbPool;
use crate::error::{AppError, AppResult};
use crate::models::{
    AxisResponse, CreateAxisRequest, MatrixCompany, MatrixResponse, MatrixScore, SaveScoreRequest,
    UpdateAxisRequest, UserContext,
};

/// List the user's evaluation axes, highest priority first.
#[utoipa::path(
    get,
    path = "/api/v1/axes",
    tag = "Axes",
    responses(
        (status = 200, description = "List of axes", body = [AxisResponse]),
    )
)]
pub async fn list_axes(
    pool: web::Data<DbPool>,
    ctx: web::Data<UserContext>,
) -> AppResult<HttpResponse> {
    let axes: Vec<AxisResponse> = pool
        .list_axes(ctx.user_id)
        .await?
        .into_iter()
        .map(AxisResponse::from)
        .collect();

    Ok(HttpResponse::Ok().json(axes))
}

/// Create an evaluation axis.
#[utoipa::path(
    post,
    path = "/api/v1/axes",
    tag = "Axes",
    request_body = CreateAxisRequest,
    responses(
        (status = 201, description = "Axis created", body = AxisResponse),
        (status = 400, description = "Invalid request", body = crate::error::ErrorResponse),
    )
)]
pub async fn create_axis(
    pool: web::Data<DbPool>,
    ctx: web::Data<UserContext>,
    body: web::Json<CreateAxisRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    if req.name.trim().is_empty() {
        return Err(AppError::InvalidInput("name must not be empty".to_string()));
    }

    let axis = pool.insert_axis(ctx.user_id, req).await?;

    Ok(HttpResponse::Created().json(AxisResponse::from(axis)))
}

/// Update an axis. Only supplied fields are changed.
#[utoipa::path(
    put,
    path = "/api/v1/axes/{axis_id}",
    tag = "Axes",
    params(
        ("axis_id" = i32, Path, description = "Axis ID")
    ),
    request_body = UpdateAxisRequest,
    responses(
        (status = 200, description = "Updated axis", body = AxisResponse),
        (status = 404, description = "Axis not found", body = crate::error::ErrorResponse),
    )
)]
pub async fn update_axis(
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
    body: web::Json<UpdateAxisRequest>,
) -> AppResult<HttpResponse> {
    let axis_id = path.into_inner();

    let axis = pool.update_axis(axis_id, &body.into_inner()).await?;

    Ok(HttpResponse::Ok().json(AxisResponse::from(axis)))
}

/// Delete an axis and its matrix scores.
#[utoipa::path(
    delete,
    path = "/api/v1/axes/{axis_id}",
    tag = "Axes",
    params(
        ("axis_id" = i32, Path, description = "Axis ID")
    ),
    responses(
        (status = 204, description = "Axis deleted"),
        (status = 404, description = "Axis not found", body = crate::error::ErrorResponse),
    )
)]
pub async fn delete_axis(
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let axis_id = path.into_inner();

    pool.delete_axis(axis_id).await?;

    Ok(HttpResponse::NoContent().finish())
}

/// The company × axis matrix: companies by preference, axes by priority,
/// and every stored score. Cells without a row are unset.
#[utoipa::path(
    get,
    path = "/api/v1/matrix",
    tag = "Axes",
    responses(
        (status = 200, description = "Score matrix", body = MatrixResponse),
    )
)]
pub async fn get_matrix(
    pool: web::Data<DbPool>,
    ctx: web::Data<UserContext>,
) -> AppResult<HttpResponse> {
    let companies: Vec<MatrixCompany> = pool
        .list_companies_with_selections(ctx.user_id)
        .await?
        .into_iter()
        .map(|(c, _)| MatrixCompany {
            id: c.id,
            name: c.name,
            preference: c.preference,
        })
        .collect();

    let axes: Vec<AxisResponse> = pool
        .list_axes(ctx.user_id)
        .await?
        .into_iter()
        .map(AxisResponse::from)
        .collect();

    let scores: Vec<MatrixScore> = pool
        .list_axis_scores()
        .await?
        .into_iter()
        .map(|m| MatrixScore {
            company_id: m.company_id,
            axis_id: m.axis_id,
            score: m.score,
        })
        .collect();

    Ok(HttpResponse::Ok().json(MatrixResponse {
        companies,
        axes,
        scores,
    }))
}

/// Store one matrix cell. Score 0 clears the cell; 1-5 upserts it.
#[utoipa::path(
    post,
    path = "/api/v1/matrix/scores",
    tag = "Axes",
    request_body = SaveScoreRequest,
    responses(
        (status = 204, description = "Score stored"),
        (status = 400, description = "Score out of range", body = crate::error::ErrorResponse),
        (status = 404, description = "Company or axis not found", body = crate::error::ErrorResponse),
    )
)]
pub async fn save_score(
    pool: web::Data<DbPool>,
    body: web::Json<SaveScoreRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    pool.get_company(req.company_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Company {}", req.company_id)))?;
    pool.get_axis(req.axis_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Axis {}", req.axis_id)))?;

    pool.save_axis_score(req.company_id, req.axis_id, req.score)
        .await?;

    info!(
        "Axis score saved: company_id={}, axis_id={}, score={}",
        req.company_id, req.axis_id, req.score
    );

    Ok(HttpResponse::NoContent().finish())
}

/// Configure axis and matrix routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/axes")
            .route(web::get().to(list_axes))
            .route(web::post().to(create_axis)),
    )
    .service(
        web::resource("/axes/{axis_id}")
            .route(web::put().to(update_axis))
            .route(web::delete().to(delete_axis)),
    )
    .service(web::resource("/matrix").route(web::get().to(get_matrix)))
    .service(web::resource("/matrix/scores").route(web::post().to(save_score)));
}
