//! Profile API handlers for the single app owner.

use actix_web::{HttpResponse, web};

use crate::db::DbPool;
use crate::error::{AppError, AppResult};
use crate::models::{ProfileResponse, UpdateProfileRequest, UserContext};

/// Get the owner's profile.
#[utoipa::path(
    get,
    path = "/api/v1/profile",
    tag = "Profile",
    responses(
        (status = 200, description = "Owner profile", body = ProfileResponse),
    )
)]
pub async fn get_profile(
    pool: web::Data<DbPool>,
    ctx: web::Data<UserContext>,
) -> AppResult<HttpResponse> {
    let user = pool
        .get_user(ctx.user_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("User {}", ctx.user_id)))?;

    Ok(HttpResponse::Ok().json(ProfileResponse::from(user)))
}

/// Update the owner's profile. Only supplied fields are changed.
#[utoipa::path(
    put,
    path = "/api/v1/profile",
    tag = "Profile",
    request_body = UpdateProfileRequest,
    responses(
        (status = 200, description = "Updated profile", body = ProfileResponse),
    )
)]
pub async fn update_profile(
    pool: web::Data<DbPool>,
    ctx: web::Data<UserContext>,
    body: web::Json<UpdateProfileRequest>,
) -> AppResult<HttpResponse> {
    let user = pool.update_profile(ctx.user_id, &body.into_inner()).await?;

    Ok(HttpResponse::Ok().json(ProfileResponse::from(user)))
}

/// Configure profile routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/profile")
            .route(web::get().to(get_profile))
            .route(web::put().to(update_profile)),
    );
}
