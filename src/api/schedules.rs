//! Calendar event API handlers (FullCalendar feed plus JSON CRUD).

use actix_web::{HttpResponse, web};

use crate::db::DbPool;
use crate::error::{AppError, AppResult};
use crate::models::{
    CalendarEventResponse, CreateEventRequest, CreateEventResponse, UpdateEventRequest,
    UserContext,
};
use crate::services::{calendar, datetime};

/// The calendar feed: one record per schedule, colored by event type.
#[utoipa::path(
    get,
    path = "/api/v1/events",
    tag = "Events",
    responses(
        (status = 200, description = "Calendar feed", body = [CalendarEventResponse]),
    )
)]
pub async fn list_events(
    pool: web::Data<DbPool>,
    ctx: web::Data<UserContext>,
) -> AppResult<HttpResponse> {
    let events: Vec<CalendarEventResponse> = pool
        .list_schedules_with_companies(ctx.user_id)
        .await?
        .into_iter()
        .map(|(schedule, company)| calendar::feed_event(schedule, company.as_ref()))
        .collect();

    Ok(HttpResponse::Ok().json(events))
}

/// Create a calendar event. `start` is required.
#[utoipa::path(
    post,
    path = "/api/v1/events",
    tag = "Events",
    request_body = CreateEventRequest,
    responses(
        (status = 201, description = "Event created", body = CreateEventResponse),
        (status = 400, description = "Invalid request", body = crate::error::ErrorResponse),
        (status = 404, description = "Company not found", body = crate::error::ErrorResponse),
    )
)]
pub async fn create_event(
    pool: web::Data<DbPool>,
    ctx: web::Data<UserContext>,
    body: web::Json<CreateEventRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    if let Some(company_id) = req.company_id {
        pool.get_company(company_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Company {}", company_id)))?;
    }

    let start_at = datetime::parse_datetime(&req.start)
        .map_err(|e| AppError::InvalidInput(e.to_string()))?;
    let end_at = datetime::parse_optional_datetime(req.end.as_deref())
        .map_err(|e| AppError::InvalidInput(e.to_string()))?;

    let schedule = pool
        .insert_schedule(ctx.user_id, req, start_at, end_at)
        .await?;

    Ok(HttpResponse::Created().json(CreateEventResponse { id: schedule.id }))
}

/// Update an event. Only supplied fields are changed; `end` and
/// `company_id` accept an explicit null to clear the stored value.
#[utoipa::path(
    put,
    path = "/api/v1/events/{event_id}",
    tag = "Events",
    params(
        ("event_id" = i32, Path, description = "Event ID")
    ),
    request_body = UpdateEventRequest,
    responses(
        (status = 200, description = "Event updated"),
        (status = 400, description = "Invalid request", body = crate::error::ErrorResponse),
        (status = 404, description = "Event not found", body = crate::error::ErrorResponse),
    )
)]
pub async fn update_event(
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
    body: web::Json<UpdateEventRequest>,
) -> AppResult<HttpResponse> {
    let event_id = path.into_inner();
    let req = body.into_inner();

    if let Some(Some(company_id)) = req.company_id {
        pool.get_company(company_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Company {}", company_id)))?;
    }

    let start_at = match req.start.as_deref() {
        None => None,
        Some(s) => Some(
            datetime::parse_datetime(s).map_err(|e| AppError::InvalidInput(e.to_string()))?,
        ),
    };

    // Absent field leaves the end unchanged; null or empty string clears it.
    let end_at = match &req.end {
        None => None,
        Some(None) => Some(None),
        Some(Some(s)) => Some(
            datetime::parse_optional_datetime(Some(s.as_str()))
                .map_err(|e| AppError::InvalidInput(e.to_string()))?,
        ),
    };

    pool.update_schedule(event_id, &req, start_at, end_at).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({ "ok": true })))
}

/// Delete an event.
#[utoipa::path(
    delete,
    path = "/api/v1/events/{event_id}",
    tag = "Events",
    params(
        ("event_id" = i32, Path, description = "Event ID")
    ),
    responses(
        (status = 204, description = "Event deleted"),
        (status = 404, description = "Event not found", body = crate::error::ErrorResponse),
    )
)]
pub async fn delete_event(
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let event_id = path.into_inner();

    pool.delete_schedule(event_id).await?;

    Ok(HttpResponse::NoContent().finish())
}

/// Configure event routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/events")
            .route(web::get().to(list_events))
            .route(web::post().to(create_event)),
    )
    .service(
        web::resource("/events/{event_id}")
            .route(web::put().to(update_event))
            .route(web::delete().to(delete_event)),
    );
}
