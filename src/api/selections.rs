//! Selection and interview-note API handlers.

use actix_web::{HttpResponse, web};
use tracing::info;

use crate::db::DbPool;
use crate::error::{AppError, AppResult};
use crate::models::{
    CreateInterviewNoteRequest, CreateSelectionRequest, InterviewNoteResponse, SelectionResponse,
    SelectionStatus, UpdateInterviewNoteRequest, UpdateSelectionRequest,
};
use crate::services::datetime;

/// Record a new selection stage for a company.
#[utoipa::path(
    post,
    path = "/api/v1/companies/{company_id}/selections",
    tag = "Selections",
    params(
        ("company_id" = i32, Path, description = "Company ID")
    ),
    request_body = CreateSelectionRequest,
    responses(
        (status = 201, description = "Selection created", body = SelectionResponse),
        (status = 400, description = "Invalid request", body = crate::error::ErrorResponse),
        (status = 404, description = "Company not found", body = crate::error::ErrorResponse),
    )
)]
pub async fn create_selection(
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
    body: web::Json<CreateSelectionRequest>,
) -> AppResult<HttpResponse> {
    let company_id = path.into_inner();
    let req = body.into_inner();

    pool.get_company(company_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Company {}", company_id)))?;

    let scheduled_at = datetime::parse_optional_datetime(req.scheduled_at.as_deref())
        .map_err(|e| AppError::InvalidInput(e.to_string()))?;

    let selection = pool
        .insert_selection(
            company_id,
            req.stage,
            req.status.unwrap_or(SelectionStatus::Scheduled),
            scheduled_at,
            req.location,
            req.feedback,
        )
        .await?;

    info!(
        "Selection created: company_id={}, selection_id={}, stage={}",
        company_id, selection.id, selection.stage
    );

    Ok(HttpResponse::Created().json(SelectionResponse::from_model(selection, Vec::new())))
}

/// Update a selection. Only supplied fields are changed; an empty
/// `scheduled_at` clears the schedule.
#[utoipa::path(
    put,
    path = "/api/v1/selections/{selection_id}",
    tag = "Selections",
    params(
        ("selection_id" = i32, Path, description = "Selection ID")
    ),
    request_body = UpdateSelectionRequest,
    responses(
        (status = 200, description = "Updated selection", body = SelectionResponse),
        (status = 400, description = "Invalid request", body = crate::error::ErrorResponse),
        (status = 404, description = "Selection not found", body = crate::error::ErrorResponse),
    )
)]
pub async fn update_selection(
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
    body: web::Json<UpdateSelectionRequest>,
) -> AppResult<HttpResponse> {
    let selection_id = path.into_inner();
    let req = body.into_inner();

    // Absent field leaves the schedule unchanged; empty string clears it.
    let scheduled_at = match req.scheduled_at.as_deref() {
        None => None,
        Some(s) => Some(
            datetime::parse_optional_datetime(Some(s))
                .map_err(|e| AppError::InvalidInput(e.to_string()))?,
        ),
    };

    let selection = pool.update_selection(selection_id, &req, scheduled_at).await?;
    let notes = pool.list_interview_notes(selection_id).await?;

    Ok(HttpResponse::Ok().json(SelectionResponse::from_model(selection, notes)))
}

/// Delete a selection and its interview notes.
#[utoipa::path(
    delete,
    path = "/api/v1/selections/{selection_id}",
    tag = "Selections",
    params(
        ("selection_id" = i32, Path, description = "Selection ID")
    ),
    responses(
        (status = 204, description = "Selection deleted"),
        (status = 404, description = "Selection not found", body = crate::error::ErrorResponse),
    )
)]
pub async fn delete_selection(
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let selection_id = path.into_inner();

    pool.delete_selection(selection_id).await?;

    Ok(HttpResponse::NoContent().finish())
}

/// Record a reflection on one interview question.
#[utoipa::path(
    post,
    path = "/api/v1/selections/{selection_id}/interview-notes",
    tag = "Selections",
    params(
        ("selection_id" = i32, Path, description = "Selection ID")
    ),
    request_body = CreateInterviewNoteRequest,
    responses(
        (status = 201, description = "Note created", body = InterviewNoteResponse),
        (status = 404, description = "Selection not found", body = crate::error::ErrorResponse),
    )
)]
pub async fn create_interview_note(
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
    body: web::Json<CreateInterviewNoteRequest>,
) -> AppResult<HttpResponse> {
    let selection_id = path.into_inner();

    pool.get_selection(selection_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Selection {}", selection_id)))?;

    let note = pool
        .insert_interview_note(selection_id, body.into_inner())
        .await?;

    Ok(HttpResponse::Created().json(InterviewNoteResponse::from(note)))
}

/// Update an interview note. Only supplied fields are changed.
#[utoipa::path(
    put,
    path = "/api/v1/interview-notes/{note_id}",
    tag = "Selections",
    params(
        ("note_id" = i32, Path, description = "Interview note ID")
    ),
    request_body = UpdateInterviewNoteRequest,
    responses(
        (status = 200, description = "Updated note", body = InterviewNoteResponse),
        (status = 404, description = "Note not found", body = crate::error::ErrorResponse),
    )
)]
pub async fn update_interview_note(
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
    body: web::Json<UpdateInterviewNoteRequest>,
) -> AppResult<HttpResponse> {
    let note_id = path.into_inner();

    let note = pool
        .update_interview_note(note_id, &body.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(InterviewNoteResponse::from(note)))
}

/// Delete an interview note.
#[utoipa::path(
    delete,
    path = "/api/v1/interview-notes/{note_id}",
    tag = "Selections",
    params(
        ("note_id" = i32, Path, description = "Interview note ID")
    ),
    responses(
        (status = 204, description = "Note deleted"),
        (status = 404, description = "Note not found", body = crate::error::ErrorResponse),
    )
)]
pub async fn delete_interview_note(
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let note_id = path.into_inner();

    pool.delete_interview_note(note_id).await?;

    Ok(HttpResponse::NoContent().finish())
}

/// Configure selection routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/companies/{company_id}/selections")
            .route(web::post().to(create_selection)),
    )
    .service(
        web::resource("/selections/{selection_id}")
            .route(web::put().to(update_selection))
            .route(web::delete().to(delete_selection)),
    )
    .service(
        web::resource("/selections/{selection_id}/interview-notes")
            .route(web::post().to(create_interview_note)),
    )
    .service(
        web::resource("/interview-notes/{note_id}")
            .route(web::put().to(update_interview_note))
            .route(web::delete().to(delete_interview_note)),
    );
}
