//! OpenAPI documentation configuration.

use utoipa::OpenApi;

use crate::{api, error, models};

/// OpenAPI documentation.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Jobtrack Server",
        version = "0.3.0",
        description = "Single-user job-hunt tracker: companies, selection stages, entry sheets, motivations, self-analyses and calendar events"
    ),
    servers(
        (url = "/", description = "Local server")
    ),
    paths(
        // Health endpoints
        api::health::health,
        api::health::ready,
        // Profile
        api::profile::get_profile,
        api::profile::update_profile,
        // Companies
        api::companies::list_companies,
        api::companies::list_company_names,
        api::companies::create_company,
        api::companies::get_company,
        api::companies::update_company,
        api::companies::delete_company,
        // Selections and interview notes
        api::selections::create_selection,
        api::selections::update_selection,
        api::selections::delete_selection,
        api::selections::create_interview_note,
        api::selections::update_interview_note,
        api::selections::delete_interview_note,
        // Axes and matrix
        api::axes::list_axes,
        api::axes::create_axis,
        api::axes::update_axis,
        api::axes::delete_axis,
        api::axes::get_matrix,
        api::axes::save_score,
        // Entry sheets
        api::entry_sheets::list_entry_sheets,
        api::entry_sheets::create_entry_sheet,
        api::entry_sheets::update_entry_sheet,
        api::entry_sheets::delete_entry_sheet,
        // Motivations
        api::motivations::list_motivations,
        api::motivations::create_motivation,
        api::motivations::update_motivation,
        api::motivations::delete_motivation,
        // Self-analyses
        api::self_analyses::list_self_analyses,
        api::self_analyses::create_self_analysis,
        api::self_analyses::update_self_analysis,
        api::self_analyses::delete_self_analysis,
        // Calendar events
        api::schedules::list_events,
        api::schedules::create_event,
        api::schedules::update_event,
        api::schedules::delete_event,
        // Dashboard
        api::dashboard::get_dashboard,
    ),
    components(
        schemas(
            // Common
            error::ErrorResponse,
            // Health
            api::health::HealthResponse,
            api::health::ReadyResponse,
            // Profile
            models::ProfileResponse,
            models::UpdateProfileRequest,
            // Companies
            models::CreateCompanyRequest,
            models::UpdateCompanyRequest,
            models::CompanySummary,
            models::CompanyListResponse,
            models::CompanyNameItem,
            models::CompanyDetailResponse,
            // Selections
            models::SelectionStage,
            models::SelectionStatus,
            models::CreateSelectionRequest,
            models::UpdateSelectionRequest,
            models::SelectionResponse,
            models::CreateInterviewNoteRequest,
            models::UpdateInterviewNoteRequest,
            models::InterviewNoteResponse,
            // Axes
            models::CreateAxisRequest,
            models::UpdateAxisRequest,
            models::AxisResponse,
            models::AxisScoreItem,
            models::SaveScoreRequest,
            models::MatrixCompany,
            models::MatrixScore,
            models::MatrixResponse,
            // Entry sheets
            models::EntrySheetStatus,
            models::CreateEntrySheetRequest,
            models::UpdateEntrySheetRequest,
            models::EntrySheetResponse,
            models::EntrySheetListResponse,
            // Motivations
            models::CreateMotivationRequest,
            models::UpdateMotivationRequest,
            models::MotivationResponse,
            models::MotivationGroup,
            models::MotivationListResponse,
            // Self-analyses
            models::AnalysisCategory,
            models::CreateSelfAnalysisRequest,
            models::UpdateSelfAnalysisRequest,
            models::SelfAnalysisResponse,
            models::SelfAnalysisGroup,
            models::SelfAnalysisListResponse,
            // Events
            models::EventType,
            models::CreateEventRequest,
            models::UpdateEventRequest,
            models::CreateEventResponse,
            models::ScheduleResponse,
            models::CalendarEventProps,
            models::CalendarEventResponse,
            // Dashboard
            models::StatusCount,
            models::DashboardResponse,
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Profile", description = "The app owner's profile"),
        (name = "Companies", description = "Target employers"),
        (name = "Selections", description = "Hiring-process stages and interview notes"),
        (name = "Axes", description = "Evaluation axes and the score matrix"),
        (name = "EntrySheets", description = "Application essays and deadlines"),
        (name = "Motivations", description = "Versioned motivation drafts"),
        (name = "SelfAnalyses", description = "Versioned self-reflection entries"),
        (name = "Events", description = "Calendar events and feed"),
        (name = "Dashboard", description = "Aggregated overview")
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

/// Add the optional Basic-auth security scheme.
struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "basic_auth",
                utoipa::openapi::security::SecurityScheme::Http(
                    utoipa::openapi::security::HttpBuilder::new()
                        .scheme(utoipa::openapi::security::HttpAuthScheme::Basic)
                        .build(),
                ),
            );
        }
    }
}
