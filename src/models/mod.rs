//! Domain models and API DTOs for the job-hunt tracker.

pub mod axis;
pub mod company;
pub mod dashboard;
pub mod entry_sheet;
pub mod motivation;
pub mod schedule;
pub mod selection;
pub mod self_analysis;
pub mod user;

// Re-export commonly used types
pub use axis::{
    AxisResponse, AxisScoreItem, CreateAxisRequest, MatrixCompany, MatrixResponse, MatrixScore,
    SaveScoreRequest, UpdateAxisRequest,
};
pub use company::{
    CompanyDetailResponse, CompanyListResponse, CompanyNameItem, CompanyStatus, CompanySummary,
    CreateCompanyRequest, UpdateCompanyRequest,
};
pub use dashboard::{DashboardResponse, StatusCount};
pub use entry_sheet::{
    CreateEntrySheetRequest, EntrySheetListResponse, EntrySheetResponse, EntrySheetStatus,
    UpdateEntrySheetRequest,
};
pub use motivation::{
    CreateMotivationRequest, MotivationGroup, MotivationListResponse, MotivationResponse,
    UpdateMotivationRequest,
};
pub use schedule::{
    CalendarEventProps, CalendarEventResponse, CreateEventRequest, CreateEventResponse, EventType,
    ScheduleResponse, UpdateEventRequest,
};
pub use selection::{
    CreateInterviewNoteRequest, CreateSelectionRequest, InterviewNoteResponse, SelectionResponse,
    SelectionStage, SelectionStatus, UpdateInterviewNoteRequest, UpdateSelectionRequest,
};
pub use self_analysis::{
    AnalysisCategory, CreateSelfAnalysisRequest, SelfAnalysisGroup, SelfAnalysisListResponse,
    SelfAnalysisResponse, UpdateSelfAnalysisRequest,
};
pub use user::{ProfileResponse, UpdateProfileRequest, UserContext};
