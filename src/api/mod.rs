//! API endpoint modules.

pub mod axes;
pub mod companies;
pub mod dashboard;
pub mod entry_sheets;
pub mod health;
pub mod motivations;
pub mod openapi;
pub mod profile;
pub mod schedules;
pub mod self_analyses;
pub mod selections;

pub use axes::configure_routes as configure_axis_routes;
pub use companies::configure_routes as configure_company_routes;
pub use dashboard::configure_routes as configure_dashboard_routes;
pub use entry_sheets::configure_routes as configure_entry_sheet_routes;
pub use health::configure_health_routes;
pub use motivations::configure_routes as configure_motivation_routes;
pub use openapi::ApiDoc;
pub use profile::configure_routes as configure_profile_routes;
pub use schedules::configure_routes as configure_schedule_routes;
pub use self_analyses::configure_routes as configure_self_analysis_routes;
pub use selections::configure_routes as configure_selection_routes;
