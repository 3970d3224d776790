//! Dashboard aggregation DTOs.

use serde::Serialize;
use utoipa::ToSchema;

use crate::models::company::CompanySummary;
use crate::models::entry_sheet::EntrySheetResponse;
use crate::models::schedule::ScheduleResponse;

/// Number of companies currently carrying one derived status label.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct StatusCount {
    pub status: String,
    pub count: u32,
}

/// The dashboard: companies by preference, status grouping, the next few
/// events, and the entry-sheet deadline widget.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DashboardResponse {
    pub companies: Vec<CompanySummary>,
    pub status_counts: Vec<StatusCount>,
    /// Next 5 schedules starting now or later, soonest first.
    pub upcoming: Vec<ScheduleResponse>,
    /// Draft entry sheets with a deadline, soonest first, at most 8.
    pub es_deadlines: Vec<EntrySheetResponse>,
}
