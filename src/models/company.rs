//! Company models and DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entity::company;
use crate::models::selection::{SelectionResponse, SelectionStatus};
use crate::models::{AxisScoreItem, EntrySheetResponse, MotivationResponse};

/// Derived current status of a company's hiring process.
///
/// Either the sentinel for "no selections recorded yet" or the status of the
/// winning selection (see services::status).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompanyStatus {
    NotYetApplied,
    Selection(SelectionStatus),
}

impl CompanyStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::NotYetApplied => "not_yet_applied",
            Self::Selection(status) => status.as_str(),
        }
    }
}

impl std::fmt::Display for CompanyStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Request to register a new company.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateCompanyRequest {
    pub name: String,
    #[serde(default)]
    pub industry: Option<String>,
    #[serde(default)]
    pub job_type: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// Preference rank 1-5; defaults to 3.
    #[serde(default)]
    pub preference: Option<i32>,
    #[serde(default)]
    pub mypage_url: Option<String>,
    #[serde(default)]
    pub mypage_id: Option<String>,
    #[serde(default)]
    pub mypage_password: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Partial company update; only supplied fields are changed.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateCompanyRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub industry: Option<String>,
    #[serde(default)]
    pub job_type: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub preference: Option<i32>,
    #[serde(default)]
    pub mypage_url: Option<String>,
    #[serde(default)]
    pub mypage_id: Option<String>,
    #[serde(default)]
    pub mypage_password: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Company row with its derived status label.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CompanySummary {
    pub id: i32,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_type: Option<String>,
    pub preference: i32,
    /// `not_yet_applied` or the status of the latest selection.
    pub status_label: String,
    pub created_at: DateTime<Utc>,
}

impl CompanySummary {
    pub fn from_model(c: company::Model, status: CompanyStatus) -> Self {
        CompanySummary {
            id: c.id,
            name: c.name,
            industry: c.industry,
            job_type: c.job_type,
            preference: c.preference,
            status_label: status.label().to_string(),
            created_at: c.created_at,
        }
    }
}

/// Company list response.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CompanyListResponse {
    pub companies: Vec<CompanySummary>,
}

/// Minimal {id, name} pair for dropdowns.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CompanyNameItem {
    pub id: i32,
    pub name: String,
}

/// Full company detail with loaded relationships.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CompanyDetailResponse {
    pub id: i32,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub preference: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mypage_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mypage_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mypage_password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub status_label: String,
    pub created_at: DateTime<Utc>,
    pub selections: Vec<SelectionResponse>,
    pub motivations: Vec<MotivationResponse>,
    pub entry_sheets: Vec<EntrySheetResponse>,
    pub axis_scores: Vec<AxisScoreItem>,
}
