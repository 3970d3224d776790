//! Entry-sheet (application essay) models and DTOs.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entity::entry_sheet;

/// Fixed entry-sheet statuses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum EntrySheetStatus {
    Draft,
    Submitted,
    Passed,
    Rejected,
}

impl EntrySheetStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Submitted => "submitted",
            Self::Passed => "passed",
            Self::Rejected => "rejected",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "draft" => Some(Self::Draft),
            "submitted" => Some(Self::Submitted),
            "passed" => Some(Self::Passed),
            "rejected" => Some(Self::Rejected),
            _ => None,
        }
    }
}

impl std::fmt::Display for EntrySheetStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Request to create an entry-sheet item.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateEntrySheetRequest {
    pub company_id: i32,
    pub question: String,
    #[serde(default)]
    pub answer: Option<String>,
    #[serde(default)]
    pub char_limit: Option<i32>,
    /// `%Y-%m-%d`; empty string means no deadline.
    #[serde(default)]
    pub deadline: Option<String>,
    /// Defaults to `draft`.
    #[serde(default)]
    pub status: Option<EntrySheetStatus>,
}

/// Partial entry-sheet update; only supplied fields are changed.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateEntrySheetRequest {
    #[serde(default)]
    pub company_id: Option<i32>,
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub answer: Option<String>,
    #[serde(default)]
    pub char_limit: Option<i32>,
    /// Empty string clears the deadline.
    #[serde(default)]
    pub deadline: Option<String>,
    #[serde(default)]
    pub status: Option<EntrySheetStatus>,
}

/// Entry-sheet response.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct EntrySheetResponse {
    pub id: i32,
    pub company_id: i32,
    /// Present on listings joined with the company.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    pub question: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub char_limit: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline: Option<NaiveDate>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl EntrySheetResponse {
    pub fn from_model(es: entry_sheet::Model, company_name: Option<String>) -> Self {
        EntrySheetResponse {
            id: es.id,
            company_id: es.company_id,
            company_name,
            question: es.question,
            answer: es.answer,
            char_limit: es.char_limit,
            deadline: es.deadline,
            status: es.status,
            created_at: es.created_at,
        }
    }
}

/// Entry-sheet list response.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct EntrySheetListResponse {
    pub entry_sheets: Vec<EntrySheetResponse>,
}
