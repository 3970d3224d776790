//! Motivation-statement models and DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entity::motivation;

/// Request to create a motivation draft. The version number is assigned by
/// the server (1 + max over existing drafts for the company).
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateMotivationRequest {
    pub company_id: i32,
    pub content: String,
    /// What the draft targets, e.g. "entry_sheet" or "interview".
    #[serde(default)]
    pub target_use: Option<String>,
    #[serde(default)]
    pub review_notes: Option<String>,
}

/// Partial motivation update; the version is immutable.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateMotivationRequest {
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub target_use: Option<String>,
    #[serde(default)]
    pub review_notes: Option<String>,
}

/// Motivation response.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct MotivationResponse {
    pub id: i32,
    pub company_id: i32,
    pub content: String,
    pub version: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_use: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub review_notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<motivation::Model> for MotivationResponse {
    fn from(m: motivation::Model) -> Self {
        MotivationResponse {
            id: m.id,
            company_id: m.company_id,
            content: m.content,
            version: m.version,
            target_use: m.target_use,
            review_notes: m.review_notes,
            created_at: m.created_at,
        }
    }
}

/// Motivations of one company, newest version first.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct MotivationGroup {
    pub company_id: i32,
    pub company_name: String,
    pub motivations: Vec<MotivationResponse>,
}

/// Motivation list response, grouped per company.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct MotivationListResponse {
    pub groups: Vec<MotivationGroup>,
}
