//! Self-analysis models and DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entity::self_analysis;

/// Fixed self-analysis categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisCategory {
    /// Personal strengths pitch.
    SelfPr,
    /// The signature student-era experience.
    KeyExperience,
    Strengths,
    Weaknesses,
}

impl AnalysisCategory {
    /// Display order of the category panels.
    pub const ALL: [AnalysisCategory; 4] = [
        Self::SelfPr,
        Self::KeyExperience,
        Self::Strengths,
        Self::Weaknesses,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SelfPr => "self_pr",
            Self::KeyExperience => "key_experience",
            Self::Strengths => "strengths",
            Self::Weaknesses => "weaknesses",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "self_pr" => Some(Self::SelfPr),
            "key_experience" => Some(Self::KeyExperience),
            "strengths" => Some(Self::Strengths),
            "weaknesses" => Some(Self::Weaknesses),
            _ => None,
        }
    }
}

impl std::fmt::Display for AnalysisCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Request to create a self-analysis entry. The version number is assigned
/// by the server (1 + max over the user's entries in the category).
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateSelfAnalysisRequest {
    pub category: AnalysisCategory,
    pub content: String,
}

/// Update to a self-analysis entry; only the content is editable.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateSelfAnalysisRequest {
    pub content: String,
}

/// Self-analysis response.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SelfAnalysisResponse {
    pub id: i32,
    pub category: String,
    pub content: String,
    pub version: i32,
    pub created_at: DateTime<Utc>,
}

impl From<self_analysis::Model> for SelfAnalysisResponse {
    fn from(sa: self_analysis::Model) -> Self {
        SelfAnalysisResponse {
            id: sa.id,
            category: sa.category,
            content: sa.content,
            version: sa.version,
            created_at: sa.created_at,
        }
    }
}

/// Entries of one category, newest version first.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SelfAnalysisGroup {
    pub category: String,
    pub entries: Vec<SelfAnalysisResponse>,
}

/// Self-analysis list response, one group per category in display order.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SelfAnalysisListResponse {
    pub groups: Vec<SelfAnalysisGroup>,
}
