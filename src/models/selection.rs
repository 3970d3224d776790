//! Selection-process models and DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entity::{interview_note, selection};

/// Fixed stages of a hiring process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum SelectionStage {
    /// Entry period has not opened yet.
    PreEntry,
    Entry,
    DocumentScreening,
    AptitudeTest,
    FirstInterview,
    SecondInterview,
    ThirdInterview,
    FinalInterview,
}

impl SelectionStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PreEntry => "pre_entry",
            Self::Entry => "entry",
            Self::DocumentScreening => "document_screening",
            Self::AptitudeTest => "aptitude_test",
            Self::FirstInterview => "first_interview",
            Self::SecondInterview => "second_interview",
            Self::ThirdInterview => "third_interview",
            Self::FinalInterview => "final_interview",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pre_entry" => Some(Self::PreEntry),
            "entry" => Some(Self::Entry),
            "document_screening" => Some(Self::DocumentScreening),
            "aptitude_test" => Some(Self::AptitudeTest),
            "first_interview" => Some(Self::FirstInterview),
            "second_interview" => Some(Self::SecondInterview),
            "third_interview" => Some(Self::ThirdInterview),
            "final_interview" => Some(Self::FinalInterview),
            _ => None,
        }
    }
}

impl std::fmt::Display for SelectionStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Fixed outcomes/states of one selection stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum SelectionStatus {
    Scheduled,
    AwaitingResult,
    Passed,
    Rejected,
    Withdrawn,
    Offer,
}

impl SelectionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Scheduled => "scheduled",
            Self::AwaitingResult => "awaiting_result",
            Self::Passed => "passed",
            Self::Rejected => "rejected",
            Self::Withdrawn => "withdrawn",
            Self::Offer => "offer",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "scheduled" => Some(Self::Scheduled),
            "awaiting_result" => Some(Self::AwaitingResult),
            "passed" => Some(Self::Passed),
            "rejected" => Some(Self::Rejected),
            "withdrawn" => Some(Self::Withdrawn),
            "offer" => Some(Self::Offer),
            _ => None,
        }
    }
}

impl std::fmt::Display for SelectionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Request to record a new selection stage for a company.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateSelectionRequest {
    pub stage: SelectionStage,
    /// Defaults to `scheduled`.
    #[serde(default)]
    pub status: Option<SelectionStatus>,
    /// Accepted formats: RFC 3339, `%Y-%m-%dT%H:%M`, `%Y-%m-%dT%H:%M:%S`,
    /// `%Y-%m-%d`. Empty string means unscheduled.
    #[serde(default)]
    pub scheduled_at: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub feedback: Option<String>,
}

/// Partial selection update; only supplied fields are changed.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateSelectionRequest {
    #[serde(default)]
    pub stage: Option<SelectionStage>,
    #[serde(default)]
    pub status: Option<SelectionStatus>,
    /// Empty string clears the schedule.
    #[serde(default)]
    pub scheduled_at: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub feedback: Option<String>,
}

/// One selection stage with its interview notes.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SelectionResponse {
    pub id: i32,
    pub company_id: i32,
    pub stage: String,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feedback: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub interview_notes: Vec<InterviewNoteResponse>,
}

impl SelectionResponse {
    pub fn from_model(s: selection::Model, notes: Vec<interview_note::Model>) -> Self {
        SelectionResponse {
            id: s.id,
            company_id: s.company_id,
            stage: s.stage,
            status: s.status,
            scheduled_at: s.scheduled_at,
            location: s.location,
            feedback: s.feedback,
            created_at: s.created_at,
            interview_notes: notes.into_iter().map(InterviewNoteResponse::from).collect(),
        }
    }
}

/// Request to record a reflection on one interview question.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateInterviewNoteRequest {
    pub question: String,
    #[serde(default)]
    pub answer: Option<String>,
    #[serde(default)]
    pub reflection: Option<String>,
}

/// Partial interview-note update; only supplied fields are changed.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateInterviewNoteRequest {
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub answer: Option<String>,
    #[serde(default)]
    pub reflection: Option<String>,
}

/// Interview note response.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct InterviewNoteResponse {
    pub id: i32,
    pub selection_id: i32,
    pub question: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reflection: Option<String>,
}

impl From<interview_note::Model> for InterviewNoteResponse {
    fn from(n: interview_note::Model) -> Self {
        InterviewNoteResponse {
            id: n.id,
            selection_id: n.selection_id,
            question: n.question,
            answer: n.answer,
            reflection: n.reflection,
        }
    }
}
