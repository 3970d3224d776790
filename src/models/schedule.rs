//! Calendar schedule models and DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entity::schedule;

/// Recognized calendar event types. Storage accepts any string; these seven
/// values get dedicated colors in the feed, everything else falls back to
/// the default gray.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    InfoSession,
    EsDeadline,
    WebTest,
    Interview,
    AlumniVisit,
    OfferDeadline,
    Other,
}

impl EventType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InfoSession => "info_session",
            Self::EsDeadline => "es_deadline",
            Self::WebTest => "web_test",
            Self::Interview => "interview",
            Self::AlumniVisit => "alumni_visit",
            Self::OfferDeadline => "offer_deadline",
            Self::Other => "other",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "info_session" => Some(Self::InfoSession),
            "es_deadline" => Some(Self::EsDeadline),
            "web_test" => Some(Self::WebTest),
            "interview" => Some(Self::Interview),
            "alumni_visit" => Some(Self::AlumniVisit),
            "offer_deadline" => Some(Self::OfferDeadline),
            "other" => Some(Self::Other),
            _ => None,
        }
    }
}

impl std::fmt::Display for EventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Request to create a calendar event.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateEventRequest {
    pub title: String,
    /// Accepted formats: RFC 3339, `%Y-%m-%dT%H:%M`, `%Y-%m-%dT%H:%M:%S`,
    /// `%Y-%m-%d`.
    pub start: String,
    #[serde(default)]
    pub end: Option<String>,
    /// Defaults to `other`.
    #[serde(default)]
    pub event_type: Option<String>,
    #[serde(default)]
    pub location_or_url: Option<String>,
    #[serde(default)]
    pub company_id: Option<i32>,
    #[serde(default)]
    pub reminder: Option<bool>,
}

/// Partial event update; only supplied fields are changed. `end` and
/// `company_id` distinguish "absent" from an explicit null, which clears
/// the stored value.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateEventRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub start: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub end: Option<Option<String>>,
    #[serde(default)]
    pub event_type: Option<String>,
    #[serde(default)]
    pub location_or_url: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<i32>)]
    pub company_id: Option<Option<i32>>,
    #[serde(default)]
    pub reminder: Option<bool>,
}

/// Deserialize a field where JSON `null` means "clear" and absence means
/// "leave unchanged".
fn double_option<'de, T, D>(de: D) -> Result<Option<Option<T>>, D::Error>
where
    T: serde::Deserialize<'de>,
    D: serde::Deserializer<'de>,
{
    Option::<T>::deserialize(de).map(Some)
}

/// Response after creating an event.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CreateEventResponse {
    pub id: i32,
}

/// Raw schedule row (dashboard upcoming list).
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ScheduleResponse {
    pub id: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_id: Option<i32>,
    pub event_type: String,
    pub title: String,
    pub start_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_or_url: Option<String>,
    pub reminder: bool,
    pub created_at: DateTime<Utc>,
}

impl From<schedule::Model> for ScheduleResponse {
    fn from(s: schedule::Model) -> Self {
        ScheduleResponse {
            id: s.id,
            company_id: s.company_id,
            event_type: s.event_type,
            title: s.title,
            start_at: s.start_at,
            end_at: s.end_at,
            location_or_url: s.location_or_url,
            reminder: s.reminder,
            created_at: s.created_at,
        }
    }
}

/// Nested properties of a calendar feed record.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CalendarEventProps {
    pub event_type: String,
    /// Empty string when the event has no location/URL.
    pub location_or_url: String,
    /// Empty string when the event references no company.
    pub company_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_id: Option<i32>,
}

/// One calendar-displayable record, keyed the way FullCalendar expects.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CalendarEventResponse {
    pub id: i32,
    pub title: String,
    pub start: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<DateTime<Utc>>,
    #[serde(rename = "backgroundColor")]
    pub background_color: String,
    #[serde(rename = "borderColor")]
    pub border_color: String,
    #[serde(rename = "extendedProps")]
    pub extended_props: CalendarEventProps,
}
