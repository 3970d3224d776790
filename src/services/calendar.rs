//! Calendar feed projection: schedules into FullCalendar-shaped records.

use crate::entity::{company, schedule};
use crate::models::{CalendarEventProps, CalendarEventResponse, EventType};

/// Color for events whose type is unrecognized (same as `other`).
pub const DEFAULT_EVENT_COLOR: &str = "#64748b";

/// Fixed color for each recognized event type.
pub fn event_color(event_type: &str) -> &'static str {
    match EventType::parse(event_type) {
        Some(EventType::InfoSession) => "#6366f1",
        Some(EventType::EsDeadline) => "#f59e0b",
        Some(EventType::WebTest) => "#10b981",
        Some(EventType::Interview) => "#ef4444",
        Some(EventType::AlumniVisit) => "#8b5cf6",
        Some(EventType::OfferDeadline) => "#ec4899",
        Some(EventType::Other) | None => DEFAULT_EVENT_COLOR,
    }
}

/// Project one schedule (and its optional company) into a feed record.
pub fn feed_event(
    schedule: schedule::Model,
    company: Option<&company::Model>,
) -> CalendarEventResponse {
    let color = event_color(&schedule.event_type);
    CalendarEventResponse {
        id: schedule.id,
        title: schedule.title,
        start: schedule.start_at,
        end: schedule.end_at,
        background_color: color.to_string(),
        border_color: color.to_string(),
        extended_props: CalendarEventProps {
            event_type: schedule.event_type,
            location_or_url: schedule.location_or_url.unwrap_or_default(),
            company_name: company.map(|c| c.name.clone()).unwrap_or_default(),
            company_id: schedule.company_id,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn schedule(event_type: &str, company_id: Option<i32>) -> schedule::Model {
        schedule::Model {
            id: 7,
            user_id: 1,
            company_id,
            event_type: event_type.to_string(),
            title: "Final round".to_string(),
            start_at: Utc::now(),
            end_at: None,
            location_or_url: None,
            reminder: false,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_known_event_types_have_fixed_colors() {
        assert_eq!(event_color("interview"), "#ef4444");
        assert_eq!(event_color("info_session"), "#6366f1");
        assert_eq!(event_color("other"), DEFAULT_EVENT_COLOR);
    }

    #[test]
    fn test_unrecognized_event_type_falls_back_to_gray() {
        assert_eq!(event_color("hackathon"), DEFAULT_EVENT_COLOR);
        let event = feed_event(schedule("hackathon", None), None);
        assert_eq!(event.background_color, DEFAULT_EVENT_COLOR);
        assert_eq!(event.border_color, DEFAULT_EVENT_COLOR);
    }

    #[test]
    fn test_absent_fields_serialize_as_empty() {
        let event = feed_event(schedule("interview", None), None);
        assert_eq!(event.extended_props.location_or_url, "");
        assert_eq!(event.extended_props.company_name, "");
        assert_eq!(event.extended_props.company_id, None);
        assert!(event.end.is_none());
    }
}
