//! Derivation of a company's current status from its selection records.

use crate::entity::selection;
use crate::models::{CompanyStatus, SelectionStatus};

/// Derive the current status label for a company from its loaded selections.
///
/// The winning selection is the one with the greatest
/// (scheduled_at, created_at, id) key; an unscheduled selection orders below
/// every scheduled one. With no selections at all the company has not
/// applied yet. Ties (including the all-unscheduled case) resolve to the
/// most recently created row, id as the final tie-break.
pub fn current_status(selections: &[selection::Model]) -> CompanyStatus {
    let latest = selections
        .iter()
        .max_by_key(|s| (s.scheduled_at, s.created_at, s.id));

    match latest {
        None => CompanyStatus::NotYetApplied,
        Some(s) => CompanyStatus::Selection(
            SelectionStatus::parse(&s.status).unwrap_or(SelectionStatus::Scheduled),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, NaiveDateTime, Utc};

    fn ts(s: &str) -> DateTime<Utc> {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
            .expect("valid test datetime")
            .and_utc()
    }

    fn selection(
        id: i32,
        status: &str,
        scheduled_at: Option<&str>,
        created_at: &str,
    ) -> selection::Model {
        selection::Model {
            id,
            company_id: 1,
            stage: "first_interview".to_string(),
            status: status.to_string(),
            scheduled_at: scheduled_at.map(ts),
            location: None,
            feedback: None,
            created_at: ts(created_at),
        }
    }

    #[test]
    fn test_no_selections_is_not_yet_applied() {
        assert_eq!(current_status(&[]), CompanyStatus::NotYetApplied);
    }

    #[test]
    fn test_latest_scheduled_selection_wins() {
        let selections = vec![
            selection(1, "passed", Some("2024-02-01 10:00:00"), "2024-01-01 00:00:00"),
            selection(2, "awaiting_result", Some("2024-03-01 10:00:00"), "2024-01-02 00:00:00"),
            selection(3, "rejected", Some("2024-01-15 10:00:00"), "2024-01-03 00:00:00"),
        ];
        assert_eq!(
            current_status(&selections),
            CompanyStatus::Selection(SelectionStatus::AwaitingResult)
        );
    }

    #[test]
    fn test_unscheduled_never_beats_scheduled() {
        let selections = vec![
            selection(1, "passed", Some("2024-02-01 10:00:00"), "2024-01-01 00:00:00"),
            // Created later, but no timestamp
            selection(2, "withdrawn", None, "2024-06-01 00:00:00"),
        ];
        assert_eq!(
            current_status(&selections),
            CompanyStatus::Selection(SelectionStatus::Passed)
        );
    }

    #[test]
    fn test_all_unscheduled_resolves_to_most_recently_created() {
        let selections = vec![
            selection(1, "scheduled", None, "2024-01-01 00:00:00"),
            selection(2, "offer", None, "2024-02-01 00:00:00"),
            selection(3, "rejected", None, "2024-01-15 00:00:00"),
        ];
        assert_eq!(
            current_status(&selections),
            CompanyStatus::Selection(SelectionStatus::Offer)
        );
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(CompanyStatus::NotYetApplied.label(), "not_yet_applied");
        assert_eq!(
            CompanyStatus::Selection(SelectionStatus::Offer).label(),
            "offer"
        );
    }
}
