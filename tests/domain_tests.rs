//! Integration tests for the domain operations over a real SQLite database.
//!
//! Each test migrates a fresh file-backed database in a temp directory and
//! drives the query layer the way the handlers do.

use chrono::{DateTime, NaiveDate, Utc};
use tempfile::TempDir;

use jobtrack_lib::db::DbPool;
use jobtrack_lib::error::AppError;
use jobtrack_lib::migration::{Migrator, MigratorTrait};
use jobtrack_lib::models::{
    AnalysisCategory, CompanyStatus, CreateCompanyRequest, CreateEntrySheetRequest,
    CreateEventRequest, CreateInterviewNoteRequest, CreateMotivationRequest, EntrySheetStatus,
    SelectionStage, SelectionStatus,
};
use jobtrack_lib::services::{calendar, status};

/// Migrated pool over a fresh database; the TempDir must outlive the pool.
async fn test_pool() -> (DbPool, TempDir) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let url = format!("sqlite://{}/test.db?mode=rwc", dir.path().display());
    let pool = DbPool::connect(&url).await.expect("connect test database");
    Migrator::up(pool.connection(), None)
        .await
        .expect("run migrations");
    (pool, dir)
}

fn company_request(name: &str) -> CreateCompanyRequest {
    CreateCompanyRequest {
        name: name.to_string(),
        industry: None,
        job_type: None,
        description: None,
        preference: None,
        mypage_url: None,
        mypage_id: None,
        mypage_password: None,
        notes: None,
    }
}

fn motivation_request(company_id: i32, content: &str) -> CreateMotivationRequest {
    CreateMotivationRequest {
        company_id,
        content: content.to_string(),
        target_use: None,
        review_notes: None,
    }
}

fn entry_sheet_request(company_id: i32, status: EntrySheetStatus) -> CreateEntrySheetRequest {
    CreateEntrySheetRequest {
        company_id,
        question: "Why us?".to_string(),
        answer: None,
        char_limit: Some(400),
        deadline: None,
        status: Some(status),
    }
}

fn event_request(title: &str, event_type: &str, company_id: Option<i32>) -> CreateEventRequest {
    CreateEventRequest {
        title: title.to_string(),
        start: "2026-03-01T10:00".to_string(),
        end: None,
        event_type: Some(event_type.to_string()),
        location_or_url: None,
        company_id,
        reminder: None,
    }
}

fn ts(s: &str) -> DateTime<Utc> {
    jobtrack_lib::services::datetime::parse_datetime(s).expect("valid test datetime")
}

#[tokio::test]
async fn motivation_versions_are_sequential_per_company() {
    let (pool, _dir) = test_pool().await;
    let user = pool.ensure_default_user().await.unwrap();
    let a = pool
        .insert_company(user.id, company_request("Acme"))
        .await
        .unwrap();
    let b = pool
        .insert_company(user.id, company_request("Globex"))
        .await
        .unwrap();

    for (i, expected_version) in (1..=3).enumerate() {
        let m = pool
            .create_motivation(motivation_request(a.id, &format!("draft {}", i)))
            .await
            .unwrap();
        assert_eq!(m.version, expected_version);
    }

    // The scope key is the company: another company starts back at 1
    let other = pool
        .create_motivation(motivation_request(b.id, "first"))
        .await
        .unwrap();
    assert_eq!(other.version, 1);

    // Deleting the latest does not free its number for reuse semantics to
    // matter here; the next creation still takes 1 + max(existing)
    let latest = pool.list_motivations_by_company(a.id).await.unwrap();
    assert_eq!(
        latest.iter().map(|m| m.version).collect::<Vec<_>>(),
        vec![3, 2, 1]
    );
}

#[tokio::test]
async fn self_analysis_versions_are_scoped_per_category() {
    let (pool, _dir) = test_pool().await;
    let user = pool.ensure_default_user().await.unwrap();

    let first = pool
        .create_self_analysis(user.id, AnalysisCategory::SelfPr, "v1".to_string())
        .await
        .unwrap();
    let second = pool
        .create_self_analysis(user.id, AnalysisCategory::SelfPr, "v2".to_string())
        .await
        .unwrap();
    let other_category = pool
        .create_self_analysis(user.id, AnalysisCategory::Strengths, "v1".to_string())
        .await
        .unwrap();

    assert_eq!(first.version, 1);
    assert_eq!(second.version, 2);
    assert_eq!(other_category.version, 1);
}

#[tokio::test]
async fn axis_score_upsert_is_idempotent_and_zero_deletes() {
    let (pool, _dir) = test_pool().await;
    let user = pool.ensure_default_user().await.unwrap();
    let company = pool
        .insert_company(user.id, company_request("Acme"))
        .await
        .unwrap();
    let axis = pool
        .insert_axis(
            user.id,
            jobtrack_lib::models::CreateAxisRequest {
                name: "Growth".to_string(),
                description: None,
                priority: None,
            },
        )
        .await
        .unwrap();

    // Same (pair, score) twice leaves exactly one row with that score
    pool.save_axis_score(company.id, axis.id, 4).await.unwrap();
    pool.save_axis_score(company.id, axis.id, 4).await.unwrap();
    let stored = pool.get_axis_score(company.id, axis.id).await.unwrap();
    assert_eq!(stored.map(|m| m.score), Some(4));
    assert_eq!(pool.list_axis_scores().await.unwrap().len(), 1);

    // Score 0 deletes the row
    pool.save_axis_score(company.id, axis.id, 0).await.unwrap();
    assert!(pool.get_axis_score(company.id, axis.id).await.unwrap().is_none());

    // Score 0 on an absent pair is an error-free no-op
    pool.save_axis_score(company.id, axis.id, 0).await.unwrap();

    // Out-of-range scores are rejected
    let err = pool.save_axis_score(company.id, axis.id, 7).await;
    assert!(matches!(err, Err(AppError::InvalidInput(_))));
    let err = pool.save_axis_score(company.id, axis.id, -1).await;
    assert!(matches!(err, Err(AppError::InvalidInput(_))));
}

#[tokio::test]
async fn deadline_listings_order_and_filter_independently() {
    let (pool, _dir) = test_pool().await;
    let user = pool.ensure_default_user().await.unwrap();
    let company = pool
        .insert_company(user.id, company_request("Acme"))
        .await
        .unwrap();

    // draft with the later deadline
    pool.insert_entry_sheet(
        entry_sheet_request(company.id, EntrySheetStatus::Draft),
        Some(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()),
    )
    .await
    .unwrap();
    // submitted, no deadline
    pool.insert_entry_sheet(entry_sheet_request(company.id, EntrySheetStatus::Submitted), None)
        .await
        .unwrap();
    // draft with the earlier deadline
    pool.insert_entry_sheet(
        entry_sheet_request(company.id, EntrySheetStatus::Draft),
        Some(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()),
    )
    .await
    .unwrap();

    // Widget: drafts with a deadline, ascending
    let widget = pool.list_entry_sheet_deadlines(user.id).await.unwrap();
    let widget_deadlines: Vec<Option<NaiveDate>> =
        widget.iter().map(|(es, _)| es.deadline).collect();
    assert_eq!(
        widget_deadlines,
        vec![
            Some(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()),
            Some(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()),
        ]
    );

    // Full list: everything, deadline ascending, missing deadline last
    let full = pool.list_entry_sheets(user.id).await.unwrap();
    let full_deadlines: Vec<Option<NaiveDate>> = full.iter().map(|(es, _)| es.deadline).collect();
    assert_eq!(
        full_deadlines,
        vec![
            Some(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()),
            Some(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()),
            None,
        ]
    );

    // The join also carries the company name
    assert_eq!(
        full[0].1.as_ref().map(|c| c.name.as_str()),
        Some("Acme")
    );
}

#[tokio::test]
async fn widget_caps_at_eight_rows() {
    let (pool, _dir) = test_pool().await;
    let user = pool.ensure_default_user().await.unwrap();
    let company = pool
        .insert_company(user.id, company_request("Acme"))
        .await
        .unwrap();

    for day in 1..=10 {
        pool.insert_entry_sheet(
            entry_sheet_request(company.id, EntrySheetStatus::Draft),
            Some(NaiveDate::from_ymd_opt(2024, 4, day).unwrap()),
        )
        .await
        .unwrap();
    }

    let widget = pool.list_entry_sheet_deadlines(user.id).await.unwrap();
    assert_eq!(widget.len(), 8);
    assert_eq!(
        widget[0].0.deadline,
        Some(NaiveDate::from_ymd_opt(2024, 4, 1).unwrap())
    );
}

#[tokio::test]
async fn company_delete_cascades_and_nulls_schedules() {
    let (pool, _dir) = test_pool().await;
    let user = pool.ensure_default_user().await.unwrap();
    let company = pool
        .insert_company(user.id, company_request("Acme"))
        .await
        .unwrap();

    let selection = pool
        .insert_selection(
            company.id,
            SelectionStage::FirstInterview,
            SelectionStatus::Scheduled,
            Some(ts("2026-02-01T10:00")),
            None,
            None,
        )
        .await
        .unwrap();
    let note = pool
        .insert_interview_note(
            selection.id,
            CreateInterviewNoteRequest {
                question: "Tell me about yourself".to_string(),
                answer: None,
                reflection: None,
            },
        )
        .await
        .unwrap();
    let motivation = pool
        .create_motivation(motivation_request(company.id, "because"))
        .await
        .unwrap();
    let entry_sheet = pool
        .insert_entry_sheet(entry_sheet_request(company.id, EntrySheetStatus::Draft), None)
        .await
        .unwrap();
    let axis = pool
        .insert_axis(
            user.id,
            jobtrack_lib::models::CreateAxisRequest {
                name: "Culture".to_string(),
                description: None,
                priority: None,
            },
        )
        .await
        .unwrap();
    pool.save_axis_score(company.id, axis.id, 5).await.unwrap();
    let schedule = pool
        .insert_schedule(
            user.id,
            event_request("Final interview", "interview", Some(company.id)),
            ts("2026-03-01T10:00"),
            None,
        )
        .await
        .unwrap();

    pool.delete_company(company.id).await.unwrap();

    assert!(pool.get_selection(selection.id).await.unwrap().is_none());
    assert!(pool.get_interview_note(note.id).await.unwrap().is_none());
    assert!(pool.get_motivation(motivation.id).await.unwrap().is_none());
    assert!(pool.get_entry_sheet(entry_sheet.id).await.unwrap().is_none());
    assert!(pool.get_axis_score(company.id, axis.id).await.unwrap().is_none());

    // The schedule survives with the reference cleared, not deleted
    let surviving = pool
        .get_schedule(schedule.id)
        .await
        .unwrap()
        .expect("schedule should survive company deletion");
    assert_eq!(surviving.company_id, None);

    // The axis itself is untouched
    assert!(pool.get_axis(axis.id).await.unwrap().is_some());
}

#[tokio::test]
async fn status_labels_derive_from_loaded_selections() {
    let (pool, _dir) = test_pool().await;
    let user = pool.ensure_default_user().await.unwrap();
    let quiet = pool
        .insert_company(user.id, company_request("Quiet Corp"))
        .await
        .unwrap();
    let busy = pool
        .insert_company(user.id, company_request("Busy Corp"))
        .await
        .unwrap();

    pool.insert_selection(
        busy.id,
        SelectionStage::Entry,
        SelectionStatus::Passed,
        Some(ts("2026-01-10T09:00")),
        None,
        None,
    )
    .await
    .unwrap();
    pool.insert_selection(
        busy.id,
        SelectionStage::FirstInterview,
        SelectionStatus::AwaitingResult,
        Some(ts("2026-02-10T09:00")),
        None,
        None,
    )
    .await
    .unwrap();

    let rows = pool.list_companies_with_selections(user.id).await.unwrap();
    for (company, selections) in rows {
        let derived = status::current_status(&selections);
        if company.id == quiet.id {
            assert_eq!(derived, CompanyStatus::NotYetApplied);
        } else {
            assert_eq!(
                derived,
                CompanyStatus::Selection(SelectionStatus::AwaitingResult)
            );
        }
    }
}

#[tokio::test]
async fn calendar_feed_colors_and_company_props() {
    let (pool, _dir) = test_pool().await;
    let user = pool.ensure_default_user().await.unwrap();
    let company = pool
        .insert_company(user.id, company_request("Acme"))
        .await
        .unwrap();

    pool.insert_schedule(
        user.id,
        event_request("Onsite", "interview", Some(company.id)),
        ts("2026-03-01T10:00"),
        Some(ts("2026-03-01T11:00")),
    )
    .await
    .unwrap();
    // An event type outside the fixed vocabulary must not error
    pool.insert_schedule(
        user.id,
        event_request("Company hackathon", "hackathon", None),
        ts("2026-03-02T10:00"),
        None,
    )
    .await
    .unwrap();

    let feed: Vec<_> = pool
        .list_schedules_with_companies(user.id)
        .await
        .unwrap()
        .into_iter()
        .map(|(schedule, company)| calendar::feed_event(schedule, company.as_ref()))
        .collect();

    assert_eq!(feed.len(), 2);

    let onsite = &feed[0];
    assert_eq!(onsite.background_color, "#ef4444");
    assert_eq!(onsite.extended_props.company_name, "Acme");
    assert_eq!(onsite.extended_props.company_id, Some(company.id));
    assert!(onsite.end.is_some());

    let hackathon = &feed[1];
    assert_eq!(hackathon.background_color, calendar::DEFAULT_EVENT_COLOR);
    assert_eq!(hackathon.extended_props.company_name, "");
    assert_eq!(hackathon.extended_props.company_id, None);
    assert!(hackathon.end.is_none());
}

#[tokio::test]
async fn upcoming_schedules_filter_past_events() {
    let (pool, _dir) = test_pool().await;
    let user = pool.ensure_default_user().await.unwrap();

    pool.insert_schedule(
        user.id,
        event_request("Past seminar", "info_session", None),
        ts("2026-01-01T10:00"),
        None,
    )
    .await
    .unwrap();
    pool.insert_schedule(
        user.id,
        event_request("Future test", "web_test", None),
        ts("2026-06-01T10:00"),
        None,
    )
    .await
    .unwrap();

    let upcoming = pool
        .list_upcoming_schedules(user.id, ts("2026-02-01T00:00"), 5)
        .await
        .unwrap();
    assert_eq!(upcoming.len(), 1);
    assert_eq!(upcoming[0].title, "Future test");
}

#[tokio::test]
async fn ensure_default_user_is_stable() {
    let (pool, _dir) = test_pool().await;
    let first = pool.ensure_default_user().await.unwrap();
    let second = pool.ensure_default_user().await.unwrap();
    assert_eq!(first.id, second.id);
}
