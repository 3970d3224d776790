//! SeaORM entity definitions for the SQLite database.

pub mod company;
pub mod company_axis_match;
pub mod entry_sheet;
pub mod interview_note;
pub mod job_axis;
pub mod motivation;
pub mod schedule;
pub mod selection;
pub mod self_analysis;
pub mod user;
