//! SeaORM database migrations.

pub use sea_orm_migration::prelude::*;

mod m20250901_000001_create_users;
mod m20250901_000002_create_companies;
mod m20250901_000003_create_job_axes;
mod m20250901_000004_create_selections;
mod m20250901_000005_create_interview_notes;
mod m20250901_000006_create_company_axis_match;
mod m20250901_000007_create_entry_sheets;
mod m20250901_000008_create_motivations;
mod m20250901_000009_create_schedules;
mod m20250901_000010_create_self_analyses;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250901_000001_create_users::Migration),
            Box::new(m20250901_000002_create_companies::Migration),
            Box::new(m20250901_000003_create_job_axes::Migration),
            Box::new(m20250901_000004_create_selections::Migration),
            Box::new(m20250901_000005_create_interview_notes::Migration),
            Box::new(m20250901_000006_create_company_axis_match::Migration),
            Box::new(m20250901_000007_create_entry_sheets::Migration),
            Box::new(m20250901_000008_create_motivations::Migration),
            Box::new(m20250901_000009_create_schedules::Migration),
            Box::new(m20250901_000010_create_self_analyses::Migration),
        ]
    }
}
