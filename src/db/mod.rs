//! Database module providing connection management and queries.

pub mod axes;
pub mod companies;
pub mod entry_sheets;
pub mod interview_notes;
pub mod motivations;
pub mod schedules;
pub mod self_analyses;
pub mod selections;
pub mod users;

use std::path::Path;

use sea_orm::{ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, Statement};

use crate::error::{AppError, AppResult};

/// Database connection pool wrapper around a SeaORM connection.
#[derive(Clone)]
pub struct DbPool {
    conn: DatabaseConnection,
}

impl DbPool {
    /// Open a connection pool for the given SQLite URL.
    ///
    /// Expects `sqlite://path?mode=rwc` style URLs (or `sqlite::memory:` for
    /// tests). The parent directory of a file-backed database is created if
    /// missing.
    pub async fn connect(database_url: &str) -> AppResult<Self> {
        if !database_url.starts_with("sqlite:") {
            return Err(AppError::Database(format!(
                "Invalid DATABASE_URL format: {}. Expected 'sqlite://path'",
                database_url
            )));
        }

        if let Some(path) = file_path_of(database_url) {
            if let Some(parent) = Path::new(&path).parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent).map_err(|e| {
                        AppError::Database(format!("Failed to create database directory: {}", e))
                    })?;
                }
            }
        }

        let conn = Database::connect(database_url)
            .await
            .map_err(|e| AppError::Database(format!("Failed to open database: {}", e)))?;

        // Cascading deletes and SET NULL depend on foreign-key enforcement
        conn.execute(Statement::from_string(
            DatabaseBackend::Sqlite,
            "PRAGMA foreign_keys = ON;".to_owned(),
        ))
        .await
        .map_err(|e| AppError::Database(format!("Failed to set foreign_keys pragma: {}", e)))?;

        conn.execute(Statement::from_string(
            DatabaseBackend::Sqlite,
            "PRAGMA journal_mode = WAL;".to_owned(),
        ))
        .await
        .map_err(|e| AppError::Database(format!("Failed to set journal_mode pragma: {}", e)))?;

        Ok(DbPool { conn })
    }

    /// Get access to the underlying connection for executing queries.
    pub fn connection(&self) -> &DatabaseConnection {
        &self.conn
    }
}

/// Extract the filesystem path from a file-backed SQLite URL.
/// Returns None for in-memory databases.
fn file_path_of(database_url: &str) -> Option<String> {
    let rest = database_url
        .strip_prefix("sqlite://")
        .or_else(|| database_url.strip_prefix("sqlite:"))?;
    if rest.starts_with(":memory:") || rest.is_empty() {
        return None;
    }
    let path = rest.split('?').next().unwrap_or(rest);
    Some(path.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_path_of() {
        assert_eq!(
            file_path_of("sqlite://data/jobtrack.db?mode=rwc"),
            Some("data/jobtrack.db".to_string())
        );
        assert_eq!(file_path_of("sqlite::memory:"), None);
    }
}
