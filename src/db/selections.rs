//! Database queries for selection stages.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, ModelTrait, QueryFilter, QueryOrder, Set,
};

use crate::entity::selection::{self, ActiveModel, Entity as Selection};
use crate::error::{AppError, AppResult};
use crate::models::{SelectionStage, SelectionStatus, UpdateSelectionRequest};

use super::DbPool;

impl DbPool {
    /// Insert a new selection stage for a company.
    pub async fn insert_selection(
        &self,
        company_id: i32,
        stage: SelectionStage,
        status: SelectionStatus,
        scheduled_at: Option<DateTime<Utc>>,
        location: Option<String>,
        feedback: Option<String>,
    ) -> AppResult<selection::Model> {
        let model = ActiveModel {
            company_id: Set(company_id),
            stage: Set(stage.as_str().to_string()),
            status: Set(status.as_str().to_string()),
            scheduled_at: Set(scheduled_at),
            location: Set(location),
            feedback: Set(feedback),
            created_at: Set(Utc::now()),
            ..Default::default()
        };

        let result = model
            .insert(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to insert selection: {}", e)))?;

        Ok(result)
    }

    /// Get a selection by ID.
    pub async fn get_selection(&self, id: i32) -> AppResult<Option<selection::Model>> {
        let result = Selection::find_by_id(id)
            .one(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to get selection: {}", e)))?;

        Ok(result)
    }

    /// List all selections of a company in creation order.
    pub async fn list_selections_by_company(
        &self,
        company_id: i32,
    ) -> AppResult<Vec<selection::Model>> {
        let result = Selection::find()
            .filter(selection::Column::CompanyId.eq(company_id))
            .order_by_asc(selection::Column::Id)
            .all(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to list selections: {}", e)))?;

        Ok(result)
    }

    /// Update a selection. Only supplied fields are changed; the parsed
    /// schedule is passed separately so a cleared value reaches storage.
    pub async fn update_selection(
        &self,
        id: i32,
        req: &UpdateSelectionRequest,
        scheduled_at: Option<Option<DateTime<Utc>>>,
    ) -> AppResult<selection::Model> {
        let sel = self
            .get_selection(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Selection {}", id)))?;

        let mut active: ActiveModel = sel.into();
        if let Some(stage) = req.stage {
            active.stage = Set(stage.as_str().to_string());
        }
        if let Some(status) = req.status {
            active.status = Set(status.as_str().to_string());
        }
        if let Some(parsed) = scheduled_at {
            active.scheduled_at = Set(parsed);
        }
        if let Some(ref location) = req.location {
            active.location = Set(Some(location.clone()));
        }
        if let Some(ref feedback) = req.feedback {
            active.feedback = Set(Some(feedback.clone()));
        }

        let result = active
            .update(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to update selection: {}", e)))?;

        Ok(result)
    }

    /// Delete a selection and its interview notes.
    pub async fn delete_selection(&self, id: i32) -> AppResult<()> {
        let sel = self
            .get_selection(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Selection {}", id)))?;

        sel.delete(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to delete selection: {}", e)))?;

        Ok(())
    }
}
