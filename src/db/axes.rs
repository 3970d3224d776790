//! Database queries for job axes and the company × axis score matrix.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, ModelTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};

use crate::entity::company_axis_match::{self, Entity as CompanyAxisMatch};
use crate::entity::job_axis::{self, ActiveModel, Entity as JobAxis};
use crate::error::{AppError, AppResult};
use crate::models::{CreateAxisRequest, UpdateAxisRequest};

use super::DbPool;

impl DbPool {
    /// Insert a new evaluation axis for the user.
    pub async fn insert_axis(
        &self,
        user_id: i32,
        req: CreateAxisRequest,
    ) -> AppResult<job_axis::Model> {
        let model = ActiveModel {
            user_id: Set(user_id),
            name: Set(req.name),
            description: Set(req.description),
            priority: Set(req.priority.unwrap_or(1)),
            ..Default::default()
        };

        let result = model
            .insert(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to insert axis: {}", e)))?;

        Ok(result)
    }

    /// Get an axis by ID.
    pub async fn get_axis(&self, id: i32) -> AppResult<Option<job_axis::Model>> {
        let result = JobAxis::find_by_id(id)
            .one(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to get axis: {}", e)))?;

        Ok(result)
    }

    /// List the user's axes, highest priority (lowest number) first.
    pub async fn list_axes(&self, user_id: i32) -> AppResult<Vec<job_axis::Model>> {
        let result = JobAxis::find()
            .filter(job_axis::Column::UserId.eq(user_id))
            .order_by_asc(job_axis::Column::Priority)
            .order_by_asc(job_axis::Column::Id)
            .all(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to list axes: {}", e)))?;

        Ok(result)
    }

    /// Update an axis. Only supplied fields are changed.
    pub async fn update_axis(
        &self,
        id: i32,
        req: &UpdateAxisRequest,
    ) -> AppResult<job_axis::Model> {
        let axis = self
            .get_axis(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Axis {}", id)))?;

        let mut active: ActiveModel = axis.into();
        if let Some(ref name) = req.name {
            active.name = Set(name.clone());
        }
        if let Some(ref description) = req.description {
            active.description = Set(Some(description.clone()));
        }
        if let Some(priority) = req.priority {
            active.priority = Set(priority);
        }

        let result = active
            .update(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to update axis: {}", e)))?;

        Ok(result)
    }

    /// Delete an axis and its matrix scores.
    pub async fn delete_axis(&self, id: i32) -> AppResult<()> {
        let axis = self
            .get_axis(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Axis {}", id)))?;

        axis.delete(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to delete axis: {}", e)))?;

        Ok(())
    }

    /// Store one matrix cell.
    ///
    /// Score 0 deletes the (company, axis) row when present and is a no-op
    /// otherwise; 1-5 overwrites or inserts the row. Read and write share a
    /// transaction so the upsert cannot interleave with itself. Applying
    /// the same (pair, score) twice leaves the same stored state.
    pub async fn save_axis_score(
        &self,
        company_id: i32,
        axis_id: i32,
        score: i32,
    ) -> AppResult<()> {
        if !(0..=5).contains(&score) {
            return Err(AppError::InvalidInput(format!(
                "score must be between 0 and 5, got {}",
                score
            )));
        }

        let txn = self
            .connection()
            .begin()
            .await
            .map_err(|e| AppError::Database(format!("Failed to begin transaction: {}", e)))?;

        let existing = CompanyAxisMatch::find_by_id((company_id, axis_id))
            .one(&txn)
            .await
            .map_err(|e| AppError::Database(format!("Failed to look up axis score: {}", e)))?;

        if score == 0 {
            if let Some(m) = existing {
                m.delete(&txn)
                    .await
                    .map_err(|e| AppError::Database(format!("Failed to delete axis score: {}", e)))?;
            }
        } else if let Some(m) = existing {
            let mut active: company_axis_match::ActiveModel = m.into();
            active.score = Set(score);
            active
                .update(&txn)
                .await
                .map_err(|e| AppError::Database(format!("Failed to update axis score: {}", e)))?;
        } else {
            let model = company_axis_match::ActiveModel {
                company_id: Set(company_id),
                axis_id: Set(axis_id),
                score: Set(score),
            };
            model
                .insert(&txn)
                .await
                .map_err(|e| AppError::Database(format!("Failed to insert axis score: {}", e)))?;
        }

        txn.commit()
            .await
            .map_err(|e| AppError::Database(format!("Failed to commit axis score: {}", e)))?;

        Ok(())
    }

    /// Get one matrix cell.
    pub async fn get_axis_score(
        &self,
        company_id: i32,
        axis_id: i32,
    ) -> AppResult<Option<company_axis_match::Model>> {
        let result = CompanyAxisMatch::find_by_id((company_id, axis_id))
            .one(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to get axis score: {}", e)))?;

        Ok(result)
    }

    /// List every stored matrix cell.
    pub async fn list_axis_scores(&self) -> AppResult<Vec<company_axis_match::Model>> {
        let result = CompanyAxisMatch::find()
            .all(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to list axis scores: {}", e)))?;

        Ok(result)
    }

    /// List a company's stored cells together with their axes.
    pub async fn list_axis_scores_for_company(
        &self,
        company_id: i32,
    ) -> AppResult<Vec<(company_axis_match::Model, Option<job_axis::Model>)>> {
        let result = CompanyAxisMatch::find()
            .filter(company_axis_match::Column::CompanyId.eq(company_id))
            .find_also_related(JobAxis)
            .all(self.connection())
            .await
            .map_err(|e| {
                AppError::Database(format!("Failed to list company axis scores: {}", e))
            })?;

        Ok(result)
    }
}
