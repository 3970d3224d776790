//! Database queries for self-analysis entries, including versioned creation.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, ModelTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};

use crate::entity::self_analysis::{self, ActiveModel, Entity as SelfAnalysis};
use crate::error::{AppError, AppResult};
use crate::models::AnalysisCategory;

use super::DbPool;

impl DbPool {
    /// Insert a new self-analysis entry, assigning the next version for the
    /// (user, category) scope. The max-read and the insert share one
    /// transaction; the unique (user_id, category, version) index backs it
    /// up under concurrent writers.
    pub async fn create_self_analysis(
        &self,
        user_id: i32,
        category: AnalysisCategory,
        content: String,
    ) -> AppResult<self_analysis::Model> {
        let txn = self
            .connection()
            .begin()
            .await
            .map_err(|e| AppError::Database(format!("Failed to begin transaction: {}", e)))?;

        let max_version = SelfAnalysis::find()
            .filter(self_analysis::Column::UserId.eq(user_id))
            .filter(self_analysis::Column::Category.eq(category.as_str()))
            .order_by_desc(self_analysis::Column::Version)
            .one(&txn)
            .await
            .map_err(|e| AppError::Database(format!("Failed to read max version: {}", e)))?
            .map(|sa| sa.version)
            .unwrap_or(0);

        let model = ActiveModel {
            user_id: Set(user_id),
            category: Set(category.as_str().to_string()),
            content: Set(content),
            version: Set(max_version + 1),
            created_at: Set(Utc::now()),
            ..Default::default()
        };

        let result = model
            .insert(&txn)
            .await
            .map_err(|e| AppError::Database(format!("Failed to insert self-analysis: {}", e)))?;

        txn.commit()
            .await
            .map_err(|e| AppError::Database(format!("Failed to commit self-analysis: {}", e)))?;

        Ok(result)
    }

    /// Get a self-analysis entry by ID.
    pub async fn get_self_analysis(&self, id: i32) -> AppResult<Option<self_analysis::Model>> {
        let result = SelfAnalysis::find_by_id(id)
            .one(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to get self-analysis: {}", e)))?;

        Ok(result)
    }

    /// All of the user's entries, newest version first. Callers group by
    /// category for display.
    pub async fn list_self_analyses(&self, user_id: i32) -> AppResult<Vec<self_analysis::Model>> {
        let result = SelfAnalysis::find()
            .filter(self_analysis::Column::UserId.eq(user_id))
            .order_by_desc(self_analysis::Column::Version)
            .order_by_asc(self_analysis::Column::Id)
            .all(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to list self-analyses: {}", e)))?;

        Ok(result)
    }

    /// Rewrite an entry's content. Category and version never change.
    pub async fn update_self_analysis(
        &self,
        id: i32,
        content: String,
    ) -> AppResult<self_analysis::Model> {
        let sa = self
            .get_self_analysis(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Self-analysis {}", id)))?;

        let mut active: ActiveModel = sa.into();
        active.content = Set(content);

        let result = active
            .update(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to update self-analysis: {}", e)))?;

        Ok(result)
    }

    /// Delete an entry. Its version number is never reassigned.
    pub async fn delete_self_analysis(&self, id: i32) -> AppResult<()> {
        let sa = self
            .get_self_analysis(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Self-analysis {}", id)))?;

        sa.delete(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to delete self-analysis: {}", e)))?;

        Ok(())
    }
}
