//! Database queries for motivation drafts, including versioned creation.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, ModelTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};

use crate::entity::company;
use crate::entity::motivation::{self, ActiveModel, Entity as Motivation};
use crate::error::{AppError, AppResult};
use crate::models::{CreateMotivationRequest, UpdateMotivationRequest};

use super::DbPool;

impl DbPool {
    /// Insert a new motivation draft, assigning the next version for the
    /// company. The max-read and the insert share one transaction; the
    /// unique (company_id, version) index backs it up under concurrent
    /// writers.
    pub async fn create_motivation(
        &self,
        req: CreateMotivationRequest,
    ) -> AppResult<motivation::Model> {
        let txn = self
            .connection()
            .begin()
            .await
            .map_err(|e| AppError::Database(format!("Failed to begin transaction: {}", e)))?;

        let max_version = Motivation::find()
            .filter(motivation::Column::CompanyId.eq(req.company_id))
            .order_by_desc(motivation::Column::Version)
            .one(&txn)
            .await
            .map_err(|e| AppError::Database(format!("Failed to read max version: {}", e)))?
            .map(|m| m.version)
            .unwrap_or(0);

        let model = ActiveModel {
            company_id: Set(req.company_id),
            content: Set(req.content),
            version: Set(max_version + 1),
            target_use: Set(req.target_use),
            review_notes: Set(req.review_notes),
            created_at: Set(Utc::now()),
            ..Default::default()
        };

        let result = model
            .insert(&txn)
            .await
            .map_err(|e| AppError::Database(format!("Failed to insert motivation: {}", e)))?;

        txn.commit()
            .await
            .map_err(|e| AppError::Database(format!("Failed to commit motivation: {}", e)))?;

        Ok(result)
    }

    /// Get a motivation by ID.
    pub async fn get_motivation(&self, id: i32) -> AppResult<Option<motivation::Model>> {
        let result = Motivation::find_by_id(id)
            .one(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to get motivation: {}", e)))?;

        Ok(result)
    }

    /// List a company's motivations, newest version first.
    pub async fn list_motivations_by_company(
        &self,
        company_id: i32,
    ) -> AppResult<Vec<motivation::Model>> {
        let result = Motivation::find()
            .filter(motivation::Column::CompanyId.eq(company_id))
            .order_by_desc(motivation::Column::Version)
            .all(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to list motivations: {}", e)))?;

        Ok(result)
    }

    /// List the user's companies (preference first) with their motivations,
    /// newest version first within each company.
    pub async fn list_motivations_grouped(
        &self,
        user_id: i32,
    ) -> AppResult<Vec<(company::Model, Vec<motivation::Model>)>> {
        let result = company::Entity::find()
            .filter(company::Column::UserId.eq(user_id))
            .find_with_related(Motivation)
            .order_by_desc(company::Column::Preference)
            .order_by_asc(company::Column::Id)
            .order_by_desc(motivation::Column::Version)
            .all(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to list motivation groups: {}", e)))?;

        Ok(result)
    }

    /// Update a motivation's content and annotations. The version never
    /// changes after creation.
    pub async fn update_motivation(
        &self,
        id: i32,
        req: &UpdateMotivationRequest,
    ) -> AppResult<motivation::Model> {
        let mot = self
            .get_motivation(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Motivation {}", id)))?;

        let mut active: ActiveModel = mot.into();
        if let Some(ref content) = req.content {
            active.content = Set(content.clone());
        }
        if let Some(ref target_use) = req.target_use {
            active.target_use = Set(Some(target_use.clone()));
        }
        if let Some(ref review_notes) = req.review_notes {
            active.review_notes = Set(Some(review_notes.clone()));
        }

        let result = active
            .update(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to update motivation: {}", e)))?;

        Ok(result)
    }

    /// Delete a motivation. Its version number is never reassigned.
    pub async fn delete_motivation(&self, id: i32) -> AppResult<()> {
        let mot = self
            .get_motivation(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Motivation {}", id)))?;

        mot.delete(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to delete motivation: {}", e)))?;

        Ok(())
    }
}
