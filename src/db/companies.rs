//! Database queries for companies.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, ModelTrait, QueryFilter, QueryOrder, Set,
};

use crate::entity::company::{self, ActiveModel, Entity as Company};
use crate::entity::selection;
use crate::error::{AppError, AppResult};
use crate::models::{CreateCompanyRequest, UpdateCompanyRequest};

use super::DbPool;

impl DbPool {
    /// Insert a new company for the user.
    pub async fn insert_company(
        &self,
        user_id: i32,
        req: CreateCompanyRequest,
    ) -> AppResult<company::Model> {
        let model = ActiveModel {
            user_id: Set(user_id),
            name: Set(req.name),
            industry: Set(req.industry),
            job_type: Set(req.job_type),
            description: Set(req.description),
            preference: Set(req.preference.unwrap_or(3)),
            mypage_url: Set(req.mypage_url),
            mypage_id: Set(req.mypage_id),
            mypage_password: Set(req.mypage_password),
            notes: Set(req.notes),
            created_at: Set(Utc::now()),
            ..Default::default()
        };

        let result = model
            .insert(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to insert company: {}", e)))?;

        Ok(result)
    }

    /// Get a company by ID.
    pub async fn get_company(&self, id: i32) -> AppResult<Option<company::Model>> {
        let result = Company::find_by_id(id)
            .one(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to get company: {}", e)))?;

        Ok(result)
    }

    /// List the user's companies with their selections, preference first.
    /// One query; the status label is derived in memory per company.
    pub async fn list_companies_with_selections(
        &self,
        user_id: i32,
    ) -> AppResult<Vec<(company::Model, Vec<selection::Model>)>> {
        let result = Company::find()
            .filter(company::Column::UserId.eq(user_id))
            .find_with_related(selection::Entity)
            .order_by_desc(company::Column::Preference)
            .order_by_asc(company::Column::Id)
            .all(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to list companies: {}", e)))?;

        Ok(result)
    }

    /// List the user's companies as {id, name}, ordered by name.
    pub async fn list_company_names(&self, user_id: i32) -> AppResult<Vec<company::Model>> {
        let result = Company::find()
            .filter(company::Column::UserId.eq(user_id))
            .order_by_asc(company::Column::Name)
            .all(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to list company names: {}", e)))?;

        Ok(result)
    }

    /// Update a company. Only supplied fields are changed.
    pub async fn update_company(
        &self,
        id: i32,
        req: &UpdateCompanyRequest,
    ) -> AppResult<company::Model> {
        let company = self
            .get_company(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Company {}", id)))?;

        let mut active: ActiveModel = company.into();
        if let Some(ref name) = req.name {
            active.name = Set(name.clone());
        }
        if let Some(ref industry) = req.industry {
            active.industry = Set(Some(industry.clone()));
        }
        if let Some(ref job_type) = req.job_type {
            active.job_type = Set(Some(job_type.clone()));
        }
        if let Some(ref description) = req.description {
            active.description = Set(Some(description.clone()));
        }
        if let Some(preference) = req.preference {
            active.preference = Set(preference);
        }
        if let Some(ref mypage_url) = req.mypage_url {
            active.mypage_url = Set(Some(mypage_url.clone()));
        }
        if let Some(ref mypage_id) = req.mypage_id {
            active.mypage_id = Set(Some(mypage_id.clone()));
        }
        if let Some(ref mypage_password) = req.mypage_password {
            active.mypage_password = Set(Some(mypage_password.clone()));
        }
        if let Some(ref notes) = req.notes {
            active.notes = Set(Some(notes.clone()));
        }

        let result = active
            .update(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to update company: {}", e)))?;

        Ok(result)
    }

    /// Delete a company. Selections, motivations, entry sheets and axis
    /// matches go with it; schedules keep their row with company_id nulled.
    pub async fn delete_company(&self, id: i32) -> AppResult<()> {
        let company = self
            .get_company(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Company {}", id)))?;

        company
            .delete(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to delete company: {}", e)))?;

        Ok(())
    }
}
