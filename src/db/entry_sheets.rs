//! Database queries for entry sheets, including the two deadline-ordered
//! listings (full list and dashboard widget).

use chrono::{NaiveDate, Utc};
use sea_orm::sea_query::NullOrdering;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, ModelTrait, Order, QueryFilter, QueryOrder,
    QuerySelect, Set,
};

use crate::entity::company;
use crate::entity::entry_sheet::{self, ActiveModel, Entity as EntrySheet};
use crate::error::{AppError, AppResult};
use crate::models::{CreateEntrySheetRequest, EntrySheetStatus, UpdateEntrySheetRequest};

use super::DbPool;

/// Dashboard widget size.
const DEADLINE_WIDGET_LIMIT: u64 = 8;

impl DbPool {
    /// Insert a new entry sheet. The deadline is parsed by the caller.
    pub async fn insert_entry_sheet(
        &self,
        req: CreateEntrySheetRequest,
        deadline: Option<NaiveDate>,
    ) -> AppResult<entry_sheet::Model> {
        let model = ActiveModel {
            company_id: Set(req.company_id),
            question: Set(req.question),
            answer: Set(req.answer),
            char_limit: Set(req.char_limit),
            deadline: Set(deadline),
            status: Set(req
                .status
                .unwrap_or(EntrySheetStatus::Draft)
                .as_str()
                .to_string()),
            created_at: Set(Utc::now()),
            ..Default::default()
        };

        let result = model
            .insert(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to insert entry sheet: {}", e)))?;

        Ok(result)
    }

    /// Get an entry sheet by ID.
    pub async fn get_entry_sheet(&self, id: i32) -> AppResult<Option<entry_sheet::Model>> {
        let result = EntrySheet::find_by_id(id)
            .one(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to get entry sheet: {}", e)))?;

        Ok(result)
    }

    /// Full list across the user's companies: deadline ascending with
    /// missing deadlines last, then newest first.
    pub async fn list_entry_sheets(
        &self,
        user_id: i32,
    ) -> AppResult<Vec<(entry_sheet::Model, Option<company::Model>)>> {
        let result = EntrySheet::find()
            .find_also_related(company::Entity)
            .filter(company::Column::UserId.eq(user_id))
            .order_by_with_nulls(entry_sheet::Column::Deadline, Order::Asc, NullOrdering::Last)
            .order_by_desc(entry_sheet::Column::CreatedAt)
            .all(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to list entry sheets: {}", e)))?;

        Ok(result)
    }

    /// Dashboard widget: drafts with a deadline, soonest first, at most 8.
    /// A distinct projection from the full list, not a slice of it.
    pub async fn list_entry_sheet_deadlines(
        &self,
        user_id: i32,
    ) -> AppResult<Vec<(entry_sheet::Model, Option<company::Model>)>> {
        let result = EntrySheet::find()
            .find_also_related(company::Entity)
            .filter(company::Column::UserId.eq(user_id))
            .filter(entry_sheet::Column::Status.eq(EntrySheetStatus::Draft.as_str()))
            .filter(entry_sheet::Column::Deadline.is_not_null())
            .order_by_asc(entry_sheet::Column::Deadline)
            .limit(DEADLINE_WIDGET_LIMIT)
            .all(self.connection())
            .await
            .map_err(|e| {
                AppError::Database(format!("Failed to list entry sheet deadlines: {}", e))
            })?;

        Ok(result)
    }

    /// List a company's entry sheets in creation order.
    pub async fn list_entry_sheets_by_company(
        &self,
        company_id: i32,
    ) -> AppResult<Vec<entry_sheet::Model>> {
        let result = EntrySheet::find()
            .filter(entry_sheet::Column::CompanyId.eq(company_id))
            .order_by_asc(entry_sheet::Column::Id)
            .all(self.connection())
            .await
            .map_err(|e| {
                AppError::Database(format!("Failed to list company entry sheets: {}", e))
            })?;

        Ok(result)
    }

    /// Update an entry sheet. Only supplied fields are changed; the parsed
    /// deadline is passed separately so a cleared value reaches storage.
    pub async fn update_entry_sheet(
        &self,
        id: i32,
        req: &UpdateEntrySheetRequest,
        deadline: Option<Option<NaiveDate>>,
    ) -> AppResult<entry_sheet::Model> {
        let es = self
            .get_entry_sheet(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Entry sheet {}", id)))?;

        let mut active: ActiveModel = es.into();
        if let Some(company_id) = req.company_id {
            active.company_id = Set(company_id);
        }
        if let Some(ref question) = req.question {
            active.question = Set(question.clone());
        }
        if let Some(ref answer) = req.answer {
            active.answer = Set(Some(answer.clone()));
        }
        if let Some(char_limit) = req.char_limit {
            active.char_limit = Set(Some(char_limit));
        }
        if let Some(parsed) = deadline {
            active.deadline = Set(parsed);
        }
        if let Some(status) = req.status {
            active.status = Set(status.as_str().to_string());
        }

        let result = active
            .update(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to update entry sheet: {}", e)))?;

        Ok(result)
    }

    /// Delete an entry sheet.
    pub async fn delete_entry_sheet(&self, id: i32) -> AppResult<()> {
        let es = self
            .get_entry_sheet(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Entry sheet {}", id)))?;

        es.delete(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to delete entry sheet: {}", e)))?;

        Ok(())
    }
}
