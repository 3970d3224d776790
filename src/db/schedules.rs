//! Database queries for calendar schedules.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, ModelTrait, QueryFilter, QueryOrder, QuerySelect,
    Set,
};

use crate::entity::company;
use crate::entity::schedule::{self, ActiveModel, Entity as Schedule};
use crate::error::{AppError, AppResult};
use crate::models::{CreateEventRequest, UpdateEventRequest};

use super::DbPool;

impl DbPool {
    /// Insert a new calendar event. Timestamps are parsed by the caller.
    pub async fn insert_schedule(
        &self,
        user_id: i32,
        req: CreateEventRequest,
        start_at: DateTime<Utc>,
        end_at: Option<DateTime<Utc>>,
    ) -> AppResult<schedule::Model> {
        let model = ActiveModel {
            user_id: Set(user_id),
            company_id: Set(req.company_id),
            event_type: Set(req.event_type.unwrap_or_else(|| "other".to_string())),
            title: Set(req.title),
            start_at: Set(start_at),
            end_at: Set(end_at),
            location_or_url: Set(req.location_or_url),
            reminder: Set(req.reminder.unwrap_or(false)),
            created_at: Set(Utc::now()),
            ..Default::default()
        };

        let result = model
            .insert(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to insert schedule: {}", e)))?;

        Ok(result)
    }

    /// Get a schedule by ID.
    pub async fn get_schedule(&self, id: i32) -> AppResult<Option<schedule::Model>> {
        let result = Schedule::find_by_id(id)
            .one(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to get schedule: {}", e)))?;

        Ok(result)
    }

    /// All of the user's schedules with their optional companies, for the
    /// calendar feed.
    pub async fn list_schedules_with_companies(
        &self,
        user_id: i32,
    ) -> AppResult<Vec<(schedule::Model, Option<company::Model>)>> {
        let result = Schedule::find()
            .filter(schedule::Column::UserId.eq(user_id))
            .find_also_related(company::Entity)
            .order_by_asc(schedule::Column::StartAt)
            .all(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to list schedules: {}", e)))?;

        Ok(result)
    }

    /// The next `limit` schedules starting at or after `now`, soonest first.
    pub async fn list_upcoming_schedules(
        &self,
        user_id: i32,
        now: DateTime<Utc>,
        limit: u64,
    ) -> AppResult<Vec<schedule::Model>> {
        let result = Schedule::find()
            .filter(schedule::Column::UserId.eq(user_id))
            .filter(schedule::Column::StartAt.gte(now))
            .order_by_asc(schedule::Column::StartAt)
            .limit(limit)
            .all(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to list upcoming schedules: {}", e)))?;

        Ok(result)
    }

    /// Update an event. Only supplied fields are changed; `end_at` and
    /// `company_id` take an explicit null to clear the stored value.
    pub async fn update_schedule(
        &self,
        id: i32,
        req: &UpdateEventRequest,
        start_at: Option<DateTime<Utc>>,
        end_at: Option<Option<DateTime<Utc>>>,
    ) -> AppResult<schedule::Model> {
        let sched = self
            .get_schedule(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Schedule {}", id)))?;

        let mut active: ActiveModel = sched.into();
        if let Some(ref title) = req.title {
            active.title = Set(title.clone());
        }
        if let Some(parsed) = start_at {
            active.start_at = Set(parsed);
        }
        if let Some(parsed) = end_at {
            active.end_at = Set(parsed);
        }
        if let Some(ref event_type) = req.event_type {
            active.event_type = Set(event_type.clone());
        }
        if let Some(ref location_or_url) = req.location_or_url {
            active.location_or_url = Set(Some(location_or_url.clone()));
        }
        if let Some(company_id) = req.company_id {
            active.company_id = Set(company_id);
        }
        if let Some(reminder) = req.reminder {
            active.reminder = Set(reminder);
        }

        let result = active
            .update(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to update schedule: {}", e)))?;

        Ok(result)
    }

    /// Delete an event.
    pub async fn delete_schedule(&self, id: i32) -> AppResult<()> {
        let sched = self
            .get_schedule(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Schedule {}", id)))?;

        sched
            .delete(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to delete schedule: {}", e)))?;

        Ok(())
    }
}
