//! Database queries for the user profile.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, Set};

use crate::entity::user::{self, ActiveModel, Entity as User};
use crate::error::{AppError, AppResult};
use crate::models::UpdateProfileRequest;

use super::DbPool;

impl DbPool {
    /// Fetch the app owner, creating a default row on first launch.
    pub async fn ensure_default_user(&self) -> AppResult<user::Model> {
        let existing = User::find()
            .order_by_asc(user::Column::Id)
            .one(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to look up user: {}", e)))?;

        if let Some(u) = existing {
            return Ok(u);
        }

        let model = ActiveModel {
            name: Set("User".to_string()),
            created_at: Set(Utc::now()),
            ..Default::default()
        };

        let result = model
            .insert(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to create default user: {}", e)))?;

        Ok(result)
    }

    /// Get a user by ID.
    pub async fn get_user(&self, id: i32) -> AppResult<Option<user::Model>> {
        let result = User::find_by_id(id)
            .one(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to get user: {}", e)))?;

        Ok(result)
    }

    /// Update the user profile. Only supplied fields are changed.
    pub async fn update_profile(
        &self,
        id: i32,
        req: &UpdateProfileRequest,
    ) -> AppResult<user::Model> {
        let user = self
            .get_user(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User {}", id)))?;

        let mut active: ActiveModel = user.into();
        if let Some(ref name) = req.name {
            active.name = Set(name.clone());
        }
        if let Some(ref email) = req.email {
            active.email = Set(Some(email.clone()));
        }
        if let Some(ref university) = req.university {
            active.university = Set(Some(university.clone()));
        }
        if let Some(ref research_theme) = req.research_theme {
            active.research_theme = Set(Some(research_theme.clone()));
        }

        let result = active
            .update(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to update profile: {}", e)))?;

        Ok(result)
    }
}
