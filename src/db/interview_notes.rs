//! Database queries for interview notes.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, ModelTrait, QueryFilter, QueryOrder, Set,
};

use crate::entity::interview_note::{self, ActiveModel, Entity as InterviewNote};
use crate::error::{AppError, AppResult};
use crate::models::{CreateInterviewNoteRequest, UpdateInterviewNoteRequest};

use super::DbPool;

impl DbPool {
    /// Insert a note under a selection.
    pub async fn insert_interview_note(
        &self,
        selection_id: i32,
        req: CreateInterviewNoteRequest,
    ) -> AppResult<interview_note::Model> {
        let model = ActiveModel {
            selection_id: Set(selection_id),
            question: Set(req.question),
            answer: Set(req.answer),
            reflection: Set(req.reflection),
            ..Default::default()
        };

        let result = model
            .insert(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to insert interview note: {}", e)))?;

        Ok(result)
    }

    /// Get a note by ID.
    pub async fn get_interview_note(&self, id: i32) -> AppResult<Option<interview_note::Model>> {
        let result = InterviewNote::find_by_id(id)
            .one(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to get interview note: {}", e)))?;

        Ok(result)
    }

    /// List all notes of a selection in creation order.
    pub async fn list_interview_notes(
        &self,
        selection_id: i32,
    ) -> AppResult<Vec<interview_note::Model>> {
        let result = InterviewNote::find()
            .filter(interview_note::Column::SelectionId.eq(selection_id))
            .order_by_asc(interview_note::Column::Id)
            .all(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to list interview notes: {}", e)))?;

        Ok(result)
    }

    /// Update a note. Only supplied fields are changed.
    pub async fn update_interview_note(
        &self,
        id: i32,
        req: &UpdateInterviewNoteRequest,
    ) -> AppResult<interview_note::Model> {
        let note = self
            .get_interview_note(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Interview note {}", id)))?;

        let mut active: ActiveModel = note.into();
        if let Some(ref question) = req.question {
            active.question = Set(question.clone());
        }
        if let Some(ref answer) = req.answer {
            active.answer = Set(Some(answer.clone()));
        }
        if let Some(ref reflection) = req.reflection {
            active.reflection = Set(Some(reflection.clone()));
        }

        let result = active
            .update(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to update interview note: {}", e)))?;

        Ok(result)
    }

    /// Delete a note.
    pub async fn delete_interview_note(&self, id: i32) -> AppResult<()> {
        let note = self
            .get_interview_note(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Interview note {}", id)))?;

        note.delete(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to delete interview note: {}", e)))?;

        Ok(())
    }
}
