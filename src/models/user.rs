//! User profile DTOs and the per-process user context.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entity::user;

/// Identity of the single app owner, resolved once at startup and injected
/// into every handler instead of being re-queried per call site.
#[derive(Debug, Clone, Copy)]
pub struct UserContext {
    pub user_id: i32,
}

/// The owner's profile.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ProfileResponse {
    pub id: i32,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub university: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub research_theme: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<user::Model> for ProfileResponse {
    fn from(u: user::Model) -> Self {
        ProfileResponse {
            id: u.id,
            name: u.name,
            email: u.email,
            university: u.university,
            research_theme: u.research_theme,
            created_at: u.created_at,
        }
    }
}

/// Partial profile update; only supplied fields are changed.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateProfileRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub university: Option<String>,
    #[serde(default)]
    pub research_theme: Option<String>,
}
