//! Job-axis models and DTOs, including the company × axis matrix.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entity::job_axis;

/// Request to create an evaluation axis.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateAxisRequest {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Lower sorts first; defaults to 1.
    #[serde(default)]
    pub priority: Option<i32>,
}

/// Partial axis update; only supplied fields are changed.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateAxisRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub priority: Option<i32>,
}

/// Axis response.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AxisResponse {
    pub id: i32,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub priority: i32,
}

impl From<job_axis::Model> for AxisResponse {
    fn from(a: job_axis::Model) -> Self {
        AxisResponse {
            id: a.id,
            name: a.name,
            description: a.description,
            priority: a.priority,
        }
    }
}

/// Request to store one matrix cell: {company_id, axis_id, score}.
///
/// Score 0 deletes the cell ("no opinion"); 1-5 upserts it; anything else
/// is rejected.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct SaveScoreRequest {
    pub company_id: i32,
    pub axis_id: i32,
    pub score: i32,
}

/// One scored cell of the matrix.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct MatrixScore {
    pub company_id: i32,
    pub axis_id: i32,
    pub score: i32,
}

/// Company row of the matrix view.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct MatrixCompany {
    pub id: i32,
    pub name: String,
    pub preference: i32,
}

/// The company × axis matrix: all companies, all axes, and the stored cells.
/// Absent cells mean "unset".
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct MatrixResponse {
    pub companies: Vec<MatrixCompany>,
    pub axes: Vec<AxisResponse>,
    pub scores: Vec<MatrixScore>,
}

/// Axis score as seen from one company's detail view.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AxisScoreItem {
    pub axis_id: i32,
    pub axis_name: String,
    pub score: i32,
}
