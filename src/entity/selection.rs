//! Selection entity: one stage of a hiring process at a company.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "selections")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub company_id: i32,
    /// One of the fixed selection stages (see models::SelectionStage).
    pub stage: String,
    /// One of the fixed selection statuses (see models::SelectionStatus).
    pub status: String,
    pub scheduled_at: Option<DateTimeUtc>,
    pub location: Option<String>,
    pub feedback: Option<String>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::company::Entity",
        from = "Column::CompanyId",
        to = "super::company::Column::Id",
        on_delete = "Cascade"
    )]
    Company,
    #[sea_orm(has_many = "super::interview_note::Entity")]
    InterviewNotes,
}

impl Related<super::company::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Company.def()
    }
}

impl Related<super::interview_note::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::InterviewNotes.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
