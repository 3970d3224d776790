//! InterviewNote entity: reflection on one interview question.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "interview_notes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub selection_id: i32,
    pub question: String,
    pub answer: Option<String>,
    pub reflection: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::selection::Entity",
        from = "Column::SelectionId",
        to = "super::selection::Column::Id",
        on_delete = "Cascade"
    )]
    Selection,
}

impl Related<super::selection::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Selection.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
