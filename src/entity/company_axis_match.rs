//! CompanyAxisMatch entity: score of one company against one job axis.
//!
//! Composite key (company_id, axis_id); a missing row means "no opinion".

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "company_axis_match")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub company_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub axis_id: i32,
    /// 1 to 5; a score of 0 is never stored (it deletes the row).
    pub score: i32,
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
    #[sea_orm(
        belongs_to = "super::job_axis::Entity",
        from = "Column::AxisId",
        to = "super::job_axis::Column::Id",
        on_delete = "Cascade"
    )]
    Axis,
}

impl Related<super::company::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Company.def()
    }
}

impl Related<super::job_axis::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Axis.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
