//! User entity: the single app owner.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub email: Option<String>,
    pub university: Option<String>,
    pub research_theme: Option<String>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::company::Entity")]
    Companies,
    #[sea_orm(has_many = "super::job_axis::Entity")]
    JobAxes,
    #[sea_orm(has_many = "super::schedule::Entity")]
    Schedules,
    #[sea_orm(has_many = "super::self_analysis::Entity")]
    SelfAnalyses,
}

impl Related<super::company::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Companies.def()
    }
}

impl Related<super::job_axis::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::JobAxes.def()
    }
}

impl Related<super::schedule::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Schedules.def()
    }
}

impl Related<super::self_analysis::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SelfAnalyses.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
