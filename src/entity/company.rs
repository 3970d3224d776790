//! Company entity: a target employer.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "companies")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub name: String,
    pub industry: Option<String>,
    pub job_type: Option<String>,
    pub description: Option<String>,
    /// Preference rank, 1 (low) to 5 (high).
    pub preference: i32,
    pub mypage_url: Option<String>,
    pub mypage_id: Option<String>,
    pub mypage_password: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_delete = "Cascade"
    )]
    User,
    #[sea_orm(has_many = "super::selection::Entity")]
    Selections,
    #[sea_orm(has_many = "super::motivation::Entity")]
    Motivations,
    #[sea_orm(has_many = "super::entry_sheet::Entity")]
    EntrySheets,
    #[sea_orm(has_many = "super::schedule::Entity")]
    Schedules,
    #[sea_orm(has_many = "super::company_axis_match::Entity")]
    AxisMatches,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::selection::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Selections.def()
    }
}

impl Related<super::motivation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Motivations.def()
    }
}

impl Related<super::entry_sheet::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EntrySheets.def()
    }
}

impl Related<super::schedule::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Schedules.def()
    }
}

impl Related<super::company_axis_match::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AxisMatches.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
