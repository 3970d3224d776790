//! Create schedules table.
//!
//! company_id is SET NULL on company deletion: calendar events outlive the
//! company they pointed at.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Schedules::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Schedules::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Schedules::UserId).integer().not_null())
                    .col(ColumnDef::new(Schedules::CompanyId).integer())
                    .col(ColumnDef::new(Schedules::EventType).string().not_null())
                    .col(ColumnDef::new(Schedules::Title).string().not_null())
                    .col(
                        ColumnDef::new(Schedules::StartAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Schedules::EndAt).timestamp_with_time_zone())
                    .col(ColumnDef::new(Schedules::LocationOrUrl).string())
                    .col(
                        ColumnDef::new(Schedules::Reminder)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Schedules::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_schedules_user")
                            .from(Schedules::Table, Schedules::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_schedules_company")
                            .from(Schedules::Table, Schedules::CompanyId)
                            .to(Companies::Table, Companies::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_schedules_user_start")
                    .table(Schedules::Table)
                    .col(Schedules::UserId)
                    .col(Schedules::StartAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Schedules::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Schedules {
    Table,
    Id,
    UserId,
    CompanyId,
    EventType,
    Title,
    StartAt,
    EndAt,
    LocationOrUrl,
    Reminder,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Companies {
    Table,
    Id,
}
