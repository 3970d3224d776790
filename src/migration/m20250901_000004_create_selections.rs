//! Create selections table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Selections::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Selections::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Selections::CompanyId).integer().not_null())
                    .col(ColumnDef::new(Selections::Stage).string().not_null())
                    .col(
                        ColumnDef::new(Selections::Status)
                            .string()
                            .not_null()
                            .default("scheduled"),
                    )
                    .col(ColumnDef::new(Selections::ScheduledAt).timestamp_with_time_zone())
                    .col(ColumnDef::new(Selections::Location).string())
                    .col(ColumnDef::new(Selections::Feedback).text())
                    .col(
                        ColumnDef::new(Selections::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_selections_company")
                            .from(Selections::Table, Selections::CompanyId)
                            .to(Companies::Table, Companies::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_selections_company_id")
                    .table(Selections::Table)
                    .col(Selections::CompanyId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Selections::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Selections {
    Table,
    Id,
    CompanyId,
    Stage,
    Status,
    ScheduledAt,
    Location,
    Feedback,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Companies {
    Table,
    Id,
}
