//! Create motivations table.
//!
//! The unique (company_id, version) index turns a lost version-assignment
//! race into a constraint violation instead of a duplicate version.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Motivations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Motivations::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Motivations::CompanyId).integer().not_null())
                    .col(ColumnDef::new(Motivations::Content).text().not_null())
                    .col(
                        ColumnDef::new(Motivations::Version)
                            .integer()
                            .not_null()
                            .default(1),
                    )
                    .col(ColumnDef::new(Motivations::TargetUse).string())
                    .col(ColumnDef::new(Motivations::ReviewNotes).text())
                    .col(
                        ColumnDef::new(Motivations::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_motivations_company")
                            .from(Motivations::Table, Motivations::CompanyId)
                            .to(Companies::Table, Companies::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_motivations_company_version")
                    .table(Motivations::Table)
                    .col(Motivations::CompanyId)
                    .col(Motivations::Version)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Motivations::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Motivations {
    Table,
    Id,
    CompanyId,
    Content,
    Version,
    TargetUse,
    ReviewNotes,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Companies {
    Table,
    Id,
}
