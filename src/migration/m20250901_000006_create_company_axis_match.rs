//! Create company_axis_match table.
//!
//! Composite primary key keeps at most one score per (company, axis) pair.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CompanyAxisMatch::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CompanyAxisMatch::CompanyId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CompanyAxisMatch::AxisId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CompanyAxisMatch::Score)
                            .integer()
                            .not_null()
                            .default(3),
                    )
                    .primary_key(
                        Index::create()
                            .col(CompanyAxisMatch::CompanyId)
                            .col(CompanyAxisMatch::AxisId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_company_axis_match_company")
                            .from(CompanyAxisMatch::Table, CompanyAxisMatch::CompanyId)
                            .to(Companies::Table, Companies::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_company_axis_match_axis")
                            .from(CompanyAxisMatch::Table, CompanyAxisMatch::AxisId)
                            .to(JobAxes::Table, JobAxes::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CompanyAxisMatch::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum CompanyAxisMatch {
    Table,
    CompanyId,
    AxisId,
    Score,
}

#[derive(DeriveIden)]
enum Companies {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum JobAxes {
    Table,
    Id,
}
