//! Create job_axes table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(JobAxes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(JobAxes::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(JobAxes::UserId).integer().not_null())
                    .col(ColumnDef::new(JobAxes::Name).string().not_null())
                    .col(ColumnDef::new(JobAxes::Description).text())
                    .col(
                        ColumnDef::new(JobAxes::Priority)
                            .integer()
                            .not_null()
                            .default(1),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_job_axes_user")
                            .from(JobAxes::Table, JobAxes::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(JobAxes::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum JobAxes {
    Table,
    Id,
    UserId,
    Name,
    Description,
    Priority,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}
