//! Create entry_sheets table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EntrySheets::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(EntrySheets::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(EntrySheets::CompanyId).integer().not_null())
                    .col(ColumnDef::new(EntrySheets::Question).text().not_null())
                    .col(ColumnDef::new(EntrySheets::Answer).text())
                    .col(ColumnDef::new(EntrySheets::CharLimit).integer())
                    .col(ColumnDef::new(EntrySheets::Deadline).date())
                    .col(
                        ColumnDef::new(EntrySheets::Status)
                            .string()
                            .not_null()
                            .default("draft"),
                    )
                    .col(
                        ColumnDef::new(EntrySheets::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_entry_sheets_company")
                            .from(EntrySheets::Table, EntrySheets::CompanyId)
                            .to(Companies::Table, Companies::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Both listing projections sort on deadline
        manager
            .create_index(
                Index::create()
                    .name("idx_entry_sheets_deadline")
                    .table(EntrySheets::Table)
                    .col(EntrySheets::Deadline)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(EntrySheets::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum EntrySheets {
    Table,
    Id,
    CompanyId,
    Question,
    Answer,
    CharLimit,
    Deadline,
    Status,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Companies {
    Table,
    Id,
}
