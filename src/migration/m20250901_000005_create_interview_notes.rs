//! Create interview_notes table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(InterviewNotes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(InterviewNotes::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(InterviewNotes::SelectionId)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(InterviewNotes::Question).text().not_null())
                    .col(ColumnDef::new(InterviewNotes::Answer).text())
                    .col(ColumnDef::new(InterviewNotes::Reflection).text())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_interview_notes_selection")
                            .from(InterviewNotes::Table, InterviewNotes::SelectionId)
                            .to(Selections::Table, Selections::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_interview_notes_selection_id")
                    .table(InterviewNotes::Table)
                    .col(InterviewNotes::SelectionId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(InterviewNotes::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum InterviewNotes {
    Table,
    Id,
    SelectionId,
    Question,
    Answer,
    Reflection,
}

#[derive(DeriveIden)]
enum Selections {
    Table,
    Id,
}
