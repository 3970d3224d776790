//! Create self_analyses table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SelfAnalyses::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SelfAnalyses::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(SelfAnalyses::UserId).integer().not_null())
                    .col(ColumnDef::new(SelfAnalyses::Category).string().not_null())
                    .col(ColumnDef::new(SelfAnalyses::Content).text().not_null())
                    .col(
                        ColumnDef::new(SelfAnalyses::Version)
                            .integer()
                            .not_null()
                            .default(1),
                    )
                    .col(
                        ColumnDef::new(SelfAnalyses::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_self_analyses_user")
                            .from(SelfAnalyses::Table, SelfAnalyses::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_self_analyses_user_category_version")
                    .table(SelfAnalyses::Table)
                    .col(SelfAnalyses::UserId)
                    .col(SelfAnalyses::Category)
                    .col(SelfAnalyses::Version)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SelfAnalyses::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum SelfAnalyses {
    Table,
    Id,
    UserId,
    Category,
    Content,
    Version,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}
