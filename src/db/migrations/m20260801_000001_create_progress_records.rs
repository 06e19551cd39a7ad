use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ProgressRecords::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ProgressRecords::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ProgressRecords::ContentId).string().not_null())
                    .col(ColumnDef::new(ProgressRecords::UserId).string().not_null())
                    .col(
                        ColumnDef::new(ProgressRecords::ProgressPercentage)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(ProgressRecords::Completed)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(ProgressRecords::LastViewedAt)
                            .timestamp()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ProgressRecords::CompletedAt).timestamp())
                    .to_owned(),
            )
            .await?;

        // One record per (content, user) pair
        manager
            .create_index(
                Index::create()
                    .name("idx_progress_records_content_user_unique")
                    .table(ProgressRecords::Table)
                    .col(ProgressRecords::ContentId)
                    .col(ProgressRecords::UserId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // Screen loads fetch everything for one user
        manager
            .create_index(
                Index::create()
                    .name("idx_progress_records_user")
                    .table(ProgressRecords::Table)
                    .col(ProgressRecords::UserId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ProgressRecords::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ProgressRecords {
    Table,
    Id,
    ContentId,
    UserId,
    ProgressPercentage,
    Completed,
    LastViewedAt,
    CompletedAt,
}
