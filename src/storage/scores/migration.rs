use sea_orm_migration::prelude::*;

/// Database migrator for the score store
pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20250601_000001_create_user_scores_table::Migration)]
    }
}

mod m20250601_000001_create_user_scores_table {
    use sea_orm_migration::prelude::*;

    #[derive(DeriveMigrationName)]
    pub struct Migration;

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(UserScores::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(UserScores::UserId)
                                .string_len(64)
                                .not_null()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(UserScores::Data).json().not_null())
                        .col(
                            ColumnDef::new(UserScores::UpdatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(UserScores::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum UserScores {
        Table,
        UserId,
        Data,
        UpdatedAt,
    }
}
