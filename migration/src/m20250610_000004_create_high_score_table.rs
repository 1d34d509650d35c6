use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // the unique word column is what serializes concurrent leaderboard inserts
        manager
            .create_table(
                Table::create()
                    .table(HighScore::Table)
                    .if_not_exists()
                    .col(pk_auto(HighScore::Id))
                    .col(string_uniq(HighScore::Word))
                    .col(integer(HighScore::Score))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(HighScore::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum HighScore {
    Table,
    Id,
    Word,
    Score,
}
