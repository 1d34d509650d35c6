use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Puzzle::Table)
                    .if_not_exists()
                    .col(pk_auto(Puzzle::Id))
                    .col(string(Puzzle::Letters))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Puzzle::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Puzzle {
    Table,
    Id,
    Letters,
}
