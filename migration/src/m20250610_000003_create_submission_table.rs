use sea_orm_migration::{prelude::*, schema::*};

use super::m20250610_000001_create_puzzle_table::Puzzle;
use super::m20250610_000002_create_student_table::Student;

const STUDENT_PUZZLE_INDEX: &str = "idx-submission-student_id-puzzle_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Submission::Table)
                    .if_not_exists()
                    .col(pk_auto(Submission::Id))
                    .col(integer(Submission::StudentId))
                    .col(integer(Submission::PuzzleId))
                    .col(string(Submission::Word))
                    .col(integer(Submission::Score))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-submission-student_id")
                            .from(Submission::Table, Submission::StudentId)
                            .to(Student::Table, Student::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-submission-puzzle_id")
                            .from(Submission::Table, Submission::PuzzleId)
                            .to(Puzzle::Table, Puzzle::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // submissions are always looked up per (student, puzzle)
        manager
            .create_index(
                Index::create()
                    .name(STUDENT_PUZZLE_INDEX)
                    .table(Submission::Table)
                    .col(Submission::StudentId)
                    .col(Submission::PuzzleId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(STUDENT_PUZZLE_INDEX)
                    .table(Submission::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(Table::drop().table(Submission::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Submission {
    Table,
    Id,
    StudentId,
    PuzzleId,
    Word,
    Score,
}
