pub use sea_orm_migration::prelude::*;

mod m20250610_000001_create_puzzle_table;
mod m20250610_000002_create_student_table;
mod m20250610_000003_create_submission_table;
mod m20250610_000004_create_high_score_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250610_000001_create_puzzle_table::Migration),
            Box::new(m20250610_000002_create_student_table::Migration),
            Box::new(m20250610_000003_create_submission_table::Migration),
            Box::new(m20250610_000004_create_high_score_table::Migration),
        ]
    }
}
