use entity::prelude::*;
use entity::{high_score, puzzle, student, submission};
use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};

use crate::leaderboard::{Entry, Leaderboard, Update, CAPACITY};

pub async fn insert_puzzle<C: ConnectionTrait>(db: &C, letters: &str) -> Result<puzzle::Model, DbErr> {
    puzzle::ActiveModel {
        letters: Set(letters.to_owned()),
        ..Default::default()
    }
    .insert(db)
    .await
}

pub async fn find_puzzle<C: ConnectionTrait>(db: &C, id: i32) -> Result<Option<puzzle::Model>, DbErr> {
    Puzzle::find_by_id(id).one(db).await
}

pub async fn insert_student<C: ConnectionTrait>(db: &C, name: &str) -> Result<student::Model, DbErr> {
    student::ActiveModel {
        name: Set(name.to_owned()),
        ..Default::default()
    }
    .insert(db)
    .await
}

pub async fn find_student<C: ConnectionTrait>(db: &C, id: i32) -> Result<Option<student::Model>, DbErr> {
    Student::find_by_id(id).one(db).await
}

/// Accepted words of one student in one puzzle, oldest first.
pub async fn submissions_for<C: ConnectionTrait>(
    db: &C,
    student_id: i32,
    puzzle_id: i32,
) -> Result<Vec<submission::Model>, DbErr> {
    Submission::find()
        .filter(submission::Column::StudentId.eq(student_id))
        .filter(submission::Column::PuzzleId.eq(puzzle_id))
        .order_by_asc(submission::Column::Id)
        .all(db)
        .await
}

pub async fn insert_submission<C: ConnectionTrait>(
    db: &C,
    student_id: i32,
    puzzle_id: i32,
    word: &str,
    score: i32,
) -> Result<submission::Model, DbErr> {
    submission::ActiveModel {
        student_id: Set(student_id),
        puzzle_id: Set(puzzle_id),
        word: Set(word.to_owned()),
        score: Set(score),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Put `word` on the high score table unless it is already there, then
/// delete whatever fell out of the top [`CAPACITY`].
///
/// Run this inside the same transaction as the submission it belongs to.
/// A concurrent insert of the same word hits the unique index and is
/// reported as [`Update::Duplicate`].
pub async fn record_high_score<C: ConnectionTrait>(
    db: &C,
    word: &str,
    score: i32,
) -> Result<Update, DbErr> {
    let row = high_score::ActiveModel {
        word: Set(word.to_owned()),
        score: Set(score),
        ..Default::default()
    };
    let inserted = HighScore::insert(row)
        .on_conflict(
            OnConflict::column(high_score::Column::Word)
                .do_nothing()
                .to_owned(),
        )
        .exec_without_returning(db)
        .await?;
    if inserted == 0 {
        return Ok(Update::Duplicate);
    }

    let rows = HighScore::find().all(db).await?;
    let mut board = Leaderboard::from_entries(CAPACITY, rows.into_iter().map(Entry::from));
    let evicted = board.trim();
    if !evicted.is_empty() {
        HighScore::delete_many()
            .filter(high_score::Column::Word.is_in(evicted.iter().map(|entry| entry.word.as_str())))
            .exec(db)
            .await?;
    }
    Ok(Update::Inserted { evicted })
}

pub async fn top_high_scores<C: ConnectionTrait>(db: &C, k: usize) -> Result<Vec<Entry>, DbErr> {
    let rows = HighScore::find()
        .order_by_desc(high_score::Column::Score)
        .order_by_asc(high_score::Column::Word)
        .limit(k as u64)
        .all(db)
        .await?;
    Ok(rows.into_iter().map(Entry::from).collect())
}
