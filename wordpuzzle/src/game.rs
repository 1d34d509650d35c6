use std::sync::Arc;

use entity::{puzzle, student, submission};
use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};
use serde::Serialize;
use tracing::{debug, info};

use crate::dictionary::Dictionary;
use crate::error::{GameError, GameResult};
use crate::leaderboard::{Entry, Update, CAPACITY};
use crate::letters::{can_build_word, random_letters, remaining_letters, PUZZLE_LENGTH};
use crate::score::score_word;
use crate::store;

/// What a student is told when they finish a puzzle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameSummary {
    pub score: i32,
    pub remaining_letters: String,
    pub possible_words: Vec<String>,
}

/// Game rules on top of the database. Holds no per-game state: every call
/// rebuilds what it needs from the submission log.
#[derive(Clone)]
pub struct GameService {
    db: DatabaseConnection,
    dictionary: Arc<Dictionary>,
}

impl GameService {
    pub fn new(db: DatabaseConnection, dictionary: Arc<Dictionary>) -> Self {
        GameService { db, dictionary }
    }

    pub async fn create_puzzle(&self) -> GameResult<puzzle::Model> {
        let letters = random_letters(&mut rand::thread_rng(), PUZZLE_LENGTH);
        let puzzle = store::insert_puzzle(&self.db, &letters).await?;
        info!(puzzle_id = puzzle.id, letters = %puzzle.letters, "created puzzle");
        Ok(puzzle)
    }

    pub async fn register_student(&self, name: &str) -> GameResult<student::Model> {
        let name = name.trim();
        if name.is_empty() {
            return Err(GameError::Validation("The name field is required.".to_owned()));
        }
        let student = store::insert_student(&self.db, name).await?;
        info!(student_id = student.id, "registered student");
        Ok(student)
    }

    /// Validate, score and record one word. The submission row and the
    /// leaderboard change are committed together or not at all.
    pub async fn submit_word(&self, student_id: i32, puzzle_id: i32, word: &str) -> GameResult<i32> {
        let word = word.trim().to_lowercase();
        if word.is_empty() {
            return Err(GameError::Validation("The word field is required.".to_owned()));
        }

        let txn = self.db.begin().await?;
        let puzzle = find_participants(&txn, student_id, puzzle_id).await?;
        let history = store::submissions_for(&txn, student_id, puzzle_id).await?;
        let available = available_letters(&puzzle, &history);

        if !can_build_word(&word, &available) {
            debug!(student_id, puzzle_id, %word, %available, "word cannot be built");
            return Err(GameError::CannotBuild);
        }
        if !self.dictionary.is_valid_word(&word) {
            debug!(student_id, puzzle_id, %word, "word not in dictionary");
            return Err(GameError::NotAWord);
        }

        let score = score_word(&word);
        store::insert_submission(&txn, student_id, puzzle_id, &word, score).await?;
        let update = store::record_high_score(&txn, &word, score).await?;
        txn.commit().await?;

        info!(student_id, puzzle_id, %word, score, "accepted word");
        if let Update::Inserted { evicted } = update {
            debug!(%word, evicted = evicted.len(), "word entered the leaderboard");
        }
        Ok(score)
    }

    pub async fn end_game(&self, student_id: i32, puzzle_id: i32) -> GameResult<GameSummary> {
        let puzzle = find_participants(&self.db, student_id, puzzle_id).await?;
        let history = store::submissions_for(&self.db, student_id, puzzle_id).await?;
        let remaining_letters = available_letters(&puzzle, &history);
        let score: i32 = history.iter().map(|submission| submission.score).sum();

        let dictionary = Arc::clone(&self.dictionary);
        let letters = remaining_letters.clone();
        let possible_words = tokio::task::spawn_blocking(move || {
            dictionary
                .buildable_from(&letters)
                .into_iter()
                .map(str::to_owned)
                .collect::<Vec<String>>()
        })
        .await?;

        info!(student_id, puzzle_id, score, "game ended");
        Ok(GameSummary {
            score,
            remaining_letters,
            possible_words,
        })
    }

    pub async fn leaderboard(&self) -> GameResult<Vec<Entry>> {
        Ok(store::top_high_scores(&self.db, CAPACITY).await?)
    }
}

/// Make sure both ids exist, returning the puzzle.
async fn find_participants<C: ConnectionTrait>(
    db: &C,
    student_id: i32,
    puzzle_id: i32,
) -> GameResult<puzzle::Model> {
    store::find_student(db, student_id)
        .await?
        .ok_or(GameError::UnknownStudent(student_id))?;
    store::find_puzzle(db, puzzle_id)
        .await?
        .ok_or(GameError::UnknownPuzzle(puzzle_id))
}

fn available_letters(puzzle: &puzzle::Model, history: &[submission::Model]) -> String {
    let used: String = history.iter().map(|submission| submission.word.as_str()).collect();
    remaining_letters(&puzzle.letters, &used)
}
