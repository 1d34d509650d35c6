use sea_orm::DbErr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GameError {
    #[error("{0}")]
    Validation(String),
    #[error("the selected student id {0} is invalid")]
    UnknownStudent(i32),
    #[error("the selected puzzle id {0} is invalid")]
    UnknownPuzzle(i32),
    #[error("Cannot build word from available letters")]
    CannotBuild,
    #[error("Not a valid English word")]
    NotAWord,
    #[error(transparent)]
    Database(#[from] DbErr),
    #[error("background task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

pub type GameResult<T> = Result<T, GameError>;
