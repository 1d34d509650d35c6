use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tower_http::trace::TraceLayer;

use crate::error::{GameError, GameResult};
use crate::game::{GameService, GameSummary};
use crate::leaderboard::Entry;

#[derive(Debug, Deserialize)]
pub struct RegisterStudent {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct SubmitWord {
    pub student_id: i32,
    pub puzzle_id: i32,
    pub word: String,
}

#[derive(Debug, Deserialize)]
pub struct EndGame {
    pub student_id: i32,
    pub puzzle_id: i32,
}

#[derive(Debug, Serialize)]
pub struct PuzzleCreated {
    pub puzzle_id: i32,
    pub letters: String,
}

#[derive(Debug, Serialize)]
pub struct StudentRegistered {
    pub student_id: i32,
}

#[derive(Debug, Serialize)]
pub struct WordScored {
    pub score: i32,
}

pub fn router(service: GameService) -> Router {
    Router::new()
        .route("/puzzle", post(create_puzzle))
        .route("/student", post(register_student))
        .route("/submit", post(submit_word))
        .route("/end", post(end_game))
        .route("/leaderboard", get(leaderboard))
        .route("/test", get(|| async { "API is working" }))
        .layer(TraceLayer::new_for_http())
        .with_state(service)
}

async fn create_puzzle(State(service): State<GameService>) -> GameResult<Json<PuzzleCreated>> {
    let puzzle = service.create_puzzle().await?;
    Ok(Json(PuzzleCreated {
        puzzle_id: puzzle.id,
        letters: puzzle.letters,
    }))
}

async fn register_student(
    State(service): State<GameService>,
    payload: Result<Json<RegisterStudent>, JsonRejection>,
) -> GameResult<Json<StudentRegistered>> {
    let request = body(payload)?;
    let student = service.register_student(&request.name).await?;
    Ok(Json(StudentRegistered {
        student_id: student.id,
    }))
}

async fn submit_word(
    State(service): State<GameService>,
    payload: Result<Json<SubmitWord>, JsonRejection>,
) -> GameResult<Json<WordScored>> {
    let request = body(payload)?;
    let score = service
        .submit_word(request.student_id, request.puzzle_id, &request.word)
        .await?;
    Ok(Json(WordScored { score }))
}

async fn end_game(
    State(service): State<GameService>,
    payload: Result<Json<EndGame>, JsonRejection>,
) -> GameResult<Json<GameSummary>> {
    let request = body(payload)?;
    let summary = service.end_game(request.student_id, request.puzzle_id).await?;
    Ok(Json(summary))
}

async fn leaderboard(State(service): State<GameService>) -> GameResult<Json<Vec<Entry>>> {
    Ok(Json(service.leaderboard().await?))
}

fn body<T>(payload: Result<Json<T>, JsonRejection>) -> GameResult<T> {
    payload
        .map(|Json(request)| request)
        .map_err(|rejection| GameError::Validation(rejection.body_text()))
}

impl GameError {
    pub fn status(&self) -> StatusCode {
        match self {
            GameError::Validation(_) | GameError::UnknownStudent(_) | GameError::UnknownPuzzle(_) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            GameError::CannotBuild | GameError::NotAWord => StatusCode::BAD_REQUEST,
            GameError::Database(_) | GameError::Task(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for GameError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
            "Internal server error".to_owned()
        } else {
            self.to_string()
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}
