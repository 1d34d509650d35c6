use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use migration::{Migrator, MigratorTrait};
use sea_orm::DatabaseConnection;
use serde_json::{json, Value};
use tower::ServiceExt;

use wordpuzzle::{api, store, Dictionary, GameService};

async fn database() -> DatabaseConnection {
    let db = entity::connect("sqlite::memory:").await.unwrap();
    Migrator::up(&db, None).await.unwrap();
    db
}

fn app(db: DatabaseConnection) -> Router {
    let dictionary = Dictionary::from_words(["fox", "box", "cab", "abc", "ab", "a"]);
    api::router(GameService::new(db, Arc::new(dictionary)))
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    let request = match body {
        Some(body) => request.body(Body::from(body.to_string())),
        None => request.body(Body::empty()),
    }
    .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

/// A student and a puzzle with known letters.
async fn game(db: &DatabaseConnection, letters: &str) -> (i64, i64) {
    let puzzle = store::insert_puzzle(db, letters).await.unwrap();
    let student = store::insert_student(db, "ann").await.unwrap();
    (student.id as i64, puzzle.id as i64)
}

#[tokio::test]
async fn test_liveness() {
    let app = app(database().await);
    let request = Request::builder().uri("/test").body(Body::empty()).unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&bytes[..], b"API is working");
}

#[tokio::test]
async fn test_create_puzzle() {
    let app = app(database().await);
    let (status, body) = send(&app, Method::POST, "/puzzle", None).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["puzzle_id"].is_i64());
    let letters = body["letters"].as_str().unwrap();
    assert_eq!(letters.len(), 15);
    assert!(letters.chars().all(|c| c.is_ascii_lowercase()));
}

#[tokio::test]
async fn test_register_student() {
    let app = app(database().await);

    let (status, body) = send(&app, Method::POST, "/student", Some(json!({ "name": "ann" }))).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["student_id"].is_i64());

    let (status, body) = send(&app, Method::POST, "/student", Some(json!({}))).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["error"].is_string());

    let (status, _) = send(&app, Method::POST, "/student", Some(json!({ "name": " " }))).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_play_a_game() {
    let db = database().await;
    let (student_id, puzzle_id) = game(&db, "foxabc").await;
    let app = app(db);

    let submit = |word: &str| json!({ "student_id": student_id, "puzzle_id": puzzle_id, "word": word });

    let (status, body) = send(&app, Method::POST, "/submit", Some(submit("fox"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "score": 3 }));

    let (status, body) = send(&app, Method::POST, "/submit", Some(submit("fox"))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Cannot build word from available letters");

    let (status, body) = send(&app, Method::POST, "/submit", Some(submit("bca"))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Not a valid English word");

    let end = json!({ "student_id": student_id, "puzzle_id": puzzle_id });
    let (status, body) = send(&app, Method::POST, "/end", Some(end)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["score"], 3);
    assert_eq!(body["remaining_letters"], "abc");
    assert_eq!(body["possible_words"], json!(["cab", "abc", "ab", "a"]));

    let (status, body) = send(&app, Method::GET, "/leaderboard", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([{ "word": "fox", "score": 3 }]));
}

#[tokio::test]
async fn test_invalid_ids() {
    let db = database().await;
    let (student_id, puzzle_id) = game(&db, "foxabc").await;
    let app = app(db);

    let body = json!({ "student_id": student_id + 1, "puzzle_id": puzzle_id, "word": "fox" });
    let (status, _) = send(&app, Method::POST, "/submit", Some(body)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let body = json!({ "student_id": student_id, "puzzle_id": puzzle_id + 1 });
    let (status, _) = send(&app, Method::POST, "/end", Some(body)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let body = json!({ "student_id": student_id, "word": "fox" });
    let (status, _) = send(&app, Method::POST, "/submit", Some(body)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_leaderboard_is_ranked() {
    let db = database().await;
    let (student_id, puzzle_id) = game(&db, "foxabcab").await;
    let app = app(db);

    for word in ["a", "fox", "ab"] {
        let body = json!({ "student_id": student_id, "puzzle_id": puzzle_id, "word": word });
        let (status, _) = send(&app, Method::POST, "/submit", Some(body)).await;
        assert_eq!(status, StatusCode::OK, "{word}");
    }

    let (_, body) = send(&app, Method::GET, "/leaderboard", None).await;
    assert_eq!(
        body,
        json!([
            { "word": "fox", "score": 3 },
            { "word": "ab", "score": 2 },
            { "word": "a", "score": 1 },
        ])
    );
}
