#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Request, Response},
    Router,
};
use http_body_util::BodyExt;
use tower::ServiceExt;

use exercise_tracker::db::{create_memory_pool, DbPool};
use exercise_tracker::handlers::{exercises, health, users};
use exercise_tracker::migrations::run_migrations_for_tests;
use exercise_tracker::log_query::LogQuery;
use exercise_tracker::models::{AddExerciseResponse, Exercise, NewUserResponse, User};
use exercise_tracker::repositories::{ExerciseRepository, UserRepository};

pub fn setup_test_db() -> DbPool {
    let pool = create_memory_pool().expect("Failed to create test database");
    run_migrations_for_tests(&pool).expect("Failed to run migrations");
    pool
}

pub fn create_test_app(pool: DbPool) -> Router {
    let user_repo = UserRepository::new(pool.clone());
    let exercise_repo = ExerciseRepository::new(pool);

    let users_state = users::UsersState {
        user_repo: user_repo.clone(),
    };
    let exercises_state = exercises::ExercisesState { exercise_repo };
    let health_state = health::HealthState { user_repo };

    exercise_tracker::routes::create_router(
        users_state,
        exercises_state,
        health_state,
        concat!(env!("CARGO_MANIFEST_DIR"), "/public"),
    )
}

pub async fn create_test_user(pool: &DbPool, username: &str) -> User {
    UserRepository::new(pool.clone())
        .create(username)
        .await
        .unwrap()
        .unwrap()
}

pub fn form_post(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn json_post(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub async fn send(app: &Router, request: Request<Body>) -> Response<Body> {
    app.clone().oneshot(request).await.unwrap()
}

pub async fn body_string(response: Response<Body>) -> String {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8_lossy(&body).into_owned()
}

pub async fn body_json<T: serde::de::DeserializeOwned>(response: Response<Body>) -> T {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

/// Create a user through the API and return its id.
pub async fn register(app: &Router, username: &str) -> String {
    let response = send(
        app,
        form_post("/api/exercise/new-user", &format!("username={}", username)),
    )
    .await;
    let created: NewUserResponse = body_json(response).await;
    created.id
}

/// Every stored entry of a user, straight from the repository.
pub async fn full_log(pool: &DbPool, user_id: &str) -> Vec<Exercise> {
    let everything = LogQuery {
        lower: i64::MIN,
        upper: i64::MAX,
        limit: usize::MAX,
    };
    ExerciseRepository::new(pool.clone())
        .find_log(user_id, everything)
        .await
        .unwrap()
}

/// Log an exercise through the API.
///
/// Client errors also come back as 200, so success is checked by decoding
/// the response.
pub async fn add_exercise(app: &Router, user_id: &str, description: &str, date: &str) {
    let response = send(
        app,
        form_post(
            "/api/exercise/add",
            &format!(
                "userId={}&description={}&duration=30&date={}",
                user_id, description, date
            ),
        ),
    )
    .await;
    assert!(response.status().is_success(), "adding {description} failed");
    let added: AddExerciseResponse = body_json(response).await;
    assert_eq!(added.description, description);
}
