mod common;

use axum::http::StatusCode;
use exercise_tracker::models::NewUserResponse;
use exercise_tracker::repositories::UserRepository;
use serde_json::json;

#[tokio::test]
async fn test_create_user_returns_name_and_id() {
    let pool = common::setup_test_db();
    let app = common::create_test_app(pool.clone());

    let response = common::send(
        &app,
        common::form_post("/api/exercise/new-user", "username=Alice"),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = common::body_json(response).await;
    assert_eq!(body["username"], "Alice");
    let id = body["_id"].as_str().unwrap();
    assert!(!id.is_empty());

    let stored = UserRepository::new(pool)
        .find_by_username("Alice")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.id, id);
}

#[tokio::test]
async fn test_create_user_accepts_json() {
    let pool = common::setup_test_db();
    let app = common::create_test_app(pool);

    let response = common::send(
        &app,
        common::json_post("/api/exercise/new-user", json!({"username": "Bob"})),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: NewUserResponse = common::body_json(response).await;
    assert_eq!(body.username, "Bob");
}

#[tokio::test]
async fn test_ids_are_unique() {
    let pool = common::setup_test_db();
    let app = common::create_test_app(pool);

    let first = common::register(&app, "Alice").await;
    let second = common::register(&app, "Bob").await;

    assert_ne!(first, second);
}

#[tokio::test]
async fn test_duplicate_name_is_rejected() {
    let pool = common::setup_test_db();
    let app = common::create_test_app(pool.clone());

    common::register(&app, "Alice").await;
    let response = common::send(
        &app,
        common::form_post("/api/exercise/new-user", "username=Alice"),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(common::body_string(response).await, "Name already taken");
    assert_eq!(UserRepository::new(pool).count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_missing_username_is_rejected() {
    let pool = common::setup_test_db();
    let app = common::create_test_app(pool.clone());

    for body in ["", "username=", "username=%20%20"] {
        let response =
            common::send(&app, common::form_post("/api/exercise/new-user", body)).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            common::body_string(response).await,
            "Please enter a username"
        );
    }

    assert_eq!(UserRepository::new(pool).count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_unrecognised_content_type_reads_as_empty_submission() {
    let pool = common::setup_test_db();
    let app = common::create_test_app(pool.clone());

    let request = axum::http::Request::builder()
        .method("POST")
        .uri("/api/exercise/new-user")
        .header("content-type", "text/plain")
        .body(axum::body::Body::from("Alice"))
        .unwrap();
    let response = common::send(&app, request).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(common::body_string(response).await, "Please enter a username");
    assert_eq!(UserRepository::new(pool).count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_malformed_json() {
    let pool = common::setup_test_db();
    let app = common::create_test_app(pool);

    let request = axum::http::Request::builder()
        .method("POST")
        .uri("/api/exercise/new-user")
        .header("content-type", "application/json")
        .body(axum::body::Body::from("{\"username\":"))
        .unwrap();
    let response = common::send(&app, request).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
