pub mod exercises;
pub mod health;
pub mod index;
pub mod users;

use axum::{http::StatusCode, response::IntoResponse};

/// Fallback for unmatched routes.
pub async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "not found")
}
