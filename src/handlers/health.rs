use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

use crate::repositories::UserRepository;
use crate::version::GIT_VERSION;

#[derive(Clone)]
pub struct HealthState {
    pub user_repo: UserRepository,
}

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    database: &'static str,
    git_version: &'static str,
}

pub async fn health_check(State(state): State<HealthState>) -> (StatusCode, Json<HealthResponse>) {
    let (status, database) = match state.user_repo.count().await {
        Ok(_) => (StatusCode::OK, "ok"),
        Err(e) => {
            tracing::warn!("Health check could not reach the database: {}", e);
            (StatusCode::SERVICE_UNAVAILABLE, "unavailable")
        }
    };

    (
        status,
        Json(HealthResponse {
            status: if status.is_success() { "ok" } else { "degraded" },
            database,
            git_version: GIT_VERSION,
        }),
    )
}
