use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

use crate::handlers::{self, exercises, health, index, users};

pub fn create_router(
    users_state: users::UsersState,
    exercises_state: exercises::ExercisesState,
    health_state: health::HealthState,
    static_dir: &str,
) -> Router {
    Router::new()
        // Index page
        .route("/", get(index::index))
        // Health
        .route("/health", get(health::health_check))
        .with_state(health_state)
        // User routes
        .route("/api/exercise/new-user", post(users::create))
        .with_state(users_state)
        // Exercise routes
        .route("/api/exercise/add", post(exercises::add))
        .route("/api/exercise/log", get(exercises::log))
        .with_state(exercises_state)
        // Static assets
        .nest_service("/public", ServeDir::new(static_dir))
        .fallback(handlers::not_found)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
