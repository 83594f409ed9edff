use axum::{
    extract::{Query, State},
    Json,
};
use chrono::Utc;

use crate::dates::format_date;
use crate::error::{AppError, Result};
use crate::log_query::LogQuery;
use crate::middleware::FormOrJson;
use crate::models::{AddExercise, AddExerciseResponse, Exercise, LogParams};
use crate::repositories::ExerciseRepository;
use crate::validation::validate_new_exercise;

pub const UNKNOWN_ID: &str = "unknown _id";
pub const ID_REQUIRED: &str = "ID is required in the URL query string!";

#[derive(Clone)]
pub struct ExercisesState {
    pub exercise_repo: ExerciseRepository,
}

pub async fn add(
    State(state): State<ExercisesState>,
    FormOrJson(form): FormOrJson<AddExercise>,
) -> Result<Json<AddExerciseResponse>> {
    let exercise = validate_new_exercise(&form, Utc::now())?;

    let user = state
        .exercise_repo
        .append(&exercise)
        .await?
        .ok_or_else(|| AppError::NotFound(UNKNOWN_ID.to_string()))?;

    Ok(Json(AddExerciseResponse {
        username: user.username,
        description: exercise.description,
        duration: exercise.duration,
        id: user.id,
        date: format_date(&exercise.date),
    }))
}

/// Dates in the log are returned as stored (epoch milliseconds), unformatted.
/// An unknown user gets the same empty list as a user with no matches.
pub async fn log(
    State(state): State<ExercisesState>,
    Query(params): Query<LogParams>,
) -> Result<Json<Vec<Exercise>>> {
    let user_id = params
        .user
        .as_deref()
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .ok_or_else(|| AppError::Validation(ID_REQUIRED.to_string()))?;

    let query = LogQuery::resolve(&params, Utc::now().timestamp_millis());
    let exercises = state.exercise_repo.find_log(user_id, query).await?;

    Ok(Json(exercises))
}
