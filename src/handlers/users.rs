use axum::{extract::State, Json};

use crate::error::{AppError, Result};
use crate::middleware::FormOrJson;
use crate::models::{CreateUser, NewUserResponse};
use crate::repositories::UserRepository;
use crate::validation::validate_username;

pub const NAME_TAKEN: &str = "Name already taken";

#[derive(Clone)]
pub struct UsersState {
    pub user_repo: UserRepository,
}

pub async fn create(
    State(state): State<UsersState>,
    FormOrJson(form): FormOrJson<CreateUser>,
) -> Result<Json<NewUserResponse>> {
    let username = validate_username(&form)?;

    if state.user_repo.find_by_username(&username).await?.is_some() {
        return Err(AppError::Conflict(NAME_TAKEN.to_string()));
    }

    // The lookup above can race with another request; the insert settles it.
    let user = state
        .user_repo
        .create(&username)
        .await?
        .ok_or_else(|| AppError::Conflict(NAME_TAKEN.to_string()))?;

    tracing::info!("New user {} ({})", user.username, user.id);

    Ok(Json(user.into()))
}
