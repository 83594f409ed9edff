use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::dates::parse_date;
use crate::models::{AddExercise, CreateUser, NewExercise};

/// Client input problems. The messages are returned to the caller verbatim.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please fill in the required fields.")]
    MissingFields,

    #[error("Please enter a number for duration field")]
    InvalidDuration,

    #[error("Please enter a YYYY-MM-DD formatted date")]
    InvalidDate,

    #[error("Please enter a username")]
    MissingUsername,
}

fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

/// Check an add-exercise submission and normalize it.
///
/// Checks run in order: required fields, then duration, then date.
/// A missing or blank date falls back to `now`.
pub fn validate_new_exercise(
    form: &AddExercise,
    now: DateTime<Utc>,
) -> Result<NewExercise, ValidationError> {
    let (Some(user_id), Some(_), Some(duration)) = (
        present(&form.user_id),
        present(&form.description),
        present(&form.duration),
    ) else {
        return Err(ValidationError::MissingFields);
    };

    let duration = parse_duration(duration).ok_or(ValidationError::InvalidDuration)?;

    let date = match present(&form.date) {
        Some(raw) => parse_date(raw).ok_or(ValidationError::InvalidDate)?,
        None => now,
    };

    Ok(NewExercise {
        user_id: user_id.to_string(),
        description: form.description.clone().unwrap_or_default(),
        duration,
        date,
    })
}

/// Numbers are truncated toward zero. Anything under one minute, or too
/// large to store as an `i64`, is rejected.
fn parse_duration(raw: &str) -> Option<i64> {
    let value: f64 = raw.parse().ok()?;
    if !value.is_finite() {
        return None;
    }

    let minutes = value.trunc();
    // `i64::MAX as f64` rounds up to 2^63, which is already out of range.
    (1.0..i64::MAX as f64)
        .contains(&minutes)
        .then_some(minutes as i64)
}

pub fn validate_username(form: &CreateUser) -> Result<String, ValidationError> {
    present(&form.username)
        .map(str::to_string)
        .ok_or(ValidationError::MissingUsername)
}
