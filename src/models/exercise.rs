use chrono::{DateTime, Utc};
use rusqlite::Row;
use serde::{Deserialize, Serialize};

use super::{deserialize_optional_text, FromSqliteRow};

/// One logged activity. `date` is epoch milliseconds, UTC.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
    pub description: String,
    pub duration: i64,
    pub date: i64,
}

impl FromSqliteRow for Exercise {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            description: row.get("description")?,
            duration: row.get("duration")?,
            date: row.get("date")?,
        })
    }
}

/// Raw add-exercise submission. Every field is optional so that missing
/// values surface as validation messages rather than extractor rejections.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddExercise {
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    pub user_id: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    pub duration: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    pub date: Option<String>,
}

/// A validated exercise, ready to be appended to a user's log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewExercise {
    pub user_id: String,
    pub description: String,
    pub duration: i64,
    pub date: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct AddExerciseResponse {
    pub username: String,
    pub description: String,
    pub duration: i64,
    #[serde(rename = "_id")]
    pub id: String,
    pub date: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct LogParams {
    pub user: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub limit: Option<String>,
}
