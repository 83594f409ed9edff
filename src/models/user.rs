use chrono::{DateTime, Utc};
use rusqlite::Row;
use serde::{Deserialize, Serialize};

use super::{deserialize_optional_text, FromSqliteRow};

pub const USER_ID_LENGTH: usize = 9;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn generate_id() -> String {
        nanoid::nanoid!(USER_ID_LENGTH)
    }
}

impl FromSqliteRow for User {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            username: row.get("username")?,
            created_at: row.get("created_at")?,
        })
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct CreateUser {
    #[serde(default, deserialize_with = "deserialize_optional_text")]
    pub username: Option<String>,
}

/// Body returned by the create-user endpoint.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewUserResponse {
    pub username: String,
    #[serde(rename = "_id")]
    pub id: String,
}

impl From<User> for NewUserResponse {
    fn from(user: User) -> Self {
        Self {
            username: user.username,
            id: user.id,
        }
    }
}
