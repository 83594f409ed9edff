use chrono::Utc;
use rusqlite::{ffi, OptionalExtension};

use crate::db::DbPool;
use crate::error::{AppError, Result};
use crate::models::{FromSqliteRow, User};

#[derive(Clone)]
pub struct UserRepository {
    pool: DbPool,
}

impl UserRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>> {
        let pool = self.pool.clone();
        let username = username.to_string();
        tokio::task::spawn_blocking(move || {
            let conn = pool.get()?;
            let mut stmt = conn.prepare("SELECT * FROM users WHERE username = ?")?;
            let result = stmt.query_row([&username], User::from_row).optional()?;
            Ok(result)
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
    }

    pub async fn count(&self) -> Result<i64> {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let conn = pool.get()?;
            let count: i64 = conn.query_row("SELECT COUNT(*) FROM users", [], |row| row.get(0))?;
            Ok(count)
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
    }

    /// Insert a new user with a freshly generated id.
    ///
    /// Returns `None` when the username is already taken; the column's
    /// unique constraint decides, so concurrent creations cannot both win.
    pub async fn create(&self, username: &str) -> Result<Option<User>> {
        let user = User {
            id: User::generate_id(),
            username: username.to_string(),
            created_at: Utc::now(),
        };

        let pool = self.pool.clone();
        let row = user.clone();
        let inserted = tokio::task::spawn_blocking(move || -> Result<bool> {
            let conn = pool.get()?;
            let result = conn.execute(
                "INSERT INTO users (id, username, created_at) VALUES (?, ?, ?)",
                rusqlite::params![row.id, row.username, row.created_at],
            );
            match result {
                Ok(_) => Ok(true),
                Err(e) if is_unique_violation(&e) => Ok(false),
                Err(e) => Err(e.into()),
            }
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??;

        if inserted {
            tracing::debug!("Created user {} ({})", user.username, user.id);
            Ok(Some(user))
        } else {
            Ok(None)
        }
    }
}

fn is_unique_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(e, _) if e.extended_code == ffi::SQLITE_CONSTRAINT_UNIQUE
    )
}
