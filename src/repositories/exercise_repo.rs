use rusqlite::{OptionalExtension, TransactionBehavior};

use crate::db::DbPool;
use crate::error::{AppError, Result};
use crate::log_query::LogQuery;
use crate::models::{Exercise, FromSqliteRow, NewExercise, User};

#[derive(Clone)]
pub struct ExerciseRepository {
    pool: DbPool,
}

impl ExerciseRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Append an exercise to the end of a user's log.
    ///
    /// The user lookup and the insert share one write transaction. Returns
    /// the owning user, or `None` if `exercise.user_id` is unknown.
    pub async fn append(&self, exercise: &NewExercise) -> Result<Option<User>> {
        let pool = self.pool.clone();
        let exercise = exercise.clone();
        tokio::task::spawn_blocking(move || {
            let mut conn = pool.get()?;
            let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

            let user = tx
                .prepare("SELECT * FROM users WHERE id = ?")?
                .query_row([&exercise.user_id], User::from_row)
                .optional()?;

            let Some(user) = user else {
                return Ok(None);
            };

            tx.execute(
                "INSERT INTO exercises (user_id, description, duration, date)
                 VALUES (?, ?, ?, ?)",
                rusqlite::params![
                    user.id,
                    exercise.description,
                    exercise.duration,
                    exercise.date.timestamp_millis()
                ],
            )?;
            tx.commit()?;

            tracing::debug!("Logged exercise for user {}", user.id);
            Ok(Some(user))
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
    }

    /// Entries of `user_id` dated inside the query's inclusive range, in
    /// stored order, at most `query.limit` of them. An unknown user has an
    /// empty log.
    pub async fn find_log(&self, user_id: &str, query: LogQuery) -> Result<Vec<Exercise>> {
        let pool = self.pool.clone();
        let user_id = user_id.to_string();
        tokio::task::spawn_blocking(move || {
            let conn = pool.get()?;
            let mut stmt = conn.prepare(
                "SELECT description, duration, date FROM exercises
                 WHERE user_id = ? AND date BETWEEN ? AND ?
                 ORDER BY seq
                 LIMIT ?",
            )?;
            let exercises = stmt
                .query_map(
                    rusqlite::params![user_id, query.lower, query.upper, query.sql_limit()],
                    Exercise::from_row,
                )?
                .collect::<rusqlite::Result<Vec<_>>>()?;
            Ok(exercises)
        })
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
    }
}
