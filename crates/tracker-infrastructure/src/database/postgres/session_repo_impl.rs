//! PostgreSQL session repository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use tracing::error;

use tracker_core::domain::WorkSession;
use tracker_core::error::DomainError;
use tracker_core::repositories::SessionRepository;

pub struct PgSessionRepository {
    pool: PgPool,
}

impl PgSessionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// Internal row type for SQLx mapping
#[derive(Debug, FromRow)]
struct WorkSessionRow {
    pub id: i64,
    pub description: String,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
}

impl From<WorkSessionRow> for WorkSession {
    fn from(row: WorkSessionRow) -> Self {
        WorkSession {
            id: row.id,
            description: row.description,
            start_time: row.start_time,
            end_time: row.end_time,
        }
    }
}

fn db_err(context: &str, e: sqlx::Error) -> DomainError {
    error!("Database error {}: {}", context, e);
    DomainError::Database(e.to_string())
}

#[async_trait]
impl SessionRepository for PgSessionRepository {
    async fn find_all(&self) -> Result<Vec<WorkSession>, DomainError> {
        let rows: Vec<WorkSessionRow> = sqlx::query_as(
            r#"
            SELECT id, description, start_time, end_time
            FROM work_sessions
            ORDER BY start_time DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_err("listing sessions", e))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_active(&self) -> Result<Option<WorkSession>, DomainError> {
        let row: Option<WorkSessionRow> = sqlx::query_as(
            r#"
            SELECT id, description, start_time, end_time
            FROM work_sessions
            WHERE end_time IS NULL
            "#,
        )
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_err("finding active session", e))?;

        Ok(row.map(Into::into))
    }

    async fn find_completed(&self) -> Result<Vec<WorkSession>, DomainError> {
        let rows: Vec<WorkSessionRow> = sqlx::query_as(
            r#"
            SELECT id, description, start_time, end_time
            FROM work_sessions
            WHERE end_time IS NOT NULL
            ORDER BY start_time DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_err("listing completed sessions", e))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn insert_active(
        &self,
        description: &str,
        start_time: DateTime<Utc>,
    ) -> Result<WorkSession, DomainError> {
        // Single-statement check-then-create; the partial unique index on
        // (end_time IS NULL) arbitrates concurrent starts.
        let row: Option<WorkSessionRow> = sqlx::query_as(
            r#"
            INSERT INTO work_sessions (description, start_time)
            SELECT $1, $2
            WHERE NOT EXISTS (SELECT 1 FROM work_sessions WHERE end_time IS NULL)
            RETURNING id, description, start_time, end_time
            "#,
        )
        .bind(description)
        .bind(start_time)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                DomainError::ActiveSessionExists
            }
            _ => db_err("starting session", e),
        })?;

        row.map(Into::into).ok_or(DomainError::ActiveSessionExists)
    }

    async fn close_active(&self, end_time: DateTime<Utc>) -> Result<WorkSession, DomainError> {
        let row: Option<WorkSessionRow> = sqlx::query_as(
            r#"
            UPDATE work_sessions
            SET end_time = $1
            WHERE end_time IS NULL
            RETURNING id, description, start_time, end_time
            "#,
        )
        .bind(end_time)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_err("stopping session", e))?;

        row.map(Into::into).ok_or(DomainError::NoActiveSession)
    }
}
