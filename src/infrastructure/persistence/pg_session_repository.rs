//! PostgreSQL implementation of session repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewSession, Session, SessionSort, SessionUpdate, SortDirection};
use crate::domain::repositories::SessionRepository;
use crate::error::AppError;

const SESSION_COLUMNS: &str =
    "id, title, description, start_date, end_date, organizer_id, created_at, updated_at";

/// Row mapping for the `sessions` table.
#[derive(sqlx::FromRow)]
struct SessionRow {
    id: i64,
    title: String,
    description: Option<String>,
    start_date: DateTime<Utc>,
    end_date: DateTime<Utc>,
    organizer_id: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<SessionRow> for Session {
    fn from(row: SessionRow) -> Self {
        Session {
            id: row.id,
            title: row.title,
            description: row.description,
            start_date: row.start_date,
            end_date: row.end_date,
            organizer_id: row.organizer_id,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// PostgreSQL repository for session storage and retrieval.
///
/// Uses SQLx prepared statements with bound parameters for all values.
/// The `ORDER BY` clause is assembled from [`SessionSort`] / [`SortDirection`],
/// both closed enums mapping to fixed SQL fragments.
pub struct PgSessionRepository {
    pool: Arc<PgPool>,
}

impl PgSessionRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SessionRepository for PgSessionRepository {
    async fn create(&self, new_session: NewSession) -> Result<Session, AppError> {
        let sql = format!(
            "INSERT INTO sessions (title, description, start_date, end_date, organizer_id) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {SESSION_COLUMNS}"
        );

        let row = sqlx::query_as::<_, SessionRow>(&sql)
            .bind(&new_session.title)
            .bind(&new_session.description)
            .bind(new_session.start_date)
            .bind(new_session.end_date)
            .bind(new_session.organizer_id)
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Session>, AppError> {
        let sql = format!("SELECT {SESSION_COLUMNS} FROM sessions WHERE id = $1");

        let row = sqlx::query_as::<_, SessionRow>(&sql)
            .bind(id)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(row.map(Session::from))
    }

    async fn list(
        &self,
        page: u32,
        page_size: u32,
        sort: SessionSort,
        direction: SortDirection,
    ) -> Result<Vec<Session>, AppError> {
        let offset = (i64::from(page) - 1) * i64::from(page_size);

        // Sort column and direction come from closed enums, never user input.
        // `id` is appended as a tiebreak so paging is stable for equal keys.
        let sql = format!(
            "SELECT {SESSION_COLUMNS} FROM sessions \
             ORDER BY {} {}, id ASC \
             LIMIT $1 OFFSET $2",
            sort.column(),
            direction.keyword()
        );

        let rows = sqlx::query_as::<_, SessionRow>(&sql)
            .bind(i64::from(page_size))
            .bind(offset)
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows.into_iter().map(Session::from).collect())
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM sessions")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }

    async fn update(&self, id: i64, update: SessionUpdate) -> Result<Option<Session>, AppError> {
        let sql = format!(
            "UPDATE sessions \
             SET title = $2, description = $3, start_date = $4, end_date = $5, updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {SESSION_COLUMNS}"
        );

        let row = sqlx::query_as::<_, SessionRow>(&sql)
            .bind(id)
            .bind(&update.title)
            .bind(&update.description)
            .bind(update.start_date)
            .bind(update.end_date)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(row.map(Session::from))
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM sessions WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
