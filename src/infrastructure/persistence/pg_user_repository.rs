//! PostgreSQL implementation of user repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{User, UserRole};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;

/// PostgreSQL repository for user lookups.
pub struct PgUserRepository {
    pool: Arc<PgPool>,
}

impl PgUserRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct UserRow {
    id: i64,
    name: String,
    email: String,
    role: String,
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError> {
        let row = sqlx::query_as::<_, UserRow>(
            "SELECT id, name, email, role FROM users WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        match row {
            None => Ok(None),
            Some(r) => {
                let role: UserRole = r.role.parse().map_err(|e: String| {
                    tracing::error!(user_id = r.id, error = %e, "Corrupt role in users table");
                    AppError::internal()
                })?;

                Ok(Some(User {
                    id: r.id,
                    name: r.name,
                    email: r.email,
                    role,
                }))
            }
        }
    }
}
