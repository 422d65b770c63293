//! PostgreSQL implementation of token repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{AuthUser, UserRole};
use crate::domain::repositories::TokenRepository;
use crate::error::AppError;

/// PostgreSQL repository for API token validation.
///
/// Stores hashed tokens only; raw tokens are never persisted.
pub struct PgTokenRepository {
    pool: Arc<PgPool>,
}

impl PgTokenRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct TokenOwnerRow {
    user_id: i64,
    role: String,
}

#[async_trait]
impl TokenRepository for PgTokenRepository {
    async fn find_valid(&self, token_hash: &str) -> Result<Option<AuthUser>, AppError> {
        let row = sqlx::query_as::<_, TokenOwnerRow>(
            "SELECT t.user_id, u.role \
             FROM api_tokens t \
             JOIN users u ON u.id = t.user_id \
             WHERE t.token_hash = $1 \
               AND t.revoked_at IS NULL",
        )
        .bind(token_hash)
        .fetch_optional(self.pool.as_ref())
        .await?;

        match row {
            None => Ok(None),
            Some(r) => {
                let role: UserRole = r.role.parse().map_err(|e: String| {
                    tracing::error!(user_id = r.user_id, error = %e, "Corrupt role in users table");
                    AppError::internal()
                })?;

                Ok(Some(AuthUser {
                    user_id: r.user_id,
                    role,
                }))
            }
        }
    }

    async fn update_last_used(&self, token_hash: &str) -> Result<(), AppError> {
        sqlx::query(
            "UPDATE api_tokens \
             SET last_used_at = NOW() \
             WHERE token_hash = $1 \
               AND revoked_at IS NULL",
        )
        .bind(token_hash)
        .execute(self.pool.as_ref())
        .await?;

        Ok(())
    }
}
