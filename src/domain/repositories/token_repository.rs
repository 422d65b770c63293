//! Repository trait for API token authentication.

use crate::domain::entities::AuthUser;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for API token validation.
///
/// Tokens are stored as HMAC-SHA256 hashes; raw tokens are never persisted.
/// Each token belongs to a user, so validation yields the caller identity
/// used by permission checks.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgTokenRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TokenRepository: Send + Sync {
    /// Resolves a token hash to its owning user.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(AuthUser))` if the token exists and is not revoked
    /// - `Ok(None)` otherwise
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_valid(&self, token_hash: &str) -> Result<Option<AuthUser>, AppError>;

    /// Updates the `last_used_at` timestamp for a token.
    ///
    /// Called after successful authentication for monitoring and audit.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn update_last_used(&self, token_hash: &str) -> Result<(), AppError>;
}
