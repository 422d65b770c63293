//! Repository trait for session data access.

use crate::domain::entities::{NewSession, Session, SessionSort, SessionUpdate, SortDirection};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing voting sessions.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgSessionRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_session.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Persists a new session and returns it with generated fields.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_session: NewSession) -> Result<Session, AppError>;

    /// Finds a session by id.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Session))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<Session>, AppError>;

    /// Lists one page of sessions.
    ///
    /// # Arguments
    ///
    /// - `page` - Page number (1-indexed)
    /// - `page_size` - Number of items per page
    /// - `sort` - Field to order by
    /// - `direction` - Ascending or descending
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list(
        &self,
        page: u32,
        page_size: u32,
        sort: SessionSort,
        direction: SortDirection,
    ) -> Result<Vec<Session>, AppError>;

    /// Counts all sessions.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn count(&self) -> Result<i64, AppError>;

    /// Replaces the mutable fields of a session and bumps `updated_at`.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Session))` with the updated row
    /// - `Ok(None)` if no session has this id
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn update(&self, id: i64, update: SessionUpdate) -> Result<Option<Session>, AppError>;

    /// Removes a session.
    ///
    /// Returns `Ok(true)` if a row was deleted, `Ok(false)` if the id was absent.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;
}
