//! Shared application state injected into handlers.

use sqlx::PgPool;
use std::sync::Arc;

use crate::application::services::{AuthService, SessionService};
use crate::infrastructure::persistence::{
    PgSessionRepository, PgTokenRepository, PgUserRepository,
};

/// Session facade wired to the PostgreSQL repositories.
pub type PgSessionService = SessionService<PgSessionRepository, PgUserRepository>;

/// Auth service wired to the PostgreSQL token repository.
pub type PgAuthService = AuthService<PgTokenRepository>;

/// Application state shared across all request handlers.
///
/// Holds no mutable state of its own; all fields are cheaply cloneable
/// handles, so the state is safe for unbounded concurrent use.
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<PgPool>,
    pub session_service: Arc<PgSessionService>,
    pub auth_service: Arc<PgAuthService>,
}

impl AppState {
    /// Wires repositories and services around a connection pool.
    ///
    /// # Arguments
    ///
    /// - `pool` - PostgreSQL connection pool
    /// - `page_size` - items per listing page
    /// - `token_signing_secret` - HMAC key for API token hashing
    pub fn new(pool: Arc<PgPool>, page_size: u32, token_signing_secret: String) -> Self {
        let session_repository = Arc::new(PgSessionRepository::new(pool.clone()));
        let user_repository = Arc::new(PgUserRepository::new(pool.clone()));
        let token_repository = Arc::new(PgTokenRepository::new(pool.clone()));

        let session_service = Arc::new(SessionService::new(
            session_repository,
            user_repository,
            page_size,
        ));
        let auth_service = Arc::new(AuthService::new(token_repository, token_signing_secret));

        Self {
            db: pool,
            session_service,
            auth_service,
        }
    }
}
