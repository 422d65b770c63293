//! Session facade: business rules for session CRUD.

use std::sync::Arc;

use crate::domain::entities::{
    AuthUser, NewSession, Session, SessionPage, SessionSort, SessionUpdate, SortDirection,
};
use crate::domain::repositories::{SessionRepository, UserRepository};
use crate::error::AppError;

/// Facade encapsulating session business rules.
///
/// Handlers delegate here after payload validation; this service decides
/// business validity: organizer references must resolve, and only the
/// organizer of a session (or an admin) may modify it.
pub struct SessionService<S: SessionRepository, U: UserRepository> {
    session_repository: Arc<S>,
    user_repository: Arc<U>,
    page_size: u32,
}

impl<S: SessionRepository, U: UserRepository> SessionService<S, U> {
    /// Creates a new session service.
    ///
    /// # Arguments
    ///
    /// - `session_repository` - session persistence
    /// - `user_repository` - organizer lookups
    /// - `page_size` - fixed number of items per listing page
    pub fn new(session_repository: Arc<S>, user_repository: Arc<U>, page_size: u32) -> Self {
        Self {
            session_repository,
            user_repository,
            page_size,
        }
    }

    /// Creates a session after resolving its organizer reference.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] ("Organizer not found") if the referenced
    /// organizer does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create(&self, new_session: NewSession) -> Result<Session, AppError> {
        self.user_repository
            .find_by_id(new_session.organizer_id)
            .await?
            .ok_or_else(|| AppError::not_found("Organizer not found"))?;

        let session = self.session_repository.create(new_session).await?;
        tracing::info!(session_id = session.id, "Session created");

        Ok(session)
    }

    /// Retrieves one page of sessions plus pagination metadata.
    ///
    /// The listing query and the total count run concurrently.
    pub async fn get_all(
        &self,
        page: u32,
        sort: SessionSort,
        direction: SortDirection,
    ) -> Result<SessionPage, AppError> {
        let (items, total_items) = tokio::try_join!(
            self.session_repository
                .list(page, self.page_size, sort, direction),
            self.session_repository.count()
        )?;

        let total_pages = ((total_items as f64) / (self.page_size as f64)).ceil() as u32;

        Ok(SessionPage {
            items,
            page,
            page_size: self.page_size,
            total_items,
            total_pages,
        })
    }

    /// Retrieves a session by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] ("Session not found") if absent.
    pub async fn get_by_id(&self, id: i64) -> Result<Session, AppError> {
        self.session_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Session not found"))
    }

    /// Replaces the mutable fields of a session.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the session is absent.
    /// Returns [`AppError::Forbidden`] if `actor` is neither the session's
    /// organizer nor an admin.
    pub async fn update(
        &self,
        id: i64,
        update: SessionUpdate,
        actor: &AuthUser,
    ) -> Result<Session, AppError> {
        let existing = self.get_by_id(id).await?;
        self.ensure_can_modify(actor, &existing)?;

        let updated = self
            .session_repository
            .update(id, update)
            .await?
            .ok_or_else(|| AppError::not_found("Session not found"))?;

        tracing::info!(session_id = id, actor_id = actor.user_id, "Session updated");

        Ok(updated)
    }

    /// Removes a session.
    ///
    /// # Errors
    ///
    /// Same error cases as [`Self::update`].
    pub async fn delete(&self, id: i64, actor: &AuthUser) -> Result<(), AppError> {
        let existing = self.get_by_id(id).await?;
        self.ensure_can_modify(actor, &existing)?;

        let deleted = self.session_repository.delete(id).await?;
        if !deleted {
            // Removed between the lookup and the delete.
            return Err(AppError::not_found("Session not found"));
        }

        tracing::info!(session_id = id, actor_id = actor.user_id, "Session deleted");

        Ok(())
    }

    /// Admins may modify any session; organizers only their own.
    fn ensure_can_modify(&self, actor: &AuthUser, session: &Session) -> Result<(), AppError> {
        if actor.is_admin() || actor.user_id == session.organizer_id {
            Ok(())
        } else {
            Err(AppError::forbidden())
        }
    }
}
