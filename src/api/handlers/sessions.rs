//! Handlers for session CRUD endpoints.

use axum::{
    Extension, Json,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::StatusCode,
};

use crate::api::dto::pagination::{ListSessionsQuery, PagedResponse, PaginationMeta};
use crate::api::dto::session::{SessionRequest, SessionResponse, SessionUpdateRequest};
use crate::domain::entities::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

/// Creates a new session.
///
/// # Endpoint
///
/// `POST /api/{version}/sessions`
///
/// # Response
///
/// `201 Created` with an empty body.
///
/// # Errors
///
/// - 400 if the body is not valid JSON or fails validation (missing/empty
///   title, bad dates)
/// - 404 if the referenced organizer does not exist
pub async fn create_session_handler(
    State(state): State<AppState>,
    payload: Result<Json<SessionRequest>, JsonRejection>,
) -> Result<StatusCode, AppError> {
    let Json(payload) = payload?;
    let new_session = payload.into_new_session()?;

    state.session_service.create(new_session).await?;

    Ok(StatusCode::CREATED)
}

/// Lists sessions with pagination and sorting.
///
/// # Endpoint
///
/// `GET /api/{version}/sessions`
///
/// # Query Parameters
///
/// - `page` (optional): page number, 1-indexed (default: 1)
/// - `sort` (optional): `id`, `title`, `start_date` or `end_date` (default: `id`)
/// - `direction` (optional): `ASC` or `DESC` (default: `ASC`)
///
/// # Errors
///
/// Returns 400 Bad Request for unknown sort fields or directions; bad values
/// are rejected rather than falling back to defaults.
pub async fn list_sessions_handler(
    State(state): State<AppState>,
    Query(params): Query<ListSessionsQuery>,
) -> Result<Json<PagedResponse<SessionResponse>>, AppError> {
    let (page, sort, direction) = params.resolve()?;

    let session_page = state.session_service.get_all(page, sort, direction).await?;

    Ok(Json(PagedResponse {
        data: session_page
            .items
            .into_iter()
            .map(SessionResponse::from)
            .collect(),
        pagination: PaginationMeta {
            page: session_page.page,
            page_size: session_page.page_size,
            total_items: session_page.total_items,
            total_pages: session_page.total_pages,
        },
    }))
}

/// Retrieves a session by id.
///
/// # Endpoint
///
/// `GET /api/{version}/sessions/{id}`
///
/// # Errors
///
/// Returns 404 Not Found if no session has this id.
pub async fn get_session_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<SessionResponse>, AppError> {
    let session = state.session_service.get_by_id(id).await?;

    Ok(Json(SessionResponse::from(session)))
}

/// Replaces the mutable fields of a session.
///
/// # Endpoint
///
/// `PUT /api/{version}/sessions/{id}`
///
/// # Errors
///
/// - 400 if the body is not valid JSON or fails validation
/// - 403 if the caller is neither the session's organizer nor an admin
/// - 404 if no session has this id
pub async fn update_session_handler(
    State(state): State<AppState>,
    Extension(actor): Extension<AuthUser>,
    Path(id): Path<i64>,
    payload: Result<Json<SessionUpdateRequest>, JsonRejection>,
) -> Result<Json<SessionResponse>, AppError> {
    let Json(payload) = payload?;
    let update = payload.into_update()?;

    let session = state.session_service.update(id, update, &actor).await?;

    Ok(Json(SessionResponse::from(session)))
}

/// Deletes a session.
///
/// # Endpoint
///
/// `DELETE /api/{version}/sessions/{id}`
///
/// # Response
///
/// `204 No Content` with an empty body.
///
/// # Errors
///
/// - 403 if the caller is neither the session's organizer nor an admin
/// - 404 if no session has this id
pub async fn delete_session_handler(
    State(state): State<AppState>,
    Extension(actor): Extension<AuthUser>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    state.session_service.delete(id, &actor).await?;

    Ok(StatusCode::NO_CONTENT)
}
