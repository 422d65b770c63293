//! API route configuration.
//!
//! All session endpoints require Bearer token authentication via
//! [`crate::api::middleware::auth`].

use crate::api::handlers::{
    create_session_handler, delete_session_handler, get_session_handler, list_sessions_handler,
    update_session_handler,
};
use crate::state::AppState;
use axum::{Router, routing::get};

/// Session resource routes, mounted under `api/{version}/sessions`.
///
/// # Endpoints
///
/// - `POST   /`      - Create a session (201, empty body)
/// - `GET    /`      - List sessions (paginated, sortable)
/// - `GET    /{id}`  - Get a session by id
/// - `PUT    /{id}`  - Replace a session's mutable fields
/// - `DELETE /{id}`  - Delete a session (204, empty body)
pub fn session_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(list_sessions_handler).post(create_session_handler),
        )
        .route(
            "/{id}",
            get(get_session_handler)
                .put(update_session_handler)
                .delete(delete_session_handler),
        )
}
