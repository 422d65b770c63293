//! HTTP request handlers for API endpoints.

pub mod health;
pub mod sessions;

pub use health::health_handler;
pub use sessions::{
    create_session_handler, delete_session_handler, get_session_handler, list_sessions_handler,
    update_session_handler,
};
