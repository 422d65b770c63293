//! REST API layer.
//!
//! Translates HTTP requests into [`crate::application::services`] calls and
//! shapes responses according to the API contract.
//!
//! - [`dto`] - request/response types and their validation
//! - [`handlers`] - endpoint handlers
//! - [`middleware`] - authentication and tracing
//! - [`routes`] - route registration

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
