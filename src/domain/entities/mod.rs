//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures without infrastructure concerns.
//! Creation and update inputs use separate structs (`NewSession`,
//! `SessionUpdate`) so handlers never build partially-initialized entities.

pub mod session;
pub mod user;

pub use session::{NewSession, Session, SessionPage, SessionSort, SessionUpdate, SortDirection};
pub use user::{AuthUser, User, UserRole};
