//! Infrastructure layer: database access and other external integrations.

pub mod persistence;
