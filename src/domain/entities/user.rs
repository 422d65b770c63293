//! User entity and authenticated-caller identity.

use std::str::FromStr;

/// Role attached to a user account.
///
/// Admins may modify any session; organizers only their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserRole {
    Admin,
    Organizer,
}

impl UserRole {
    /// Database representation of the role.
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::Organizer => "organizer",
        }
    }
}

impl FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(UserRole::Admin),
            "organizer" => Ok(UserRole::Organizer),
            other => Err(format!("Unknown user role '{other}'")),
        }
    }
}

/// A registered user who can organize sessions.
#[derive(Debug, Clone)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: UserRole,
}

/// Identity of the authenticated caller, resolved from its API token.
///
/// Inserted into the request extensions by the auth middleware so handlers
/// can run permission checks without re-reading the token.
#[derive(Debug, Clone, Copy)]
pub struct AuthUser {
    pub user_id: i64,
    pub role: UserRole,
}

impl AuthUser {
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }
}
