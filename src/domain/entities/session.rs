//! Session entity representing a voting session.

use chrono::{DateTime, Utc};
use std::fmt;
use std::str::FromStr;

/// A voting session with schedule and organizer metadata.
#[derive(Debug, Clone)]
pub struct Session {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub organizer_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input data for creating a new session.
#[derive(Debug, Clone)]
pub struct NewSession {
    pub title: String,
    pub description: Option<String>,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub organizer_id: i64,
}

/// Replacement data for an existing session.
///
/// The organizer cannot be reassigned after creation, so it is absent here.
#[derive(Debug, Clone)]
pub struct SessionUpdate {
    pub title: String,
    pub description: Option<String>,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
}

/// One page of sessions plus position metadata.
#[derive(Debug, Clone)]
pub struct SessionPage {
    pub items: Vec<Session>,
    pub page: u32,
    pub page_size: u32,
    pub total_items: i64,
    pub total_pages: u32,
}

/// Closed set of fields a session listing may be sorted by.
///
/// Keeping this an enum (rather than a free-form string) guarantees the
/// `ORDER BY` column is never attacker-controlled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionSort {
    #[default]
    Id,
    Title,
    StartDate,
    EndDate,
}

impl SessionSort {
    /// SQL column backing this sort key.
    pub fn column(&self) -> &'static str {
        match self {
            SessionSort::Id => "id",
            SessionSort::Title => "title",
            SessionSort::StartDate => "start_date",
            SessionSort::EndDate => "end_date",
        }
    }
}

impl FromStr for SessionSort {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "id" => Ok(SessionSort::Id),
            "title" => Ok(SessionSort::Title),
            "start_date" => Ok(SessionSort::StartDate),
            "end_date" => Ok(SessionSort::EndDate),
            other => Err(format!(
                "Unknown sort field '{other}', expected one of: id, title, start_date, end_date"
            )),
        }
    }
}

impl fmt::Display for SessionSort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

/// Sort direction for session listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    /// SQL keyword for this direction.
    pub fn keyword(&self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }
}

impl FromStr for SortDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("asc") {
            Ok(SortDirection::Asc)
        } else if s.eq_ignore_ascii_case("desc") {
            Ok(SortDirection::Desc)
        } else {
            Err(format!(
                "Unknown sort direction '{s}', expected ASC or DESC"
            ))
        }
    }
}
