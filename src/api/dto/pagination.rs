//! Pagination and sorting query parameters for session listings.

use serde::{Deserialize, Serialize};

use crate::domain::entities::{SessionSort, SortDirection};
use crate::error::AppError;

/// Raw query parameters for `GET /sessions`.
///
/// All parameters arrive as strings and are parsed in [`Self::resolve`] so
/// that bad values produce the uniform 400 error body instead of an opaque
/// query rejection. Unknown `sort`/`direction` values are rejected, never
/// silently defaulted; absent parameters use the declared defaults.
#[derive(Debug, Default, Deserialize)]
pub struct ListSessionsQuery {
    #[serde(default)]
    pub page: Option<String>,

    #[serde(default)]
    pub sort: Option<String>,

    #[serde(default)]
    pub direction: Option<String>,
}

impl ListSessionsQuery {
    /// Parses and validates the query parameters.
    ///
    /// # Defaults
    ///
    /// - `page`: 1
    /// - `sort`: `id`
    /// - `direction`: `ASC`
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] collecting one entry per bad
    /// parameter.
    pub fn resolve(&self) -> Result<(u32, SessionSort, SortDirection), AppError> {
        let mut errors = Vec::new();

        let page = match &self.page {
            None => 1,
            Some(raw) => match raw.parse::<u32>() {
                Ok(p) if p >= 1 => p,
                _ => {
                    errors.push(format!("page: '{raw}' is not a positive integer"));
                    1
                }
            },
        };

        let sort = match &self.sort {
            None => SessionSort::default(),
            Some(raw) => raw.parse().unwrap_or_else(|e| {
                errors.push(format!("sort: {e}"));
                SessionSort::default()
            }),
        };

        let direction = match &self.direction {
            None => SortDirection::default(),
            Some(raw) => raw.parse().unwrap_or_else(|e| {
                errors.push(format!("direction: {e}"));
                SortDirection::default()
            }),
        };

        if !errors.is_empty() {
            return Err(AppError::validation(errors));
        }

        Ok((page, sort, direction))
    }
}

/// Position of a page within the whole collection.
#[derive(Debug, Serialize)]
pub struct PaginationMeta {
    pub page: u32,
    pub page_size: u32,
    pub total_items: i64,
    pub total_pages: u32,
}

/// One page of response items plus pagination metadata.
#[derive(Debug, Serialize)]
pub struct PagedResponse<T> {
    pub data: Vec<T>,
    pub pagination: PaginationMeta,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(
        page: Option<&str>,
        sort: Option<&str>,
        direction: Option<&str>,
    ) -> ListSessionsQuery {
        ListSessionsQuery {
            page: page.map(str::to_string),
            sort: sort.map(str::to_string),
            direction: direction.map(str::to_string),
        }
    }

    #[test]
    fn test_defaults() {
        let (page, sort, direction) = query(None, None, None).resolve().unwrap();
        assert_eq!(page, 1);
        assert_eq!(sort, SessionSort::Id);
        assert_eq!(direction, SortDirection::Asc);
    }

    #[test]
    fn test_explicit_values() {
        let (page, sort, direction) = query(Some("3"), Some("title"), Some("DESC"))
            .resolve()
            .unwrap();
        assert_eq!(page, 3);
        assert_eq!(sort, SessionSort::Title);
        assert_eq!(direction, SortDirection::Desc);
    }

    #[test]
    fn test_page_zero_is_rejected() {
        assert!(query(Some("0"), None, None).resolve().is_err());
    }

    #[test]
    fn test_page_non_numeric_is_rejected() {
        assert!(query(Some("abc"), None, None).resolve().is_err());
        assert!(query(Some("-1"), None, None).resolve().is_err());
    }

    #[test]
    fn test_unknown_sort_is_rejected_not_defaulted() {
        let err = query(None, Some("created_at"), None).resolve().unwrap_err();
        match err {
            AppError::Validation { errors, .. } => {
                assert!(errors.iter().any(|e| e.starts_with("sort:")), "{errors:?}");
            }
            other => panic!("expected Validation, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_direction_is_rejected() {
        assert!(query(None, None, Some("sideways")).resolve().is_err());
    }

    #[test]
    fn test_multiple_bad_params_collect_multiple_errors() {
        let err = query(Some("zero"), Some("nope"), Some("up"))
            .resolve()
            .unwrap_err();
        match err {
            AppError::Validation { errors, .. } => assert_eq!(errors.len(), 3),
            other => panic!("expected Validation, got {other:?}"),
        }
    }

    #[test]
    fn test_deserialization_with_absent_fields() {
        let q: ListSessionsQuery = serde_json::from_str("{}").unwrap();
        assert!(q.page.is_none());
        assert!(q.sort.is_none());
        assert!(q.direction.is_none());

        let q: ListSessionsQuery =
            serde_json::from_str(r#"{"page": "2", "sort": "title", "direction": "DESC"}"#).unwrap();
        assert_eq!(q.page.as_deref(), Some("2"));
        assert_eq!(q.sort.as_deref(), Some("title"));
        assert_eq!(q.direction.as_deref(), Some("DESC"));
    }
}
