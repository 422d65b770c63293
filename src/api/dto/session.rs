//! DTOs for session endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::{NewSession, Session, SessionUpdate};
use crate::error::AppError;

/// Request body for creating a session.
///
/// Fields are optional at the serde layer so that a missing field surfaces as
/// a 400 with a field-level message instead of a body deserialization failure;
/// presence is enforced by the `required` validators.
#[derive(Debug, Deserialize, Validate)]
pub struct SessionRequest {
    #[validate(
        required(message = "Session title can't be null"),
        length(min = 1, message = "Session title can't be null")
    )]
    pub title: Option<String>,

    pub description: Option<String>,

    #[validate(required(message = "Session start date can't be null"))]
    pub start_date: Option<DateTime<Utc>>,

    #[validate(required(message = "Session end date can't be null"))]
    pub end_date: Option<DateTime<Utc>>,

    #[validate(
        required(message = "Session organizer can't be null"),
        range(min = 1, message = "Organizer id must be positive")
    )]
    pub organizer_id: Option<i64>,
}

impl SessionRequest {
    /// Validates the payload and converts it into a [`NewSession`].
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] with one entry per failed field.
    pub fn into_new_session(self) -> Result<NewSession, AppError> {
        self.validate()?;

        let (Some(title), Some(start_date), Some(end_date), Some(organizer_id)) =
            (self.title, self.start_date, self.end_date, self.organizer_id)
        else {
            // Unreachable after the required validators, kept as a guard.
            return Err(AppError::validation(vec![
                "payload: Missing required fields".to_string(),
            ]));
        };

        validate_date_order(start_date, end_date)?;

        Ok(NewSession {
            title,
            description: self.description,
            start_date,
            end_date,
            organizer_id,
        })
    }
}

/// Request body for replacing a session's mutable fields.
///
/// Same validation rules as [`SessionRequest`]; the organizer reference is
/// fixed at creation time and cannot be changed here.
#[derive(Debug, Deserialize, Validate)]
pub struct SessionUpdateRequest {
    #[validate(
        required(message = "Session title can't be null"),
        length(min = 1, message = "Session title can't be null")
    )]
    pub title: Option<String>,

    pub description: Option<String>,

    #[validate(required(message = "Session start date can't be null"))]
    pub start_date: Option<DateTime<Utc>>,

    #[validate(required(message = "Session end date can't be null"))]
    pub end_date: Option<DateTime<Utc>>,
}

impl SessionUpdateRequest {
    /// Validates the payload and converts it into a [`SessionUpdate`].
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] with one entry per failed field.
    pub fn into_update(self) -> Result<SessionUpdate, AppError> {
        self.validate()?;

        let (Some(title), Some(start_date), Some(end_date)) =
            (self.title, self.start_date, self.end_date)
        else {
            return Err(AppError::validation(vec![
                "payload: Missing required fields".to_string(),
            ]));
        };

        validate_date_order(start_date, end_date)?;

        Ok(SessionUpdate {
            title,
            description: self.description,
            start_date,
            end_date,
        })
    }
}

fn validate_date_order(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<(), AppError> {
    if end <= start {
        return Err(AppError::validation(vec![
            "end_date: End date must be after start date".to_string(),
        ]));
    }
    Ok(())
}

/// JSON representation of a session returned to clients.
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub organizer_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Session> for SessionResponse {
    fn from(session: Session) -> Self {
        SessionResponse {
            id: session.id,
            title: session.title,
            description: session.description,
            start_date: session.start_date,
            end_date: session.end_date,
            organizer_id: session.organizer_id,
            created_at: session.created_at,
            updated_at: session.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn valid_request() -> SessionRequest {
        SessionRequest {
            title: Some("Budget vote".to_string()),
            description: Some("Quarterly budget".to_string()),
            start_date: Some(Utc::now()),
            end_date: Some(Utc::now() + Duration::hours(2)),
            organizer_id: Some(7),
        }
    }

    #[test]
    fn test_valid_request_converts() {
        let new_session = valid_request().into_new_session().unwrap();
        assert_eq!(new_session.title, "Budget vote");
        assert_eq!(new_session.organizer_id, 7);
    }

    #[test]
    fn test_missing_title_is_rejected() {
        let request = SessionRequest {
            title: None,
            ..valid_request()
        };

        let err = request.into_new_session().unwrap_err();
        match err {
            AppError::Validation { errors, .. } => {
                assert!(errors.iter().any(|e| e.contains("title")), "{errors:?}");
            }
            other => panic!("expected Validation, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_title_is_rejected() {
        let request = SessionRequest {
            title: Some(String::new()),
            ..valid_request()
        };

        assert!(request.into_new_session().is_err());
    }

    #[test]
    fn test_end_before_start_is_rejected() {
        let now = Utc::now();
        let request = SessionRequest {
            start_date: Some(now),
            end_date: Some(now - Duration::hours(1)),
            ..valid_request()
        };

        let err = request.into_new_session().unwrap_err();
        match err {
            AppError::Validation { errors, .. } => {
                assert!(errors.iter().any(|e| e.contains("end_date")), "{errors:?}");
            }
            other => panic!("expected Validation, got {other:?}"),
        }
    }

    #[test]
    fn test_non_positive_organizer_is_rejected() {
        let request = SessionRequest {
            organizer_id: Some(0),
            ..valid_request()
        };

        assert!(request.into_new_session().is_err());
    }

    #[test]
    fn test_empty_body_collects_all_field_errors() {
        let request: SessionRequest = serde_json::from_str("{}").unwrap();

        let err = request.into_new_session().unwrap_err();
        match err {
            AppError::Validation { errors, .. } => {
                assert!(errors.iter().any(|e| e.starts_with("title:")));
                assert!(errors.iter().any(|e| e.starts_with("start_date:")));
                assert!(errors.iter().any(|e| e.starts_with("end_date:")));
                assert!(errors.iter().any(|e| e.starts_with("organizer_id:")));
            }
            other => panic!("expected Validation, got {other:?}"),
        }
    }

    #[test]
    fn test_update_request_converts() {
        let request = SessionUpdateRequest {
            title: Some("Renamed".to_string()),
            description: None,
            start_date: Some(Utc::now()),
            end_date: Some(Utc::now() + Duration::hours(1)),
        };

        let update = request.into_update().unwrap();
        assert_eq!(update.title, "Renamed");
    }

    #[test]
    fn test_session_response_projection() {
        let session = Session {
            id: 3,
            title: "Budget vote".to_string(),
            description: None,
            start_date: Utc::now(),
            end_date: Utc::now() + Duration::hours(2),
            organizer_id: 7,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let response = SessionResponse::from(session);
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["id"], 3);
        assert_eq!(json["title"], "Budget vote");
        assert_eq!(json["organizer_id"], 7);
    }
}
