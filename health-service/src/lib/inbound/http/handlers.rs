use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;
use thiserror::Error;

use crate::domain::entry::errors::EntryError;
use crate::domain::entry::models::HealthEntry;
use crate::user::errors::UserError;

pub mod list_entries;
pub mod login;
pub mod signup;
pub mod submit_entry;

pub use list_entries::list_entries;
pub use login::login;
pub use signup::signup;
pub use submit_entry::submit_entry;

/// Body returned for every internal failure; the cause is only logged.
pub const SERVER_ERROR_MESSAGE: &str = "Server error";

#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize>(StatusCode, Json<T>);

impl<T: Serialize> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(data))
    }
}

impl<T: Serialize> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Internal server error: {0}")]
    InternalServerError(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            ApiError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg),
            ApiError::InternalServerError(detail) => {
                tracing::error!(error = %detail, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    SERVER_ERROR_MESSAGE.to_string(),
                )
            }
        };

        let body = Json(serde_json::json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::InvalidUsername(_)
            | UserError::InvalidEmail(_)
            | UserError::InvalidPassword(_)
            | UserError::EmailAlreadyExists(_)
            | UserError::UsernameAlreadyExists(_)
            | UserError::InvalidCredentials => ApiError::BadRequest(err.to_string()),
            UserError::Password(_)
            | UserError::Token(_)
            | UserError::DatabaseError(_)
            | UserError::Unknown(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

impl From<EntryError> for ApiError {
    fn from(err: EntryError) -> Self {
        match err {
            EntryError::InvalidSleepHours(_)
            | EntryError::InvalidWaterIntake(_)
            | EntryError::InvalidMood(_)
            | EntryError::MissingField(_) => ApiError::BadRequest(err.to_string()),
            EntryError::DatabaseError(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

/// JSON view of a health entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryData {
    pub id: String,
    pub sleep_hours: f64,
    pub water_intake: f64,
    pub mood: String,
    pub created_at: DateTime<Utc>,
}

impl From<&HealthEntry> for EntryData {
    fn from(entry: &HealthEntry) -> Self {
        Self {
            id: entry.id.to_string(),
            sleep_hours: entry.sleep_hours.value(),
            water_intake: entry.water_intake.value(),
            mood: entry.mood.as_str().to_string(),
            created_at: entry.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use http_body_util::BodyExt;

    use super::*;
    use crate::domain::user::errors::EmailError;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_internal_error_hides_detail() {
        let response =
            ApiError::from(UserError::DatabaseError("connection refused".to_string()))
                .into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({ "error": "Server error" })
        );
    }

    #[tokio::test]
    async fn test_conflict_and_credentials_are_bad_request() {
        let response =
            ApiError::from(UserError::EmailAlreadyExists("a@b.com".to_string())).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({ "error": "User already exists" })
        );

        let response = ApiError::from(UserError::InvalidCredentials).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({ "error": "Invalid credentials" })
        );
    }

    #[test]
    fn test_validation_maps_to_bad_request() {
        assert!(matches!(
            ApiError::from(UserError::InvalidEmail(EmailError::Empty)),
            ApiError::BadRequest(_)
        ));
        assert!(matches!(
            ApiError::from(EntryError::MissingField("mood")),
            ApiError::BadRequest(_)
        ));
        assert!(matches!(
            ApiError::from(EntryError::DatabaseError("down".to_string())),
            ApiError::InternalServerError(_)
        ));
    }
}
