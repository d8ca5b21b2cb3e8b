use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::entry::ports::EntryServicePort;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::Password;
use crate::domain::user::models::SignupCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::Username;
use crate::domain::user::ports::AuthServicePort;
use crate::inbound::http::router::AppState;
use crate::user::errors::UserError;

pub async fn signup<AS, ES>(
    State(state): State<AppState<AS, ES>>,
    body: Result<Json<SignupRequest>, JsonRejection>,
) -> Result<ApiSuccess<SignupResponseData>, ApiError>
where
    AS: AuthServicePort,
    ES: EntryServicePort,
{
    let Json(body) = body?;

    state
        .auth_service
        .signup(body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref user| ApiSuccess::new(StatusCode::CREATED, user.into()))
}

/// HTTP request body for signup (raw JSON). Absent fields read as empty.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct SignupRequest {
    username: String,
    email: String,
    password: String,
}

impl SignupRequest {
    fn try_into_command(self) -> Result<SignupCommand, UserError> {
        let username = Username::new(self.username)?;
        let email = EmailAddress::new(self.email)?;
        let password = Password::new(self.password)?;
        Ok(SignupCommand::new(username, email, password))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupResponseData {
    pub message: String,
    pub user_id: String,
}

impl From<&User> for SignupResponseData {
    fn from(user: &User) -> Self {
        Self {
            message: "User created successfully".to_string(),
            user_id: user.id.to_string(),
        }
    }
}
