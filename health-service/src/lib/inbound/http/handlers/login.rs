use auth::AuthenticationResult;
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
use crate::domain::user::models::LoginCommand;
use crate::domain::user::models::Password;
use crate::domain::user::ports::AuthServicePort;
use crate::inbound::http::router::AppState;
use crate::user::errors::UserError;

pub async fn login<AS, ES>(
    State(state): State<AppState<AS, ES>>,
    body: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<ApiSuccess<LoginResponseData>, ApiError>
where
    AS: AuthServicePort,
    ES: EntryServicePort,
{
    // Unreadable bodies get the same answer as wrong credentials.
    let Json(body) = body.map_err(|rejection| {
        tracing::debug!(reason = %rejection.body_text(), "Login body rejected");
        ApiError::from(UserError::InvalidCredentials)
    })?;

    state
        .auth_service
        .login(body.try_into_command()?)
        .await
        .map_err(ApiError::from)
        .map(|ref result| ApiSuccess::new(StatusCode::OK, result.into()))
}

/// HTTP request body for login (raw JSON). Absent fields read as empty.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct LoginRequest {
    email: String,
    password: String,
}

impl LoginRequest {
    /// Malformed credentials are reported like wrong ones.
    fn try_into_command(self) -> Result<LoginCommand, UserError> {
        let email = EmailAddress::new(self.email).map_err(|_| UserError::InvalidCredentials)?;
        let password =
            Password::new(self.password).map_err(|_| UserError::InvalidCredentials)?;
        Ok(LoginCommand::new(email, password))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponseData {
    pub token: String,
    pub expires_at: i64,
}

impl From<&AuthenticationResult> for LoginResponseData {
    fn from(result: &AuthenticationResult) -> Self {
        Self {
            token: result.access_token.clone(),
            expires_at: result.expires_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_credentials_are_invalid_credentials() {
        let request: LoginRequest = serde_json::from_str(r#"{"password":"pw"}"#).unwrap();
        assert!(matches!(
            request.try_into_command(),
            Err(UserError::InvalidCredentials)
        ));

        let request: LoginRequest = serde_json::from_str(r#"{"email":"a@b.com"}"#).unwrap();
        assert!(matches!(
            request.try_into_command(),
            Err(UserError::InvalidCredentials)
        ));
    }
}
