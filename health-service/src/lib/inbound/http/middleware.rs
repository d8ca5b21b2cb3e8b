use std::sync::Arc;

use auth::Authenticator;
use axum::extract::Request;
use axum::extract::State;
use axum::http::header;
use axum::http::HeaderMap;
use axum::middleware::Next;
use axum::response::Response;
use thiserror::Error;

use super::handlers::ApiError;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::UserId;

/// Identity of the caller, inserted into request extensions by `require_auth`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthContext {
    pub user_id: UserId,
    pub email: EmailAddress,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthorizationError {
    #[error("Access token missing")]
    MissingToken,

    #[error("Invalid token")]
    Unauthorized,
}

impl From<AuthorizationError> for ApiError {
    fn from(err: AuthorizationError) -> Self {
        match err {
            AuthorizationError::MissingToken => ApiError::Unauthorized(err.to_string()),
            AuthorizationError::Unauthorized => ApiError::Forbidden(err.to_string()),
        }
    }
}

/// Middleware that validates the bearer token and adds the caller to request extensions
pub async fn require_auth(
    State(authenticator): State<Arc<Authenticator>>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let context = authorize(&authenticator, req.headers())?;

    req.extensions_mut().insert(context);

    Ok(next.run(req).await)
}

/// Resolve the caller from the `Authorization` header.
///
/// # Errors
/// * `MissingToken` - No header, a scheme other than Bearer, or an empty token
/// * `Unauthorized` - The token failed verification or carries unusable claims
pub fn authorize(
    authenticator: &Authenticator,
    headers: &HeaderMap,
) -> Result<AuthContext, AuthorizationError> {
    let token = extract_bearer_token(headers)?;

    let claims = authenticator.validate_token(token).map_err(|e| {
        tracing::warn!(reason = %e, "Token verification failed");
        AuthorizationError::Unauthorized
    })?;

    let user_id = UserId::from_string(&claims.sub).map_err(|e| {
        tracing::warn!(error = %e, "Token subject is not a user id");
        AuthorizationError::Unauthorized
    })?;

    let email = EmailAddress::new(claims.email).map_err(|e| {
        tracing::warn!(error = %e, "Token email claim is invalid");
        AuthorizationError::Unauthorized
    })?;

    Ok(AuthContext { user_id, email })
}

fn extract_bearer_token(headers: &HeaderMap) -> Result<&str, AuthorizationError> {
    let value = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or(AuthorizationError::MissingToken)?;

    let (scheme, token) = value
        .trim()
        .split_once(' ')
        .ok_or(AuthorizationError::MissingToken)?;

    if !scheme.eq_ignore_ascii_case("bearer") {
        return Err(AuthorizationError::MissingToken);
    }

    let token = token.trim();
    if token.is_empty() {
        return Err(AuthorizationError::MissingToken);
    }

    Ok(token)
}
