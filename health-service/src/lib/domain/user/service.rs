use std::sync::Arc;

use async_trait::async_trait;
use auth::AuthenticationError;
use auth::AuthenticationResult;
use auth::Authenticator;
use chrono::Utc;
use tokio::task;

use crate::domain::user::models::LoginCommand;
use crate::domain::user::models::SignupCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::user::errors::UserError;
use crate::user::ports::AuthServicePort;
use crate::user::ports::UserRepository;

/// Domain service implementation for signup and login.
///
/// Argon2 work runs on the blocking thread pool so request tasks never stall
/// the async executor.
pub struct AuthService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    authenticator: Arc<Authenticator>,
}

impl<UR> AuthService<UR>
where
    UR: UserRepository,
{
    /// Create a new auth service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - Credential store implementation
    /// * `authenticator` - Shared hasher, signing key and token lifetime
    pub fn new(repository: Arc<UR>, authenticator: Arc<Authenticator>) -> Self {
        Self {
            repository,
            authenticator,
        }
    }
}

#[async_trait]
impl<UR> AuthServicePort for AuthService<UR>
where
    UR: UserRepository,
{
    async fn signup(&self, command: SignupCommand) -> Result<User, UserError> {
        if self
            .repository
            .find_by_email(&command.email)
            .await?
            .is_some()
        {
            return Err(UserError::EmailAlreadyExists(command.email.to_string()));
        }

        let authenticator = Arc::clone(&self.authenticator);
        let password = command.password;
        let password_hash =
            task::spawn_blocking(move || authenticator.hash_password(password.expose())).await??;

        let user = User {
            id: UserId::new(),
            username: command.username,
            email: command.email,
            password_hash,
            created_at: Utc::now(),
        };

        let created_user = self.repository.create(user).await?;

        tracing::info!(
            user_id = %created_user.id,
            username = %created_user.username,
            "User signed up"
        );

        Ok(created_user)
    }

    async fn login(&self, command: LoginCommand) -> Result<AuthenticationResult, UserError> {
        let authenticator = Arc::clone(&self.authenticator);
        let password = command.password;

        let Some(user) = self.repository.find_by_email(&command.email).await? else {
            // Spend one hash so an unknown email costs about as much as a wrong password.
            task::spawn_blocking(move || authenticator.hash_password(password.expose()))
                .await??;
            tracing::debug!("Login rejected: unknown email");
            return Err(UserError::InvalidCredentials);
        };

        let user_id = user.id;
        let result = task::spawn_blocking(move || {
            authenticator.authenticate(
                password.expose(),
                &user.password_hash,
                user.id,
                user.email.as_str(),
            )
        })
        .await?;

        match result {
            Ok(token) => {
                tracing::info!(user_id = %user_id, "User logged in");
                Ok(token)
            }
            Err(AuthenticationError::InvalidCredentials) => {
                tracing::debug!(user_id = %user_id, "Login rejected: password mismatch");
                Err(UserError::InvalidCredentials)
            }
            Err(AuthenticationError::PasswordError(e)) => Err(UserError::Password(e)),
            Err(AuthenticationError::JwtError(e)) => Err(UserError::Token(e)),
        }
    }
}
