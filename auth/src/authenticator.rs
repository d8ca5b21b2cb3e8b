use chrono::Duration;

use crate::jwt::Claims;
use crate::jwt::JwtError;
use crate::jwt::JwtHandler;
use crate::password::PasswordError;
use crate::password::PasswordHasher;

/// Authentication coordinator combining password verification and token issuance.
///
/// Holds the process-wide signing key, hashing parameters and token lifetime.
/// Built once at startup and shared read-only.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    jwt_handler: JwtHandler,
    token_ttl: Duration,
}

/// Result of successful authentication.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticationResult {
    /// Signed access token
    pub access_token: String,

    /// Expiration of the access token (Unix timestamp)
    pub expires_at: i64,
}

/// Authentication operation errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password error: {0}")]
    PasswordError(#[from] PasswordError),

    #[error("JWT error: {0}")]
    JwtError(#[from] JwtError),
}

impl Authenticator {
    /// Default lifetime of issued access tokens.
    pub const DEFAULT_TOKEN_TTL_SECONDS: i64 = 60 * 60;

    /// Create a new authenticator with default hashing parameters and a one hour token lifetime.
    ///
    /// # Arguments
    /// * `jwt_secret` - Secret key for token signing
    pub fn new(jwt_secret: &[u8]) -> Self {
        Self {
            password_hasher: PasswordHasher::new(),
            jwt_handler: JwtHandler::new(jwt_secret),
            token_ttl: Duration::seconds(Self::DEFAULT_TOKEN_TTL_SECONDS),
        }
    }

    /// Replace the password hasher (work factor).
    pub fn with_password_hasher(mut self, password_hasher: PasswordHasher) -> Self {
        self.password_hasher = password_hasher;
        self
    }

    /// Replace the lifetime of issued tokens.
    pub fn with_token_ttl(mut self, token_ttl: Duration) -> Self {
        self.token_ttl = token_ttl;
        self
    }

    pub fn token_ttl(&self) -> Duration {
        self.token_ttl
    }

    /// Hash a password for storage.
    ///
    /// # Errors
    /// * `PasswordError` - Hashing operation failed
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Verify a password against a stored hash.
    ///
    /// # Errors
    /// * `PasswordError` - The stored hash is malformed
    pub fn verify_password(&self, password: &str, stored_hash: &str) -> Result<bool, PasswordError> {
        self.password_hasher.verify(password, stored_hash)
    }

    /// Verify credentials and issue an access token.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to verify
    /// * `stored_hash` - Stored password hash
    /// * `user_id` - Identifier embedded as the token subject
    /// * `email` - Email embedded in the token
    ///
    /// # Errors
    /// * `InvalidCredentials` - Password does not match
    /// * `PasswordError` - Stored hash is malformed
    /// * `JwtError` - Token generation failed
    pub fn authenticate(
        &self,
        password: &str,
        stored_hash: &str,
        user_id: impl ToString,
        email: impl ToString,
    ) -> Result<AuthenticationResult, AuthenticationError> {
        if !self.password_hasher.verify(password, stored_hash)? {
            return Err(AuthenticationError::InvalidCredentials);
        }

        Ok(self.issue_token(user_id, email)?)
    }

    /// Issue an access token without password verification.
    ///
    /// # Errors
    /// * `JwtError` - Token generation failed
    pub fn issue_token(
        &self,
        user_id: impl ToString,
        email: impl ToString,
    ) -> Result<AuthenticationResult, JwtError> {
        let claims = Claims::for_user(user_id, email, self.token_ttl);
        let access_token = self.jwt_handler.encode(&claims)?;

        Ok(AuthenticationResult {
            access_token,
            expires_at: claims.exp,
        })
    }

    /// Validate and decode an access token.
    ///
    /// # Errors
    /// * `JwtError` - Token is malformed, wrongly signed or expired
    pub fn validate_token(&self, token: &str) -> Result<Claims, JwtError> {
        self.jwt_handler.decode(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &[u8] = b"test_secret_key_at_least_32_bytes!";

    fn authenticator() -> Authenticator {
        Authenticator::new(SECRET)
            .with_password_hasher(PasswordHasher::with_params(8 * 1024, 1, 1).unwrap())
    }

    #[test]
    fn test_authenticate_success() {
        let authenticator = authenticator();

        let password = "my_password";
        let hash = authenticator
            .hash_password(password)
            .expect("Failed to hash password");

        let result = authenticator
            .authenticate(password, &hash, "user123", "alice@example.com")
            .expect("Authentication failed");

        assert!(!result.access_token.is_empty());

        let claims = authenticator
            .validate_token(&result.access_token)
            .expect("Token validation failed");
        assert_eq!(claims.sub, "user123");
        assert_eq!(claims.email, "alice@example.com");
        assert_eq!(claims.exp, result.expires_at);
        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[test]
    fn test_authenticate_invalid_password() {
        let authenticator = authenticator();

        let hash = authenticator
            .hash_password("my_password")
            .expect("Failed to hash password");

        let result = authenticator.authenticate("wrong_password", &hash, "user123", "a@x.com");
        assert!(matches!(
            result,
            Err(AuthenticationError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_authenticate_malformed_hash() {
        let authenticator = authenticator();

        let result = authenticator.authenticate("pw", "not-a-phc-string", "user123", "a@x.com");
        assert!(matches!(
            result,
            Err(AuthenticationError::PasswordError(PasswordError::MalformedHash(_)))
        ));
    }

    #[test]
    fn test_custom_token_ttl() {
        let authenticator = authenticator().with_token_ttl(Duration::minutes(5));

        let result = authenticator.issue_token("user123", "a@x.com").unwrap();
        let claims = authenticator.validate_token(&result.access_token).unwrap();

        assert_eq!(claims.exp - claims.iat, 300);
        assert_eq!(authenticator.token_ttl(), Duration::minutes(5));
    }

    #[test]
    fn test_token_from_other_authenticator_rejected() {
        let issued = Authenticator::new(b"a_completely_different_secret_key!!")
            .issue_token("user123", "a@x.com")
            .unwrap();

        let result = authenticator().validate_token(&issued.access_token);
        assert_eq!(result, Err(JwtError::SignatureInvalid));
    }

    #[test]
    fn test_validate_invalid_token() {
        let result = authenticator().validate_token("invalid.token.here");
        assert!(matches!(result, Err(JwtError::Malformed(_))));
    }
}
