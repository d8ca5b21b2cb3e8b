use std::fmt;
use std::str::FromStr;

use chrono::DateTime;
use chrono::Utc;
use secrecy::ExposeSecret;
use secrecy::SecretString;
use uuid::Uuid;

use crate::user::errors::EmailError;
use crate::user::errors::PasswordPolicyError;
use crate::user::errors::UserIdError;
use crate::user::errors::UsernameError;

/// User aggregate entity.
///
/// Represents a registered user. Only the hash of the password is kept.
#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub username: Username,
    pub email: EmailAddress,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// User unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(pub Uuid);

impl UserId {
    /// Generate a new random user ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a user ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, UserIdError> {
        Uuid::parse_str(s)
            .map(UserId)
            .map_err(|e| UserIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Username value type
///
/// Any non-blank text, stored trimmed. Uniqueness is enforced by the store.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Username(String);

impl Username {
    /// # Errors
    /// * `Empty` - Username is empty or whitespace
    pub fn new(username: String) -> Result<Self, UsernameError> {
        let username = username.trim();
        if username.is_empty() {
            return Err(UsernameError::Empty);
        }
        Ok(Self(username.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Email address type
///
/// Stored trimmed and lowercased so lookups are case-insensitive.
/// Format is checked with an RFC 5322 parser.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new normalized email address.
    ///
    /// # Errors
    /// * `Empty` - Email is empty or whitespace
    /// * `InvalidFormat` - Email does not conform to RFC 5322
    pub fn new(email: String) -> Result<Self, EmailError> {
        let email = email.trim().to_lowercase();
        if email.is_empty() {
            return Err(EmailError::Empty);
        }

        email_address::EmailAddress::from_str(&email)
            .map(|_| EmailAddress(email))
            .map_err(|e| EmailError::InvalidFormat(e.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Raw password supplied by the caller.
///
/// Redacted in `Debug` output and zeroized on drop.
#[derive(Debug)]
pub struct Password(SecretString);

impl Password {
    /// # Errors
    /// * `Empty` - Password is empty
    pub fn new(password: String) -> Result<Self, PasswordPolicyError> {
        if password.is_empty() {
            return Err(PasswordPolicyError::Empty);
        }
        Ok(Self(SecretString::new(password)))
    }

    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

/// Command to register a new user with domain types
#[derive(Debug)]
pub struct SignupCommand {
    pub username: Username,
    pub email: EmailAddress,
    pub password: Password,
}

impl SignupCommand {
    pub fn new(username: Username, email: EmailAddress, password: Password) -> Self {
        Self {
            username,
            email,
            password,
        }
    }
}

/// Command to exchange credentials for an access token
#[derive(Debug)]
pub struct LoginCommand {
    pub email: EmailAddress,
    pub password: Password,
}

impl LoginCommand {
    pub fn new(email: EmailAddress, password: Password) -> Self {
        Self { email, password }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_username_rules() {
        assert!(Username::new("alice".to_string()).is_ok());
        assert!(Username::new("a".to_string()).is_ok());
        assert_eq!(Username::new(String::new()), Err(UsernameError::Empty));
        assert_eq!(Username::new("   ".to_string()), Err(UsernameError::Empty));
    }

    #[test]
    fn test_username_accepts_free_text() {
        for name in ["john.doe", "Alice Smith", "bob@home", "x".repeat(100).as_str()] {
            assert_eq!(Username::new(name.to_string()).unwrap().as_str(), name);
        }
        assert_eq!(Username::new("  carol ".to_string()).unwrap().as_str(), "carol");
    }

    #[test]
    fn test_email_is_normalized() {
        let email = EmailAddress::new("  Alice@Example.COM ".to_string()).unwrap();
        assert_eq!(email.as_str(), "alice@example.com");
        assert_eq!(email, EmailAddress::new("alice@example.com".to_string()).unwrap());
    }

    #[test]
    fn test_email_rejects_empty_and_invalid() {
        assert_eq!(EmailAddress::new("   ".to_string()), Err(EmailError::Empty));
        assert!(matches!(
            EmailAddress::new("not-an-email".to_string()),
            Err(EmailError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_password_is_redacted() {
        let password = Password::new("pw123".to_string()).unwrap();
        assert_eq!(password.expose(), "pw123");
        assert!(!format!("{:?}", password).contains("pw123"));
        assert!(Password::new(String::new()).is_err());
    }

    #[test]
    fn test_user_id_round_trip() {
        let id = UserId::new();
        assert_eq!(UserId::from_string(&id.to_string()).unwrap(), id);
        assert!(UserId::from_string("nope").is_err());
    }
}
