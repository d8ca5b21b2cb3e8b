use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Identity claims carried by an access token.
///
/// `sub` holds the user identifier; `exp` is always present so every token
/// this library issues is time-bounded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (user identifier)
    pub sub: String,

    /// Email address of the subject
    pub email: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Create claims for a user, issued now.
    ///
    /// # Arguments
    /// * `user_id` - Unique user identifier
    /// * `email` - User email address
    /// * `ttl` - Lifetime of the token
    ///
    /// # Returns
    /// Claims with `exp = iat + ttl`
    pub fn for_user(user_id: impl ToString, email: impl ToString, ttl: Duration) -> Self {
        Self::for_user_at(user_id, email, ttl, Utc::now())
    }

    /// Create claims for a user with an explicit issue time.
    ///
    /// An expiration past the representable range is clamped to the maximum.
    pub fn for_user_at(
        user_id: impl ToString,
        email: impl ToString,
        ttl: Duration,
        issued_at: DateTime<Utc>,
    ) -> Self {
        let expiration = issued_at
            .checked_add_signed(ttl)
            .unwrap_or(DateTime::<Utc>::MAX_UTC);

        Self {
            sub: user_id.to_string(),
            email: email.to_string(),
            iat: issued_at.timestamp(),
            exp: expiration.timestamp(),
        }
    }

    /// Check if token is expired.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        self.exp < current_timestamp
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn test_for_user() {
        let claims = Claims::for_user("user123", "alice@example.com", Duration::hours(1));

        assert_eq!(claims.sub, "user123");
        assert_eq!(claims.email, "alice@example.com");
        assert_eq!(claims.exp - claims.iat, 60 * 60);
    }

    #[test]
    fn test_for_user_at() {
        let issued_at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let claims = Claims::for_user_at("u1", "a@x.com", Duration::seconds(90), issued_at);

        assert_eq!(claims.iat, 1_704_067_200);
        assert_eq!(claims.exp, 1_704_067_290);
    }

    #[test]
    fn test_is_expired() {
        let issued_at = Utc.timestamp_opt(0, 0).unwrap();
        let claims = Claims::for_user_at("u1", "a@x.com", Duration::seconds(1000), issued_at);

        assert!(!claims.is_expired(999)); // Not expired
        assert!(!claims.is_expired(1000)); // Exactly at expiration
        assert!(claims.is_expired(1001)); // Expired
    }

    #[test]
    fn test_huge_ttl_saturates() {
        let claims = Claims::for_user("u1", "a@x.com", Duration::seconds(i64::MAX / 1000));

        assert_eq!(claims.exp, DateTime::<Utc>::MAX_UTC.timestamp());
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_serialized_shape() {
        let issued_at = Utc.timestamp_opt(100, 0).unwrap();
        let claims = Claims::for_user_at("u1", "a@x.com", Duration::seconds(50), issued_at);

        let json = serde_json::to_value(&claims).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"sub": "u1", "email": "a@x.com", "iat": 100, "exp": 150})
        );
    }
}
