use std::env;

use auth::Authenticator;
use auth::PasswordError;
use auth::PasswordHasher;
use chrono::Duration;
use config::Config as ConfigBuilder;
use config::ConfigError;
use config::Environment;
use config::File;
use secrecy::ExposeSecret;
use secrecy::SecretString;
use serde::Deserialize;

/// Database URL that selects the process-local adapters instead of Postgres.
pub const IN_MEMORY_DATABASE_URL: &str = "memory://";

const MIN_RECOMMENDED_SECRET_BYTES: usize = 32;

/// Upper bound for `jwt.ttl_seconds` (one year).
pub const MAX_TTL_SECONDS: i64 = 60 * 60 * 24 * 365;

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub jwt: JwtConfig,
    #[serde(default)]
    pub password: PasswordConfig,
}

#[derive(Debug, Deserialize)]
pub struct DatabaseConfig {
    pub url: SecretString,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_http_port")]
    pub http_port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            http_port: default_http_port(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct JwtConfig {
    pub secret: SecretString,
    #[serde(default = "default_ttl_seconds")]
    pub ttl_seconds: i64,
}

/// Argon2id work factor.
#[derive(Debug, Deserialize, Clone)]
pub struct PasswordConfig {
    #[serde(default = "default_memory_kib")]
    pub memory_kib: u32,
    #[serde(default = "default_iterations")]
    pub iterations: u32,
    #[serde(default = "default_parallelism")]
    pub parallelism: u32,
}

impl Default for PasswordConfig {
    fn default() -> Self {
        Self {
            memory_kib: default_memory_kib(),
            iterations: default_iterations(),
            parallelism: default_parallelism(),
        }
    }
}

fn default_http_port() -> u16 {
    3000
}

fn default_ttl_seconds() -> i64 {
    Authenticator::DEFAULT_TOKEN_TTL_SECONDS
}

fn default_memory_kib() -> u32 {
    PasswordHasher::DEFAULT_MEMORY_KIB
}

fn default_iterations() -> u32 {
    PasswordHasher::DEFAULT_ITERATIONS
}

fn default_parallelism() -> u32 {
    PasswordHasher::DEFAULT_PARALLELISM
}

impl Config {
    /// Load configuration from files with environment variable overrides
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (DATABASE__URL, JWT__SECRET, etc.)
    /// 2. Environment-specific config file (config/{environment}.toml)
    /// 3. Default config file (config/default.toml)
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let configuration = ConfigBuilder::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Example: JWT__SECRET=... overrides jwt.secret
            .add_source(Environment::with_prefix("").separator("__"))
            .build()?;

        let config: Config = configuration.try_deserialize()?;
        config.validate()?;

        Ok(config)
    }

    /// Reject values the service cannot start with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let secret = self.jwt.secret.expose_secret();
        if secret.is_empty() {
            return Err(ConfigError::Message("jwt.secret must not be empty".into()));
        }
        if secret.len() < MIN_RECOMMENDED_SECRET_BYTES {
            tracing::warn!(
                length = secret.len(),
                recommended = MIN_RECOMMENDED_SECRET_BYTES,
                "jwt.secret is shorter than recommended"
            );
        }

        if self.jwt.ttl_seconds <= 0 || self.jwt.ttl_seconds > MAX_TTL_SECONDS {
            return Err(ConfigError::Message(format!(
                "jwt.ttl_seconds must be in 1..={}, got {}",
                MAX_TTL_SECONDS, self.jwt.ttl_seconds
            )));
        }

        if self.database.url.expose_secret().is_empty() {
            return Err(ConfigError::Message("database.url must not be empty".into()));
        }

        Ok(())
    }

    pub fn is_in_memory(&self) -> bool {
        self.database.url.expose_secret() == IN_MEMORY_DATABASE_URL
    }

    /// Build the shared authenticator from the jwt and password sections.
    ///
    /// # Errors
    /// * `InvalidParameters` - Argon2 rejected the configured work factor
    pub fn build_authenticator(&self) -> Result<Authenticator, PasswordError> {
        let hasher = PasswordHasher::with_params(
            self.password.memory_kib,
            self.password.iterations,
            self.password.parallelism,
        )?;

        Ok(
            Authenticator::new(self.jwt.secret.expose_secret().as_bytes())
                .with_password_hasher(hasher)
                .with_token_ttl(Duration::seconds(self.jwt.ttl_seconds)),
        )
    }
}
