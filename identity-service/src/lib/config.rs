use std::env;

use auth::TokenSettings;
use config::Config as ConfigBuilder;
use config::ConfigError;
use config::Environment;
use config::File;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Absent means credentials are kept in memory.
    #[serde(default)]
    pub database: Option<DatabaseConfig>,
    pub server: ServerConfig,
    pub jwt: JwtConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    #[serde(default = "DatabaseConfig::default_max_connections")]
    pub max_connections: u32,
}

impl DatabaseConfig {
    fn default_max_connections() -> u32 {
        5
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub http_port: u16,
}

#[derive(Deserialize, Clone)]
pub struct JwtConfig {
    pub secret: String,
    #[serde(default = "JwtConfig::default_expiration_seconds")]
    pub expiration_seconds: i64,
}

impl JwtConfig {
    fn default_expiration_seconds() -> i64 {
        TokenSettings::DEFAULT_TTL_SECONDS
    }

    /// Immutable token settings handed to the authenticator.
    pub fn token_settings(&self) -> Result<TokenSettings, ConfigError> {
        let ttl = chrono::Duration::try_seconds(self.expiration_seconds).ok_or_else(|| {
            ConfigError::Message(format!(
                "jwt.expiration_seconds is out of range, got {}",
                self.expiration_seconds
            ))
        })?;

        Ok(TokenSettings::new(self.secret.as_bytes()).with_ttl(ttl))
    }
}

impl std::fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"<redacted>")
            .field("expiration_seconds", &self.expiration_seconds)
            .finish()
    }
}

impl Config {
    /// Load configuration from files with environment variable overrides
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (JWT__SECRET, SERVER__HTTP_PORT, DATABASE__URL, etc.)
    /// 2. Environment-specific config file (config/{environment}.toml)
    /// 3. Default config file (config/default.toml)
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let configuration = ConfigBuilder::builder()
            // Start with default configuration
            .add_source(File::with_name("config/default").required(false))
            // Layer on environment-specific configuration
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Layer on environment variables (with __ as separator)
            // Example: JWT__SECRET=... overrides jwt.secret
            .add_source(Environment::default().separator("__"))
            .build()?;

        let config: Config = configuration.try_deserialize()?;
        config.validate()?;

        Ok(config)
    }

    /// Reject settings the service cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.jwt.secret.is_empty() {
            return Err(ConfigError::Message(
                "jwt.secret must not be empty".to_string(),
            ));
        }

        if self.jwt.expiration_seconds < 1 {
            return Err(ConfigError::Message(format!(
                "jwt.expiration_seconds must be positive, got {}",
                self.jwt.expiration_seconds
            )));
        }

        if self.jwt.expiration_seconds > TokenSettings::MAX_TTL_SECONDS {
            return Err(ConfigError::Message(format!(
                "jwt.expiration_seconds must be at most {}, got {}",
                TokenSettings::MAX_TTL_SECONDS,
                self.jwt.expiration_seconds
            )));
        }

        Ok(())
    }
}
