use std::fmt;

use chrono::Duration;

use crate::password::PasswordError;
use crate::password::PasswordHasher;
use crate::token::Claims;
use crate::token::TokenCodec;
use crate::token::TokenError;

/// Immutable token configuration: signing secret and token lifetime.
#[derive(Clone)]
pub struct TokenSettings {
    secret: Vec<u8>,
    ttl: Duration,
}

impl TokenSettings {
    pub const DEFAULT_TTL_SECONDS: i64 = 60 * 60;

    /// Longest lifetime a deployment may configure: one year.
    pub const MAX_TTL_SECONDS: i64 = 365 * 24 * 60 * 60;

    /// Create settings with the default one hour lifetime.
    pub fn new(secret: impl Into<Vec<u8>>) -> Self {
        Self {
            secret: secret.into(),
            ttl: Duration::seconds(Self::DEFAULT_TTL_SECONDS),
        }
    }

    /// Replace the token lifetime.
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn secret(&self) -> &[u8] {
        &self.secret
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }
}

impl fmt::Debug for TokenSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenSettings")
            .field("secret", &"<redacted>")
            .field("ttl", &self.ttl)
            .finish()
    }
}

/// Authentication coordinator combining password hashing and token handling.
///
/// Applies one set of [`TokenSettings`] to every token operation, handing the
/// secret to the codec explicitly on each call.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    token_codec: TokenCodec,
    settings: TokenSettings,
}

impl Authenticator {
    /// Create a new authenticator.
    ///
    /// # Arguments
    /// * `settings` - Signing secret and token lifetime
    ///
    /// # Returns
    /// Configured Authenticator instance
    pub fn new(settings: TokenSettings) -> Self {
        Self {
            password_hasher: PasswordHasher::new(),
            token_codec: TokenCodec::new(),
            settings,
        }
    }

    pub fn settings(&self) -> &TokenSettings {
        &self.settings
    }

    /// Hash a password for storage.
    ///
    /// # Errors
    /// * `HashingFailed` - Hashing operation failed
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Check a plaintext password against a stored hash.
    pub fn verify_password(&self, password: &str, stored_hash: &str) -> bool {
        self.password_hasher.verify(password, stored_hash)
    }

    /// Issue a token for `subject` with the configured secret and lifetime.
    ///
    /// # Errors
    /// * `InvalidTtl` - Configured lifetime is shorter than one second
    /// * `TtlOutOfRange` - Configured lifetime puts expiry out of range
    /// * `EncodingFailed` - Token generation failed
    pub fn issue_token(&self, subject: &str) -> Result<String, TokenError> {
        self.token_codec
            .issue(subject, self.settings.secret(), self.settings.ttl())
    }

    /// Validate and decode a token.
    ///
    /// # Errors
    /// * `InvalidToken` - Signature or structure is bad
    /// * `TokenExpired` - Token is past its expiration
    pub fn validate_token(&self, token: &str) -> Result<Claims, TokenError> {
        self.token_codec.validate(token, self.settings.secret())
    }

    /// True for any token that does not validate right now.
    pub fn is_token_expired(&self, token: &str) -> bool {
        self.token_codec.is_expired(token, self.settings.secret())
    }
}
