use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Signed token payload.
///
/// Field names follow RFC 7519 so the token stays a plain HS256 JWT.
/// Timestamps are Unix seconds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (credential name)
    pub sub: String,

    /// Issued at
    pub iat: i64,

    /// Expiration time
    pub exp: i64,
}

impl Claims {
    /// Create claims for `subject` issued at `issued_at` and expiring at `expires_at`.
    pub fn new(subject: impl ToString, issued_at: DateTime<Utc>, expires_at: DateTime<Utc>) -> Self {
        Self {
            sub: subject.to_string(),
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
        }
    }

    pub fn subject(&self) -> &str {
        &self.sub
    }

    /// Check if the token has expired at `current_timestamp`.
    ///
    /// A token is only valid strictly before its expiration second.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        current_timestamp >= self.exp
    }
}
