use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::errors::TokenError;

/// Issues and validates signed, expiring tokens.
///
/// Tokens are compact HS256 JWTs. The codec holds no key material: the
/// signing secret is passed to every call, so one codec serves any number of
/// secrets and there is nothing mutable to share between requests.
///
/// Signature checks go through jsonwebtoken's HMAC verify, which compares
/// MACs in constant time.
pub struct TokenCodec {
    algorithm: Algorithm,
}

impl TokenCodec {
    pub fn new() -> Self {
        Self {
            algorithm: Algorithm::HS256,
        }
    }

    /// Issue a token for `subject` valid for `ttl` from now.
    ///
    /// # Arguments
    /// * `subject` - Identity carried by the token
    /// * `secret` - Symmetric signing secret
    /// * `ttl` - Token lifetime, at least one second
    ///
    /// # Returns
    /// URL-safe token string
    ///
    /// # Errors
    /// * `InvalidTtl` - `ttl` is shorter than one second
    /// * `TtlOutOfRange` - `ttl` pushes the expiry past the representable range
    /// * `EncodingFailed` - Token encoding failed
    pub fn issue(&self, subject: &str, secret: &[u8], ttl: Duration) -> Result<String, TokenError> {
        self.issue_at(subject, secret, ttl, Utc::now())
    }

    /// Issue a token as if the current time were `now`.
    pub fn issue_at(
        &self,
        subject: &str,
        secret: &[u8],
        ttl: Duration,
        now: DateTime<Utc>,
    ) -> Result<String, TokenError> {
        if ttl.num_seconds() < 1 {
            return Err(TokenError::InvalidTtl(ttl.num_seconds()));
        }

        let expires_at = now
            .checked_add_signed(ttl)
            .ok_or(TokenError::TtlOutOfRange(ttl.num_seconds()))?;
        let claims = Claims::new(subject, now, expires_at);

        encode(
            &Header::new(self.algorithm),
            &claims,
            &EncodingKey::from_secret(secret),
        )
        .map_err(|e| TokenError::EncodingFailed(e.to_string()))
    }

    /// Verify the signature of `token` and check that it has not expired.
    ///
    /// # Errors
    /// * `InvalidToken` - Bad signature, malformed structure or missing claims
    /// * `TokenExpired` - Signature is good but the token is past `exp`
    pub fn validate(&self, token: &str, secret: &[u8]) -> Result<Claims, TokenError> {
        self.validate_at(token, secret, Utc::now())
    }

    /// Validate `token` as if the current time were `now`.
    pub fn validate_at(
        &self,
        token: &str,
        secret: &[u8],
        now: DateTime<Utc>,
    ) -> Result<Claims, TokenError> {
        let mut validation = Validation::new(self.algorithm);
        // Expiry is checked below without jsonwebtoken's leeway.
        validation.validate_exp = false;
        validation.set_required_spec_claims(&["exp", "sub"]);

        let claims = decode::<Claims>(token, &DecodingKey::from_secret(secret), &validation)
            .map_err(|e| TokenError::InvalidToken(e.to_string()))?
            .claims;

        if claims.is_expired(now.timestamp()) {
            return Err(TokenError::TokenExpired);
        }

        Ok(claims)
    }

    /// True when `token` cannot be used right now.
    ///
    /// Any validation failure counts, a forged or malformed token included.
    /// Use [`TokenCodec::validate`] to tell the causes apart.
    pub fn is_expired(&self, token: &str, secret: &[u8]) -> bool {
        self.validate(token, secret).is_err()
    }
}

impl Default for TokenCodec {
    fn default() -> Self {
        Self::new()
    }
}
