//! Authentication utilities library
//!
//! Provides the stateless credential primitives used by the identity service:
//! - Password hashing (Argon2id)
//! - Signed, expiring tokens (HS256 JWT)
//! - An authenticator applying one immutable secret and lifetime
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash));
//! assert!(!hasher.verify("not_my_password", &hash));
//! ```
//!
//! ## Tokens
//! ```
//! use auth::TokenCodec;
//! use chrono::Duration;
//!
//! let codec = TokenCodec::new();
//! let secret = b"secret_key_at_least_32_bytes_long!";
//! let token = codec.issue("alice", secret, Duration::hours(1)).unwrap();
//! let claims = codec.validate(&token, secret).unwrap();
//! assert_eq!(claims.subject(), "alice");
//! ```
//!
//! ## Complete Authentication Flow
//! ```
//! use auth::{Authenticator, TokenSettings};
//!
//! let auth = Authenticator::new(TokenSettings::new("secret_key_at_least_32_bytes_long!"));
//!
//! // Register: hash password
//! let hash = auth.hash_password("password123").unwrap();
//!
//! // Login: verify and issue token
//! assert!(auth.verify_password("password123", &hash));
//! let token = auth.issue_token("alice").unwrap();
//!
//! // Every later request: validate token
//! let claims = auth.validate_token(&token).unwrap();
//! assert_eq!(claims.subject(), "alice");
//! ```

pub mod authenticator;
pub mod password;
pub mod token;

// Re-export commonly used items
pub use authenticator::Authenticator;
pub use authenticator::TokenSettings;
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use token::Claims;
pub use token::TokenCodec;
pub use token::TokenError;
