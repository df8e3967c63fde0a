use thiserror::Error;

/// Error type for token operations.
///
/// `InvalidToken` and `TokenExpired` are kept apart so callers that care can
/// tell a forged or garbled token from one that simply ran out of time.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token lifetime must be at least one second, got {0}s")]
    InvalidTtl(i64),

    #[error("Token lifetime of {0}s puts expiry out of range")]
    TtlOutOfRange(i64),

    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    #[error("Token is invalid: {0}")]
    InvalidToken(String),

    #[error("Token is expired")]
    TokenExpired,
}
