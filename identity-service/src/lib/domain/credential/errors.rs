use thiserror::Error;

/// Error for Username validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UsernameError {
    #[error("Username must not be empty")]
    Empty,

    #[error("Username too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },

    #[error("Username contains control characters")]
    ControlCharacters,
}

/// Error surfaced by a credential store.
///
/// A uniqueness violation is reported on its own so the service can tell a
/// concurrent duplicate registration apart from an infrastructure failure.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("Credential already exists: {0}")]
    UniqueViolation(String),

    #[error("Database error: {0}")]
    Database(String),
}

/// Registration failures
#[derive(Debug, Clone, Error)]
pub enum RegistrationError {
    #[error("Invalid username: {0}")]
    InvalidName(#[from] UsernameError),

    #[error("Password must not be empty")]
    EmptyPassword,

    #[error("Username already exists: {0}")]
    DuplicateName(String),

    #[error("Password error: {0}")]
    Password(#[from] auth::PasswordError),

    #[error(transparent)]
    Store(StoreError),
}

impl From<StoreError> for RegistrationError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::UniqueViolation(name) => RegistrationError::DuplicateName(name),
            other => RegistrationError::Store(other),
        }
    }
}

/// Login failures
#[derive(Debug, Clone, Error)]
pub enum LoginError {
    #[error("User not found with username: {0}")]
    UnknownUser(String),

    #[error("Invalid password")]
    BadPassword,

    #[error("Token error: {0}")]
    Token(#[from] auth::TokenError),

    #[error(transparent)]
    Store(#[from] StoreError),
}
