use std::fmt;

use crate::credential::errors::UsernameError;

/// Stored credential.
///
/// Created at registration and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credential {
    pub name: Username,
    pub password_hash: String,
}

impl Credential {
    pub fn new(name: Username, password_hash: String) -> Self {
        Self {
            name,
            password_hash,
        }
    }
}

/// Username value type
///
/// Case-sensitive, non-blank, at most 64 characters and free of control
/// characters. Surrounding whitespace is kept as given.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Username(String);

impl Username {
    const MAX_LENGTH: usize = 64;

    /// Create a new valid username.
    ///
    /// # Arguments
    /// * `username` - Raw username string
    ///
    /// # Returns
    /// Validated Username value object
    ///
    /// # Errors
    /// * `Empty` - Username is empty or only whitespace
    /// * `TooLong` - Username longer than 64 characters
    /// * `ControlCharacters` - Username contains a control character
    pub fn new(username: String) -> Result<Self, UsernameError> {
        if username.trim().is_empty() {
            return Err(UsernameError::Empty);
        }

        let length = username.chars().count();
        if length > Self::MAX_LENGTH {
            return Err(UsernameError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            });
        }

        if username.chars().any(char::is_control) {
            return Err(UsernameError::ControlCharacters);
        }

        Ok(Self(username))
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

/// Command to register a new credential
#[derive(Debug)]
pub struct RegisterCommand {
    pub name: Username,
    pub password: String,
}

impl RegisterCommand {
    pub fn new(name: Username, password: String) -> Self {
        Self { name, password }
    }
}

/// Command to exchange a name and password for a token
#[derive(Debug)]
pub struct LoginCommand {
    pub name: Username,
    pub password: String,
}

impl LoginCommand {
    pub fn new(name: Username, password: String) -> Self {
        Self { name, password }
    }
}
