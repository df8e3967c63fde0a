use async_trait::async_trait;

use crate::credential::errors::LoginError;
use crate::credential::errors::RegistrationError;
use crate::credential::errors::StoreError;
use crate::credential::models::Credential;
use crate::credential::models::LoginCommand;
use crate::credential::models::RegisterCommand;
use crate::credential::models::Username;

/// Port for credential domain service operations.
#[async_trait]
pub trait CredentialServicePort: Send + Sync + 'static {
    /// Register a new credential.
    ///
    /// # Arguments
    /// * `command` - Validated name and plaintext password
    ///
    /// # Returns
    /// Unit on success
    ///
    /// # Errors
    /// * `EmptyPassword` - Password is empty
    /// * `DuplicateName` - Name is already registered
    /// * `Password` - Hashing failed
    /// * `Store` - Store operation failed
    async fn register(&self, command: RegisterCommand) -> Result<(), RegistrationError>;

    /// Verify a name and password and issue a token for the name.
    ///
    /// # Arguments
    /// * `command` - Name and plaintext password
    ///
    /// # Returns
    /// Signed token string
    ///
    /// # Errors
    /// * `UnknownUser` - No credential with this name
    /// * `BadPassword` - Password does not match
    /// * `Token` - Token issuance failed
    /// * `Store` - Store operation failed
    async fn login(&self, command: LoginCommand) -> Result<String, LoginError>;
}

/// Persistence operations for credentials.
///
/// Implementations must enforce name uniqueness themselves.
#[async_trait]
pub trait CredentialRepository: Send + Sync + 'static {
    /// Retrieve credential by name.
    ///
    /// # Returns
    /// Optional credential (None if not found)
    ///
    /// # Errors
    /// * `Database` - Store operation failed
    async fn find_by_name(&self, name: &Username) -> Result<Option<Credential>, StoreError>;

    /// Persist a new credential.
    ///
    /// # Errors
    /// * `UniqueViolation` - Name is already taken
    /// * `Database` - Store operation failed
    async fn save(&self, credential: Credential) -> Result<(), StoreError>;
}
