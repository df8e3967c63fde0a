use std::sync::Arc;

use async_trait::async_trait;
use auth::Authenticator;

use crate::credential::errors::LoginError;
use crate::credential::errors::RegistrationError;
use crate::credential::models::Credential;
use crate::credential::models::LoginCommand;
use crate::credential::models::RegisterCommand;
use crate::credential::ports::CredentialRepository;
use crate::credential::ports::CredentialServicePort;

/// Domain service implementation for registration and login.
///
/// Holds no state of its own beyond the injected collaborators; every call is
/// independent.
pub struct CredentialService<CR>
where
    CR: CredentialRepository,
{
    repository: Arc<CR>,
    authenticator: Arc<Authenticator>,
}

impl<CR> CredentialService<CR>
where
    CR: CredentialRepository,
{
    /// Create a new credential service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - Credential store implementation
    /// * `authenticator` - Password hashing and token issuance with the configured secret
    pub fn new(repository: Arc<CR>, authenticator: Arc<Authenticator>) -> Self {
        Self {
            repository,
            authenticator,
        }
    }
}

#[async_trait]
impl<CR> CredentialServicePort for CredentialService<CR>
where
    CR: CredentialRepository,
{
    async fn register(&self, command: RegisterCommand) -> Result<(), RegistrationError> {
        if command.password.is_empty() {
            return Err(RegistrationError::EmptyPassword);
        }

        if self.repository.find_by_name(&command.name).await?.is_some() {
            return Err(RegistrationError::DuplicateName(command.name.to_string()));
        }

        let password_hash = self.authenticator.hash_password(&command.password)?;
        let credential = Credential::new(command.name, password_hash);
        let name = credential.name.to_string();

        // A concurrent registration can still win between lookup and save;
        // the store's UniqueViolation converts to DuplicateName.
        self.repository.save(credential).await?;

        tracing::info!(name = %name, "Credential registered");

        Ok(())
    }

    async fn login(&self, command: LoginCommand) -> Result<String, LoginError> {
        let credential = self
            .repository
            .find_by_name(&command.name)
            .await?
            .ok_or_else(|| LoginError::UnknownUser(command.name.to_string()))?;

        if !self
            .authenticator
            .verify_password(&command.password, &credential.password_hash)
        {
            tracing::debug!(name = %credential.name, "Password mismatch");
            return Err(LoginError::BadPassword);
        }

        let token = self.authenticator.issue_token(credential.name.as_str())?;

        tracing::info!(name = %credential.name, "Token issued");

        Ok(token)
    }
}
