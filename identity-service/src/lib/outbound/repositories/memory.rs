use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::credential::errors::StoreError;
use crate::domain::credential::models::Credential;
use crate::domain::credential::models::Username;
use crate::domain::credential::ports::CredentialRepository;

/// Process-local credential store.
///
/// Used when no database is configured and by the HTTP tests. Contents are
/// lost on restart.
#[derive(Default)]
pub struct InMemoryCredentialRepository {
    credentials: RwLock<HashMap<String, Credential>>,
}

impl InMemoryCredentialRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.credentials.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.credentials.read().await.is_empty()
    }
}

#[async_trait]
impl CredentialRepository for InMemoryCredentialRepository {
    async fn find_by_name(&self, name: &Username) -> Result<Option<Credential>, StoreError> {
        Ok(self.credentials.read().await.get(name.as_str()).cloned())
    }

    async fn save(&self, credential: Credential) -> Result<(), StoreError> {
        // Check and insert under one write guard.
        let mut credentials = self.credentials.write().await;
        let key = credential.name.as_str().to_string();

        if credentials.contains_key(&key) {
            return Err(StoreError::UniqueViolation(key));
        }

        credentials.insert(key, credential);
        Ok(())
    }
}
