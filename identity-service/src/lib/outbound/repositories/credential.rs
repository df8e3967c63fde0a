use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::Row;

use crate::credential::errors::StoreError;
use crate::domain::credential::models::Credential;
use crate::domain::credential::models::Username;
use crate::domain::credential::ports::CredentialRepository;

/// PostgreSQL-backed credential store.
///
/// Name uniqueness is the `credentials` primary key.
pub struct PostgresCredentialRepository {
    pool: PgPool,
}

impl PostgresCredentialRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CredentialRepository for PostgresCredentialRepository {
    async fn find_by_name(&self, name: &Username) -> Result<Option<Credential>, StoreError> {
        let row = sqlx::query(
            r#"
            SELECT name, password_hash
            FROM credentials
            WHERE name = $1
            "#,
        )
        .bind(name.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| StoreError::Database(e.to_string()))?;

        match row {
            Some(r) => {
                let name: String = r
                    .try_get("name")
                    .map_err(|e| StoreError::Database(e.to_string()))?;
                let password_hash: String = r
                    .try_get("password_hash")
                    .map_err(|e| StoreError::Database(e.to_string()))?;
                let name = Username::new(name).map_err(|e| {
                    StoreError::Database(format!("Stored name failed validation: {}", e))
                })?;

                Ok(Some(Credential::new(name, password_hash)))
            }
            None => Ok(None),
        }
    }

    async fn save(&self, credential: Credential) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            INSERT INTO credentials (name, password_hash)
            VALUES ($1, $2)
            "#,
        )
        .bind(credential.name.as_str())
        .bind(&credential.password_hash)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() {
                    return StoreError::UniqueViolation(credential.name.to_string());
                }
            }
            StoreError::Database(e.to_string())
        })?;

        Ok(())
    }
}
