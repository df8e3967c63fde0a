#![allow(dead_code)]

use std::sync::Arc;

use auth::Authenticator;
use auth::TokenCodec;
use auth::TokenSettings;
use identity_service::domain::credential::service::CredentialService;
use identity_service::inbound::http::router::create_router;
use identity_service::outbound::repositories::InMemoryCredentialRepository;
use serde_json::json;

pub const TEST_SECRET: &str = "test-secret-key-for-jwt-signing-at-least-32-bytes";

/// Test application that spawns a real server
pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub repository: Arc<InMemoryCredentialRepository>,
    pub api_client: reqwest::Client,
    pub token_codec: TokenCodec,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let repository = Arc::new(InMemoryCredentialRepository::new());
        let authenticator = Arc::new(Authenticator::new(TokenSettings::new(TEST_SECRET)));
        let credential_service = Arc::new(CredentialService::new(
            Arc::clone(&repository),
            Arc::clone(&authenticator),
        ));

        let router = create_router(credential_service, authenticator);

        // Spawn server in background
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            port,
            repository,
            api_client: reqwest::Client::new(),
            token_codec: TokenCodec::new(),
        }
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(&format!("{}{}", self.address, path))
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(&format!("{}{}", self.address, path))
    }

    /// Helper to make GET request with Bearer token
    pub fn get_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.get(path).bearer_auth(token)
    }

    /// Register a credential
    pub async fn join(&self, name: &str, password: &str) -> reqwest::Response {
        self.post("/api/v1/users/join")
            .json(&json!({ "name": name, "password": password }))
            .send()
            .await
            .expect("Failed to execute request")
    }

    /// Log in with a name and password
    pub async fn login(&self, name: &str, password: &str) -> reqwest::Response {
        self.post("/api/v1/users/login")
            .json(&json!({ "name": name, "password": password }))
            .send()
            .await
            .expect("Failed to execute request")
    }

    /// Register and log in, returning the issued token
    pub async fn token_for(&self, name: &str, password: &str) -> String {
        self.join(name, password).await;
        let body: serde_json::Value = self
            .login(name, password)
            .await
            .json()
            .await
            .expect("Failed to parse response");

        body["data"]["token"]
            .as_str()
            .expect("login response has no token")
            .to_string()
    }
}
