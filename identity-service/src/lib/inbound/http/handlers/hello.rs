use axum::http::StatusCode;
use serde::Serialize;

use super::ApiSuccess;
use crate::inbound::http::middleware::AuthenticatedIdentity;

/// Open to everyone; reports who the middleware decided the caller is.
pub async fn hello(identity: AuthenticatedIdentity) -> ApiSuccess<HelloResponseData> {
    ApiSuccess::new(
        StatusCode::OK,
        HelloResponseData {
            message: "happy_new_year".to_string(),
            authenticated: identity.authenticated,
            subject: identity.authenticated.then_some(identity.subject),
        },
    )
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HelloResponseData {
    pub message: String,
    pub authenticated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
}
