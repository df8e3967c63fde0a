use axum::http::StatusCode;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::inbound::http::middleware::AuthenticatedIdentity;

/// Protected route: the middleware never rejects, so the policy lives here.
pub async fn current_user(
    identity: AuthenticatedIdentity,
) -> Result<ApiSuccess<CurrentUserResponseData>, ApiError> {
    if !identity.authenticated {
        return Err(ApiError::Unauthorized(
            "Authentication required".to_string(),
        ));
    }

    Ok(ApiSuccess::new(
        StatusCode::OK,
        CurrentUserResponseData {
            name: identity.subject,
        },
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CurrentUserResponseData {
    pub name: String,
}
