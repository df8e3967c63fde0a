use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::credential::errors::RegistrationError;
use crate::credential::models::RegisterCommand;
use crate::credential::models::Username;
use crate::inbound::http::router::AppState;

pub async fn join(
    State(state): State<AppState>,
    Json(body): Json<JoinRequest>,
) -> Result<ApiSuccess<JoinResponseData>, ApiError> {
    let command = body.try_into_command()?;
    let name = command.name.to_string();

    state
        .credential_service
        .register(command)
        .await
        .map_err(ApiError::from)
        .map(|_| ApiSuccess::new(StatusCode::OK, JoinResponseData { name }))
}

/// HTTP request body for registering a credential (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct JoinRequest {
    name: String,
    password: String,
}

impl JoinRequest {
    fn try_into_command(self) -> Result<RegisterCommand, RegistrationError> {
        let name = Username::new(self.name)?;
        Ok(RegisterCommand::new(name, self.password))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JoinResponseData {
    pub name: String,
}
