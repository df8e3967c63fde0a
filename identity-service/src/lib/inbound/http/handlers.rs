use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Serialize;

use crate::credential::errors::LoginError;
use crate::credential::errors::RegistrationError;

pub mod current_user;
pub mod hello;
pub mod join;
pub mod login;

#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize + PartialEq>(StatusCode, Json<ApiResponseBody<T>>);

impl<T> PartialEq for ApiSuccess<T>
where
    T: Serialize + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0 && self.1 .0 == other.1 .0
    }
}

impl<T: Serialize + PartialEq> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(ApiResponseBody::new(status, data)))
    }
}

impl<T: Serialize + PartialEq> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    InternalServerError(String),
    UnprocessableEntity(String),
    NotFound(String),
    Conflict(String),
    Unauthorized(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::InternalServerError(msg) => {
                tracing::error!(error = %msg, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            ApiError::UnprocessableEntity(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
        };

        (status, Json(ApiResponseBody::new_error(status, message))).into_response()
    }
}

impl From<RegistrationError> for ApiError {
    fn from(err: RegistrationError) -> Self {
        match err {
            RegistrationError::DuplicateName(_) => ApiError::Conflict(err.to_string()),
            RegistrationError::InvalidName(_) | RegistrationError::EmptyPassword => {
                ApiError::UnprocessableEntity(err.to_string())
            }
            RegistrationError::Password(_) | RegistrationError::Store(_) => {
                ApiError::InternalServerError(err.to_string())
            }
        }
    }
}

impl From<LoginError> for ApiError {
    fn from(err: LoginError) -> Self {
        match err {
            LoginError::UnknownUser(_) => ApiError::NotFound(err.to_string()),
            LoginError::BadPassword => ApiError::Unauthorized(err.to_string()),
            LoginError::Token(_) | LoginError::Store(_) => {
                ApiError::InternalServerError(err.to_string())
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiResponseBody<T: Serialize + PartialEq> {
    status_code: u16,
    data: T,
}

impl<T: Serialize + PartialEq> ApiResponseBody<T> {
    pub fn new(status_code: StatusCode, data: T) -> Self {
        Self {
            status_code: status_code.as_u16(),
            data,
        }
    }
}

impl ApiResponseBody<ApiErrorData> {
    pub fn new_error(status_code: StatusCode, message: String) -> Self {
        Self {
            status_code: status_code.as_u16(),
            data: ApiErrorData { message },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiErrorData {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use auth::TokenError;

    use super::*;
    use crate::credential::errors::StoreError;
    use crate::credential::errors::UsernameError;

    #[test]
    fn test_registration_error_status_mapping() {
        assert!(matches!(
            ApiError::from(RegistrationError::DuplicateName("alice".to_string())),
            ApiError::Conflict(_)
        ));
        assert!(matches!(
            ApiError::from(RegistrationError::InvalidName(UsernameError::Empty)),
            ApiError::UnprocessableEntity(_)
        ));
        assert!(matches!(
            ApiError::from(RegistrationError::EmptyPassword),
            ApiError::UnprocessableEntity(_)
        ));
        assert!(matches!(
            ApiError::from(RegistrationError::Store(StoreError::Database(
                "down".to_string()
            ))),
            ApiError::InternalServerError(_)
        ));
    }

    #[test]
    fn test_login_error_status_mapping() {
        assert!(matches!(
            ApiError::from(LoginError::UnknownUser("bob".to_string())),
            ApiError::NotFound(_)
        ));
        assert!(matches!(
            ApiError::from(LoginError::BadPassword),
            ApiError::Unauthorized(_)
        ));
        assert!(matches!(
            ApiError::from(LoginError::Token(TokenError::InvalidTtl(0))),
            ApiError::InternalServerError(_)
        ));
    }

    #[tokio::test]
    async fn test_internal_error_hides_details() {
        let response =
            ApiError::InternalServerError("password for db is hunter2".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(!body.contains("hunter2"));
        assert!(body.contains("Internal server error"));
    }
}
