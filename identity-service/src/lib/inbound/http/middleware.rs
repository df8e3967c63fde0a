use std::convert::Infallible;
use std::sync::Arc;

use auth::Authenticator;
use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::extract::Request;
use axum::extract::State;
use axum::http;
use axum::http::request::Parts;
use axum::middleware::Next;
use axum::response::Response;

/// Identity established for one request.
///
/// Always present in request extensions once [`authenticate`] has run;
/// anonymous callers get an empty subject and `authenticated == false`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedIdentity {
    pub subject: String,
    pub authenticated: bool,
}

impl AuthenticatedIdentity {
    pub fn anonymous() -> Self {
        Self {
            subject: String::new(),
            authenticated: false,
        }
    }

    pub fn authenticated(subject: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            authenticated: true,
        }
    }
}

/// Extracts the identity set by the middleware, falling back to anonymous.
#[async_trait]
impl<S> FromRequestParts<S> for AuthenticatedIdentity
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(parts
            .extensions
            .get::<AuthenticatedIdentity>()
            .cloned()
            .unwrap_or_else(AuthenticatedIdentity::anonymous))
    }
}

/// Middleware that turns a bearer token into an [`AuthenticatedIdentity`].
///
/// Fail-open: a missing, malformed, forged or expired token leaves the request
/// anonymous and it is forwarded regardless. Rejecting anonymous callers is up
/// to the route.
pub async fn authenticate(
    State(authenticator): State<Arc<Authenticator>>,
    mut req: Request,
    next: Next,
) -> Response {
    let identity = identify(&authenticator, &req);
    req.extensions_mut().insert(identity);

    next.run(req).await
}

fn identify(authenticator: &Authenticator, req: &Request) -> AuthenticatedIdentity {
    let Some(header) = req.headers().get(http::header::AUTHORIZATION) else {
        return AuthenticatedIdentity::anonymous();
    };

    let Ok(header) = header.to_str() else {
        tracing::debug!("Authorization header is not valid UTF-8");
        return AuthenticatedIdentity::anonymous();
    };

    let Some(credentials) = header.strip_prefix("Bearer ") else {
        return AuthenticatedIdentity::anonymous();
    };

    let Some(token) = extract_token(credentials) else {
        tracing::warn!("Failed to extract bearer token from Authorization header");
        return AuthenticatedIdentity::anonymous();
    };

    match authenticator.validate_token(token) {
        Ok(claims) => AuthenticatedIdentity::authenticated(claims.sub),
        Err(e) => {
            tracing::debug!(error = %e, "Bearer token rejected, continuing anonymously");
            AuthenticatedIdentity::anonymous()
        }
    }
}

/// Token is the segment right after `Bearer `, up to the next single space.
fn extract_token(credentials: &str) -> Option<&str> {
    credentials.split(' ').next().filter(|token| !token.is_empty())
}

#[cfg(test)]
mod tests {
    use auth::TokenCodec;
    use auth::TokenSettings;
    use axum::body::Body;
    use axum::middleware;
    use axum::routing::get;
    use axum::Json;
    use axum::Router;
    use chrono::Duration;
    use chrono::Utc;
    use serde_json::json;
    use serde_json::Value;
    use tower::ServiceExt;

    use super::*;

    const SECRET: &str = "test_secret_key_at_least_32_bytes!";

    fn authenticator() -> Arc<Authenticator> {
        Arc::new(Authenticator::new(TokenSettings::new(SECRET)))
    }

    async fn whoami(identity: AuthenticatedIdentity) -> Json<Value> {
        Json(json!({
            "subject": identity.subject,
            "authenticated": identity.authenticated,
        }))
    }

    fn app(authenticator: Arc<Authenticator>) -> Router {
        Router::new()
            .route("/whoami", get(whoami))
            .layer(middleware::from_fn_with_state(authenticator, authenticate))
    }

    async fn call(authorization: Option<&str>) -> Value {
        let mut request = http::Request::builder().uri("/whoami");
        if let Some(value) = authorization {
            request = request.header(http::header::AUTHORIZATION, value);
        }

        let response = app(authenticator())
            .oneshot(request.body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), http::StatusCode::OK);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_missing_header_is_anonymous() {
        let body = call(None).await;
        assert_eq!(body["authenticated"], false);
        assert_eq!(body["subject"], "");
    }

    #[tokio::test]
    async fn test_valid_token_sets_subject() {
        let token = authenticator().issue_token("carol").unwrap();

        let body = call(Some(&format!("Bearer {}", token))).await;
        assert_eq!(body["authenticated"], true);
        assert_eq!(body["subject"], "carol");
    }

    #[tokio::test]
    async fn test_non_bearer_scheme_is_anonymous() {
        let body = call(Some("Basic YWxpY2U6cHcx")).await;
        assert_eq!(body["authenticated"], false);
    }

    #[tokio::test]
    async fn test_empty_bearer_is_anonymous() {
        let body = call(Some("Bearer ")).await;
        assert_eq!(body["authenticated"], false);
    }

    #[tokio::test]
    async fn test_garbage_token_is_anonymous() {
        let body = call(Some("Bearer not.a.token")).await;
        assert_eq!(body["authenticated"], false);
    }

    #[tokio::test]
    async fn test_token_signed_with_other_secret_is_anonymous() {
        let forged = TokenCodec::new()
            .issue("mallory", b"another_secret_at_least_32_bytes!!", Duration::hours(1))
            .unwrap();

        let body = call(Some(&format!("Bearer {}", forged))).await;
        assert_eq!(body["authenticated"], false);
    }

    #[tokio::test]
    async fn test_expired_token_is_anonymous() {
        let expired = TokenCodec::new()
            .issue_at(
                "carol",
                SECRET.as_bytes(),
                Duration::seconds(1),
                Utc::now() - Duration::minutes(5),
            )
            .unwrap();

        let body = call(Some(&format!("Bearer {}", expired))).await;
        assert_eq!(body["authenticated"], false);
    }

    #[tokio::test]
    async fn test_extractor_without_middleware_is_anonymous() {
        let response = Router::new()
            .route("/whoami", get(whoami))
            .oneshot(
                http::Request::builder()
                    .uri("/whoami")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["authenticated"], false);
    }

    #[test]
    fn test_extract_token_takes_first_segment() {
        assert_eq!(extract_token("abc.def.ghi"), Some("abc.def.ghi"));
        assert_eq!(extract_token("abc.def.ghi trailing"), Some("abc.def.ghi"));
        assert_eq!(extract_token("   "), None);
        assert_eq!(extract_token(""), None);
    }

    #[test]
    fn test_extract_token_rejects_extra_spaces_after_scheme() {
        assert_eq!(extract_token("  abc.def.ghi"), None);
    }

    #[tokio::test]
    async fn test_valid_token_after_extra_spaces_is_anonymous() {
        let token = authenticator().issue_token("carol").unwrap();

        let body = call(Some(&format!("Bearer   {}", token))).await;
        assert_eq!(body["authenticated"], false);
    }
}
