use std::sync::Arc;
use std::time::Duration;

use auth::Authenticator;
use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::current_user::current_user;
use super::handlers::hello::hello;
use super::handlers::join::join;
use super::handlers::login::login;
use super::middleware::authenticate as auth_middleware;
use crate::domain::credential::ports::CredentialServicePort;

#[derive(Clone)]
pub struct AppState {
    pub credential_service: Arc<dyn CredentialServicePort>,
    pub authenticator: Arc<Authenticator>,
}

pub fn create_router(
    credential_service: Arc<dyn CredentialServicePort>,
    authenticator: Arc<Authenticator>,
) -> Router {
    let state = AppState {
        credential_service,
        authenticator,
    };

    // Identity is established for every route; each route decides whether an
    // anonymous caller may proceed.
    let routes = Router::new()
        .route("/api/v1/users/join", post(join))
        .route("/api/v1/users/login", post(login))
        .route("/api/v1/users/me", get(current_user))
        .route("/api/v1/hello", get(hello))
        .layer(middleware::from_fn_with_state(
            Arc::clone(&state.authenticator),
            auth_middleware,
        ));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    routes
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
