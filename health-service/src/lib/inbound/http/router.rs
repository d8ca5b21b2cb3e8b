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

use super::handlers::list_entries;
use super::handlers::login;
use super::handlers::signup;
use super::handlers::submit_entry;
use super::middleware::require_auth;
use crate::domain::entry::ports::EntryServicePort;
use crate::domain::user::ports::AuthServicePort;

pub struct AppState<AS, ES>
where
    AS: AuthServicePort,
    ES: EntryServicePort,
{
    pub auth_service: Arc<AS>,
    pub entry_service: Arc<ES>,
    pub authenticator: Arc<Authenticator>,
}

impl<AS, ES> Clone for AppState<AS, ES>
where
    AS: AuthServicePort,
    ES: EntryServicePort,
{
    fn clone(&self) -> Self {
        Self {
            auth_service: Arc::clone(&self.auth_service),
            entry_service: Arc::clone(&self.entry_service),
            authenticator: Arc::clone(&self.authenticator),
        }
    }
}

pub fn create_router<AS, ES>(
    auth_service: Arc<AS>,
    entry_service: Arc<ES>,
    authenticator: Arc<Authenticator>,
) -> Router
where
    AS: AuthServicePort,
    ES: EntryServicePort,
{
    let state = AppState {
        auth_service,
        entry_service,
        authenticator,
    };

    let public_routes = Router::new()
        .route("/signup", post(signup::<AS, ES>))
        .route("/login", post(login::<AS, ES>));

    let protected_routes = Router::new()
        .route("/submit", post(submit_entry::<AS, ES>))
        .route("/entries", get(list_entries::<AS, ES>))
        .route_layer(middleware::from_fn_with_state(
            Arc::clone(&state.authenticator),
            require_auth,
        ));

    // Headers are left out of the span so bearer tokens never reach the logs.
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

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
