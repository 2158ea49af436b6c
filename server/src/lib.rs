use axum::{
    body::Body,
    http::{Method, Request},
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};
use tracing::Span;

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod state;

use middleware::request_id::{request_id, RequestId};
use state::AppState;

pub fn app(state: AppState) -> Router {
    let static_dir = state.config.static_dir.clone();
    let index = static_dir.join("index.html");

    let auth_routes = Router::new()
        .route(
            "/api/v1/auth/forgot-password",
            post(handlers::relay::forgot_password),
        )
        .route(
            "/api/v1/auth/reset-password",
            post(handlers::relay::reset_password),
        )
        .route(
            "/api/v1/auth/verify-email",
            get(handlers::relay::verify_email),
        );

    Router::new()
        .route("/health", get(handlers::health::health))
        .route(
            "/config.json",
            get(handlers::runtime_config::get_runtime_config),
        )
        .merge(auth_routes)
        // Client-side routes (/reset-password?token=...) resolve to index.html.
        .fallback_service(ServeDir::new(static_dir).fallback(ServeFile::new(index)))
        .layer(
            ServiceBuilder::new()
                .layer(axum_middleware::from_fn(request_id))
                .layer(TraceLayer::new_for_http().make_span_with(make_span))
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                        .allow_headers(Any)
                        .max_age(std::time::Duration::from_secs(24 * 60 * 60)),
                ),
        )
        .with_state(state)
}

/// Request span without the query string, which may hold a token.
fn make_span(req: &Request<Body>) -> Span {
    let request_id = req
        .extensions()
        .get::<RequestId>()
        .map(RequestId::as_str)
        .unwrap_or("-");
    tracing::info_span!(
        "request",
        method = %req.method(),
        path = %req.uri().path(),
        request_id = %request_id,
    )
}
