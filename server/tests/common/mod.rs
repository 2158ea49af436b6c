#![allow(dead_code)]

use axum::{
    body::Body,
    extract::RawQuery,
    http::{HeaderMap, Request, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use moskal_auth_server::{app, config::Config, state::AppState};
use serde_json::{json, Value};
use std::path::PathBuf;
use uuid::Uuid;

pub const SEEN_REQUEST_ID: &str = "x-seen-request-id";

/// Stand-in authentication service on an ephemeral port. Returns its base URL.
pub async fn spawn_upstream() -> String {
    let router = Router::new()
        .route(
            "/api/v1/auth/forgot-password",
            post(|headers: HeaderMap, Json(body): Json<Value>| async move {
                let seen = headers
                    .get("x-request-id")
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or("")
                    .to_string();
                if body["email"] == "ghost@example.com" {
                    (
                        StatusCode::NOT_FOUND,
                        [(SEEN_REQUEST_ID, seen)],
                        Json(json!({ "detail": "User not found" })),
                    )
                        .into_response()
                } else {
                    (
                        StatusCode::OK,
                        [(SEEN_REQUEST_ID, seen.clone())],
                        Json(json!({
                            "message": "Password reset email sent",
                            "seen_request_id": seen,
                        })),
                    )
                        .into_response()
                }
            }),
        )
        .route(
            "/api/v1/auth/reset-password",
            post(|Json(body): Json<Value>| async move {
                if body["token"] == "expired" {
                    (
                        StatusCode::BAD_REQUEST,
                        Json(json!({ "detail": "Invalid or expired reset token" })),
                    )
                } else {
                    (
                        StatusCode::OK,
                        Json(json!({ "message": "Password has been reset" })),
                    )
                }
            }),
        )
        .route(
            "/api/v1/auth/verify-email",
            get(|RawQuery(query): RawQuery| async move {
                Json(json!({ "message": "Email verified successfully", "query": query }))
            }),
        );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind upstream");
    let addr = listener.local_addr().expect("upstream addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("serve upstream");
    });
    format!("http://{}/api/v1/auth", addr)
}

pub fn test_app(auth_api_url: &str, static_dir: Option<PathBuf>) -> Router {
    let static_dir = static_dir
        .unwrap_or_else(|| std::env::temp_dir().join("moskal-auth-missing-static"))
        .to_string_lossy()
        .to_string();
    let auth_api_url = auth_api_url.to_string();
    let config = Config::from_lookup(|key| match key {
        "AUTH_API_URL" => Some(auth_api_url.clone()),
        "STATIC_DIR" => Some(static_dir.clone()),
        "LOGIN_URL" => Some("https://app.moskal.id/login".to_string()),
        "UPSTREAM_TIMEOUT_SECONDS" => Some("2".to_string()),
        _ => None,
    })
    .expect("config");
    app(AppState::new(config).expect("state"))
}

/// Fresh directory holding a minimal built bundle.
pub fn static_bundle() -> PathBuf {
    let dir = std::env::temp_dir().join(format!("moskal-auth-static-{}", Uuid::new_v4()));
    std::fs::create_dir_all(&dir).expect("create static dir");
    std::fs::write(dir.join("index.html"), "<html><body>moskal-index</body></html>")
        .expect("write index");
    std::fs::write(dir.join("app.js"), "console.log('moskal');").expect("write asset");
    dir
}

pub fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("request")
}

pub async fn body_bytes(response: Response) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body")
        .to_vec()
}

pub async fn response_json(response: Response) -> Value {
    serde_json::from_slice(&body_bytes(response).await).expect("json")
}
