mod common;

use axum::{body::Body, http::Request, http::StatusCode};
use common::{json_request, response_json, spawn_upstream, test_app, SEEN_REQUEST_ID};
use serde_json::json;
use tower::ServiceExt;

#[tokio::test]
async fn forgot_password_relays_status_and_detail() {
    let upstream = spawn_upstream().await;
    let app = test_app(&upstream, None);

    let mut request = json_request(
        "POST",
        "/api/v1/auth/forgot-password",
        json!({ "email": "ghost@example.com" }),
    );
    request
        .headers_mut()
        .insert("x-request-id", "req-forgot-1".parse().expect("header"));

    let response = app.oneshot(request).await.expect("response");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(response.headers()["x-request-id"], "req-forgot-1");
    assert!(response.headers()["content-type"]
        .to_str()
        .expect("content type")
        .starts_with("application/json"));
    let json = response_json(response).await;
    assert_eq!(json["detail"], "User not found");
}

#[tokio::test]
async fn request_id_is_forwarded_upstream() {
    let upstream = spawn_upstream().await;
    let app = test_app(&upstream, None);

    let mut request = json_request(
        "POST",
        "/api/v1/auth/forgot-password",
        json!({ "email": "ana@example.com" }),
    );
    request
        .headers_mut()
        .insert("x-request-id", "req-forward-9".parse().expect("header"));

    let response = app.oneshot(request).await.expect("response");
    assert_eq!(response.status(), StatusCode::OK);
    // Upstream headers other than content-type are not relayed.
    assert!(response.headers().get(SEEN_REQUEST_ID).is_none());
    let json = response_json(response).await;
    assert_eq!(json["message"], "Password reset email sent");
    assert_eq!(json["seen_request_id"], "req-forward-9");
}

#[tokio::test]
async fn reset_password_relays_expired_token() {
    let upstream = spawn_upstream().await;
    let app = test_app(&upstream, None);

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/v1/auth/reset-password",
            json!({ "token": "expired", "new_password": "correct horse" }),
        ))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = response_json(response).await;
    assert_eq!(json["detail"], "Invalid or expired reset token");
}

#[tokio::test]
async fn reset_password_relays_success() {
    let upstream = spawn_upstream().await;
    let app = test_app(&upstream, None);

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/v1/auth/reset-password",
            json!({ "token": "tok-123", "new_password": "correct horse" }),
        ))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn verify_email_forwards_query_string() {
    let upstream = spawn_upstream().await;
    let app = test_app(&upstream, None);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/auth/verify-email?token=tok%2Babc")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);
    let json = response_json(response).await;
    assert_eq!(json["query"], "token=tok%2Babc");
}

#[tokio::test]
async fn unreachable_upstream_is_bad_gateway() {
    let app = test_app("http://127.0.0.1:1/api/v1/auth", None);

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/v1/auth/forgot-password",
            json!({ "email": "ana@example.com" }),
        ))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    assert!(response.headers().get("x-request-id").is_some());
    let json = response_json(response).await;
    assert_eq!(json["detail"], "Authentication service unavailable");
}
