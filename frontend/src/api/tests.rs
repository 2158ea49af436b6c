#![cfg(not(coverage))]

use super::*;
use httpmock::prelude::*;
use serde_json::json;

fn client(server: &MockServer) -> ApiClient {
    ApiClient::new_with_base_url(server.url("/api/v1/auth"))
}

#[tokio::test]
async fn forgot_password_posts_email_json() {
    let server = MockServer::start_async().await;
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/v1/auth/forgot-password")
            .json_body(json!({ "email": "ana@example.com" }));
        then.status(200).json_body(json!({ "message": "sent" }));
    });

    let result = client(&server)
        .request_password_reset(&ForgotPasswordRequest {
            email: "ana@example.com".into(),
        })
        .await;

    assert!(result.is_ok());
    mock.assert();
}

#[tokio::test]
async fn reset_password_posts_token_and_new_password() {
    let server = MockServer::start_async().await;
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/api/v1/auth/reset-password")
            .json_body(json!({ "token": "tok-1", "new_password": "NewPass123!" }));
        then.status(204);
    });

    let result = client(&server)
        .reset_password(&ResetPasswordRequest {
            token: "tok-1".into(),
            new_password: "NewPass123!".into(),
        })
        .await;

    assert!(result.is_ok());
    mock.assert();
}

#[tokio::test]
async fn verify_email_sends_token_as_query_parameter() {
    let server = MockServer::start_async().await;
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/v1/auth/verify-email")
            .query_param("token", "a b+c");
        then.status(200).json_body(json!({ "message": "verified" }));
    });

    let result = client(&server)
        .verify_email(&VerifyEmailQuery {
            token: "a b+c".into(),
        })
        .await;

    assert!(result.is_ok());
    mock.assert();
}

#[tokio::test]
async fn success_body_is_not_parsed() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(POST).path("/api/v1/auth/forgot-password");
        then.status(200).body("OK");
    });

    let result = client(&server)
        .request_password_reset(&ForgotPasswordRequest {
            email: "ana@example.com".into(),
        })
        .await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn error_response_carries_status_and_detail() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(POST).path("/api/v1/auth/forgot-password");
        then.status(404).json_body(json!({ "detail": "User not found" }));
    });

    let error = client(&server)
        .request_password_reset(&ForgotPasswordRequest {
            email: "ghost@example.com".into(),
        })
        .await
        .expect_err("404 should fail");

    assert_eq!(error.code, ApiError::HTTP_ERROR);
    assert_eq!(error.status, Some(404));
    assert_eq!(error.detail.as_deref(), Some("User not found"));
}

#[tokio::test]
async fn non_json_error_body_has_no_detail() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(POST).path("/api/v1/auth/reset-password");
        then.status(502).body("<html>Bad Gateway</html>");
    });

    let error = client(&server)
        .reset_password(&ResetPasswordRequest {
            token: "tok".into(),
            new_password: "NewPass123!".into(),
        })
        .await
        .expect_err("502 should fail");

    assert_eq!(error.status, Some(502));
    assert!(error.detail.is_none());
    assert!(error.error.is_empty());
}

#[tokio::test]
async fn unreachable_service_is_request_failed() {
    let api = ApiClient::new_with_base_url("http://127.0.0.1:1/api/v1/auth");
    let error = api
        .verify_email(&VerifyEmailQuery {
            token: "tok".into(),
        })
        .await
        .expect_err("connection should fail");

    assert_eq!(error.code, ApiError::REQUEST_FAILED);
    assert!(error.error.starts_with("Request failed"));
}
