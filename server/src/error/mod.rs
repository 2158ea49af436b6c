use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Error body in the shape the authentication service uses, so the pages
/// classify relay failures like any other unrecognised `detail`.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub detail: String,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Transport failure talking to the auth service. Strip the URL before
    /// wrapping: verification URLs carry the token.
    #[error("Authentication service unavailable")]
    UpstreamUnavailable(#[source] reqwest::Error),
    #[error("Internal server error")]
    InternalServerError(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::UpstreamUnavailable(err) => {
                tracing::warn!(timeout = err.is_timeout(), "auth service unreachable: {}", err);
                StatusCode::BAD_GATEWAY
            }
            AppError::InternalServerError(err) => {
                tracing::error!("Internal server error: {:?}", err);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = Json(ErrorResponse {
            detail: self.to_string(),
        });

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn response_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("read body");
        serde_json::from_slice(&bytes).expect("json")
    }

    #[tokio::test]
    async fn internal_error_hides_cause() {
        let response = AppError::from(anyhow::anyhow!("secret internals")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = response_json(response).await;
        assert_eq!(json["detail"], "Internal server error");
    }

    #[tokio::test]
    async fn unreachable_upstream_is_bad_gateway() {
        let err = reqwest::Client::new()
            .get("http://127.0.0.1:1/")
            .send()
            .await
            .expect_err("nothing listens on port 1");
        let response = AppError::UpstreamUnavailable(err.without_url()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        let json = response_json(response).await;
        assert_eq!(json["detail"], "Authentication service unavailable");
    }
}
