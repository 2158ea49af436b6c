//! Pass-through of the three account calls to the authentication service.
//!
//! Status and body come back verbatim so the pages see exactly what the
//! service said. Payloads and query strings are never logged: they carry
//! emails, passwords and tokens.

use axum::{
    body::Bytes,
    extract::{RawQuery, State},
    http::{
        header::{ACCEPT, CONTENT_TYPE},
        Method,
    },
    response::{IntoResponse, Response},
    Extension,
};
use std::time::Instant;

use crate::{
    error::AppError,
    middleware::request_id::{RequestId, REQUEST_ID_HEADER},
    state::AppState,
};

pub const FORGOT_PASSWORD: &str = "forgot-password";
pub const RESET_PASSWORD: &str = "reset-password";
pub const VERIFY_EMAIL: &str = "verify-email";

pub async fn forgot_password(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    body: Bytes,
) -> Result<Response, AppError> {
    relay(&state, &request_id, Method::POST, FORGOT_PASSWORD, None, Some(body)).await
}

pub async fn reset_password(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    body: Bytes,
) -> Result<Response, AppError> {
    relay(&state, &request_id, Method::POST, RESET_PASSWORD, None, Some(body)).await
}

pub async fn verify_email(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    RawQuery(query): RawQuery,
) -> Result<Response, AppError> {
    relay(&state, &request_id, Method::GET, VERIFY_EMAIL, query, None).await
}

async fn relay(
    state: &AppState,
    request_id: &RequestId,
    method: Method,
    endpoint: &'static str,
    query: Option<String>,
    body: Option<Bytes>,
) -> Result<Response, AppError> {
    let mut url = state.config.upstream_url(endpoint)?;
    url.set_query(query.as_deref());

    let mut request = state
        .http
        .request(method, url)
        .header(ACCEPT, "application/json")
        .header(REQUEST_ID_HEADER, request_id.as_str());
    if let Some(body) = body {
        request = request.header(CONTENT_TYPE, "application/json").body(body);
    }

    let started = Instant::now();
    let upstream = request
        .send()
        .await
        .map_err(|err| AppError::UpstreamUnavailable(err.without_url()))?;
    let status = upstream.status();
    let content_type = upstream.headers().get(CONTENT_TYPE).cloned();
    let bytes = upstream
        .bytes()
        .await
        .map_err(|err| AppError::UpstreamUnavailable(err.without_url()))?;

    tracing::info!(
        endpoint,
        status = status.as_u16(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        request_id = %request_id.as_str(),
        "relayed auth request"
    );

    let mut response = (status, bytes).into_response();
    let headers = response.headers_mut();
    match content_type {
        Some(value) => {
            headers.insert(CONTENT_TYPE, value);
        }
        None => {
            headers.remove(CONTENT_TYPE);
        }
    }
    Ok(response)
}
