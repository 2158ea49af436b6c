use reqwest::{header, Client, Response};
use serde::Serialize;

use crate::{api::types::*, config};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// A fixed route on the authentication service, relative to the API base URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    pub method: Method,
    pub path: &'static str,
}

impl Endpoint {
    pub const fn get(path: &'static str) -> Self {
        Self {
            method: Method::Get,
            path,
        }
    }

    pub const fn post(path: &'static str) -> Self {
        Self {
            method: Method::Post,
            path,
        }
    }
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let method = match self.method {
            Method::Get => "GET",
            Method::Post => "POST",
        };
        write!(f, "{} {}", method, self.path)
    }
}

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(base_url.into()),
        }
    }

    async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.clone()
        } else {
            config::await_api_base_url().await
        }
    }

    /// Issues one request and reduces the response to success or [`ApiError`].
    ///
    /// `GET` endpoints carry the payload in the query string, `POST` endpoints
    /// as a JSON body. The body of a 2xx response is never inspected.
    pub async fn dispatch<P>(&self, endpoint: Endpoint, payload: &P) -> Result<(), ApiError>
    where
        P: Serialize + ?Sized,
    {
        let base_url = self.resolved_base_url().await;
        let url = join_url(&base_url, endpoint.path);
        log::debug!("dispatching {}", endpoint);

        let request = match endpoint.method {
            Method::Get => self.client.get(&url).query(payload),
            Method::Post => self.client.post(&url).json(payload),
        };
        let response = request
            .header(header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| {
                ApiError::request_failed(format!("Request failed: {}", e.without_url()))
            })?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        log::warn!("{} returned {}", endpoint, status.as_u16());
        Err(ApiError::http(status.as_u16(), read_error_body(response).await))
    }
}

async fn read_error_body(response: Response) -> Option<ErrorBody> {
    let text = response.text().await.ok()?;
    serde_json::from_str(&text).ok()
}

fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
