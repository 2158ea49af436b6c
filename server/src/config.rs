use anyhow::{anyhow, Context};
use std::{env, net::SocketAddr, path::PathBuf};
use url::Url;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_AUTH_API_URL: &str = "http://localhost:8000/api/v1/auth";
pub const DEFAULT_STATIC_DIR: &str = "dist";
pub const DEFAULT_PUBLIC_API_BASE_URL: &str = "/api/v1/auth";
pub const DEFAULT_LOGIN_URL: &str = "/login";
pub const DEFAULT_SIGNUP_URL: &str = "/signup";
pub const DEFAULT_SUPPORT_URL: &str = "/support";
pub const DEFAULT_UPSTREAM_TIMEOUT_SECONDS: u64 = 10;

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: SocketAddr,
    /// Base URL of the external authentication service.
    pub auth_api_url: Url,
    pub static_dir: PathBuf,
    /// API base the browser should call; published through `/config.json`.
    pub public_api_base_url: String,
    pub login_url: String,
    pub signup_url: String,
    pub support_url: String,
    pub upstream_timeout_seconds: u64,
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |key: &str, default: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let bind_addr_raw = value("BIND_ADDR", DEFAULT_BIND_ADDR);
        let bind_addr: SocketAddr = bind_addr_raw
            .parse()
            .with_context(|| format!("Invalid BIND_ADDR value: {}", bind_addr_raw))?;

        let auth_api_url = parse_auth_api_url(&value("AUTH_API_URL", DEFAULT_AUTH_API_URL))?;

        let timeout_raw = value(
            "UPSTREAM_TIMEOUT_SECONDS",
            &DEFAULT_UPSTREAM_TIMEOUT_SECONDS.to_string(),
        );
        let upstream_timeout_seconds: u64 = timeout_raw
            .parse()
            .with_context(|| format!("Invalid UPSTREAM_TIMEOUT_SECONDS value: {}", timeout_raw))?;
        if upstream_timeout_seconds == 0 {
            return Err(anyhow!("UPSTREAM_TIMEOUT_SECONDS must be at least 1"));
        }

        Ok(Config {
            bind_addr,
            auth_api_url,
            static_dir: PathBuf::from(value("STATIC_DIR", DEFAULT_STATIC_DIR)),
            public_api_base_url: value("PUBLIC_API_BASE_URL", DEFAULT_PUBLIC_API_BASE_URL),
            login_url: value("LOGIN_URL", DEFAULT_LOGIN_URL),
            signup_url: value("SIGNUP_URL", DEFAULT_SIGNUP_URL),
            support_url: value("SUPPORT_URL", DEFAULT_SUPPORT_URL),
            upstream_timeout_seconds,
        })
    }

    /// Upstream URL for one auth endpoint, e.g. `forgot-password`.
    pub fn upstream_url(&self, endpoint: &str) -> anyhow::Result<Url> {
        let base = self.auth_api_url.as_str().trim_end_matches('/');
        let joined = format!("{}/{}", base, endpoint.trim_start_matches('/'));
        Url::parse(&joined).with_context(|| format!("Invalid upstream URL for {}", endpoint))
    }
}

fn parse_auth_api_url(raw: &str) -> anyhow::Result<Url> {
    let url = Url::parse(raw).map_err(|err| anyhow!("Invalid AUTH_API_URL value {}: {}", raw, err))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(anyhow!("AUTH_API_URL must use http or https, got {}", other)),
    }
}
