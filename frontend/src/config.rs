//! Runtime configuration for the account pages.
//!
//! Values come from `window.__MOSKAL_ENV` (env.js) when present, otherwise from
//! `./config.json` served next to the bundle, otherwise from built-in
//! defaults. Everything here is public; never put secrets in it.

use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

pub const DEFAULT_API_BASE_URL: &str = "/api/v1/auth";
pub const DEFAULT_LOGIN_URL: &str = "/login";
pub const DEFAULT_SIGNUP_URL: &str = "/signup";
pub const DEFAULT_SUPPORT_URL: &str = "/support";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RuntimeConfig {
    #[serde(default, alias = "API_BASE_URL")]
    pub api_base_url: Option<String>,
    #[serde(default, alias = "LOGIN_URL")]
    pub login_url: Option<String>,
    #[serde(default, alias = "SIGNUP_URL")]
    pub signup_url: Option<String>,
    #[serde(default, alias = "SUPPORT_URL")]
    pub support_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub login_url: String,
    pub signup_url: String,
    pub support_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            login_url: DEFAULT_LOGIN_URL.to_string(),
            signup_url: DEFAULT_SIGNUP_URL.to_string(),
            support_url: DEFAULT_SUPPORT_URL.to_string(),
        }
    }
}

impl AppConfig {
    /// Applies non-blank runtime values on top of `self`.
    pub fn with_overrides(mut self, runtime: RuntimeConfig) -> Self {
        if let Some(value) = normalize_value(runtime.api_base_url) {
            self.api_base_url = value;
        }
        if let Some(value) = normalize_value(runtime.login_url) {
            self.login_url = value;
        }
        if let Some(value) = normalize_value(runtime.signup_url) {
            self.signup_url = value;
        }
        if let Some(value) = normalize_value(runtime.support_url) {
            self.support_url = value;
        }
        self
    }
}

static APP_CONFIG: OnceLock<AppConfig> = OnceLock::new();

fn normalize_value(value: Option<String>) -> Option<String> {
    let value = value?;
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Resolves a root-relative API base (`/api/...`) against the page origin.
fn absolute_api_base(base: &str, origin: Option<&str>) -> String {
    match origin {
        Some(origin) if base.starts_with('/') => {
            format!("{}{}", origin.trim_end_matches('/'), base)
        }
        _ => base.to_string(),
    }
}

fn cache(config: AppConfig) -> AppConfig {
    let _ = APP_CONFIG.set(config.clone());
    APP_CONFIG.get().cloned().unwrap_or(config)
}

/// Configuration available right now, without waiting for `config.json`.
/// Seeds the reactive copy in [`crate::state::config`].
pub fn current() -> AppConfig {
    if let Some(cached) = APP_CONFIG.get() {
        return cached.clone();
    }
    match read_env_global() {
        Some(runtime) => AppConfig::default().with_overrides(runtime),
        None => AppConfig::default(),
    }
}

pub async fn await_config() -> AppConfig {
    if let Some(cached) = APP_CONFIG.get() {
        return cached.clone();
    }
    let runtime = match read_env_global() {
        Some(runtime) => Some(runtime),
        None => fetch_runtime_config().await,
    };
    let mut config = match runtime {
        Some(runtime) => AppConfig::default().with_overrides(runtime),
        None => {
            log::debug!("no runtime config found, using defaults");
            AppConfig::default()
        }
    };
    config.api_base_url = absolute_api_base(&config.api_base_url, window_origin().as_deref());
    cache(config)
}

pub async fn await_api_base_url() -> String {
    await_config().await.api_base_url
}

#[cfg(target_arch = "wasm32")]
fn window_origin() -> Option<String> {
    web_sys::window()?.location().origin().ok()
}

#[cfg(not(target_arch = "wasm32"))]
fn window_origin() -> Option<String> {
    None
}

#[cfg(target_arch = "wasm32")]
fn read_env_global() -> Option<RuntimeConfig> {
    use js_sys::{Object, Reflect};
    use wasm_bindgen::JsValue;

    // Expect optional global object: window.__MOSKAL_ENV = { login_url: "..." }
    let window = web_sys::window()?;
    let any = Reflect::get(&window, &JsValue::from_str("__MOSKAL_ENV")).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    let obj = Object::from(any);
    let read = |lower: &str, upper: &str| {
        Reflect::get(&obj, &JsValue::from_str(lower))
            .ok()
            .filter(|v| !v.is_undefined() && !v.is_null())
            .or_else(|| Reflect::get(&obj, &JsValue::from_str(upper)).ok())
            .and_then(|v| v.as_string())
    };
    Some(RuntimeConfig {
        api_base_url: read("api_base_url", "API_BASE_URL"),
        login_url: read("login_url", "LOGIN_URL"),
        signup_url: read("signup_url", "SIGNUP_URL"),
        support_url: read("support_url", "SUPPORT_URL"),
    })
}

#[cfg(not(target_arch = "wasm32"))]
fn read_env_global() -> Option<RuntimeConfig> {
    None
}

#[cfg(target_arch = "wasm32")]
async fn fetch_runtime_config() -> Option<RuntimeConfig> {
    let origin = window_origin()?;
    let resp = reqwest::get(format!("{}/config.json", origin)).await.ok()?;
    if !resp.status().is_success() {
        return None;
    }
    resp.json::<RuntimeConfig>().await.ok()
}

#[cfg(not(target_arch = "wasm32"))]
async fn fetch_runtime_config() -> Option<RuntimeConfig> {
    None
}
