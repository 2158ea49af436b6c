use axum::{extract::State, http::header::CACHE_CONTROL, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};

use crate::{config::Config, state::AppState};

/// Document the pages read from `./config.json` at startup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RuntimeConfigResponse {
    pub api_base_url: String,
    pub login_url: String,
    pub signup_url: String,
    pub support_url: String,
}

impl From<&Config> for RuntimeConfigResponse {
    fn from(config: &Config) -> Self {
        Self {
            api_base_url: config.public_api_base_url.clone(),
            login_url: config.login_url.clone(),
            signup_url: config.signup_url.clone(),
            support_url: config.support_url.clone(),
        }
    }
}

pub async fn get_runtime_config(State(state): State<AppState>) -> impl IntoResponse {
    (
        [(CACHE_CONTROL, "no-store")],
        Json(RuntimeConfigResponse::from(state.config.as_ref())),
    )
}
