use crate::config::Config;
use anyhow::Context;
use std::{sync::Arc, time::Duration};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    /// Pooled client for the authentication service.
    pub http: reqwest::Client,
}

impl AppState {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.upstream_timeout_seconds))
            .build()
            .context("failed to build upstream HTTP client")?;
        Ok(Self {
            config: Arc::new(config),
            http,
        })
    }
}
