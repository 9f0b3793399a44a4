// src/state.rs
use std::sync::Arc;

use crate::config::AppConfig;
use crate::services::downstream::DownstreamClient;

pub type SharedState = Arc<AppState>;

/// Shared across all in-flight requests; holds no mutable state.
pub struct AppState {
    pub client: DownstreamClient,
}

impl AppState {
    pub fn new(config: &AppConfig) -> anyhow::Result<Self> {
        Ok(Self {
            client: DownstreamClient::new(&config.downstream_url, config.downstream_timeout)?,
        })
    }
}
