// src/config.rs
use std::env;
use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Context;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_DOWNSTREAM_URL: &str = "http://localhost:10002";
const DEFAULT_TIMEOUT_SECS: u64 = 600;
const DEFAULT_STATIC_DIR: &str = "public";

/// Process-wide configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    /// Base URL of the processing server; `/process-message` is appended.
    pub downstream_url: String,
    /// Wall-clock limit for the whole outbound call (connect + read).
    pub downstream_timeout: Duration,
    pub static_dir: String,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let bind_addr = env::var("RELAY_BIND_ADDR")
            .unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string())
            .parse()
            .context("RELAY_BIND_ADDR is not a valid socket address")?;

        let downstream_url =
            env::var("DOWNSTREAM_URL").unwrap_or_else(|_| DEFAULT_DOWNSTREAM_URL.to_string());

        let timeout_secs = match env::var("DOWNSTREAM_TIMEOUT_SECS") {
            Ok(raw) => raw
                .parse()
                .context("DOWNSTREAM_TIMEOUT_SECS is not a whole number of seconds")?,
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };

        let static_dir =
            env::var("STATIC_DIR").unwrap_or_else(|_| DEFAULT_STATIC_DIR.to_string());

        Ok(Self {
            bind_addr,
            downstream_url,
            downstream_timeout: Duration::from_secs(timeout_secs),
            static_dir,
        })
    }
}
