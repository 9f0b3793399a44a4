// src/services/downstream.rs
use std::time::Duration;

use serde_json::{Value, json};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum DownstreamError {
    #[error("cannot reach the processing server: {0}")]
    Unavailable(#[source] reqwest::Error),
    #[error("the processing server did not respond in time")]
    Timeout,
    #[error("the processing server failed with status {0}")]
    BadStatus(u16),
    #[error("the processing server returned an invalid payload: {0}")]
    Malformed(String),
}

/// Client for the processing server's `POST /process-message` endpoint.
#[derive(Clone)]
pub struct DownstreamClient {
    http: reqwest::Client,
    endpoint: String,
}

impl DownstreamClient {
    pub fn new(base_url: &str, timeout: Duration) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            endpoint: format!("{}/process-message", base_url.trim_end_matches('/')),
        })
    }

    /// Forward one message. A single attempt is made per call, no retries;
    /// the configured timeout covers connect and read together.
    pub async fn forward(&self, message: &str) -> Result<Value, DownstreamError> {
        debug!(endpoint = %self.endpoint, "forwarding message");

        let response = self
            .http
            .post(&self.endpoint)
            .json(&json!({ "message": message }))
            .send()
            .await
            .map_err(classify_transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(DownstreamError::BadStatus(status.as_u16()));
        }

        response.json::<Value>().await.map_err(|err| {
            if err.is_timeout() {
                DownstreamError::Timeout
            } else {
                DownstreamError::Malformed(format!("body is not valid JSON: {err}"))
            }
        })
    }
}

fn classify_transport(err: reqwest::Error) -> DownstreamError {
    if err.is_timeout() {
        DownstreamError::Timeout
    } else {
        DownstreamError::Unavailable(err)
    }
}

/// Pull `image_urls` out of a processing result. Elements are passed
/// through as opaque strings, order preserved; anything other than an
/// array of strings counts as a malformed payload.
pub fn extract_image_urls(result: &Value) -> Result<Vec<String>, DownstreamError> {
    let urls = result
        .get("image_urls")
        .ok_or_else(|| DownstreamError::Malformed("missing image_urls".to_string()))?;

    serde_json::from_value(urls.clone())
        .map_err(|_| DownstreamError::Malformed("image_urls is not an array of strings".to_string()))
}
