//! HTTP client for the sentiment services

use std::time::Duration;

use futures::FutureExt;
use serde::de::DeserializeOwned;

use super::{ApiError, ApiFuture, PipelineResponse, RecentSearch, SentimentApi, Suggestion};
use crate::config::ApiConfig;

const AUTOCOMPLETE_PATH: &str = "/api/autocomplete";
const RECENT_PATH: &str = "/api/recent";
const PIPELINE_PATH: &str = "/api/pipeline";

/// reqwest-backed implementation of [`SentimentApi`]
#[derive(Debug, Clone)]
pub struct HttpApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpApi {
    /// Create a client for the services rooted at `base_url`
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &ApiConfig) -> Result<Self, ApiError> {
        Self::new(&config.base_url, Duration::from_millis(config.timeout_ms))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Send a request and decode a JSON body, mapping failures onto [`ApiError`]
async fn send_json<T: DeserializeOwned>(request: reqwest::RequestBuilder) -> Result<T, ApiError> {
    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        return Err(ApiError::Api {
            code: status.as_u16(),
            message,
        });
    }

    let body = response
        .text()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    serde_json::from_str(&body).map_err(|e| ApiError::Parse(e.to_string()))
}

impl SentimentApi for HttpApi {
    fn suggest(&self, query: &str) -> ApiFuture<Vec<Suggestion>> {
        let request = self
            .client
            .get(self.endpoint(AUTOCOMPLETE_PATH))
            .query(&[("query", query)]);
        send_json(request).boxed()
    }

    fn recent(&self) -> ApiFuture<Vec<RecentSearch>> {
        let request = self.client.get(self.endpoint(RECENT_PATH));
        send_json(request).boxed()
    }

    fn analyze(&self, symbol: &str) -> ApiFuture<PipelineResponse> {
        let request = self
            .client
            .post(self.endpoint(PIPELINE_PATH))
            .json(&serde_json::json!({ "symbol": symbol }));
        send_json(request).boxed()
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod client_tests;
