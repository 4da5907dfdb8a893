use crate::config::UpstreamSettings;
use chrono::NaiveDate;
use reqwest::{header, Client};
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when fetching an upstream feed
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("HTTP {status}: Failed to fetch {resource} data")]
    Status { status: u16, resource: String },

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

impl UpstreamError {
    /// Whether the upstream answered with a non-success status
    pub fn is_status(&self) -> bool {
        matches!(self, UpstreamError::Status { .. })
    }
}

/// HTTP client for the third-party feeds
///
/// Wraps a pooled `reqwest` client and knows the URL layout of:
/// - UEX Corp commodity prices and routes
/// - the dated news files in the HCN data repository
/// - the bounty board list
pub struct UpstreamClient {
    client: Client,
    uex_base_url: String,
    news_base_url: String,
    missions_url: String,
}

impl UpstreamClient {
    pub fn new(settings: &UpstreamSettings) -> Result<Self, UpstreamError> {
        let mut headers = header::HeaderMap::new();
        headers.insert(header::ACCEPT, header::HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .user_agent(settings.user_agent.clone())
            .default_headers(headers)
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            uex_base_url: settings.uex_base_url.trim_end_matches('/').to_string(),
            news_base_url: settings.news_base_url.trim_end_matches('/').to_string(),
            missions_url: settings.missions_url.clone(),
        })
    }

    /// Fetch a URL and parse the body as JSON
    pub async fn get_json(&self, resource: &str, url: &str) -> Result<Value, UpstreamError> {
        tracing::info!("Fetching {} data from: {}", resource, url);

        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            return Err(UpstreamError::Status {
                status: response.status().as_u16(),
                resource: resource.to_string(),
            });
        }

        let body = response.bytes().await?;
        let json: Value = serde_json::from_slice(&body)
            .map_err(|e| UpstreamError::InvalidResponse(format!("Failed to parse {} data: {}", resource, e)))?;

        if json.is_null() {
            return Err(UpstreamError::InvalidResponse(format!("Empty {} data", resource)));
        }

        Ok(json)
    }

    pub fn commodity_prices_url(&self, limit: u32) -> String {
        format!("{}/commodities_prices?limit={}", self.uex_base_url, limit)
    }

    pub fn commodity_routes_url(&self, limit: u32) -> String {
        format!("{}/commodities_routes?limit={}", self.uex_base_url, limit)
    }

    pub fn news_url(&self, date: NaiveDate) -> String {
        format!("{}/{}.json", self.news_base_url, date.format("%Y-%m-%d"))
    }

    /// Commodity prices per terminal
    pub async fn commodity_prices(&self, limit: u32) -> Result<Value, UpstreamError> {
        self.get_json("market", &self.commodity_prices_url(limit)).await
    }

    /// Commodity trade routes
    pub async fn commodity_routes(&self, limit: u32) -> Result<Value, UpstreamError> {
        self.get_json("trade", &self.commodity_routes_url(limit)).await
    }

    /// Bounty board list
    pub async fn missions(&self) -> Result<Value, UpstreamError> {
        self.get_json("missions", &self.missions_url).await
    }

    /// News file for a single day
    pub async fn news(&self, date: NaiveDate) -> Result<Value, UpstreamError> {
        self.get_json("news", &self.news_url(date)).await
    }
}
