//! API Configuration
//!
//! Where the WordPress site lives and how to talk to it. Every field has a
//! default so a partial JSON object is a valid configuration.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::endpoint::Endpoint;
use crate::error::{ApiError, ApiResult};

/// Site used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Site root, e.g. `https://example.com/blog`. Endpoint paths are appended to it.
    pub base_url: String,
    /// Page size requested on collection reads (`per_page`). `None` leaves the server default.
    pub per_page: Option<u32>,
    /// REST nonce for cookie-authenticated writes (`X-WP-Nonce`).
    pub nonce: Option<String>,
    /// Application Password credentials, sent as basic auth when both are set.
    pub username: Option<String>,
    pub application_password: Option<String>,
    /// `error`, `warn`, `info`, `debug` or `trace`
    pub log_level: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: option_env!("WP_BASE_URL")
                .unwrap_or(DEFAULT_BASE_URL)
                .to_string(),
            per_page: None,
            nonce: None,
            username: None,
            application_password: None,
            log_level: "info".to_string(),
        }
    }
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Parse a (possibly partial) JSON configuration object.
    pub fn from_json(json: &str) -> ApiResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Basic auth pair, only when both halves are present.
    pub fn credentials(&self) -> Option<(&str, &str)> {
        match (&self.username, &self.application_password) {
            (Some(user), Some(pass)) if !user.is_empty() => Some((user, pass)),
            _ => None,
        }
    }

    pub fn log_level(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }

    /// Absolute URL of an endpoint under this site.
    ///
    /// The path is appended to the base rather than resolved against it, so a
    /// site installed under a sub-directory keeps its prefix.
    pub fn url_for(&self, endpoint: &Endpoint) -> ApiResult<Url> {
        let base = self.base_url.trim().trim_end_matches('/');
        if base.is_empty() {
            return Err(ApiError::InvalidUrl("base_url is empty".to_string()));
        }
        let mut url = Url::parse(&format!("{}{}", base, endpoint.path()))?;
        if !endpoint.query().is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in endpoint.query() {
                pairs.append_pair(key, value);
            }
        }
        Ok(url)
    }
}
