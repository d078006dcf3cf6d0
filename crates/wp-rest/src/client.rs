//! WordPress REST Client
//!
//! Turns endpoints into URLs, issues requests through a `Transport`
//! and decodes bodies or WordPress error payloads.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use crate::config::ApiConfig;
use crate::endpoint::Endpoint;
use crate::error::{ApiError, ApiResult};
use crate::models::Post;
use crate::transport::{HttpResponse, ReqwestTransport, Transport};

/// Error body returned by WordPress on failed requests
#[derive(Debug, Deserialize)]
struct WpErrorBody {
    code: Option<String>,
    message: Option<String>,
}

pub struct WpClient<T: Transport = ReqwestTransport> {
    transport: T,
    config: ApiConfig,
}

impl WpClient<ReqwestTransport> {
    pub fn from_config(config: ApiConfig) -> Self {
        let transport = ReqwestTransport::new(&config);
        Self { transport, config }
    }
}

impl<T: Transport> WpClient<T> {
    pub fn new(transport: T, config: ApiConfig) -> Self {
        Self { transport, config }
    }

    #[cfg(test)]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// `GET` an endpoint and decode its body.
    pub async fn fetch<R: DeserializeOwned>(&self, endpoint: &Endpoint) -> ApiResult<R> {
        let url = self.config.url_for(endpoint)?;
        log::debug!("[wp-rest] GET {}", url);
        let response = self.transport.get(&url).await?;
        decode(response)
    }

    /// `POST` a JSON payload to an endpoint and decode the created record.
    pub async fn create<R: DeserializeOwned>(&self, endpoint: &Endpoint, payload: &Value) -> ApiResult<R> {
        let url = self.config.url_for(endpoint)?;
        log::debug!("[wp-rest] POST {}", url);
        let response = self.transport.post_json(&url, payload).await?;
        decode(response)
    }

    pub async fn create_post(&self, payload: &Value) -> ApiResult<Post> {
        self.create(&Endpoint::posts(), payload).await
    }
}

fn decode<R: DeserializeOwned>(response: HttpResponse) -> ApiResult<R> {
    if !response.is_success() {
        let body: Option<WpErrorBody> = serde_json::from_str(&response.body).ok();
        let (code, message) = match body {
            Some(WpErrorBody { code, message }) => (code, message),
            None => (None, None),
        };
        log::warn!(
            "[wp-rest] HTTP {} ({})",
            response.status,
            code.as_deref().unwrap_or("no error code")
        );
        return Err(ApiError::Status {
            status: response.status,
            code,
            message: message.unwrap_or_else(|| "Request failed".to_string()),
        });
    }
    Ok(serde_json::from_str(&response.body)?)
}
