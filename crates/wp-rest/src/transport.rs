//! HTTP Transport
//!
//! The seam between the client and the network. `ReqwestTransport` is the
//! real implementation (browser `fetch` on wasm32); tests swap in a mock.

use async_trait::async_trait;
use serde_json::Value;
use url::Url;

use crate::config::ApiConfig;
use crate::error::ApiResult;

/// Status and body of a completed HTTP exchange
#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self { status, body: body.into() }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Issues requests. A returned `Err` means no HTTP response was received;
/// non-success statuses come back as `Ok` and are interpreted by the client.
///
/// Futures are not `Send`: in the browser they wrap JS promises.
#[async_trait(?Send)]
pub trait Transport {
    async fn get(&self, url: &Url) -> ApiResult<HttpResponse>;

    async fn post_json(&self, url: &Url, body: &Value) -> ApiResult<HttpResponse>;
}

pub struct ReqwestTransport {
    client: reqwest::Client,
    nonce: Option<String>,
    credentials: Option<(String, String)>,
}

impl ReqwestTransport {
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            nonce: config.nonce.clone(),
            credentials: config
                .credentials()
                .map(|(user, pass)| (user.to_string(), pass.to_string())),
        }
    }

    fn authorize(&self, mut request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        if let Some(nonce) = &self.nonce {
            request = request.header("X-WP-Nonce", nonce);
        }
        if let Some((user, pass)) = &self.credentials {
            request = request.basic_auth(user, Some(pass));
        }
        request
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> ApiResult<HttpResponse> {
        let response = self
            .authorize(request)
            .header("Accept", "application/json")
            .send()
            .await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(HttpResponse { status, body })
    }
}

#[async_trait(?Send)]
impl Transport for ReqwestTransport {
    async fn get(&self, url: &Url) -> ApiResult<HttpResponse> {
        self.send(self.client.get(url.as_str())).await
    }

    async fn post_json(&self, url: &Url, body: &Value) -> ApiResult<HttpResponse> {
        self.send(self.client.post(url.as_str()).json(body)).await
    }
}
