//! Recording transport for tests.

use std::cell::RefCell;
use std::collections::VecDeque;

use async_trait::async_trait;
use serde_json::Value;
use url::Url;

use crate::error::{ApiError, ApiResult};
use crate::transport::{HttpResponse, Transport};

#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub method: &'static str,
    pub url: String,
    pub body: Option<Value>,
}

/// Replays queued responses in order and records every request.
#[derive(Default)]
pub struct MockTransport {
    responses: RefCell<VecDeque<ApiResult<HttpResponse>>>,
    requests: RefCell<Vec<RecordedRequest>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(self, status: u16, body: &str) -> Self {
        self.responses.borrow_mut().push_back(Ok(HttpResponse::new(status, body)));
        self
    }

    pub fn fail(self, message: &str) -> Self {
        self.responses
            .borrow_mut()
            .push_back(Err(ApiError::Transport(message.to_string())));
        self
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.borrow().clone()
    }

    fn next(&self, method: &'static str, url: &Url, body: Option<&Value>) -> ApiResult<HttpResponse> {
        self.requests.borrow_mut().push(RecordedRequest {
            method,
            url: url.to_string(),
            body: body.cloned(),
        });
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Transport("no response queued".to_string())))
    }
}

#[async_trait(?Send)]
impl Transport for MockTransport {
    async fn get(&self, url: &Url) -> ApiResult<HttpResponse> {
        self.next("GET", url, None)
    }

    async fn post_json(&self, url: &Url, body: &Value) -> ApiResult<HttpResponse> {
        self.next("POST", url, Some(body))
    }
}
