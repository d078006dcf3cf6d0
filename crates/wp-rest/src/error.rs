//! Client Errors
//!
//! Everything that can go wrong between building a request URL and
//! decoding the response body.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Network error: {0}")]
    Transport(String),

    /// Non-success HTTP status. `code` and `message` come from the
    /// WordPress error payload when the body carries one.
    #[error("{message} (HTTP {status})")]
    Status {
        status: u16,
        code: Option<String>,
        message: String,
    },

    #[error("Unexpected response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Transport(err.to_string())
    }
}

impl From<url::ParseError> for ApiError {
    fn from(err: url::ParseError) -> Self {
        ApiError::InvalidUrl(err.to_string())
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
