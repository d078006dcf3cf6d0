//! WordPress REST Core
//!
//! Everything the frontend needs that does not touch the DOM:
//! - models: typed posts and users
//! - client/transport: HTTP against `/wp-json`
//! - fetch_state: result, loading flag and error of one data view
//! - form: drafts, validation and the submit cycle
//! - list: unique keying of list rows

pub mod client;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod fetch_state;
pub mod form;
pub mod list;
pub mod models;
pub mod text;
pub mod transport;

#[cfg(test)]
mod mock;

pub use client::WpClient;
pub use config::ApiConfig;
pub use endpoint::Endpoint;
pub use error::{ApiError, ApiResult};
pub use fetch_state::{FetchState, Ticket};
pub use form::{Draft, FieldKind, FieldSpec, FormState, SubmitOutcome};
pub use models::{Post, Record, RecordId, Rendered, SiteInfo, User};
pub use transport::{HttpResponse, ReqwestTransport, Transport};
pub use url::Url;
