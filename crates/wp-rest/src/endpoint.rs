//! Endpoints
//!
//! A path under the site root plus optional query pairs.

use std::fmt;

pub const INDEX_PATH: &str = "/wp-json";
pub const POSTS_PATH: &str = "/wp-json/wp/v2/posts";
pub const USERS_PATH: &str = "/wp-json/wp/v2/users";

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Endpoint {
    path: String,
    query: Vec<(String, String)>,
}

impl Endpoint {
    pub fn new(path: impl Into<String>) -> Self {
        let path = path.into();
        let path = if path.starts_with('/') { path } else { format!("/{}", path) };
        Self { path, query: Vec::new() }
    }

    pub fn index() -> Self {
        Self::new(INDEX_PATH)
    }

    pub fn posts() -> Self {
        Self::new(POSTS_PATH)
    }

    pub fn post(id: impl fmt::Display) -> Self {
        Self::new(format!("{}/{}", POSTS_PATH, id))
    }

    pub fn users() -> Self {
        Self::new(USERS_PATH)
    }

    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Add `per_page` when a page size is configured.
    pub fn paged(self, per_page: Option<u32>) -> Self {
        match per_page {
            Some(n) => self.with_query("per_page", n.to_string()),
            None => self,
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn query(&self) -> &[(String, String)] {
        &self.query
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path)?;
        for (i, (key, value)) in self.query.iter().enumerate() {
            write!(f, "{}{}={}", if i == 0 { '?' } else { '&' }, key, value)?;
        }
        Ok(())
    }
}
