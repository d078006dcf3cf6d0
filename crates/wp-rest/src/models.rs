//! Content Models
//!
//! Typed views of the records returned by the WordPress REST API.
//! Only the fields the frontend reads are modelled; everything else in the
//! response is ignored.

use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serialize};

use crate::form::FieldSpec;
use crate::text::plain_text;

/// Record identifier. WordPress core uses integers; plugins and proxies
/// sometimes send strings, which are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Num(u64),
    Text(String),
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Num(n) => write!(f, "{}", n),
            RecordId::Text(s) => write!(f, "{}", s),
        }
    }
}

impl Default for RecordId {
    fn default() -> Self {
        RecordId::Num(0)
    }
}

impl From<u64> for RecordId {
    fn from(id: u64) -> Self {
        RecordId::Num(id)
    }
}

/// Anything that can be rendered as one keyed row of a list.
pub trait Record: Clone {
    fn record_id(&self) -> RecordId;
}

/// A `{"rendered": "..."}` field. A bare JSON string is accepted as well.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Rendered {
    pub rendered: String,
}

impl Rendered {
    pub fn new(rendered: impl Into<String>) -> Self {
        Self { rendered: rendered.into() }
    }

    pub fn text(&self) -> String {
        plain_text(&self.rendered)
    }

    pub fn is_empty(&self) -> bool {
        self.rendered.trim().is_empty()
    }
}

impl<'de> Deserialize<'de> for Rendered {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Plain(String),
            Object {
                #[serde(default)]
                rendered: String,
            },
        }

        Ok(match Repr::deserialize(deserializer)? {
            Repr::Plain(rendered) | Repr::Object { rendered } => Rendered { rendered },
        })
    }
}

/// Post status options offered by the create form
pub const POST_STATUSES: &[(&str, &str)] = &[
    ("draft", "Draft"),
    ("publish", "Publish"),
];

/// A blog post (`/wp/v2/posts`)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Post {
    pub id: RecordId,
    pub date: Option<NaiveDateTime>,
    pub slug: String,
    pub status: String,
    pub link: String,
    pub title: Rendered,
    pub excerpt: Rendered,
    pub content: Rendered,
    pub author: Option<u64>,
}

impl Post {
    /// Fields of the "new post" form
    pub const FORM_FIELDS: &'static [FieldSpec] = &[
        FieldSpec::required("title", "Title"),
        FieldSpec::optional("content", "Content").multiline(8),
        FieldSpec::optional("excerpt", "Excerpt").multiline(2),
        FieldSpec::optional("status", "Status").choices(POST_STATUSES),
    ];

    /// Title as plain text, with a placeholder for untitled posts
    pub fn title_text(&self) -> String {
        let title = self.title.text();
        if title.is_empty() {
            "(no title)".to_string()
        } else {
            title
        }
    }

    pub fn display_date(&self) -> Option<String> {
        self.date.map(|d| d.format("%B %-d, %Y").to_string())
    }

    pub fn is_published(&self) -> bool {
        self.status == "publish"
    }
}

impl Record for Post {
    fn record_id(&self) -> RecordId {
        self.id.clone()
    }
}

/// A site user (`/wp/v2/users`)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    pub id: RecordId,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub link: String,
    /// Size in pixels (as a string key, e.g. `"96"`) -> avatar URL
    pub avatar_urls: BTreeMap<String, String>,
}

impl User {
    /// Largest avatar not exceeding `max_px`, falling back to the smallest one.
    pub fn avatar(&self, max_px: u32) -> Option<&str> {
        let mut sized: Vec<(u32, &str)> = self
            .avatar_urls
            .iter()
            .filter_map(|(size, url)| size.parse().ok().map(|s| (s, url.as_str())))
            .collect();
        sized.sort_by_key(|(size, _)| *size);
        sized
            .iter()
            .rev()
            .find(|(size, _)| *size <= max_px)
            .or_else(|| sized.first())
            .map(|(_, url)| *url)
    }
}

impl Record for User {
    fn record_id(&self) -> RecordId {
        self.id.clone()
    }
}

/// Site description from the REST index (`/wp-json`)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteInfo {
    pub name: String,
    pub description: String,
    pub url: String,
}
