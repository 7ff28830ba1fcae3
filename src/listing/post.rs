//! Post records and sort key extraction.

use crate::utils::date::DateTimeUtc;
use serde::{Deserialize, Serialize};

/// One blog post as produced by the content loader.
///
/// `path` is the routing key and must be unique within a listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Raw front-matter date, parsed on demand.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Post {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    pub fn with_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories = categories.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Parsed publication date, `None` when absent or unparseable.
    pub fn parsed_date(&self) -> Option<DateTimeUtc> {
        self.date.as_deref().and_then(DateTimeUtc::parse)
    }

    /// Milliseconds since the epoch, `None` for undated posts.
    pub fn timestamp(&self) -> Option<i64> {
        self.parsed_date().map(|dt| dt.timestamp_millis())
    }
}

/// Comparable key of a post: `(timestamp, path)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortKey<'a> {
    pub timestamp: Option<i64>,
    pub path: &'a str,
}

/// Extract the sort key of a post.
///
/// A missing or unparseable date yields `timestamp: None` ("undated");
/// extraction itself never fails.
pub fn extract_key(post: &Post) -> SortKey<'_> {
    SortKey {
        timestamp: post.timestamp(),
        path: &post.path,
    }
}
