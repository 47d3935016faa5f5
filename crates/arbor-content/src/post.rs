//! Blog post and author records.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use smol_str::SmolStr;

use crate::asset::Asset;
use crate::rich_text::Document;

/// A blog post as fetched from the CMS. The body document is optional:
/// feed queries and inline post-preview targets omit it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub title: String,
    pub slug: SmolStr,
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub excerpt: Option<String>,
    /// Accent color driving the post theme.
    #[serde(default)]
    pub color: Option<SmolStr>,
    /// Estimated reading time in minutes.
    #[serde(default)]
    pub reading_time: Option<f64>,
    #[serde(default)]
    pub cover_image: Option<Asset>,
    #[serde(default)]
    pub author: Option<Author>,
    #[serde(default)]
    pub content: Option<Document>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Author {
    pub name: String,
    #[serde(default)]
    pub picture: Option<Asset>,
}
