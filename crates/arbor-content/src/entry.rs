//! Embedded entries: structured content records referenced from the
//! document tree.
//!
//! Entries arrive with a content-type id nested under `sys.contentType.sys.id`
//! and an open `fields` object. The known ids decode into typed variants;
//! anything else is preserved raw so the renderer can apply its
//! unknown-type policy (and so nothing is lost on the way through).

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use smol_str::SmolStr;

use crate::asset::Asset;
use crate::post::Post;

/// An embedded structured-content record, discriminated by content-type id.
#[derive(Debug, Clone, PartialEq)]
pub enum Entry {
    SourceCode(SourceCodeFields),
    ImageGallery(ImageGalleryFields),
    YoutubeVideo(YoutubeVideoFields),
    Post(Box<Post>),
    Unknown { id: SmolStr, fields: Value },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SourceCodeFields {
    #[serde(default)]
    pub title: Option<String>,
    pub code: String,
    #[serde(default)]
    pub language: Option<SmolStr>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ImageGalleryFields {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub images: Vec<Asset>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct YoutubeVideoFields {
    #[serde(default)]
    pub title: Option<String>,
    pub url: String,
}

impl Entry {
    /// Content-type id as declared by the CMS.
    pub fn type_id(&self) -> &str {
        match self {
            Entry::SourceCode(_) => "sourceCode",
            Entry::ImageGallery(_) => "imageGallery",
            Entry::YoutubeVideo(_) => "youtubeVideo",
            Entry::Post(_) => "post",
            Entry::Unknown { id, .. } => id,
        }
    }

    /// Slug used for internal entry links. Unknown entries still expose a
    /// `slug` field when their payload carries one.
    pub fn slug(&self) -> Option<&str> {
        match self {
            Entry::Post(post) => Some(post.slug.as_str()),
            Entry::Unknown { fields, .. } => fields.get("slug").and_then(Value::as_str),
            _ => None,
        }
    }
}

#[derive(Deserialize)]
struct RawEntry {
    sys: EntrySys,
    #[serde(default)]
    fields: Value,
}

#[derive(Deserialize)]
struct EntrySys {
    #[serde(rename = "contentType")]
    content_type: ContentTypeLink,
}

#[derive(Deserialize)]
struct ContentTypeLink {
    sys: ContentTypeSys,
}

#[derive(Deserialize)]
struct ContentTypeSys {
    id: SmolStr,
}

impl<'de> Deserialize<'de> for Entry {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawEntry::deserialize(deserializer)?;
        let id = raw.sys.content_type.sys.id;
        let entry = match id.as_str() {
            "sourceCode" => {
                Entry::SourceCode(serde_json::from_value(raw.fields).map_err(D::Error::custom)?)
            }
            "imageGallery" => {
                Entry::ImageGallery(serde_json::from_value(raw.fields).map_err(D::Error::custom)?)
            }
            "youtubeVideo" => {
                Entry::YoutubeVideo(serde_json::from_value(raw.fields).map_err(D::Error::custom)?)
            }
            "post" => Entry::Post(Box::new(
                serde_json::from_value(raw.fields).map_err(D::Error::custom)?,
            )),
            _ => Entry::Unknown {
                id,
                fields: raw.fields,
            },
        };
        Ok(entry)
    }
}
