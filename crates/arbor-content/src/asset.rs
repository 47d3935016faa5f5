//! Embedded assets: media files managed by the CMS.

use serde::Deserialize;
use smol_str::SmolStr;

/// A media file referenced from the document tree.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Asset {
    pub fields: AssetFields,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct AssetFields {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub file: Option<AssetFile>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AssetFile {
    pub url: String,
    #[serde(rename = "fileName", default)]
    pub file_name: Option<String>,
    #[serde(rename = "contentType")]
    pub content_type: SmolStr,
    #[serde(default)]
    pub details: Option<FileDetails>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct FileDetails {
    #[serde(default)]
    pub size: Option<u64>,
    #[serde(default)]
    pub image: Option<ImageDimensions>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct ImageDimensions {
    pub width: u32,
    pub height: u32,
}

/// Coarse media class of an asset, derived from the mime type's prefix
/// (the text before `/`). Computed at render time, never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MimeGroup {
    Video,
    Image,
    Application,
    Other(SmolStr),
}

impl MimeGroup {
    pub fn from_mime(mime: &str) -> Self {
        let group = mime.split('/').next().unwrap_or("");
        match group {
            "video" => Self::Video,
            "image" => Self::Image,
            "application" => Self::Application,
            other => Self::Other(SmolStr::new(other)),
        }
    }
}

impl AssetFile {
    pub fn mime_group(&self) -> MimeGroup {
        MimeGroup::from_mime(&self.content_type)
    }
}
