//! The rich-text document tree.
//!
//! Every node on the wire carries a `nodeType` tag; the closed [`Node`] enum
//! dispatches on it so that rendering can match exhaustively. Unknown node
//! types are a deserialization error: the schema is externally defined and
//! fixed, only embedded *targets* have an open sub-vocabulary (see
//! [`crate::entry`]).

use serde::Deserialize;

use crate::asset::Asset;
use crate::entry::Entry;

/// A complete rich-text document as delivered by the CMS.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub content: Vec<Node>,
}

/// One node of the document tree, tagged by `nodeType` on the wire.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "nodeType")]
pub enum Node {
    #[serde(rename = "text")]
    Text(TextNode),
    #[serde(rename = "paragraph")]
    Paragraph(Children),
    #[serde(rename = "heading-1")]
    Heading1(Children),
    #[serde(rename = "heading-2")]
    Heading2(Children),
    #[serde(rename = "heading-3")]
    Heading3(Children),
    #[serde(rename = "heading-4")]
    Heading4(Children),
    #[serde(rename = "heading-5")]
    Heading5(Children),
    #[serde(rename = "heading-6")]
    Heading6(Children),
    #[serde(rename = "blockquote")]
    Blockquote(Children),
    #[serde(rename = "hr")]
    HorizontalRule,
    #[serde(rename = "unordered-list")]
    UnorderedList(Children),
    #[serde(rename = "ordered-list")]
    OrderedList(Children),
    #[serde(rename = "list-item")]
    ListItem(Children),
    #[serde(rename = "embedded-asset-block")]
    EmbeddedAsset(AssetNode),
    #[serde(rename = "embedded-entry-block")]
    EmbeddedEntry(EntryNode),
    #[serde(rename = "embedded-entry-inline")]
    InlineEntry(EntryNode),
    #[serde(rename = "hyperlink")]
    Hyperlink(HyperlinkNode),
    #[serde(rename = "entry-hyperlink")]
    EntryHyperlink(EntryLinkNode),
}

/// Leaf text with its inline marks.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TextNode {
    pub value: String,
    #[serde(default)]
    pub marks: Vec<Mark>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Mark {
    #[serde(rename = "type")]
    pub kind: MarkKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkKind {
    Bold,
    Italic,
    Underline,
    Code,
    #[serde(other)]
    Other,
}

/// Shared shape of every container node: just child nodes.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Children {
    #[serde(default)]
    pub content: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AssetNode {
    pub data: AssetTarget,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AssetTarget {
    pub target: Asset,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EntryNode {
    pub data: EntryTarget,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EntryTarget {
    pub target: Entry,
}

/// External hyperlink: a `uri` plus the flowing text it wraps.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HyperlinkNode {
    pub data: HyperlinkData,
    #[serde(default)]
    pub content: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HyperlinkData {
    pub uri: String,
}

/// Internal hyperlink targeting another entry, resolved by slug at render
/// time.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EntryLinkNode {
    pub data: EntryTarget,
    #[serde(default)]
    pub content: Vec<Node>,
}

impl TextNode {
    pub fn has_mark(&self, kind: MarkKind) -> bool {
        self.marks.iter().any(|m| m.kind == kind)
    }
}
