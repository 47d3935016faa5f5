//! Typed content model for the arbor site.
//!
//! Mirrors the rich-text schema the CMS delivers: a document tree of typed
//! nodes plus the embedded targets (assets and entries) those nodes point
//! at. The tree is decode-only and never written back, so everything here is
//! plain data with serde `Deserialize` impls. Rendering lives in
//! arbor-renderer.

pub mod asset;
pub mod entry;
pub mod post;
pub mod rich_text;

pub use asset::{Asset, AssetFields, AssetFile, FileDetails, ImageDimensions, MimeGroup};
pub use entry::{Entry, ImageGalleryFields, SourceCodeFields, YoutubeVideoFields};
pub use post::{Author, Post};
pub use rich_text::{Document, Mark, MarkKind, Node, TextNode};
