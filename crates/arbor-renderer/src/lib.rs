//! Arbor renderer
//!
//! Renders CMS-managed content into the static HTML page set of a personal
//! portfolio and blog: the rich-text post-body dispatcher, the visual
//! components it emits, page templates, per-post theming, and the
//! static-site writer around them.
//!
//! Rendering is pure and synchronous: content in, strings out. Only the
//! site writer touches the filesystem.

pub mod colors;
pub mod components;
pub mod css;
pub mod error;
pub mod pages;
pub mod post_body;
pub mod post_theme;
pub mod static_site;
pub mod theme;
pub mod typewriter;

pub use error::{RenderError, SiteError};
pub use pages::{SiteConfig, SocialLink};
pub use post_body::{PostBodyContext, render_post_body};
pub use post_theme::PostTheme;
pub use static_site::{SiteOptions, SiteWriter};
pub use typewriter::Typewriter;
