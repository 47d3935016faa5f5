//! Rich-text post body rendering.
//!
//! A post body arrives as a tree of typed nodes. Rendering is one recursive
//! walk: each node type maps to exactly one output rule, and the embedded
//! asset/entry rules dispatch a second time on the target's mime group or
//! content-type id. The walk is pure and synchronous: (node, color context)
//! in, HTML out.
//!
//! Unknown embedded targets follow the strict/lenient policy on
//! [`PostBodyContext`]: strict raises [`RenderError`], lenient logs a
//! warning and renders nothing.

use std::fmt::Write;

use arbor_content::{
    Asset, AssetFile, Document, Entry, MarkKind, MimeGroup, Node, TextNode,
};
use arbor_content::rich_text::{Children, EntryLinkNode, HyperlinkNode};
use pulldown_cmark_escape::{escape_href, escape_html, escape_html_body_text};
use smol_str::SmolStr;
use tracing::warn;

use crate::colors;
use crate::components;
use crate::error::RenderError;

#[cfg(test)]
mod tests;

/// Contextual parameters for one post body render.
#[derive(Debug, Clone)]
pub struct PostBodyContext {
    /// Primary post accent color.
    pub color: SmolStr,
    /// Complementary accent used for quotes, code bubbles, and h6 emphasis.
    pub complementary_color: SmolStr,
    /// Raise on unrecognized embedded content instead of dropping it.
    pub strict_unknown_types: bool,
}

impl PostBodyContext {
    pub fn new(color: impl Into<SmolStr>, complementary_color: impl Into<SmolStr>) -> Self {
        Self {
            color: color.into(),
            complementary_color: complementary_color.into(),
            strict_unknown_types: false,
        }
    }

    pub fn strict(mut self) -> Self {
        self.strict_unknown_types = true;
        self
    }
}

impl Default for PostBodyContext {
    fn default() -> Self {
        Self::new(colors::ui::POST_TEXT_EMPHASIS, colors::ui::POST_TEXT_QUOTE)
    }
}

/// Render a complete document into a post-body container. The container
/// carries the primary accent so the stylesheet can tint headings and links
/// inside it.
pub fn render_post_body(doc: &Document, ctx: &PostBodyContext) -> Result<String, RenderError> {
    let mut html = String::new();
    html.push_str("<div class=\"post-body\" style=\"--post-color: ");
    let _ = escape_html(&mut html, &ctx.color);
    html.push_str("\">\n");
    for node in &doc.content {
        render_node(&mut html, node, ctx)?;
    }
    html.push_str("</div>\n");
    Ok(html)
}

/// Render a single node. Exactly one rule per node type.
pub fn render_node(
    html: &mut String,
    node: &Node,
    ctx: &PostBodyContext,
) -> Result<(), RenderError> {
    match node {
        Node::Text(text) => render_text(html, text, ctx)?,
        Node::Paragraph(children) => {
            html.push_str("<p>");
            render_children(html, children, ctx)?;
            html.push_str("</p>\n");
        }
        Node::Heading1(children) => render_heading(html, 1, children, ctx)?,
        Node::Heading2(children) => render_heading(html, 2, children, ctx)?,
        Node::Heading3(children) => render_heading(html, 3, children, ctx)?,
        Node::Heading4(children) => render_heading(html, 4, children, ctx)?,
        Node::Heading5(children) => render_heading(html, 5, children, ctx)?,
        Node::Heading6(children) => render_emphasis(html, children, ctx)?,
        Node::Blockquote(children) => render_quote(html, children, ctx)?,
        Node::HorizontalRule => html.push_str("<hr />\n"),
        Node::UnorderedList(children) => render_list(html, "ul", children, ctx)?,
        Node::OrderedList(children) => render_list(html, "ol", children, ctx)?,
        Node::ListItem(children) => render_list_item(html, children, ctx)?,
        Node::EmbeddedAsset(node) => render_embedded_asset(html, &node.data.target, ctx)?,
        Node::EmbeddedEntry(node) => render_block_entry(html, &node.data.target, ctx)?,
        Node::InlineEntry(node) => render_inline_entry(html, &node.data.target, ctx)?,
        Node::Hyperlink(link) => render_hyperlink(html, link, ctx)?,
        Node::EntryHyperlink(link) => render_entry_hyperlink(html, link, ctx)?,
    }
    Ok(())
}

fn render_children(
    html: &mut String,
    children: &Children,
    ctx: &PostBodyContext,
) -> Result<(), RenderError> {
    for child in &children.content {
        render_node(html, child, ctx)?;
    }
    Ok(())
}

fn render_text(html: &mut String, text: &TextNode, ctx: &PostBodyContext) -> Result<(), RenderError> {
    if text.has_mark(MarkKind::Code) {
        return render_code_bubble(html, &text.value, ctx);
    }

    let mut open = Vec::new();
    for mark in &text.marks {
        match mark.kind {
            MarkKind::Bold => open.push("strong"),
            MarkKind::Italic => open.push("em"),
            MarkKind::Underline => open.push("u"),
            MarkKind::Code | MarkKind::Other => {}
        }
    }
    for tag in &open {
        let _ = write!(html, "<{tag}>");
    }
    let _ = escape_html_body_text(&mut *html, &text.value);
    for tag in open.iter().rev() {
        let _ = write!(html, "</{tag}>");
    }
    Ok(())
}

/// Code-marked text renders as a speech-bubble callout on the complementary
/// color. Whitespace-only text is suppressed entirely rather than emitting
/// an empty container.
fn render_code_bubble(
    html: &mut String,
    text: &str,
    ctx: &PostBodyContext,
) -> Result<(), RenderError> {
    if text.trim().is_empty() {
        return Ok(());
    }
    let contrast = colors::color_contrast(&ctx.complementary_color)?;
    html.push_str("<blockquote class=\"quote-bubble\" style=\"background-color: ");
    let _ = escape_html(&mut *html, &ctx.complementary_color);
    let _ = write!(html, "; color: {contrast}\">");
    let _ = escape_html_body_text(&mut *html, text);
    html.push_str("</blockquote>\n");
    Ok(())
}

fn render_heading(
    html: &mut String,
    level: u8,
    children: &Children,
    ctx: &PostBodyContext,
) -> Result<(), RenderError> {
    let _ = write!(html, "<h{level}>");
    render_children(html, children, ctx)?;
    let _ = write!(html, "</h{level}>\n");
    Ok(())
}

/// Level-6 headings are not headings at all in this design: they render as
/// an oversized emphasis block accented with the complementary color.
fn render_emphasis(
    html: &mut String,
    children: &Children,
    ctx: &PostBodyContext,
) -> Result<(), RenderError> {
    html.push_str("<em class=\"post-emphasis\" style=\"color: ");
    let _ = escape_html(&mut *html, &ctx.complementary_color);
    html.push_str("\">");
    render_children(html, children, ctx)?;
    html.push_str("</em>\n");
    Ok(())
}

fn render_quote(
    html: &mut String,
    children: &Children,
    ctx: &PostBodyContext,
) -> Result<(), RenderError> {
    html.push_str("<blockquote class=\"post-quote\" style=\"border-left-color: ");
    let _ = escape_html(&mut *html, &ctx.complementary_color);
    html.push_str("\">\n");
    render_children(html, children, ctx)?;
    html.push_str("</blockquote>\n");
    Ok(())
}

fn render_list(
    html: &mut String,
    tag: &str,
    children: &Children,
    ctx: &PostBodyContext,
) -> Result<(), RenderError> {
    let _ = write!(html, "<{tag}>\n");
    for child in &children.content {
        match child {
            Node::ListItem(item) => render_list_item(html, item, ctx)?,
            other => render_node(html, other, ctx)?,
        }
    }
    let _ = write!(html, "</{tag}>\n");
    Ok(())
}

/// List items flatten their paragraph wrappers: the CMS nests every item's
/// text inside a paragraph node, which would otherwise put a block element
/// in each `<li>`. The override applies to the item's direct children only;
/// nested lists keep their structure and flatten their own items in turn.
fn render_list_item(
    html: &mut String,
    children: &Children,
    ctx: &PostBodyContext,
) -> Result<(), RenderError> {
    html.push_str("<li>");
    for child in &children.content {
        match child {
            Node::Paragraph(inner) => render_children(html, inner, ctx)?,
            Node::ListItem(inner) => render_children(html, inner, ctx)?,
            other => render_node(html, other, ctx)?,
        }
    }
    html.push_str("</li>\n");
    Ok(())
}

fn render_embedded_asset(
    html: &mut String,
    asset: &Asset,
    ctx: &PostBodyContext,
) -> Result<(), RenderError> {
    let Some(file) = &asset.fields.file else {
        warn!("dropping embedded asset with no file");
        return Ok(());
    };
    match file.mime_group() {
        MimeGroup::Video => components::video_embed(html, file),
        MimeGroup::Image => components::post_image(html, &asset.fields, file),
        MimeGroup::Application => render_attachment(html, asset, file),
        MimeGroup::Other(_) => {
            if ctx.strict_unknown_types {
                return Err(RenderError::UnrecognizedMimeType {
                    mime: file.content_type.clone(),
                });
            }
            warn!(
                mime = %file.content_type,
                "dropping embedded asset with unrecognized mime type"
            );
        }
    }
    Ok(())
}

fn render_attachment(html: &mut String, asset: &Asset, file: &AssetFile) {
    html.push_str("<a class=\"post-attachment\" href=\"");
    let _ = escape_href(&mut *html, &file.url);
    html.push_str("\">");
    let label = asset
        .fields
        .title
        .as_deref()
        .or(file.file_name.as_deref())
        .unwrap_or(&file.url);
    let _ = escape_html_body_text(&mut *html, label);
    html.push_str("</a>\n");
}

/// Block-position embedded entries: source code, gallery, video.
fn render_block_entry(
    html: &mut String,
    entry: &Entry,
    ctx: &PostBodyContext,
) -> Result<(), RenderError> {
    match entry {
        Entry::SourceCode(fields) => components::source_code(html, fields),
        Entry::ImageGallery(fields) => components::gallery(html, fields),
        Entry::YoutubeVideo(fields) => components::youtube_video(html, fields),
        Entry::Post(_) | Entry::Unknown { .. } => drop_unknown_entry(entry.type_id(), ctx)?,
    }
    Ok(())
}

/// Inline-position embedded entries: source code and post previews. The
/// block-only entry kinds are unrecognized here.
fn render_inline_entry(
    html: &mut String,
    entry: &Entry,
    ctx: &PostBodyContext,
) -> Result<(), RenderError> {
    match entry {
        Entry::SourceCode(fields) => components::source_code(html, fields),
        Entry::Post(post) => components::post_preview(html, post),
        Entry::ImageGallery(_) | Entry::YoutubeVideo(_) | Entry::Unknown { .. } => {
            drop_unknown_entry(entry.type_id(), ctx)?
        }
    }
    Ok(())
}

fn drop_unknown_entry(id: &str, ctx: &PostBodyContext) -> Result<(), RenderError> {
    if ctx.strict_unknown_types {
        return Err(RenderError::UnrecognizedContentType { id: SmolStr::new(id) });
    }
    warn!(
        content_type = id,
        "dropping embedded entry with unrecognized content type"
    );
    Ok(())
}

fn render_hyperlink(
    html: &mut String,
    link: &HyperlinkNode,
    ctx: &PostBodyContext,
) -> Result<(), RenderError> {
    html.push_str("<a href=\"");
    let _ = escape_href(&mut *html, &link.data.uri);
    html.push_str("\">");
    for child in &link.content {
        render_node(html, child, ctx)?;
    }
    html.push_str("</a>");
    Ok(())
}

/// Internal link keyed by the target entry's slug. No validity check is
/// performed here; a slug-less target yields a visibly bare `/posts/` href.
fn render_entry_hyperlink(
    html: &mut String,
    link: &EntryLinkNode,
    ctx: &PostBodyContext,
) -> Result<(), RenderError> {
    let slug = link.data.target.slug().unwrap_or_default();
    html.push_str("<a href=\"/posts/");
    let _ = escape_href(&mut *html, slug);
    html.push_str("\">");
    for child in &link.content {
        render_node(html, child, ctx)?;
    }
    html.push_str("</a>");
    Ok(())
}
