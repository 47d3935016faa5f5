//! Visual components shared by post bodies and page templates.
//!
//! Each component appends its markup to the output buffer; styling is owned
//! by the stylesheet, so components emit structural class names only (plus
//! the occasional theme variable).

use std::fmt::Write;

use arbor_content::{
    Asset, AssetFields, AssetFile, Author, ImageGalleryFields, Post, SourceCodeFields,
    YoutubeVideoFields,
};
use pulldown_cmark_escape::{escape_href, escape_html, escape_html_body_text};
use url::Url;

pub(crate) fn post_image(html: &mut String, fields: &AssetFields, file: &AssetFile) {
    html.push_str("<img class=\"post-image\" loading=\"lazy\"");
    if let Some(title) = &fields.title {
        html.push_str(" title=\"");
        let _ = escape_html(&mut *html, title);
        html.push('"');
    }
    html.push_str(" alt=\"");
    if let Some(description) = &fields.description {
        let _ = escape_html(&mut *html, description);
    }
    html.push_str("\" src=\"");
    let _ = escape_href(&mut *html, &file.url);
    html.push_str("\" />\n");
}

pub(crate) fn video_embed(html: &mut String, file: &AssetFile) {
    html.push_str("<video class=\"post-video\" controls loop autopictureinpicture>");
    html.push_str("<source src=\"");
    let _ = escape_href(&mut *html, &file.url);
    html.push_str("\" type=\"video/mp4\" />");
    html.push_str("<p>Your browser doesn't support HTML5 video.</p>");
    html.push_str("</video>\n");
}

pub(crate) fn source_code(html: &mut String, fields: &SourceCodeFields) {
    html.push_str("<figure class=\"source-code\">");
    if let Some(title) = &fields.title {
        html.push_str("<figcaption>");
        let _ = escape_html(&mut *html, title);
        html.push_str("</figcaption>");
    }
    html.push_str("<pre><code");
    if let Some(language) = &fields.language {
        html.push_str(" class=\"language-");
        let _ = escape_html(&mut *html, language);
        html.push('"');
    }
    html.push('>');
    let _ = escape_html(&mut *html, &fields.code);
    html.push_str("</code></pre></figure>\n");
}

pub(crate) fn gallery(html: &mut String, fields: &ImageGalleryFields) {
    html.push_str("<div class=\"image-gallery\">\n");
    for image in &fields.images {
        gallery_image(html, image);
    }
    if let Some(title) = &fields.title {
        html.push_str("<h6 class=\"gallery-title\">");
        let _ = escape_html(&mut *html, title);
        html.push_str("</h6>\n");
    }
    html.push_str("</div>\n");
}

fn gallery_image(html: &mut String, image: &Asset) {
    let Some(file) = &image.fields.file else {
        return;
    };
    html.push_str("<img class=\"gallery-image\" loading=\"lazy\" alt=\"");
    if let Some(description) = &image.fields.description {
        let _ = escape_html(&mut *html, description);
    }
    html.push_str("\" src=\"");
    let _ = escape_href(&mut *html, &file.url);
    html.push_str("\" />\n");
}

pub(crate) fn youtube_video(html: &mut String, fields: &YoutubeVideoFields) {
    let Some(embed) = youtube_embed_url(&fields.url) else {
        // Not a URL we can turn into a player; degrade to a plain link.
        html.push_str("<a class=\"video-link\" href=\"");
        let _ = escape_href(&mut *html, &fields.url);
        html.push_str("\">");
        let label = fields.title.as_deref().unwrap_or(&fields.url);
        let _ = escape_html_body_text(&mut *html, label);
        html.push_str("</a>\n");
        return;
    };

    html.push_str("<div class=\"video-embed\"><iframe src=\"");
    let _ = escape_href(&mut *html, &embed);
    html.push('"');
    if let Some(title) = &fields.title {
        html.push_str(" title=\"");
        let _ = escape_html(&mut *html, title);
        html.push('"');
    }
    html.push_str(" frameborder=\"0\" allowfullscreen></iframe></div>\n");
}

/// Embed URL for a watch/share link. Accepts `youtube.com/watch?v=`,
/// `youtu.be/<id>`, and already-embed URLs.
fn youtube_embed_url(raw: &str) -> Option<String> {
    let url = Url::parse(raw).ok()?;
    let host = url.host_str()?;

    let id = if host == "youtu.be" {
        url.path_segments()?.next()?.to_string()
    } else if host.ends_with("youtube.com") || host.ends_with("youtube-nocookie.com") {
        let mut segments = url.path_segments()?;
        match segments.next() {
            Some("watch") => url
                .query_pairs()
                .find(|(key, _)| key == "v")
                .map(|(_, value)| value.into_owned())?,
            Some("embed") => segments.next()?.to_string(),
            _ => return None,
        }
    } else {
        return None;
    };

    if id.is_empty() {
        return None;
    }
    Some(format!("https://www.youtube-nocookie.com/embed/{id}"))
}

/// Post-preview card: used inline in post bodies and by the home feed.
pub fn post_preview(html: &mut String, post: &Post) {
    html.push_str("<article class=\"post-preview\"");
    if let Some(color) = &post.color {
        html.push_str(" style=\"--post-color: ");
        let _ = escape_html(&mut *html, color);
        html.push_str(";\"");
    }
    html.push('>');
    html.push_str("<a class=\"post-preview-link\" href=\"/posts/");
    let _ = escape_href(&mut *html, &post.slug);
    html.push_str("\">");

    if let Some(file) = post
        .cover_image
        .as_ref()
        .and_then(|cover| cover.fields.file.as_ref())
    {
        html.push_str("<img class=\"post-preview-cover\" loading=\"lazy\" alt=\"\" src=\"");
        let _ = escape_href(&mut *html, &file.url);
        html.push_str("\" />");
    }

    html.push_str("<div class=\"post-preview-info\">");
    html.push_str("<h3 class=\"post-preview-title\">");
    let _ = escape_html(&mut *html, &post.title);
    html.push_str("</h3>");

    let meta = preview_meta(post);
    if !meta.is_empty() {
        html.push_str("<div class=\"post-preview-meta\">");
        let _ = escape_html(&mut *html, &meta);
        html.push_str("</div>");
    }

    if let Some(author) = &post.author {
        author_block(html, author);
    }

    if let Some(excerpt) = &post.excerpt {
        html.push_str("<p class=\"post-preview-excerpt\">");
        let _ = escape_html_body_text(&mut *html, excerpt);
        html.push_str("</p>");
    }

    html.push_str("</div></a></article>\n");
}

fn preview_meta(post: &Post) -> String {
    let mut meta = String::new();
    if let Some(date) = &post.date {
        meta.push_str(&date.format("%B %-d, %Y").to_string());
    }
    if let Some(minutes) = post.reading_time {
        if !meta.is_empty() {
            meta.push_str(" · ");
        }
        let _ = write!(meta, "{} min read", minutes.ceil() as u64);
    }
    meta
}

/// Author avatar + name.
pub fn author_block(html: &mut String, author: &Author) {
    html.push_str("<span class=\"post-author\">");
    if let Some(file) = author
        .picture
        .as_ref()
        .and_then(|picture| picture.fields.file.as_ref())
    {
        html.push_str("<img class=\"post-author-avatar\" alt=\"\" width=\"42\" height=\"42\" src=\"");
        let _ = escape_href(&mut *html, &file.url);
        html.push_str("\" />");
    }
    html.push_str("<span class=\"post-author-name\">");
    let _ = escape_html(&mut *html, &author.name);
    html.push_str("</span></span>");
}

/// The home/blog feed: preview cards in document order.
pub fn stories_list(html: &mut String, posts: &[Post]) {
    html.push_str("<div class=\"stories-list\">\n");
    for post in posts {
        post_preview(html, post);
    }
    html.push_str("</div>\n");
}
