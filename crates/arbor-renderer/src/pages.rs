//! Full-page HTML templates.
//!
//! Pure string builders: site config + content in, complete documents out.
//! The writer in [`crate::static_site`] decides where they land on disk.

use arbor_content::Post;
use pulldown_cmark_escape::{escape_href, escape_html, escape_html_body_text};

use crate::components;
use crate::error::RenderError;
use crate::post_body::{PostBodyContext, render_post_body};
use crate::post_theme::PostTheme;
use crate::typewriter::Typewriter;

/// Site-wide identity used by the page templates.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// `<title>` of the home page.
    pub title: String,
    /// The person the portfolio belongs to.
    pub author: String,
    pub job_title: String,
    pub biography: String,
    /// Optional typewriter intro line under the name.
    pub intro: Option<String>,
    /// Absolute site root, with trailing slash.
    pub base_url: String,
    pub portrait_url: String,
    pub social: Vec<SocialLink>,
    pub mentorship_url: Option<String>,
}

#[derive(Debug, Clone)]
pub struct SocialLink {
    pub label: String,
    pub url: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Portfolio".into(),
            author: "Anonymous".into(),
            job_title: "Software Engineer".into(),
            biography: String::new(),
            intro: None,
            base_url: "/".into(),
            portrait_url: "/portrait.jpg".into(),
            social: Vec::new(),
            mentorship_url: None,
        }
    }
}

impl SiteConfig {
    /// `schema.org` Person record embedded in the home page head.
    fn json_ld(&self) -> String {
        serde_json::json!({
            "@context": "https://schema.org/",
            "@type": "Person",
            "name": self.author,
            "url": self.base_url,
            "image": format!("{}portrait.jpg", self.base_url),
            "sameAs": self.social.iter().map(|link| link.url.as_str()).collect::<Vec<_>>(),
            "jobTitle": self.job_title,
        })
        .to_string()
    }
}

fn page_shell(html: &mut String, title: &str, description: &str, head_extra: &str) {
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\" />\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\" />\n");
    html.push_str("<title>");
    let _ = escape_html(&mut *html, title);
    html.push_str("</title>\n");
    if !description.is_empty() {
        html.push_str("<meta name=\"description\" content=\"");
        let _ = escape_html(&mut *html, description);
        html.push_str("\" />\n");
    }
    html.push_str("<link rel=\"stylesheet\" href=\"/styles.css\" />\n");
    html.push_str(head_extra);
    html.push_str("</head>\n<body>\n");
}

fn page_close(html: &mut String) {
    html.push_str("</body>\n</html>\n");
}

fn footer(html: &mut String, site: &SiteConfig) {
    html.push_str("<footer class=\"app-footer\"><div>\n");
    html.push_str("<nav class=\"footer-nav\"><a href=\"/\">Home</a> <a href=\"/blog\">Blog</a></nav>\n");
    html.push_str("<div class=\"footer-social\">\n");
    for link in &site.social {
        html.push_str("<a href=\"");
        let _ = escape_href(&mut *html, &link.url);
        html.push_str("\" target=\"_blank\" rel=\"noopener noreferrer\">");
        let _ = escape_html(&mut *html, &link.label);
        html.push_str("</a>\n");
    }
    html.push_str("</div>\n</div></footer>\n");
}

/// The home page: biography card, recent posts, mentorship pitch, footer.
pub fn home_page(site: &SiteConfig, latest_posts: &[Post]) -> String {
    let mut head_extra = String::new();
    head_extra.push_str("<script type=\"application/ld+json\">");
    head_extra.push_str(&site.json_ld());
    head_extra.push_str("</script>\n");
    head_extra.push_str("<link rel=\"preload\" href=\"");
    let _ = escape_href(&mut head_extra, &site.portrait_url);
    head_extra.push_str("\" as=\"image\" />\n");

    let mut html = String::new();
    page_shell(&mut html, &site.title, &site.biography, &head_extra);

    html.push_str("<div class=\"home-card\">\n<div class=\"home-card-text\">\n");
    html.push_str("<div class=\"portrait\"><img loading=\"eager\" src=\"");
    let _ = escape_href(&mut html, &site.portrait_url);
    html.push_str("\" alt=\"");
    let _ = escape_html(&mut html, &site.author);
    html.push_str("\" /></div>\n");

    html.push_str("<div class=\"biography\">\n<h1>");
    let _ = escape_html(&mut html, &site.author);
    html.push_str("</h1>\n");
    if let Some(intro) = &site.intro {
        html.push_str(&Typewriter::new(intro).to_html());
        html.push('\n');
    }
    html.push_str("<p>");
    let _ = escape_html_body_text(&mut html, &site.biography);
    html.push_str("</p>\n</div>\n</div>\n</div>\n");

    html.push_str("<div class=\"home-card\">\n<div class=\"home-card-text\">\n");
    html.push_str("<h2>Recent posts</h2>\n");
    if !latest_posts.is_empty() {
        components::stories_list(&mut html, latest_posts);
    }
    html.push_str("<a class=\"pill-button\" href=\"/blog\">See more posts</a>\n");
    html.push_str("</div>\n</div>\n");

    if let Some(mentorship_url) = &site.mentorship_url {
        html.push_str("<div class=\"home-card\">\n<div class=\"home-card-text\">\n<hr />\n");
        html.push_str("<h2>Mentorship</h2>\n");
        html.push_str(
            "<p>Looking to level up or develop your software engineering career? I'd love to help.</p>\n",
        );
        html.push_str("<a class=\"pill-button\" href=\"");
        let _ = escape_href(&mut html, mentorship_url);
        html.push_str("\" target=\"_blank\" rel=\"nofollow noopener noreferrer\">Apply for Mentorship</a>\n");
        html.push_str("</div>\n</div>\n");
    }

    footer(&mut html, site);
    page_close(&mut html);
    html
}

/// A post page: themed wrapper, post header, rendered body, footer.
pub fn post_page(site: &SiteConfig, post: &Post, strict: bool) -> Result<String, RenderError> {
    let accent = post
        .color
        .as_deref()
        .unwrap_or(crate::colors::ui::POST_TEXT_EMPHASIS);
    let theme = PostTheme::from_color(accent)?;

    let mut ctx = PostBodyContext::new(accent, theme.complementary_color().clone());
    ctx.strict_unknown_types = strict;

    let empty = arbor_content::Document::default();
    let body = render_post_body(post.content.as_ref().unwrap_or(&empty), &ctx)?;

    let mut head_extra = String::from("<style>\n");
    head_extra.push_str(&theme.css_variables()?);
    head_extra.push_str("</style>\n");

    let mut html = String::new();
    page_shell(
        &mut html,
        &post.title,
        post.excerpt.as_deref().unwrap_or_default(),
        &head_extra,
    );

    html.push_str("<article class=\"post-theme\">\n<header class=\"post-header\">\n");
    if let Some(file) = post
        .cover_image
        .as_ref()
        .and_then(|cover| cover.fields.file.as_ref())
    {
        html.push_str("<img class=\"post-cover\" alt=\"\" src=\"");
        let _ = escape_href(&mut html, &file.url);
        html.push_str("\" />\n");
    }
    html.push_str("<h1>");
    let _ = escape_html(&mut html, &post.title);
    html.push_str("</h1>\n");

    let mut meta = String::new();
    if let Some(date) = &post.date {
        meta.push_str(&date.format("%B %-d, %Y").to_string());
    }
    if let Some(minutes) = post.reading_time {
        if !meta.is_empty() {
            meta.push_str(" · ");
        }
        meta.push_str(&format!("{} min read", minutes.ceil() as u64));
    }
    if !meta.is_empty() {
        html.push_str("<div class=\"post-meta\">");
        let _ = escape_html(&mut html, &meta);
        html.push_str("</div>\n");
    }
    if let Some(author) = &post.author {
        components::author_block(&mut html, author);
        html.push('\n');
    }
    html.push_str("</header>\n");

    html.push_str(&body);
    html.push_str("</article>\n");

    footer(&mut html, site);
    page_close(&mut html);
    Ok(html)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn site() -> SiteConfig {
        SiteConfig {
            title: "Avery Quinn — Portfolio".into(),
            author: "Avery Quinn".into(),
            job_title: "Software Engineer".into(),
            biography: "I build web application products.".into(),
            intro: None,
            base_url: "https://avery.example/".into(),
            portrait_url: "/portrait.jpg".into(),
            social: vec![SocialLink {
                label: "GitHub".into(),
                url: "https://github.com/averyq".into(),
            }],
            mentorship_url: Some("https://mentors.example/avery".into()),
        }
    }

    fn post_with_body() -> Post {
        serde_json::from_value(json!({
            "title": "On rendering",
            "slug": "on-rendering",
            "date": "2024-03-01T12:00:00Z",
            "excerpt": "Trees all the way down.",
            "color": "#0099ff",
            "readingTime": 4.0,
            "content": {
                "nodeType": "document",
                "data": {},
                "content": [
                    { "nodeType": "paragraph", "data": {}, "content": [
                        { "nodeType": "text", "value": "Hello from the body.", "marks": [], "data": {} }
                    ]}
                ]
            }
        }))
        .unwrap()
    }

    #[test]
    fn home_page_embeds_identity_and_feed() {
        let posts = vec![post_with_body()];
        let html = home_page(&site(), &posts);

        assert!(html.contains("<title>Avery Quinn — Portfolio</title>"));
        assert!(html.contains("application/ld+json"));
        assert!(html.contains("\"jobTitle\":\"Software Engineer\""));
        assert!(html.contains("href=\"/posts/on-rendering\""));
        assert!(html.contains("Apply for Mentorship"));
        assert!(html.contains("https://github.com/averyq"));
    }

    #[test]
    fn post_page_mounts_theme_and_body() {
        let html = post_page(&site(), &post_with_body(), true).unwrap();

        assert!(html.contains("--post-color: #0099ff;"));
        assert!(html.contains("class=\"post-theme\""));
        assert!(html.contains("Hello from the body."));
        assert!(html.contains("March 1, 2024 · 4 min read"));
    }

    #[test]
    fn post_page_without_body_still_renders() {
        let post: Post = serde_json::from_value(json!({
            "title": "Stub",
            "slug": "stub"
        }))
        .unwrap();
        let html = post_page(&site(), &post, true).unwrap();
        assert!(html.contains("<div class=\"post-body\""));
    }
}
