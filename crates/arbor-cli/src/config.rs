//! Site configuration from a KDL file.
//!
//! ```kdl
//! title "Avery Quinn — Portfolio"
//! author "Avery Quinn"
//! job-title "Software Engineer"
//! biography "I build web application products."
//! intro "I build 👉websites👈 things"
//! base-url "https://avery.example/"
//! portrait "/portrait.jpg"
//! mentorship "https://mentors.example/avery"
//! social {
//!     link label="GitHub" url="https://github.com/averyq"
//!     link label="LinkedIn" url="https://linkedin.com/in/averyq"
//! }
//! ```

use std::path::Path;

use arbor_renderer::{SiteConfig, SocialLink};
use kdl::{KdlDocument, KdlNode};
use miette::{IntoDiagnostic, WrapErr};

pub fn load_site_config(path: &Path) -> miette::Result<SiteConfig> {
    let text = std::fs::read_to_string(path)
        .into_diagnostic()
        .wrap_err_with(|| format!("reading site config {}", path.display()))?;
    parse_site_config(&text)
}

pub fn parse_site_config(text: &str) -> miette::Result<SiteConfig> {
    let doc: KdlDocument = text
        .parse()
        .into_diagnostic()
        .wrap_err("parsing site config")?;

    let mut site = SiteConfig::default();
    if let Some(title) = string_arg(&doc, "title") {
        site.title = title;
    }
    if let Some(author) = string_arg(&doc, "author") {
        site.author = author;
    }
    if let Some(job_title) = string_arg(&doc, "job-title") {
        site.job_title = job_title;
    }
    if let Some(biography) = string_arg(&doc, "biography") {
        site.biography = biography;
    }
    site.intro = string_arg(&doc, "intro");
    if let Some(base_url) = string_arg(&doc, "base-url") {
        site.base_url = base_url;
    }
    if let Some(portrait) = string_arg(&doc, "portrait") {
        site.portrait_url = portrait;
    }
    site.mentorship_url = string_arg(&doc, "mentorship");

    if let Some(children) = doc.get("social").and_then(KdlNode::children) {
        for node in children.nodes() {
            if node.name().value() != "link" {
                continue;
            }
            let label = string_property(node, "label");
            let url = string_property(node, "url");
            if let (Some(label), Some(url)) = (label, url) {
                site.social.push(SocialLink { label, url });
            }
        }
    }

    Ok(site)
}

/// First argument of a top-level node, as a string.
fn string_arg(doc: &KdlDocument, name: &str) -> Option<String> {
    doc.get(name)?
        .entries()
        .iter()
        .find(|entry| entry.name().is_none())
        .and_then(|entry| entry.value().as_string())
        .map(str::to_string)
}

fn string_property(node: &KdlNode, key: &str) -> Option<String> {
    node.entries()
        .iter()
        .find(|entry| entry.name().map(|n| n.value()) == Some(key))
        .and_then(|entry| entry.value().as_string())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_full_config() {
        let site = parse_site_config(
            r#"
title "Avery Quinn — Portfolio"
author "Avery Quinn"
job-title "Software Engineer"
biography "I build web application products."
base-url "https://avery.example/"
portrait "/me.jpg"
mentorship "https://mentors.example/avery"
social {
    link label="GitHub" url="https://github.com/averyq"
    link label="LinkedIn" url="https://linkedin.com/in/averyq"
}
"#,
        )
        .unwrap();

        assert_eq!(site.author, "Avery Quinn");
        assert_eq!(site.portrait_url, "/me.jpg");
        assert_eq!(site.mentorship_url.as_deref(), Some("https://mentors.example/avery"));
        assert_eq!(site.social.len(), 2);
        assert_eq!(site.social[0].label, "GitHub");
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let site = parse_site_config(r#"author "Solo Name""#).unwrap();
        assert_eq!(site.author, "Solo Name");
        assert_eq!(site.title, "Portfolio");
        assert!(site.social.is_empty());
        assert!(site.mentorship_url.is_none());
    }

    #[test]
    fn invalid_kdl_is_an_error() {
        assert!(parse_site_config("title \"unterminated").is_err());
    }
}
