//! Intro typewriter segmentation.
//!
//! The site intro uses 👉/👈 control markers: a 👉 segment is typed after
//! the previous text, a 👈 segment first erases the previous marked segment
//! before typing. The split mirrors the client-side animation contract; the
//! reduced-motion fallback strips the marked spans entirely and keeps the
//! base text.

use std::sync::LazyLock;

use pulldown_cmark_escape::escape_html_body_text;
use regex::Regex;

static MARKED_SPAN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("👉[^👉👈]*👈|👉|👈").unwrap());

/// One typed run of text. `backspace` is how many characters to erase
/// before typing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub backspace: usize,
}

#[derive(Debug, Clone)]
pub struct Typewriter {
    source: String,
    segments: Vec<Segment>,
}

impl Typewriter {
    pub fn new(text: &str) -> Self {
        let mut segments = Vec::new();
        let mut erasable = 0usize;

        for part in split_before_markers(text) {
            let (marked, erases, body) = if let Some(rest) = part.strip_prefix('👉') {
                (true, false, rest)
            } else if let Some(rest) = part.strip_prefix('👈') {
                (true, true, rest)
            } else {
                (false, false, part)
            };

            let backspace = if erases { erasable } else { 0 };
            if marked {
                erasable = body.chars().count();
            }
            segments.push(Segment {
                text: body.to_string(),
                backspace,
            });
        }

        Self {
            source: text.to_string(),
            segments,
        }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Reduced-motion fallback: marked spans removed, base text kept.
    pub fn plain_text(&self) -> String {
        MARKED_SPAN_RE.replace_all(&self.source, "").into_owned()
    }

    /// Static markup for the progressive-enhancement script: one span per
    /// segment, erase counts as data attributes.
    pub fn to_html(&self) -> String {
        let mut html = String::from("<span class=\"typewriter\">");
        for segment in &self.segments {
            html.push_str("<span class=\"typewriter-segment\" data-backspace=\"");
            html.push_str(&segment.backspace.to_string());
            html.push_str("\">");
            let _ = escape_html_body_text(&mut html, &segment.text);
            html.push_str("</span>");
        }
        html.push_str("</span>");
        html
    }
}

/// Split so every 👉/👈 marker starts a new part (lookahead split; markers
/// stay attached to the part they open).
fn split_before_markers(text: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut prev = 0usize;
    for (idx, ch) in text.char_indices() {
        if (ch == '👉' || ch == '👈') && idx != prev {
            parts.push(&text[prev..idx]);
            prev = idx;
        }
    }
    parts.push(&text[prev..]);
    parts
}
