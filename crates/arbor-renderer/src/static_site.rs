//! Static site output.
//!
//! Renders the fetched content to an output directory: `index.html`,
//! `posts/<slug>/index.html`, `styles.css`, and optionally a
//! machine-readable `feed.json`. Page renders are pure; this module owns all
//! of the filesystem work.

use std::path::{Path, PathBuf};

use arbor_content::Post;
use bitflags::bitflags;
use serde::Serialize;
use tokio::fs::{self, File};
use tokio::io::AsyncWriteExt;
use tracing::info;

use crate::css::generate_site_css;
use crate::error::SiteError;
use crate::pages::{self, SiteConfig};
use crate::theme::SiteTheme;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct SiteOptions: u32 {
        /// Remove the destination directory before writing.
        const CLEAN_DEST = 1 << 1;
        /// Emit `feed.json` with the post metadata.
        const WRITE_FEED_JSON = 1 << 2;
        /// Fail the build on unrecognized embedded content.
        const STRICT_UNKNOWN_TYPES = 1 << 3;
    }
}

impl Default for SiteOptions {
    fn default() -> Self {
        Self::WRITE_FEED_JSON
    }
}

/// How many posts the home page feed shows.
const HOME_FEED_LIMIT: usize = 5;

/// One line of `feed.json`.
#[derive(Debug, Serialize)]
struct FeedEntry<'a> {
    title: &'a str,
    slug: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    date: Option<&'a chrono::DateTime<chrono::Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    excerpt: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    color: Option<&'a str>,
}

pub struct SiteWriter {
    site: SiteConfig,
    theme: SiteTheme,
    destination: PathBuf,
    options: SiteOptions,
}

impl SiteWriter {
    pub fn new(site: SiteConfig, destination: PathBuf) -> Self {
        Self {
            site,
            theme: SiteTheme::default(),
            destination,
            options: SiteOptions::default(),
        }
    }

    pub fn with_options(mut self, options: SiteOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_theme(mut self, theme: SiteTheme) -> Self {
        self.theme = theme;
        self
    }

    pub async fn run(self, posts: Vec<Post>) -> Result<(), SiteError> {
        if self.options.contains(SiteOptions::CLEAN_DEST) && self.destination.exists() {
            fs::remove_dir_all(&self.destination)
                .await
                .map_err(|err| SiteError::io(&self.destination, err))?;
        }
        fs::create_dir_all(&self.destination)
            .await
            .map_err(|err| SiteError::io(&self.destination, err))?;

        write_file(
            &self.destination.join("styles.css"),
            generate_site_css(&self.theme),
        )
        .await?;

        // The home feed shows only the newest posts; the full set still gets
        // its own pages below.
        let recent = &posts[..posts.len().min(HOME_FEED_LIMIT)];
        write_file(
            &self.destination.join("index.html"),
            pages::home_page(&self.site, recent),
        )
        .await?;

        if self.options.contains(SiteOptions::WRITE_FEED_JSON) {
            let feed: Vec<FeedEntry<'_>> = posts
                .iter()
                .map(|post| FeedEntry {
                    title: &post.title,
                    slug: &post.slug,
                    date: post.date.as_ref(),
                    excerpt: post.excerpt.as_deref(),
                    color: post.color.as_deref(),
                })
                .collect();
            write_file(
                &self.destination.join("feed.json"),
                serde_json::to_string_pretty(&feed)?,
            )
            .await?;
        }

        let strict = self.options.contains(SiteOptions::STRICT_UNKNOWN_TYPES);
        let site = self.site.clone();
        let destination = self.destination.clone();

        let mut writers = Vec::with_capacity(posts.len());
        for post in posts {
            let site = site.clone();
            let destination = destination.clone();
            writers.push(tokio::task::spawn(async move {
                let output_path = destination
                    .join("posts")
                    .join(post.slug.as_str())
                    .join("index.html");
                let html = pages::post_page(&site, &post, strict).map_err(|source| {
                    SiteError::Render {
                        page: format!("posts/{}", post.slug),
                        source,
                    }
                })?;
                write_file(&output_path, html).await?;
                info!(slug = %post.slug, "wrote post page");
                Ok::<(), SiteError>(())
            }));
        }

        for writer in writers {
            writer.await??;
        }
        Ok(())
    }
}

async fn write_file(dest: &Path, contents: String) -> Result<(), SiteError> {
    let mut file = create_file(dest).await?;
    file.write_all(contents.as_bytes())
        .await
        .map_err(|err| SiteError::io(dest, err))?;
    Ok(())
}

/// Create a file, creating its parent directories on demand.
async fn create_file(dest: &Path) -> Result<File, SiteError> {
    match File::create(dest).await {
        Ok(file) => Ok(file),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            if let Some(parent) = dest.parent() {
                fs::create_dir_all(parent)
                    .await
                    .map_err(|err| SiteError::io(parent, err))?;
            }
            File::create(dest)
                .await
                .map_err(|err| SiteError::io(dest, err))
        }
        Err(err) => Err(SiteError::io(dest, err)),
    }
}
