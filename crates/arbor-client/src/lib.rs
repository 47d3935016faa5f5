//! Delivery-API client.
//!
//! Thin wrapper over the CMS HTTP delivery API: fetch post collections as
//! JSON and decode them into the typed content model. Link resolution is
//! performed server-side (`include` depth), so payloads arrive with embedded
//! targets fully inlined and the content model decodes them directly.
//!
//! Fetching happens once per build, before any rendering starts; nothing in
//! the render path performs I/O.

pub mod error;

use arbor_content::Post;
use serde::Deserialize;
use tracing::debug;

pub use error::ClientError;

const DELIVERY_HOST: &str = "https://cdn.contentful.com";
const PREVIEW_HOST: &str = "https://preview.contentful.com";

/// How many levels of linked entries/assets the API should inline.
const INCLUDE_DEPTH: &str = "10";

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub space_id: String,
    pub access_token: String,
    /// Token for the preview host; falls back to `access_token`.
    pub preview_token: Option<String>,
    pub environment: String,
    /// Fetch draft content from the preview host.
    pub preview: bool,
}

impl ClientConfig {
    pub fn new(space_id: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self {
            space_id: space_id.into(),
            access_token: access_token.into(),
            preview_token: None,
            environment: "master".into(),
            preview: false,
        }
    }

    fn host(&self) -> &str {
        if self.preview { PREVIEW_HOST } else { DELIVERY_HOST }
    }

    fn token(&self) -> &str {
        if self.preview {
            self.preview_token.as_deref().unwrap_or(&self.access_token)
        } else {
            &self.access_token
        }
    }
}

pub struct ContentClient {
    http: reqwest::Client,
    config: ClientConfig,
}

#[derive(Debug, Deserialize)]
struct EntriesResponse {
    #[serde(default)]
    items: Vec<Post>,
}

/// Decode a delivery `entries` payload into posts. Split out of the client
/// so payload handling is testable without a network.
pub fn decode_entries(payload: &str) -> Result<Vec<Post>, ClientError> {
    let response: EntriesResponse = serde_json::from_str(payload)?;
    Ok(response.items)
}

impl ContentClient {
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("arbor/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { http, config })
    }

    async fn get_posts(&self, query: &[(&str, String)]) -> Result<Vec<Post>, ClientError> {
        let url = format!(
            "{}/spaces/{}/environments/{}/entries",
            self.config.host(),
            self.config.space_id,
            self.config.environment
        );
        debug!(%url, "fetching entries");

        let response = self
            .http
            .get(&url)
            .query(&[("content_type", "post"), ("include", INCLUDE_DEPTH)])
            .query(query)
            .bearer_auth(self.config.token())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Api {
                status: status.as_u16(),
            });
        }

        let payload = response.text().await?;
        decode_entries(&payload)
    }

    /// The most recent posts, newest first, for the home page feed.
    pub async fn latest_posts_for_home(&self, limit: usize) -> Result<Vec<Post>, ClientError> {
        self.get_posts(&[
            ("order", "-fields.date".to_string()),
            ("limit", limit.to_string()),
        ])
        .await
    }

    /// Every published post, newest first.
    pub async fn all_posts(&self) -> Result<Vec<Post>, ClientError> {
        self.get_posts(&[("order", "-fields.date".to_string())]).await
    }

    pub async fn post_by_slug(&self, slug: &str) -> Result<Option<Post>, ClientError> {
        let posts = self
            .get_posts(&[
                ("fields.slug", slug.to_string()),
                ("limit", "1".to_string()),
            ])
            .await?;
        Ok(posts.into_iter().next())
    }
}
