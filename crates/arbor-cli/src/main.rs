use std::path::PathBuf;

use arbor_client::{ClientConfig, ContentClient, decode_entries};
use arbor_content::Post;
use arbor_renderer::{SiteOptions, SiteWriter};
use clap::{Args, Parser, Subcommand};
use miette::{IntoDiagnostic, Result, WrapErr};
use tracing::info;

mod config;

#[derive(Parser)]
#[command(version, about = "Arbor - static site generator for a CMS-backed portfolio and blog", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Path to the site config file
    #[arg(long, default_value = "site.kdl")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch content and build the static site
    Build {
        /// Output directory for the generated site
        dest: PathBuf,

        #[command(flatten)]
        source: ContentSource,

        /// Remove the output directory before writing
        #[arg(long)]
        clean: bool,

        /// Fail on unrecognized embedded content instead of dropping it
        #[arg(long)]
        strict: bool,
    },
    /// Fetch and render everything without writing, to catch schema drift
    Check {
        #[command(flatten)]
        source: ContentSource,
    },
}

#[derive(Args)]
struct ContentSource {
    /// Read posts from a local delivery-API JSON payload instead of fetching
    #[arg(long)]
    from_json: Option<PathBuf>,

    /// Use the preview API (draft content)
    #[arg(long)]
    preview: bool,

    /// Delivery API space id
    #[arg(long, env = "ARBOR_SPACE_ID")]
    space_id: Option<String>,

    /// Delivery API access token
    #[arg(long, env = "ARBOR_ACCESS_TOKEN")]
    access_token: Option<String>,

    /// Preview API access token
    #[arg(long, env = "ARBOR_PREVIEW_TOKEN")]
    preview_token: Option<String>,
}

impl ContentSource {
    async fn load(&self) -> Result<Vec<Post>> {
        if let Some(path) = &self.from_json {
            let payload = tokio::fs::read_to_string(path)
                .await
                .into_diagnostic()
                .wrap_err_with(|| format!("reading {}", path.display()))?;
            return Ok(decode_entries(&payload)?);
        }

        let (Some(space_id), Some(access_token)) = (&self.space_id, &self.access_token) else {
            return Err(miette::miette!(
                "Delivery API credentials required. Set ARBOR_SPACE_ID and ARBOR_ACCESS_TOKEN, or pass --from-json."
            ));
        };

        let mut config = ClientConfig::new(space_id, access_token);
        config.preview_token = self.preview_token.clone();
        config.preview = self.preview;

        let client = ContentClient::new(config)?;
        Ok(client.all_posts().await?)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let site = config::load_site_config(&cli.config).unwrap_or_else(|err| {
        info!("no usable site config ({err}); using defaults");
        arbor_renderer::SiteConfig::default()
    });

    match cli.command {
        Commands::Build {
            dest,
            source,
            clean,
            strict,
        } => {
            let posts = source.load().await?;
            info!(count = posts.len(), "fetched posts");

            let mut options = SiteOptions::default();
            if clean {
                options |= SiteOptions::CLEAN_DEST;
            }
            if strict {
                options |= SiteOptions::STRICT_UNKNOWN_TYPES;
            }

            SiteWriter::new(site, dest.clone())
                .with_options(options)
                .run(posts)
                .await?;
            println!("Site written to {}", dest.display());
        }
        Commands::Check { source } => {
            let posts = source.load().await?;
            for post in &posts {
                arbor_renderer::pages::post_page(&site, post, true)
                    .map_err(|err| miette::Report::new(err).wrap_err(format!("post {}", post.slug)))?;
            }
            println!("{} posts fetched and rendered cleanly", posts.len());
        }
    }

    Ok(())
}
