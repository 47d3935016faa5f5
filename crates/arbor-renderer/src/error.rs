use std::path::PathBuf;

use miette::Diagnostic;
use smol_str::SmolStr;
use thiserror::Error;

/// Errors from the rendering layer. Unrecognized embedded content only
/// raises in strict mode; everything else in the node vocabulary always has
/// exactly one output.
#[derive(Debug, Error, Diagnostic)]
pub enum RenderError {
    #[error("unrecognized mime type: {mime}")]
    #[diagnostic(code(arbor::render::unrecognized_mime_type))]
    UnrecognizedMimeType { mime: SmolStr },

    #[error("unrecognized content type: {id}")]
    #[diagnostic(code(arbor::render::unrecognized_content_type))]
    UnrecognizedContentType { id: SmolStr },

    #[error("invalid color: {0}")]
    #[diagnostic(code(arbor::render::invalid_color))]
    InvalidColor(String),
}

/// Errors from the static-site writer.
#[derive(Debug, Error, Diagnostic)]
pub enum SiteError {
    #[error("failed to render {page}")]
    #[diagnostic(code(arbor::site::render))]
    Render {
        page: String,
        #[source]
        source: RenderError,
    },

    #[error("io error at {}", path.display())]
    #[diagnostic(code(arbor::site::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize the feed")]
    #[diagnostic(code(arbor::site::feed))]
    Feed(#[from] serde_json::Error),

    #[error("page writer task failed")]
    #[diagnostic(code(arbor::site::join))]
    Join(#[from] tokio::task::JoinError),
}

impl SiteError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
