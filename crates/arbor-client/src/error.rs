use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum ClientError {
    #[error("request to the delivery API failed")]
    #[diagnostic(code(arbor::client::http))]
    Http(#[from] reqwest::Error),

    #[error("delivery API returned status {status}")]
    #[diagnostic(code(arbor::client::api))]
    Api { status: u16 },

    #[error("failed to decode delivery API payload")]
    #[diagnostic(code(arbor::client::decode))]
    Decode(#[from] serde_json::Error),
}
