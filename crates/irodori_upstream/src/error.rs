//! Errors raised while fetching or parsing upstream palettes.

use irodori_core::ColorError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum UpstreamError {
    /// Transport failure (DNS, connect, body read).
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The upstream answered with a non-success status.
    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    /// A listed entry has no hover rule in the stylesheet.
    #[error("no hover background-color rule for {id}")]
    MissingStyle { id: String },

    #[error("entry {id}: {source}")]
    Color {
        id: String,
        #[source]
        source: ColorError,
    },

    #[error("failed to serialize palette: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to build HTTP client: {0}")]
    Client(String),
}

pub type Result<T> = std::result::Result<T, UpstreamError>;
