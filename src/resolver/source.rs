//! Content sources - where components and themes come from

use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

/// Failure to fetch or decode content
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unexpected status {status} from {url}")]
    Status { status: u16, url: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Timed out after {0:?}")]
    Timeout(Duration),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Malformed response: {0}")]
    Malformed(String),
}

/// Read-only access to the content API
///
/// Implementations return raw JSON bodies; shaping them into blocks and
/// themes is the resolver's job.
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Short name for logs
    fn name(&self) -> &'static str;

    /// Body of `GET /pages/{slug}/components`
    async fn fetch_components(&self, slug: &str) -> Result<Value, FetchError>;

    /// Body of `GET /theme`
    async fn fetch_theme(&self) -> Result<Value, FetchError>;
}
