//! HTTP content source backed by the content API

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::time::Duration;

use super::source::{ContentSource, FetchError};
use crate::helpers::encode_segment;

/// Fetches components and theme from `{base_url}/pages/{slug}/components`
/// and `{base_url}/theme`
pub struct HttpSource {
    client: Client,
    base_url: String,
}

impl HttpSource {
    /// Create a source whose requests are bounded by `timeout`
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// URL of a page's component list
    pub fn components_url(&self, slug: &str) -> String {
        format!("{}/pages/{}/components", self.base_url, encode_segment(slug))
    }

    /// URL of the theme mapping
    pub fn theme_url(&self) -> String {
        format!("{}/theme", self.base_url)
    }

    async fn get_json(&self, url: &str) -> Result<Value, FetchError> {
        tracing::debug!("GET {}", url);
        let response = self
            .client
            .get(url)
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(FetchError::NotFound(url.to_string()));
        }
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        Ok(response.json::<Value>().await?)
    }
}

#[async_trait]
impl ContentSource for HttpSource {
    fn name(&self) -> &'static str {
        "http"
    }

    async fn fetch_components(&self, slug: &str) -> Result<Value, FetchError> {
        self.get_json(&self.components_url(slug)).await
    }

    async fn fetch_theme(&self) -> Result<Value, FetchError> {
        self.get_json(&self.theme_url()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls() {
        let source = HttpSource::new("http://cms.local/api/", Duration::from_secs(1)).unwrap();
        assert_eq!(
            source.components_url("about"),
            "http://cms.local/api/pages/about/components"
        );
        assert_eq!(
            source.components_url("loans/home equity"),
            "http://cms.local/api/pages/loans%2Fhome%20equity/components"
        );
        assert_eq!(source.theme_url(), "http://cms.local/api/theme");
    }

    #[tokio::test]
    async fn test_unreachable_host_is_an_error() {
        // Reserve a free port, then close it so nothing is listening
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let base = format!("http://{}", addr);
        let source = HttpSource::new(&base, Duration::from_millis(500)).unwrap();
        assert!(source.fetch_theme().await.is_err());
    }
}
