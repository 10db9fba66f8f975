//! Content resolver - turns a page slug into ordered blocks plus a theme
//!
//! Resolution never fails: network, decode and timeout errors are logged and
//! replaced by empty collections, so callers always receive a block list and
//! a theme mapping. Each fetch is attempted once, bounded by a timeout;
//! retrying is left to the caller.

mod file;
mod http;
mod source;

pub use file::FileSource;
pub use http::HttpSource;
pub use source::{ContentSource, FetchError};

use anyhow::Result;
use std::future::Future;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use crate::cache::ThemeCache;
use crate::config::SiteConfig;
use crate::content::{self, normalize_slug, ContentBlock, ResolvedPage, Theme};

/// Resolves page slugs against a [`ContentSource`]
pub struct ContentResolver {
    source: Arc<dyn ContentSource>,
    theme_cache: ThemeCache,
    home_slug: String,
    timeout: Duration,
}

impl ContentResolver {
    /// Create a resolver over `source` using the limits from `config`
    pub fn new(source: Arc<dyn ContentSource>, config: &SiteConfig) -> Self {
        Self {
            source,
            theme_cache: ThemeCache::new(config.theme_ttl()),
            home_slug: config.home_slug.clone(),
            timeout: config.fetch_timeout(),
        }
    }

    /// Pick the source named by `config`: the content API when `api_url`
    /// is set, otherwise the `content_dir` under `base_dir`
    pub fn from_config(config: &SiteConfig, base_dir: &Path) -> Result<Self> {
        let source: Arc<dyn ContentSource> = match &config.api_url {
            Some(url) => {
                tracing::info!("Using content API at {}", url);
                Arc::new(HttpSource::new(url, config.fetch_timeout())?)
            }
            None => {
                let dir = base_dir.join(&config.content_dir);
                tracing::info!("Using content directory {:?}", dir);
                Arc::new(FileSource::new(dir))
            }
        };
        Ok(Self::new(source, config))
    }

    /// Resolve a page into `(blocks, theme)`
    ///
    /// Both fetches run concurrently and are joined before returning, so the
    /// block order never depends on which one finishes first.
    pub async fn resolve_page(&self, slug: Option<&str>) -> ResolvedPage {
        let slug = normalize_slug(slug, &self.home_slug);
        let (blocks, theme) = tokio::join!(self.load_blocks(&slug), self.load_theme());

        tracing::debug!(
            "Resolved page '{}': {} blocks, {} theme tokens",
            slug,
            blocks.len(),
            theme.len()
        );

        ResolvedPage {
            slug,
            blocks,
            theme,
        }
    }

    /// Visible blocks of a page in render order, or the fetch error
    pub async fn components(&self, slug: &str) -> Result<Vec<ContentBlock>, FetchError> {
        let body = self.bounded(self.source.fetch_components(slug)).await?;
        let blocks = content::parse_components(body).ok_or_else(|| {
            FetchError::Malformed(format!("components of '{}' are not an array", slug))
        })?;
        Ok(content::visible_in_order(blocks))
    }

    /// Forget the cached theme; the next resolution fetches it again
    pub fn invalidate_theme(&self) {
        self.theme_cache.invalidate();
    }

    async fn load_blocks(&self, slug: &str) -> Vec<ContentBlock> {
        match self.components(slug).await {
            Ok(blocks) => blocks,
            Err(e) => {
                tracing::warn!(
                    "Failed to load components for '{}' from {} source: {}",
                    slug,
                    self.source.name(),
                    e
                );
                Vec::new()
            }
        }
    }

    async fn load_theme(&self) -> Theme {
        if let Some(theme) = self.theme_cache.get() {
            tracing::debug!("Theme served from cache");
            return theme;
        }

        let generation = self.theme_cache.generation();
        let fetched = self.bounded(self.source.fetch_theme()).await.and_then(|body| {
            Theme::from_json(&body)
                .ok_or_else(|| FetchError::Malformed("theme is not an object".to_string()))
        });

        match fetched {
            Ok(theme) => {
                self.theme_cache.store_if(generation, theme.clone());
                theme
            }
            Err(e) => {
                tracing::warn!(
                    "Failed to load theme from {} source: {}",
                    self.source.name(),
                    e
                );
                Theme::new()
            }
        }
    }

    async fn bounded<T, F>(&self, fetch: F) -> Result<T, FetchError>
    where
        F: Future<Output = Result<T, FetchError>>,
    {
        match tokio::time::timeout(self.timeout, fetch).await {
            Ok(result) => result,
            Err(_) => Err(FetchError::Timeout(self.timeout)),
        }
    }
}
