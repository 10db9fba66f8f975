//! blocksite: block-based page rendering for a content-API driven site
//!
//! Pages are ordered lists of typed content blocks served by a JSON content
//! API. This crate resolves a page slug into its visible blocks and theme,
//! renders each block through a registry of per-type strategies, and serves
//! or writes the resulting HTML.

pub mod cache;
pub mod commands;
pub mod config;
pub mod content;
pub mod helpers;
pub mod render;
pub mod resolver;
pub mod server;

use anyhow::Result;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use content::normalize_slug;
use render::{render_document, BlockRenderer, PageView};
use resolver::{ContentResolver, ContentSource};

/// The site application
#[derive(Clone)]
pub struct Site {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Public (output) directory
    pub public_dir: PathBuf,
    /// Shared content resolver (owns the theme cache)
    pub resolver: Arc<ContentResolver>,
    /// Shared block renderer
    pub renderer: Arc<BlockRenderer>,
}

impl Site {
    /// Create a site from a directory, reading `_config.yml` when present
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        Self::open(base_dir, None)
    }

    /// Like [`Site::new`], with an optional content API URL overriding the
    /// configured one
    pub fn open<P: AsRef<Path>>(base_dir: P, api_url: Option<String>) -> Result<Self> {
        let config_path = base_dir.as_ref().join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        Self::with_config(base_dir, config.with_api_url(api_url))
    }

    /// Create a site with an explicit configuration
    pub fn with_config<P: AsRef<Path>>(base_dir: P, config: config::SiteConfig) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let resolver = ContentResolver::from_config(&config, &base_dir)?;
        Ok(Self::assemble(base_dir, config, resolver))
    }

    /// Create a site over a custom content source
    pub fn with_source<P: AsRef<Path>>(
        base_dir: P,
        config: config::SiteConfig,
        source: Arc<dyn ContentSource>,
    ) -> Self {
        let resolver = ContentResolver::new(source, &config);
        Self::assemble(base_dir.as_ref().to_path_buf(), config, resolver)
    }

    fn assemble(base_dir: PathBuf, config: config::SiteConfig, resolver: ContentResolver) -> Self {
        let public_dir = base_dir.join(&config.public_dir);
        let renderer = BlockRenderer::from_config(&config);
        Self {
            config,
            base_dir,
            public_dir,
            resolver: Arc::new(resolver),
            renderer: Arc::new(renderer),
        }
    }

    /// Open a page view and settle it with the resolved content
    pub async fn view(&self, slug: Option<&str>) -> PageView {
        let slug = normalize_slug(slug, &self.config.home_slug);
        let mut view = PageView::new(&slug);
        let page = self.resolver.resolve_page(Some(&slug)).await;
        view.settle(page);
        view
    }

    /// Render a settled view to a full HTML document
    pub fn render_view(&self, view: &PageView) -> String {
        render_document(
            &self.config.title,
            &self.config.home_slug,
            view,
            &self.renderer,
        )
    }

    /// Resolve and render a page
    pub async fn render_page(&self, slug: Option<&str>) -> String {
        let view = self.view(slug).await;
        self.render_view(&view)
    }

    /// Render the configured pages into the public directory
    pub async fn generate(&self) -> Result<()> {
        commands::generate::run(self).await
    }

    /// Clean the public directory
    pub fn clean(&self) -> Result<()> {
        commands::clean::run(self)
    }
}
