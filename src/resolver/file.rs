//! File-backed content source
//!
//! Mirrors the content API layout on disk:
//!
//! ```text
//! content/
//!   theme.json            # GET /theme
//!   pages/home.json       # GET /pages/home/components
//!   pages/loans/auto.json # GET /pages/loans%2Fauto/components
//! ```

use async_trait::async_trait;
use serde_json::Value;
use std::path::{Component, Path, PathBuf};

use super::source::{ContentSource, FetchError};

/// Reads component lists and the theme from JSON files
pub struct FileSource {
    root: PathBuf,
}

impl FileSource {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Path of a page's component file; slugs escaping the root are refused
    pub fn page_path(&self, slug: &str) -> Option<PathBuf> {
        let relative = Path::new(slug);
        let is_plain = relative
            .components()
            .all(|c| matches!(c, Component::Normal(_)));
        if slug.is_empty() || !is_plain {
            return None;
        }
        Some(self.root.join("pages").join(format!("{}.json", slug)))
    }

    pub fn theme_path(&self) -> PathBuf {
        self.root.join("theme.json")
    }

    async fn read_json(path: &Path) -> Result<Value, FetchError> {
        let content = match tokio::fs::read_to_string(path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(FetchError::NotFound(path.display().to_string()))
            }
            Err(e) => return Err(e.into()),
        };
        Ok(serde_json::from_str(&content)?)
    }
}

#[async_trait]
impl ContentSource for FileSource {
    fn name(&self) -> &'static str {
        "file"
    }

    async fn fetch_components(&self, slug: &str) -> Result<Value, FetchError> {
        let path = self
            .page_path(slug)
            .ok_or_else(|| FetchError::NotFound(format!("page '{}'", slug)))?;
        Self::read_json(&path).await
    }

    async fn fetch_theme(&self) -> Result<Value, FetchError> {
        Self::read_json(&self.theme_path()).await
    }
}
