//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,

    // Content API
    pub api_url: Option<String>,
    pub content_dir: String,
    pub home_slug: String,
    pub fetch_timeout_ms: u64,
    pub theme_ttl_secs: u64,

    // Rendering
    pub fallback_link: String,
    pub diagnostics: bool,

    // Output
    pub public_dir: String,
    pub pages: Vec<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Loan Brokerage".to_string(),

            api_url: None,
            content_dir: "content".to_string(),
            home_slug: "home".to_string(),
            fetch_timeout_ms: 5000,
            theme_ttl_secs: 60,

            fallback_link: "/contact".to_string(),
            diagnostics: true,

            public_dir: "public".to_string(),
            pages: vec!["home".to_string()],
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Bound of a single fetch attempt
    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_millis(self.fetch_timeout_ms)
    }

    /// Validity window of the cached theme
    pub fn theme_ttl(&self) -> Duration {
        Duration::from_secs(self.theme_ttl_secs)
    }

    /// Override the content API base URL (e.g. from the command line)
    pub fn with_api_url(mut self, api_url: Option<String>) -> Self {
        if let Some(url) = api_url.filter(|u| !u.trim().is_empty()) {
            self.api_url = Some(url);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.home_slug, "home");
        assert_eq!(config.fallback_link, "/contact");
        assert_eq!(config.fetch_timeout(), Duration::from_millis(5000));
        assert!(config.api_url.is_none());
        assert!(config.diagnostics);
    }

    #[test]
    fn test_parse_config() {
        let yaml = r#"
title: Acme Loans
api_url: http://localhost:8080/api
theme_ttl_secs: 5
diagnostics: false
pages:
  - home
  - about
"#;
        let config: SiteConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.title, "Acme Loans");
        assert_eq!(config.api_url.as_deref(), Some("http://localhost:8080/api"));
        assert_eq!(config.theme_ttl(), Duration::from_secs(5));
        assert!(!config.diagnostics);
        assert_eq!(config.pages, vec!["home", "about"]);
        // Untouched keys keep their defaults
        assert_eq!(config.content_dir, "content");
    }

    #[test]
    fn test_api_url_override() {
        let config = SiteConfig::default().with_api_url(Some("http://cms".to_string()));
        assert_eq!(config.api_url.as_deref(), Some("http://cms"));

        let config = config.with_api_url(Some("  ".to_string()));
        assert_eq!(config.api_url.as_deref(), Some("http://cms"));
    }
}
