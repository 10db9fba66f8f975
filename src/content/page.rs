//! Resolved pages

use serde::Serialize;

use super::{ContentBlock, Theme};

/// Ready-to-render result of resolving a slug
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ResolvedPage {
    /// Normalized slug
    pub slug: String,
    /// Visible blocks in ascending order
    pub blocks: Vec<ContentBlock>,
    /// Theme tokens, possibly empty
    pub theme: Theme,
}

impl ResolvedPage {
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

/// Normalize a page slug; absent or blank slugs map to `home`
pub fn normalize_slug(slug: Option<&str>, home: &str) -> String {
    let trimmed = slug.map(|s| s.trim().trim_matches('/')).unwrap_or("");
    if trimmed.is_empty() {
        home.to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_slug() {
        assert_eq!(normalize_slug(None, "home"), "home");
        assert_eq!(normalize_slug(Some("  "), "home"), "home");
        assert_eq!(normalize_slug(Some("/about/"), "home"), "about");
        assert_eq!(normalize_slug(Some("loans/personal"), "home"), "loans/personal");
    }
}
