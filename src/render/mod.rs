//! Block renderer - maps `(block, theme)` to an HTML section
//!
//! Dispatch goes through a [`BlockRegistry`] keyed by the block's type
//! string. Types without a registered strategy fall through to the
//! diagnostic placeholder, so rendering never fails on well-formed input.
//! Strategies are pure: same block and theme, same output.

pub mod blocks;
pub mod page;
mod props;

pub use page::{render_document, PageState, PageView};
pub use props::Props;

use std::collections::HashMap;

use crate::config::SiteConfig;
use crate::content::{ContentBlock, Theme};

/// Renderer-wide settings shared by every strategy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Link used when a call-to-action has none
    pub fallback_link: String,
    /// Show the unknown-block placeholder (admin/preview contexts)
    pub diagnostics: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            fallback_link: "/contact".to_string(),
            diagnostics: true,
        }
    }
}

impl RenderOptions {
    pub fn from_config(config: &SiteConfig) -> Self {
        Self {
            fallback_link: config.fallback_link.clone(),
            diagnostics: config.diagnostics,
        }
    }
}

/// Render strategy for one block type
pub trait BlockStrategy: Send + Sync {
    /// Render a block to HTML
    fn render(&self, block: &ContentBlock, theme: &Theme, options: &RenderOptions) -> String;
}

impl<F> BlockStrategy for F
where
    F: Fn(&ContentBlock, &Theme, &RenderOptions) -> String + Send + Sync,
{
    fn render(&self, block: &ContentBlock, theme: &Theme, options: &RenderOptions) -> String {
        self(block, theme, options)
    }
}

/// Map from block type to render strategy
pub struct BlockRegistry {
    strategies: HashMap<String, Box<dyn BlockStrategy>>,
    fallback: Box<dyn BlockStrategy>,
}

impl BlockRegistry {
    /// Registry with no strategies; every block renders as unknown
    pub fn empty() -> Self {
        Self {
            strategies: HashMap::new(),
            fallback: Box::new(blocks::UnknownBlock),
        }
    }

    /// Registry with the built-in block types
    pub fn with_defaults() -> Self {
        let mut registry = Self::empty();
        registry.register("hero", blocks::Hero);
        registry.register("stats", blocks::Stats);
        registry.register("services", blocks::FeatureGrid::services());
        registry.register("whyUs", blocks::FeatureGrid::why_us());
        registry.register("why_us", blocks::FeatureGrid::why_us());
        registry.register("testimonials", blocks::Testimonials);
        registry.register("contact", blocks::Contact);
        registry.register("text_block", blocks::TextBlock);
        registry.register("image_gallery", blocks::ImageGallery);
        registry.register("cta_banner", blocks::CtaBanner);
        registry
    }

    /// Add or replace the strategy for a type
    pub fn register<S>(&mut self, block_type: &str, strategy: S)
    where
        S: BlockStrategy + 'static,
    {
        self.strategies
            .insert(block_type.to_string(), Box::new(strategy));
    }

    /// Strategy registered for a type
    pub fn get(&self, block_type: &str) -> Option<&dyn BlockStrategy> {
        self.strategies.get(block_type).map(|s| s.as_ref())
    }

    /// Strategy for a type, falling back to the unknown-block placeholder
    pub fn resolve(&self, block_type: &str) -> &dyn BlockStrategy {
        self.get(block_type).unwrap_or(self.fallback.as_ref())
    }

    pub fn contains(&self, block_type: &str) -> bool {
        self.strategies.contains_key(block_type)
    }

    /// Registered type names, sorted
    pub fn types(&self) -> Vec<&str> {
        let mut types: Vec<&str> = self.strategies.keys().map(String::as_str).collect();
        types.sort_unstable();
        types
    }
}

impl Default for BlockRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Stateless block renderer
pub struct BlockRenderer {
    registry: BlockRegistry,
    options: RenderOptions,
}

impl BlockRenderer {
    /// Renderer with the built-in block types
    pub fn new(options: RenderOptions) -> Self {
        Self::with_registry(BlockRegistry::with_defaults(), options)
    }

    pub fn with_registry(registry: BlockRegistry, options: RenderOptions) -> Self {
        Self { registry, options }
    }

    pub fn from_config(config: &SiteConfig) -> Self {
        Self::new(RenderOptions::from_config(config))
    }

    pub fn registry(&self) -> &BlockRegistry {
        &self.registry
    }

    /// Mutable registry, for adding block types
    pub fn registry_mut(&mut self) -> &mut BlockRegistry {
        &mut self.registry
    }

    /// Render one block
    pub fn render_block(&self, block: &ContentBlock, theme: &Theme) -> String {
        if !self.registry.contains(&block.block_type) {
            tracing::debug!(
                "No strategy for block type '{}' (id {})",
                block.block_type,
                block.id
            );
        }
        self.registry
            .resolve(&block.block_type)
            .render(block, theme, &self.options)
    }

    /// Render blocks in the given order and concatenate them
    pub fn render_blocks(&self, blocks: &[ContentBlock], theme: &Theme) -> String {
        blocks
            .iter()
            .map(|block| self.render_block(block, theme))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for BlockRenderer {
    fn default() -> Self {
        Self::new(RenderOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn block(id: &str, block_type: &str) -> ContentBlock {
        ContentBlock::new(id, block_type, json!({}))
    }

    #[test]
    fn test_default_registry_types() {
        let registry = BlockRegistry::with_defaults();
        for t in [
            "hero",
            "stats",
            "services",
            "whyUs",
            "testimonials",
            "contact",
            "text_block",
            "image_gallery",
            "cta_banner",
        ] {
            assert!(registry.contains(t), "missing {}", t);
        }
        assert!(!registry.contains("mystery_widget"));
    }

    #[test]
    fn test_every_builtin_renders_empty_props() {
        let renderer = BlockRenderer::default();
        let theme = Theme::new();
        for t in renderer.registry().types() {
            let html = renderer.render_block(&block("1", t), &theme);
            assert!(html.starts_with("<section"), "{}: {}", t, html);
            assert!(html.ends_with("</section>"), "{}: {}", t, html);
            assert!(!html.contains("undefined") && !html.contains("null"), "{}", t);
        }
    }

    #[test]
    fn test_register_custom_strategy() {
        let mut renderer = BlockRenderer::default();
        renderer.registry_mut().register(
            "divider",
            |block: &ContentBlock, _: &Theme, _: &RenderOptions| {
                format!("<hr data-block-id=\"{}\">", block.id)
            },
        );
        let html = renderer.render_block(&block("9", "divider"), &Theme::new());
        assert_eq!(html, r#"<hr data-block-id="9">"#);
    }

    #[test]
    fn test_register_replaces_builtin() {
        let mut registry = BlockRegistry::with_defaults();
        registry.register("hero", |_: &ContentBlock, _: &Theme, _: &RenderOptions| {
            "custom".to_string()
        });
        let renderer = BlockRenderer::with_registry(registry, RenderOptions::default());
        assert_eq!(renderer.render_block(&block("1", "hero"), &Theme::new()), "custom");
    }

    #[test]
    fn test_render_blocks_keeps_input_order() {
        let renderer = BlockRenderer::default();
        let blocks = vec![
            block("b", "cta_banner").with_order(5),
            block("a", "hero").with_order(1),
        ];
        let html = renderer.render_blocks(&blocks, &Theme::new());
        let b = html.find(r#"data-block-id="b""#).unwrap();
        let a = html.find(r#"data-block-id="a""#).unwrap();
        assert!(b < a);
    }

    #[test]
    fn test_rendering_is_idempotent() {
        let renderer = BlockRenderer::default();
        let theme = Theme::new().with("primary_color", "#222");
        let blocks = vec![
            ContentBlock::new("1", "hero", json!({"title": "T"})),
            ContentBlock::new("2", "mystery", json!({"z": 1, "a": [1, 2]})),
            ContentBlock::new("3", "testimonials", json!({"testimonials": [{"name": "Li"}]})),
        ];
        let first = renderer.render_blocks(&blocks, &theme);
        let second = renderer.render_blocks(&blocks, &theme);
        assert_eq!(first, second);
    }
}
