//! Call-to-action banner

use crate::content::{ContentBlock, Theme};
use crate::helpers::{button_link, css_value, heading, paragraph, safe_href, section_open};
use crate::render::{BlockStrategy, Props, RenderOptions};

pub const DEFAULT_TITLE: &str = "Ready to get started?";
pub const DEFAULT_BUTTON_TEXT: &str = "Contact Us";

pub struct CtaBanner;

impl BlockStrategy for CtaBanner {
    fn render(&self, block: &ContentBlock, theme: &Theme, options: &RenderOptions) -> String {
        let props = Props::of(block);
        let title = props.text("title", DEFAULT_TITLE);
        let description = props.text("description", "");
        let button_text = props.first_text(&["button_text", "cta_text"], DEFAULT_BUTTON_TEXT);
        let button_target = props.first_text(&["button_link", "cta_link"], &options.fallback_link);

        let style = format!(
            "background-color:{};color:{}",
            css_value(theme.accent_color(), "#f59e0b"),
            css_value(theme.text_color(), "#1f2937")
        );
        let button_style = format!(
            "background-color:{};color:{}",
            css_value(theme.primary_color(), "#1e3a8a"),
            css_value(theme.background_color(), "#ffffff")
        );

        let mut html = section_open(&block.block_type, &block.id, &style);
        html.push_str(&heading(2, &title, "cta-title"));
        html.push_str(&paragraph(&description, "cta-description"));
        html.push_str(&button_link(
            safe_href(&button_target, &options.fallback_link),
            &button_text,
            "btn-cta",
            &button_style,
        ));
        html.push_str("</section>");
        html
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_defaults() {
        let block = ContentBlock::new("c", "cta_banner", json!({}));
        let html = CtaBanner.render(&block, &Theme::new(), &RenderOptions::default());
        assert!(html.contains(DEFAULT_TITLE));
        assert!(html.contains(r#"href="/contact""#));
        assert!(html.contains(">Contact Us</a>"));
        assert!(html.contains("background-color:#f59e0b"));
    }

    #[test]
    fn test_custom_button() {
        let block = ContentBlock::new(
            "c",
            "cta_banner",
            json!({"title": "Refinance today", "button_text": "Apply", "button_link": "https://apply.example.com"}),
        );
        let html = CtaBanner.render(&block, &Theme::new(), &RenderOptions::default());
        assert!(html.contains(">Refinance today</h2>"));
        assert!(html.contains(r#"href="https://apply.example.com" target="_blank""#));
    }
}
