//! Hero banner

use crate::content::{ContentBlock, Theme};
use crate::helpers::{button_link, css_value, heading, paragraph, safe_href, section_open};
use crate::render::{BlockStrategy, Props, RenderOptions};

pub const DEFAULT_TITLE: &str = "Welcome";
pub const DEFAULT_SUBTITLE: &str = "Trusted guidance for every loan decision";
pub const DEFAULT_CTA_TEXT: &str = "Get Started";

/// Title, subtitle, description and a call-to-action
pub struct Hero;

impl BlockStrategy for Hero {
    fn render(&self, block: &ContentBlock, theme: &Theme, options: &RenderOptions) -> String {
        let props = Props::of(block);
        let title = props.text("title", DEFAULT_TITLE);
        let subtitle = props.text("subtitle", DEFAULT_SUBTITLE);
        let description = props.text("description", "");
        let cta_text = props.first_text(&["cta_text", "button_text"], DEFAULT_CTA_TEXT);
        let cta_link = props.first_text(&["cta_link", "button_link"], &options.fallback_link);

        let mut style = format!(
            "background-color:{};color:{}",
            css_value(theme.primary_color(), "#1e3a8a"),
            css_value(theme.background_color(), "#ffffff")
        );
        if let Some(image) = props.opt_text("background_image") {
            if !image.contains(&['\'', '"', '(', ')'][..]) {
                style.push_str(&format!(
                    ";background-image:url('{}');background-size:cover",
                    css_value(&image, "")
                ));
            }
        }

        let button_style = format!(
            "background-color:{};color:{}",
            css_value(theme.accent_color(), "#f59e0b"),
            css_value(theme.text_color(), "#1f2937")
        );

        let mut html = section_open(&block.block_type, &block.id, &style);
        html.push_str(r#"<div class="hero-inner">"#);
        html.push_str(&heading(1, &title, "hero-title"));
        html.push_str(&paragraph(&subtitle, "hero-subtitle"));
        html.push_str(&paragraph(&description, "hero-description"));
        html.push_str(&button_link(
            safe_href(&cta_link, &options.fallback_link),
            &cta_text,
            "btn-cta",
            &button_style,
        ));
        html.push_str("</div></section>");
        html
    }
}
