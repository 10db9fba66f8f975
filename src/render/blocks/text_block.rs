//! Rich text section
//!
//! `content` is trusted markup authored in the admin and is emitted as-is.
//! Callers feeding untrusted input must sanitize it before it gets here.

use crate::content::{ContentBlock, Theme};
use crate::helpers::{css_value, section_open};
use crate::render::{BlockStrategy, Props, RenderOptions};

/// Horizontal text alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
    Justify,
}

impl Alignment {
    /// Parse an alignment; anything unrecognized is `Left`
    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "center" | "centre" => Alignment::Center,
            "right" => Alignment::Right,
            "justify" => Alignment::Justify,
            _ => Alignment::Left,
        }
    }

    pub fn as_css(&self) -> &'static str {
        match self {
            Alignment::Left => "left",
            Alignment::Center => "center",
            Alignment::Right => "right",
            Alignment::Justify => "justify",
        }
    }
}

pub struct TextBlock;

impl BlockStrategy for TextBlock {
    fn render(&self, block: &ContentBlock, theme: &Theme, _options: &RenderOptions) -> String {
        let props = Props::of(block);
        let content = props.text("content", "");
        let alignment = Alignment::parse(&props.first_text(&["alignment", "align"], "left"));
        let base_size = css_value(theme.font_size_base(), "16px");
        let font_size = props.text("font_size", base_size);

        let style = format!(
            "text-align:{};font-size:{}",
            alignment.as_css(),
            css_value(&font_size, base_size)
        );

        let mut html = section_open(&block.block_type, &block.id, &style);
        html.push_str(r#"<div class="text-block-content">"#);
        html.push_str(&content);
        html.push_str("</div></section>");
        html
    }
}
