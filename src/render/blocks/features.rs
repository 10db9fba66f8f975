//! Feature cards (`services`, `whyUs`)

use super::icon_html;
use crate::content::{ContentBlock, Theme};
use crate::helpers::{css_value, heading, paragraph, section_open};
use crate::render::{BlockStrategy, Props, RenderOptions};

/// Grid of `{title, description, icon?}` cards
///
/// One strategy serves several block types; they differ in default heading
/// and in which props key carries the cards.
pub struct FeatureGrid {
    default_title: &'static str,
    list_keys: &'static [&'static str],
}

impl FeatureGrid {
    pub fn services() -> Self {
        Self {
            default_title: "Our Services",
            list_keys: &["services", "items"],
        }
    }

    pub fn why_us() -> Self {
        Self {
            default_title: "Why Choose Us",
            list_keys: &["features", "reasons", "items"],
        }
    }
}

impl BlockStrategy for FeatureGrid {
    fn render(&self, block: &ContentBlock, theme: &Theme, _options: &RenderOptions) -> String {
        let props = Props::of(block);
        let title = props.text("title", self.default_title);
        let subtitle = props.text("subtitle", "");
        let accent = css_value(theme.accent_color(), "#f59e0b");

        let cards: String = props
            .first_list(self.list_keys)
            .iter()
            .map(|card| {
                format!(
                    r#"<div class="feature-card" style="border-top-color:{}">{}{}{}</div>"#,
                    accent,
                    icon_html(card.opt_text("icon").as_deref(), "feature-icon"),
                    heading(3, &card.text("title", ""), "feature-title"),
                    paragraph(&card.text("description", ""), "feature-description")
                )
            })
            .collect();

        let mut html = section_open(&block.block_type, &block.id, "");
        html.push_str(&heading(2, &title, "section-title"));
        html.push_str(&paragraph(&subtitle, "section-subtitle"));
        html.push_str(&format!(r#"<div class="feature-grid">{}</div>"#, cards));
        html.push_str("</section>");
        html
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_services_cards() {
        let block = ContentBlock::new(
            "s",
            "services",
            json!({"services": [
                {"title": "Home Loans", "description": "Fixed and variable", "icon": "home"},
                {"title": "Car Loans"}
            ]}),
        );
        let html = FeatureGrid::services().render(&block, &Theme::new(), &RenderOptions::default());
        assert!(html.contains(">Our Services</h2>"));
        assert_eq!(html.matches("feature-card").count(), 2);
        assert!(html.contains(">Fixed and variable</p>"));
        assert!(html.find("Home Loans").unwrap() < html.find("Car Loans").unwrap());
    }

    #[test]
    fn test_why_us_defaults_and_fallback_key() {
        let block = ContentBlock::new("w", "whyUs", json!({"items": [{"title": "Fast"}]}));
        let html = FeatureGrid::why_us().render(&block, &Theme::new(), &RenderOptions::default());
        assert!(html.contains(">Why Choose Us</h2>"));
        assert!(html.contains(">Fast</h3>"));
        assert!(html.contains(r#"class="block block-whyus""#));
    }

    #[test]
    fn test_empty_grid() {
        let block = ContentBlock::new("w", "services", json!({"services": "oops"}));
        let html = FeatureGrid::services().render(&block, &Theme::new(), &RenderOptions::default());
        assert!(html.contains(r#"<div class="feature-grid"></div>"#));
    }
}
