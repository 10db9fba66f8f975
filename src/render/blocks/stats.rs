//! Key figures grid

use super::icon_html;
use crate::content::{ContentBlock, Theme};
use crate::helpers::{css_value, escape_text, heading, section_open};
use crate::render::{BlockStrategy, Props, RenderOptions};

/// Ordered `{value, label, icon?}` figures
pub struct Stats;

impl BlockStrategy for Stats {
    fn render(&self, block: &ContentBlock, theme: &Theme, _options: &RenderOptions) -> String {
        let props = Props::of(block);
        let title = props.text("title", "");
        let value_color = css_value(theme.primary_color(), "#1e3a8a");

        let items: String = props
            .list("stats")
            .iter()
            .map(|stat| {
                let value = stat.text("value", "0");
                let label = stat.text("label", "");
                format!(
                    r#"<div class="stat">{}<span class="stat-value" style="color:{}">{}</span><span class="stat-label">{}</span></div>"#,
                    icon_html(stat.opt_text("icon").as_deref(), "stat-icon"),
                    value_color,
                    escape_text(&value),
                    escape_text(&label)
                )
            })
            .collect();

        let mut html = section_open(&block.block_type, &block.id, "");
        html.push_str(&heading(2, &title, "section-title"));
        html.push_str(&format!(r#"<div class="stats-grid">{}</div>"#, items));
        html.push_str("</section>");
        html
    }
}
