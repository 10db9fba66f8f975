//! Placeholder for unregistered block types
//!
//! Shows the raw type string and a dump of the props so content authors can
//! spot misconfigured blocks. With diagnostics off the block collapses into
//! an HTML comment.

use crate::content::{ContentBlock, Theme};
use crate::helpers::{escape_text, html_escape};
use crate::render::{BlockStrategy, RenderOptions};

pub struct UnknownBlock;

impl BlockStrategy for UnknownBlock {
    fn render(&self, block: &ContentBlock, _theme: &Theme, options: &RenderOptions) -> String {
        if !options.diagnostics {
            return format!(
                "<!-- unknown block type: {} -->",
                comment_safe(&block.block_type)
            );
        }

        let dump = serde_json::to_string_pretty(&block.props).unwrap_or_else(|_| "{}".to_string());

        format!(
            r#"<section class="block block-unknown" data-block-id="{}" data-block-type="{}"><p class="unknown-block-title">Unknown block type: <code>{}</code></p><pre class="unknown-block-props">{}</pre></section>"#,
            html_escape(&block.id),
            html_escape(&block.block_type),
            escape_text(&block.block_type),
            escape_text(&dump)
        )
    }
}

fn comment_safe(s: &str) -> String {
    s.replace("--", "- -").replace('>', "&gt;")
}
