//! List the blocks of a page

use anyhow::Result;

use crate::content::normalize_slug;
use crate::helpers::strip_html;
use crate::Site;

/// Print the visible blocks of a page in render order
pub async fn run(site: &Site, slug: Option<&str>) -> Result<()> {
    let slug = normalize_slug(slug, &site.config.home_slug);
    let blocks = site.resolver.components(&slug).await?;

    println!("Blocks of '{}' ({}):", slug, blocks.len());
    for block in &blocks {
        let known = if site.renderer.registry().contains(&block.block_type) {
            ""
        } else {
            " (unknown type)"
        };
        println!(
            "  {:>4}  {:<16} {}{}{}",
            block.order,
            block.block_type,
            block.id,
            known,
            summary(block)
        );
    }

    Ok(())
}

/// Short text hint for a block: its title, or the start of its content
fn summary(block: &crate::content::ContentBlock) -> String {
    let text = block
        .props
        .get("title")
        .or_else(|| block.props.get("content"))
        .and_then(|v| v.as_str())
        .map(strip_html)
        .unwrap_or_default();
    let text: String = text.trim().chars().take(40).collect();
    if text.is_empty() {
        String::new()
    } else {
        format!("  \"{}\"", text)
    }
}
