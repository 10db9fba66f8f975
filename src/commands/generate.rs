//! Generate static files

use anyhow::Result;
use std::path::PathBuf;

use crate::content::normalize_slug;
use crate::helpers::page_url;
use crate::render::PageState;
use crate::Site;

/// Output file of a page: the home page is `index.html`, others
/// `{slug}/index.html`
pub fn output_path(site: &Site, slug: &str) -> PathBuf {
    let url = page_url(slug, &site.config.home_slug);
    let relative = url.trim_matches('/');
    if relative.is_empty() {
        site.public_dir.join("index.html")
    } else {
        site.public_dir.join(slug).join("index.html")
    }
}

/// Render every configured page into the public directory
pub async fn run(site: &Site) -> Result<()> {
    let start = std::time::Instant::now();
    tokio::fs::create_dir_all(&site.public_dir).await?;

    let mut pages = site.config.pages.clone();
    if pages.is_empty() {
        pages.push(site.config.home_slug.clone());
    }

    let mut empty = 0;
    for slug in &pages {
        let slug = normalize_slug(Some(slug), &site.config.home_slug);
        if slug.split('/').any(|part| part == ".." || part == ".") {
            tracing::warn!("Skipping page '{}': not a plain slug", slug);
            continue;
        }
        let view = site.view(Some(&slug)).await;
        if matches!(view.state(), PageState::Empty(_)) {
            tracing::warn!("Page '{}' has no content, writing fallback view", slug);
            empty += 1;
        }

        let html = site.render_view(&view);
        let dest = output_path(site, &slug);
        if let Some(parent) = dest.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&dest, html).await?;
        tracing::debug!("Wrote {:?}", dest);
    }

    let duration = start.elapsed();
    tracing::info!(
        "Generated {} pages ({} empty) in {:.2}s",
        pages.len(),
        empty,
        duration.as_secs_f64()
    );

    Ok(())
}
