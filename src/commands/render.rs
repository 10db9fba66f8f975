//! Render a single page

use anyhow::Result;
use std::path::Path;

use crate::Site;

/// Resolve and render one page, to a file or stdout
pub async fn run(site: &Site, slug: Option<&str>, output: Option<&Path>) -> Result<()> {
    let html = site.render_page(slug).await;

    match output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                tokio::fs::create_dir_all(parent).await?;
            }
            tokio::fs::write(path, html).await?;
            tracing::info!("Wrote {:?}", path);
        }
        None => println!("{}", html),
    }

    Ok(())
}
