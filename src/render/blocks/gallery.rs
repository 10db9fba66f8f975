//! Image gallery

use crate::content::{ContentBlock, Theme};
use crate::helpers::{escape_text, heading, image_tag, section_open};
use crate::render::{BlockStrategy, Props, RenderOptions};

const DEFAULT_COLUMNS: i64 = 3;
const MAX_COLUMNS: i64 = 6;

/// Gallery layout mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GalleryLayout {
    Grid { columns: u8 },
    Masonry,
}

impl GalleryLayout {
    fn from_props(props: &Props<'_>) -> Self {
        match props.text("layout", "grid").trim().to_ascii_lowercase().as_str() {
            "masonry" => GalleryLayout::Masonry,
            _ => {
                let columns = props.int("columns", DEFAULT_COLUMNS).clamp(1, MAX_COLUMNS);
                GalleryLayout::Grid {
                    columns: columns as u8,
                }
            }
        }
    }

    fn container(&self) -> String {
        match self {
            GalleryLayout::Grid { columns } => format!(
                r#"<div class="gallery gallery-grid" style="display:grid;grid-template-columns:repeat({}, 1fr)">"#,
                columns
            ),
            GalleryLayout::Masonry => {
                r#"<div class="gallery gallery-masonry" style="column-count:3">"#.to_string()
            }
        }
    }
}

/// Ordered `{url, alt?, caption?}` images
pub struct ImageGallery;

impl BlockStrategy for ImageGallery {
    fn render(&self, block: &ContentBlock, _theme: &Theme, _options: &RenderOptions) -> String {
        let props = Props::of(block);
        let title = props.text("title", "");
        let layout = GalleryLayout::from_props(&props);

        let figures: String = props
            .list("images")
            .iter()
            .filter_map(|image| {
                let url = image.first_text(&["url", "src"], "");
                if url.trim().is_empty() {
                    return None;
                }
                let alt = image.text("alt", "");
                let caption = match image.opt_text("caption") {
                    Some(caption) => format!("<figcaption>{}</figcaption>", escape_text(&caption)),
                    None => String::new(),
                };
                Some(format!(
                    r#"<figure class="gallery-item">{}{}</figure>"#,
                    image_tag(&url, &alt, "gallery-image"),
                    caption
                ))
            })
            .collect();

        let mut html = section_open(&block.block_type, &block.id, "");
        html.push_str(&heading(2, &title, "section-title"));
        html.push_str(&layout.container());
        html.push_str(&figures);
        html.push_str("</div></section>");
        html
    }
}
