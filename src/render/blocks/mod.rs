//! Built-in block strategies

mod contact;
mod cta;
mod features;
mod gallery;
mod hero;
mod stats;
mod testimonials;
mod text_block;
mod unknown;

pub use contact::{Contact, FieldKind};
pub use cta::CtaBanner;
pub use features::FeatureGrid;
pub use gallery::{GalleryLayout, ImageGallery};
pub use hero::Hero;
pub use stats::Stats;
pub use testimonials::Testimonials;
pub use text_block::{Alignment, TextBlock};
pub use unknown::UnknownBlock;

use crate::helpers::{escape_text, image_tag};

/// Icon markup: URLs become images, anything else is shown as text
/// (emoji or an icon-font name carried in `data-icon`)
pub(crate) fn icon_html(icon: Option<&str>, class: &str) -> String {
    let icon = match icon.map(str::trim) {
        Some(icon) if !icon.is_empty() => icon,
        _ => return String::new(),
    };
    if icon.starts_with('/') || icon.starts_with("http://") || icon.starts_with("https://") {
        image_tag(icon, "", class)
    } else {
        format!(
            r#"<span class="{}" data-icon="{}" aria-hidden="true">{}</span>"#,
            class,
            crate::helpers::html_escape(icon),
            escape_text(icon)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_html() {
        assert_eq!(icon_html(None, "i"), "");
        assert_eq!(icon_html(Some("  "), "i"), "");
        assert!(icon_html(Some("/img/a.svg"), "i").starts_with("<img"));
        assert!(icon_html(Some("shield"), "i").contains(r#"data-icon="shield""#));
    }
}
