//! Client testimonials

use crate::content::{ContentBlock, Theme};
use crate::helpers::{css_value, escape_text, heading, image_tag, section_open};
use crate::render::{BlockStrategy, Props, RenderOptions};

pub const MAX_RATING: i64 = 5;
const DEFAULT_NAME: &str = "Anonymous";

/// Ordered `{name, role?, content, rating, avatar?}` quotes
pub struct Testimonials;

impl BlockStrategy for Testimonials {
    fn render(&self, block: &ContentBlock, theme: &Theme, _options: &RenderOptions) -> String {
        let props = Props::of(block);
        let title = props.text("title", "What Our Clients Say");

        let items: String = props
            .list("testimonials")
            .iter()
            .map(|item| render_item(item, theme))
            .collect();

        let mut html = section_open(&block.block_type, &block.id, "");
        html.push_str(&heading(2, &title, "section-title"));
        html.push_str(&format!(r#"<div class="testimonial-list">{}</div>"#, items));
        html.push_str("</section>");
        html
    }
}

fn render_item(item: &Props<'_>, theme: &Theme) -> String {
    let name = item.text("name", DEFAULT_NAME);
    let role = item.text("role", "");
    let content = item.first_text(&["content", "text", "quote"], "");
    let rating = clamp_rating(item.int("rating", MAX_RATING));

    let avatar = match item.opt_text("avatar") {
        Some(url) => format!(
            r#"<div class="testimonial-avatar">{}</div>"#,
            image_tag(&url, &name, "avatar")
        ),
        None => format!(
            r#"<div class="testimonial-badge" style="background-color:{};color:{}">{}</div>"#,
            css_value(theme.primary_color(), "#1e3a8a"),
            css_value(theme.background_color(), "#ffffff"),
            escape_text(&initial(&name))
        ),
    };

    let star_color = css_value(theme.accent_color(), "#f59e0b");
    let mut stars = String::new();
    for i in 0..MAX_RATING {
        if i < rating {
            stars.push_str(&format!(
                r#"<span class="star filled" style="color:{}">★</span>"#,
                star_color
            ));
        } else {
            stars.push_str(r#"<span class="star">☆</span>"#);
        }
    }

    let role = if role.is_empty() {
        String::new()
    } else {
        format!(r#"<span class="testimonial-role">{}</span>"#, escape_text(&role))
    };

    format!(
        r#"<figure class="testimonial">{}<div class="testimonial-rating" aria-label="{} out of {}">{}</div><blockquote class="testimonial-content">{}</blockquote><figcaption><span class="testimonial-name">{}</span>{}</figcaption></figure>"#,
        avatar,
        rating,
        MAX_RATING,
        stars,
        escape_text(&content),
        escape_text(&name),
        role
    )
}

/// Ratings are drawn as 1 to 5 filled indicators
pub fn clamp_rating(rating: i64) -> i64 {
    rating.clamp(1, MAX_RATING)
}

/// Uppercase first letter of a name
pub fn initial(name: &str) -> String {
    name.trim()
        .chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_else(|| "?".to_string())
}
