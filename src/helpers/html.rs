//! HTML helper functions

use super::url::is_external;

/// Escape HTML special characters (safe inside attribute values)
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Escape text content; quotes are left alone
pub fn escape_text(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Generate an anchor styled as a button
///
/// # Examples
/// ```ignore
/// button_link("/apply", "Apply", "btn-primary", "") // -> <a class="btn btn-primary" href="/apply">Apply</a>
/// ```
pub fn button_link(href: &str, text: &str, class: &str, style: &str) -> String {
    let style_attr = if style.is_empty() {
        String::new()
    } else {
        format!(r#" style="{}""#, html_escape(style))
    };
    let target = if is_external(href) {
        r#" target="_blank" rel="noopener""#
    } else {
        ""
    };

    format!(
        r#"<a class="btn {}" href="{}"{}{}>{}</a>"#,
        class,
        html_escape(href),
        target,
        style_attr,
        escape_text(text)
    )
}

/// Generate an image tag
pub fn image_tag(src: &str, alt: &str, class: &str) -> String {
    format!(
        r#"<img class="{}" src="{}" alt="{}" loading="lazy">"#,
        class,
        html_escape(src),
        html_escape(alt)
    )
}

/// Generate a heading, or nothing when the text is empty
pub fn heading(level: u8, text: &str, class: &str) -> String {
    if text.trim().is_empty() {
        return String::new();
    }
    let level = level.clamp(1, 6);
    format!(
        r#"<h{level} class="{class}">{}</h{level}>"#,
        escape_text(text)
    )
}

/// Generate a paragraph, or nothing when the text is empty
pub fn paragraph(text: &str, class: &str) -> String {
    if text.trim().is_empty() {
        return String::new();
    }
    format!(r#"<p class="{}">{}</p>"#, class, escape_text(text))
}

/// Opening tag of a block section
pub fn section_open(block_type: &str, id: &str, style: &str) -> String {
    let style_attr = if style.is_empty() {
        String::new()
    } else {
        format!(r#" style="{}""#, html_escape(style))
    };
    format!(
        r#"<section class="block block-{}" data-block-id="{}"{}>"#,
        class_name(block_type),
        html_escape(id),
        style_attr
    )
}

/// Reduce a free-form string to a CSS class fragment
pub fn class_name(s: &str) -> String {
    let cleaned: String = s
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c.to_ascii_lowercase()
            } else {
                '-'
            }
        })
        .collect();
    if cleaned.is_empty() {
        "unknown".to_string()
    } else {
        cleaned
    }
}

/// Accept a value for an inline style declaration
///
/// Values that could close the declaration or the attribute are replaced by
/// `default`.
pub fn css_value<'a>(value: &'a str, default: &'a str) -> &'a str {
    let value = value.trim();
    let unsafe_char = |c: char| matches!(c, ';' | '{' | '}' | '<' | '>' | '\\' | '\n' | '\r');
    if value.is_empty() || value.chars().any(unsafe_char) {
        default
    } else {
        value
    }
}

/// Strip HTML tags from a string
pub fn strip_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut in_tag = false;

    for c in s.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => result.push(c),
            _ => {}
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escaping() {
        assert_eq!(html_escape(r#"<a href="x">"#), "&lt;a href=&quot;x&quot;&gt;");
        assert_eq!(escape_text(r#""Tom & Jerry""#), r#""Tom &amp; Jerry""#);
    }

    #[test]
    fn test_button_link() {
        let html = button_link("/apply", "Apply <now>", "btn-primary", "");
        assert_eq!(
            html,
            r#"<a class="btn btn-primary" href="/apply">Apply &lt;now&gt;</a>"#
        );
        assert!(button_link("https://x.io", "X", "b", "").contains(r#"target="_blank""#));
    }

    #[test]
    fn test_heading_and_paragraph_skip_empty() {
        assert_eq!(heading(2, " ", "t"), "");
        assert_eq!(paragraph("", "p"), "");
        assert_eq!(heading(9, "Hi", "t"), r#"<h6 class="t">Hi</h6>"#);
    }

    #[test]
    fn test_class_name() {
        assert_eq!(class_name("text_block"), "text_block");
        assert_eq!(class_name("whyUs"), "whyus");
        assert_eq!(class_name("a b\"c"), "a-b-c");
        assert_eq!(class_name(""), "unknown");
    }

    #[test]
    fn test_css_value() {
        assert_eq!(css_value("#fff", "#000"), "#fff");
        assert_eq!(css_value("rgb(1, 2, 3)", "#000"), "rgb(1, 2, 3)");
        assert_eq!(css_value("red; position:fixed", "#000"), "#000");
        assert_eq!(css_value("", "16px"), "16px");
    }

    #[test]
    fn test_strip_html() {
        assert_eq!(strip_html("<p>Hello <b>World</b></p>"), "Hello World");
    }
}
