//! URL helper functions

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters left as-is inside a single path segment
const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Encode a value for use as one URL path segment
///
/// # Examples
/// ```ignore
/// encode_segment("loans/auto") // -> "loans%2Fauto"
/// ```
pub fn encode_segment(value: &str) -> String {
    utf8_percent_encode(value, SEGMENT).to_string()
}

/// Public URL of a page
///
/// # Examples
/// ```ignore
/// page_url("home", "home")  // -> "/"
/// page_url("about", "home") // -> "/about/"
/// ```
pub fn page_url(slug: &str, home_slug: &str) -> String {
    let slug = slug.trim_matches('/');
    if slug.is_empty() || slug == home_slug {
        return "/".to_string();
    }
    let encoded: Vec<String> = slug.split('/').map(encode_segment).collect();
    format!("/{}/", encoded.join("/"))
}

/// Whether a link leaves the site
pub fn is_external(href: &str) -> bool {
    href.starts_with("http://") || href.starts_with("https://") || href.starts_with("//")
}

/// Sanitize a link target; script URLs fall back to `fallback`
pub fn safe_href<'a>(href: &'a str, fallback: &'a str) -> &'a str {
    let trimmed = href.trim();
    let lowered = trimmed.to_ascii_lowercase();
    if trimmed.is_empty() || lowered.starts_with("javascript:") || lowered.starts_with("data:") {
        fallback
    } else {
        trimmed
    }
}
