//! Page assembly - view state and the document shell
//!
//! A page view starts in `Loading` and settles exactly once, into `Ready`
//! when the resolver produced blocks or `Empty` when it did not. A view never
//! returns to `Loading`; a new navigation creates a new view.

use crate::content::{ResolvedPage, Theme};
use crate::helpers::{class_name, css_value, escape_text, html_escape};

use super::BlockRenderer;

/// Page-assembly state
#[derive(Debug, Clone, PartialEq)]
pub enum PageState {
    /// Resolution in flight
    Loading,
    /// Blocks available, render normally
    Ready(ResolvedPage),
    /// No blocks, render the fallback view
    Empty(ResolvedPage),
}

impl PageState {
    pub fn name(&self) -> &'static str {
        match self {
            PageState::Loading => "loading",
            PageState::Ready(_) => "ready",
            PageState::Empty(_) => "empty",
        }
    }
}

/// One page view
#[derive(Debug, Clone)]
pub struct PageView {
    slug: String,
    state: PageState,
    abandoned: bool,
}

impl PageView {
    /// Start a view; resolution is considered in flight
    pub fn new(slug: &str) -> Self {
        Self {
            slug: slug.to_string(),
            state: PageState::Loading,
            abandoned: false,
        }
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }

    pub fn state(&self) -> &PageState {
        &self.state
    }

    /// Move out of `Loading` with the resolution result
    ///
    /// Returns `false`, leaving the view untouched, when the view already
    /// settled, was abandoned, or the result belongs to another slug.
    pub fn settle(&mut self, page: ResolvedPage) -> bool {
        if self.abandoned || !matches!(self.state, PageState::Loading) {
            tracing::debug!(
                "Discarding resolution of '{}' for view in state {}",
                page.slug,
                self.state.name()
            );
            return false;
        }
        if page.slug != self.slug {
            tracing::debug!(
                "Discarding resolution of '{}' for view of '{}'",
                page.slug,
                self.slug
            );
            return false;
        }
        self.state = if page.is_empty() {
            PageState::Empty(page)
        } else {
            PageState::Ready(page)
        };
        true
    }

    /// Mark the view as left; later results are discarded
    pub fn abandon(&mut self) {
        self.abandoned = true;
    }

    pub fn is_abandoned(&self) -> bool {
        self.abandoned
    }
}

/// Render a full HTML document for a view
pub fn render_document(
    site_title: &str,
    home_slug: &str,
    view: &PageView,
    renderer: &BlockRenderer,
) -> String {
    let empty_theme = Theme::new();
    let (theme, body) = match view.state() {
        PageState::Loading => (&empty_theme, loading_section()),
        PageState::Ready(page) => (&page.theme, renderer.render_blocks(&page.blocks, &page.theme)),
        PageState::Empty(page) => (&page.theme, empty_section()),
    };

    let title = page_title(site_title, view.slug(), home_slug);

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<meta name="generator" content="blocksite {version}">
<title>{title}</title>
<style>
{style}
</style>
</head>
<body data-page="{slug}" data-state="{state}">
<main class="page">
{body}
</main>
</body>
</html>
"#,
        version = env!("CARGO_PKG_VERSION"),
        title = escape_text(&title),
        style = theme_style(theme),
        slug = html_escape(view.slug()),
        state = view.state().name(),
        body = body,
    )
}

/// `:root` custom properties for every effective theme token
pub fn theme_style(theme: &Theme) -> String {
    let mut css = String::from(":root {\n");
    for (key, value) in theme.effective_tokens() {
        let value = css_value(&value, "");
        if value.is_empty() {
            continue;
        }
        css.push_str(&format!(
            "  --{}: {};\n",
            class_name(&key).replace('_', "-"),
            value
        ));
    }
    css.push_str("}\n");
    css.push_str(
        "body { margin: 0; background: var(--background-color); color: var(--text-color); \
         font-family: var(--font-family); font-size: var(--font-size-base); }",
    );
    css
}

/// Document title: site title alone for the home page
fn page_title(site_title: &str, slug: &str, home_slug: &str) -> String {
    if slug.is_empty() || slug == home_slug {
        return site_title.to_string();
    }
    let last = slug.rsplit('/').next().unwrap_or(slug);
    let words = last.replace(&['-', '_'][..], " ");
    let mut chars = words.chars();
    let name: String = match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => return site_title.to_string(),
    };
    format!("{} | {}", name, site_title)
}

fn loading_section() -> String {
    r#"<section class="block block-loading" aria-busy="true"><p>Loading…</p></section>"#.to_string()
}

fn empty_section() -> String {
    r#"<section class="block block-empty"><h1>Nothing here yet</h1><p>This page has no content at the moment. Please check back soon.</p><a class="btn" href="/">Back to home</a></section>"#
        .to_string()
}
