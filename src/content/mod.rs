//! Content module - blocks, themes and resolved pages

pub mod block;
mod page;
pub mod theme;

pub use block::{parse_components, visible_in_order, ContentBlock, RawComponent};
pub use page::{normalize_slug, ResolvedPage};
pub use theme::Theme;
