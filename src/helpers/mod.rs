//! Helper functions for block renderers
//!
//! Small HTML and URL builders shared by the block strategies and the page
//! shell.

mod html;
mod url;

pub use html::*;
pub use url::*;
