//! Theme design tokens
//!
//! A theme is a flat, possibly partial, mapping of token names to string
//! values. Every read goes through a default so rendering never depends on
//! the theme being complete.

use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

pub const PRIMARY_COLOR: &str = "primary_color";
pub const ACCENT_COLOR: &str = "accent_color";
pub const BACKGROUND_COLOR: &str = "background_color";
pub const TEXT_COLOR: &str = "text_color";
pub const FONT_SIZE_BASE: &str = "font_size_base";
pub const FONT_FAMILY: &str = "font_family";

/// Documented fallback for every known token
pub const DEFAULT_TOKENS: &[(&str, &str)] = &[
    (PRIMARY_COLOR, "#1e3a8a"),
    (ACCENT_COLOR, "#f59e0b"),
    (BACKGROUND_COLOR, "#ffffff"),
    (TEXT_COLOR, "#1f2937"),
    (FONT_SIZE_BASE, "16px"),
    (FONT_FAMILY, "system-ui, sans-serif"),
];

/// Named design-token mapping
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Theme {
    tokens: BTreeMap<String, String>,
}

impl Theme {
    /// Create an empty theme
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a theme from a `GET /theme` body
    ///
    /// Returns `None` when the body is not a JSON object. Strings are kept,
    /// numbers and booleans stringified, everything else skipped.
    pub fn from_json(body: &Value) -> Option<Self> {
        let map = body.as_object()?;
        let tokens = map
            .iter()
            .filter_map(|(key, value)| {
                let value = match value {
                    Value::String(s) => s.clone(),
                    Value::Number(n) => n.to_string(),
                    Value::Bool(b) => b.to_string(),
                    _ => return None,
                };
                Some((key.clone(), value))
            })
            .collect();
        Some(Self { tokens })
    }

    /// Set a token
    pub fn set(&mut self, key: &str, value: &str) {
        self.tokens.insert(key.to_string(), value.to_string());
    }

    /// Builder-style [`Theme::set`]
    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.set(key, value);
        self
    }

    /// Raw token lookup; blank values count as absent
    pub fn token(&self, key: &str) -> Option<&str> {
        self.tokens
            .get(key)
            .map(String::as_str)
            .filter(|v| !v.trim().is_empty())
    }

    /// Token lookup with a caller-supplied default
    pub fn token_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.token(key).unwrap_or(default)
    }

    /// Token lookup falling back to the documented default
    pub fn resolved(&self, key: &str) -> &str {
        let fallback = DEFAULT_TOKENS
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| *v)
            .unwrap_or("");
        self.token_or(key, fallback)
    }

    pub fn primary_color(&self) -> &str {
        self.resolved(PRIMARY_COLOR)
    }

    pub fn accent_color(&self) -> &str {
        self.resolved(ACCENT_COLOR)
    }

    pub fn background_color(&self) -> &str {
        self.resolved(BACKGROUND_COLOR)
    }

    pub fn text_color(&self) -> &str {
        self.resolved(TEXT_COLOR)
    }

    pub fn font_size_base(&self) -> &str {
        self.resolved(FONT_SIZE_BASE)
    }

    pub fn font_family(&self) -> &str {
        self.resolved(FONT_FAMILY)
    }

    /// Every token to emit: documented defaults overlaid with this theme
    pub fn effective_tokens(&self) -> BTreeMap<String, String> {
        let mut tokens: BTreeMap<String, String> = DEFAULT_TOKENS
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        for (key, value) in &self.tokens {
            if !value.trim().is_empty() {
                tokens.insert(key.clone(), value.clone());
            }
        }
        tokens
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }
}
