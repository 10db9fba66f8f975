//! Defaulting view over a block's untyped props
//!
//! Every block type treats its props as an optional-everywhere record. All
//! reads go through [`Props`], which substitutes the caller's default for
//! missing, blank or wrong-typed values.

use serde_json::{Map, Value};

use crate::content::ContentBlock;

/// Read-only, defaulting accessor over a JSON object
#[derive(Debug, Clone, Copy)]
pub struct Props<'a> {
    map: &'a Map<String, Value>,
}

impl<'a> Props<'a> {
    pub fn new(map: &'a Map<String, Value>) -> Self {
        Self { map }
    }

    /// Props of a block
    pub fn of(block: &'a ContentBlock) -> Self {
        Self::new(&block.props)
    }

    fn get(&self, key: &str) -> Option<&'a Value> {
        self.map.get(key)
    }

    /// Scalar as text; strings must be non-blank, numbers and booleans are
    /// stringified
    pub fn opt_text(&self, key: &str) -> Option<String> {
        match self.get(key)? {
            Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }

    /// Text with a default
    pub fn text(&self, key: &str, default: &str) -> String {
        self.opt_text(key).unwrap_or_else(|| default.to_string())
    }

    /// Text of the first key that holds a usable value
    pub fn first_text(&self, keys: &[&str], default: &str) -> String {
        keys.iter()
            .find_map(|key| self.opt_text(key))
            .unwrap_or_else(|| default.to_string())
    }

    /// Integer with a default; numeric strings are accepted
    pub fn int(&self, key: &str, default: i64) -> i64 {
        match self.get(key) {
            Some(Value::Number(n)) => n
                .as_i64()
                .or_else(|| n.as_f64().map(|f| f.round() as i64))
                .unwrap_or(default),
            Some(Value::String(s)) => s.trim().parse().unwrap_or(default),
            _ => default,
        }
    }

    /// Boolean with a default
    pub fn flag(&self, key: &str, default: bool) -> bool {
        match self.get(key) {
            Some(Value::Bool(b)) => *b,
            Some(Value::String(s)) => match s.trim() {
                "true" => true,
                "false" => false,
                _ => default,
            },
            _ => default,
        }
    }

    /// Raw array items, or an empty slice
    pub fn items(&self, key: &str) -> &'a [Value] {
        match self.get(key) {
            Some(Value::Array(items)) => items.as_slice(),
            _ => &[],
        }
    }

    /// Object items of an array; other items are skipped
    pub fn list(&self, key: &str) -> Vec<Props<'a>> {
        self.items(key)
            .iter()
            .filter_map(|item| item.as_object().map(Props::new))
            .collect()
    }

    /// [`Props::list`] of the first key that holds an array
    pub fn first_list(&self, keys: &[&str]) -> Vec<Props<'a>> {
        keys.iter()
            .find(|key| matches!(self.get(key), Some(Value::Array(_))))
            .map(|key| self.list(key))
            .unwrap_or_default()
    }
}
