//! Content blocks and their wire representation
//!
//! The content API returns components as `{id, component_type,
//! component_data, order_index, is_visible}`. Parsing here is lenient: an
//! element that cannot become a block is dropped, never the whole list.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One unit of page content: a type tag plus an untyped props bag
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentBlock {
    /// Opaque identifier, stable across edits
    pub id: String,
    /// Rendering strategy tag (open-ended)
    #[serde(rename = "type")]
    pub block_type: String,
    /// Per-type payload; every field is optional
    #[serde(default)]
    pub props: Map<String, Value>,
    /// Ascending render order
    #[serde(default)]
    pub order: i64,
    /// Invisible blocks never reach the renderer
    #[serde(default = "default_visible")]
    pub visible: bool,
}

fn default_visible() -> bool {
    true
}

impl ContentBlock {
    /// Create a visible block from a JSON props value
    ///
    /// Non-object `props` are replaced by an empty map.
    pub fn new(id: impl Into<String>, block_type: impl Into<String>, props: Value) -> Self {
        Self {
            id: id.into(),
            block_type: block_type.into(),
            props: into_object(props),
            order: 0,
            visible: true,
        }
    }

    /// Set the render order
    pub fn with_order(mut self, order: i64) -> Self {
        self.order = order;
        self
    }

    /// Set visibility
    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }
}

/// Component record as served by `GET /pages/{slug}/components`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawComponent {
    #[serde(default)]
    pub id: Value,
    #[serde(default, alias = "type")]
    pub component_type: Value,
    #[serde(default, alias = "data")]
    pub component_data: Value,
    #[serde(default, alias = "order")]
    pub order_index: Value,
    #[serde(default, alias = "visible")]
    pub is_visible: Value,
}

impl RawComponent {
    /// Convert into a block; `position` is the element's index in the
    /// response and stands in for a missing `order_index`.
    pub fn into_block(self, position: usize) -> Option<ContentBlock> {
        let block_type = match self.component_type {
            Value::String(s) if !s.trim().is_empty() => s.trim().to_string(),
            _ => return None,
        };

        let id = match self.id {
            Value::String(s) => s,
            Value::Number(n) => n.to_string(),
            _ => format!("{}-{}", block_type, position),
        };

        let props = match self.component_data {
            // Some backends store the payload as serialized JSON text
            Value::String(text) => serde_json::from_str(&text)
                .map(into_object)
                .unwrap_or_default(),
            other => into_object(other),
        };

        let order = coerce_i64(&self.order_index).unwrap_or(position as i64);
        let visible = coerce_bool(&self.is_visible).unwrap_or(true);

        Some(ContentBlock {
            id,
            block_type,
            props,
            order,
            visible,
        })
    }
}

/// Parse a components response body into blocks, in response order
///
/// Returns `None` when the body is not a JSON array. Malformed elements are
/// skipped with a warning.
pub fn parse_components(body: Value) -> Option<Vec<ContentBlock>> {
    let items = match body {
        Value::Array(items) => items,
        _ => return None,
    };

    let mut blocks = Vec::with_capacity(items.len());
    for (position, item) in items.into_iter().enumerate() {
        if !item.is_object() {
            tracing::warn!("Skipping component #{}: not an object", position);
            continue;
        }
        match serde_json::from_value::<RawComponent>(item) {
            Ok(raw) => match raw.into_block(position) {
                Some(block) => blocks.push(block),
                None => tracing::warn!("Skipping component #{}: missing type", position),
            },
            Err(e) => tracing::warn!("Skipping component #{}: {}", position, e),
        }
    }

    Some(blocks)
}

/// Keep visible blocks and order them ascending by `order`
///
/// The sort is stable, so equal orders keep their response order.
pub fn visible_in_order(blocks: Vec<ContentBlock>) -> Vec<ContentBlock> {
    let mut blocks: Vec<_> = blocks.into_iter().filter(|b| b.visible).collect();
    blocks.sort_by_key(|b| b.order);
    blocks
}

fn into_object(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}

fn coerce_i64(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn coerce_bool(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::Number(n) => n.as_i64().map(|i| i != 0),
        Value::String(s) => match s.trim() {
            "true" | "1" => Some(true),
            "false" | "0" => Some(false),
            _ => None,
        },
        _ => None,
    }
}
