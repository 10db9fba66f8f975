#![allow(dead_code)]

use async_trait::async_trait;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use blocksite::resolver::{ContentSource, FetchError};

/// In-memory content API
#[derive(Default)]
pub struct MemorySource {
    pub pages: Mutex<HashMap<String, Value>>,
    pub theme: Mutex<Option<Value>>,
    pub theme_calls: AtomicUsize,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(self, slug: &str, components: Value) -> Self {
        self.set_page(slug, components);
        self
    }

    pub fn with_theme(self, theme: Value) -> Self {
        self.set_theme(Some(theme));
        self
    }

    pub fn set_page(&self, slug: &str, components: Value) {
        self.pages
            .lock()
            .unwrap()
            .insert(slug.to_string(), components);
    }

    pub fn set_theme(&self, theme: Option<Value>) {
        *self.theme.lock().unwrap() = theme;
    }

    pub fn theme_calls(&self) -> usize {
        self.theme_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ContentSource for MemorySource {
    fn name(&self) -> &'static str {
        "memory"
    }

    async fn fetch_components(&self, slug: &str) -> Result<Value, FetchError> {
        self.pages
            .lock()
            .unwrap()
            .get(slug)
            .cloned()
            .ok_or_else(|| FetchError::NotFound(slug.to_string()))
    }

    async fn fetch_theme(&self) -> Result<Value, FetchError> {
        self.theme_calls.fetch_add(1, Ordering::SeqCst);
        self.theme
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(|| FetchError::Malformed("theme unavailable".to_string()))
    }
}

/// One wire component
pub fn component(id: &str, kind: &str, data: Value, order: i64, visible: bool) -> Value {
    json!({
        "id": id,
        "component_type": kind,
        "component_data": data,
        "order_index": order,
        "is_visible": visible
    })
}
