//! Cache module for theme tokens
//!
//! The theme is shared by every page, so it is cached process-wide for a
//! short validity window and dropped on an explicit change notification.
//! Block lists are never cached here: they are keyed by slug and belong to
//! a single page view.

use std::sync::{Mutex, MutexGuard};
use std::time::{Duration, Instant};

use crate::content::Theme;

/// Cached theme with its fetch time
#[derive(Debug, Clone)]
struct CacheEntry {
    theme: Theme,
    stored_at: Instant,
}

#[derive(Debug, Default)]
struct CacheState {
    entry: Option<CacheEntry>,
    generation: u64,
}

/// Process-wide theme cache with TTL and explicit invalidation
///
/// Every invalidation starts a new generation. A fetch records the
/// generation it started in and may only store into that same generation.
#[derive(Debug)]
pub struct ThemeCache {
    ttl: Duration,
    state: Mutex<CacheState>,
}

impl ThemeCache {
    /// Create an empty cache; a zero TTL disables caching
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            state: Mutex::new(CacheState::default()),
        }
    }

    /// Current generation, read before starting a fetch
    pub fn generation(&self) -> u64 {
        self.lock().generation
    }

    /// Cached theme if it is still fresh
    pub fn get(&self) -> Option<Theme> {
        self.get_at(Instant::now())
    }

    fn get_at(&self, now: Instant) -> Option<Theme> {
        let guard = self.lock();
        let entry = guard.entry.as_ref()?;
        if now.saturating_duration_since(entry.stored_at) < self.ttl {
            Some(entry.theme.clone())
        } else {
            None
        }
    }

    /// Store a theme fetched during `generation`
    ///
    /// Returns `false` without storing when the cache was invalidated since
    /// that generation was read.
    pub fn store_if(&self, generation: u64, theme: Theme) -> bool {
        if self.ttl.is_zero() {
            return false;
        }
        let mut state = self.lock();
        if state.generation != generation {
            tracing::debug!("Discarding theme fetched before invalidation");
            return false;
        }
        state.entry = Some(CacheEntry {
            theme,
            stored_at: Instant::now(),
        });
        true
    }

    /// Drop the cached theme and start a new generation
    pub fn invalidate(&self) {
        let mut state = self.lock();
        state.generation = state.generation.wrapping_add(1);
        if state.entry.take().is_some() {
            tracing::debug!("Theme cache invalidated");
        }
    }

    fn lock(&self) -> MutexGuard<'_, CacheState> {
        // The state is plain data, a poisoned lock still holds a usable value
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}

/// Calculate a hash for rendered content (used as an HTTP validator)
pub fn hash_content(content: &str) -> u64 {
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    let mut hasher = DefaultHasher::new();
    content.hash(&mut hasher);
    hasher.finish()
}
