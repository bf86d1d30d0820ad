//! Optional memoization for conversion results.
//!
//! Conversions are cheap and pure, so nothing in the crate depends on a
//! cache. Callers that convert the same inputs repeatedly can wrap calls in
//! [`remember`].

use std::collections::HashMap;
use std::time::{Duration, Instant};
use tracing::trace;

/// A key-value store with per-entry expiry.
pub trait Cache<V> {
    /// Returns the value for `key` if present and not expired
    fn get(&mut self, key: &str) -> Option<V>;

    /// Stores `value` under `key` for `ttl`
    fn set(&mut self, key: &str, value: V, ttl: Duration);

    /// Whether a live entry exists for `key`
    fn has(&mut self, key: &str) -> bool;

    /// Removes the entry for `key`
    fn forget(&mut self, key: &str);

    /// Removes every entry
    fn flush(&mut self);
}

/// Stores nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullCache;

impl<V> Cache<V> for NullCache {
    fn get(&mut self, _key: &str) -> Option<V> {
        None
    }

    fn set(&mut self, _key: &str, _value: V, _ttl: Duration) {}

    fn has(&mut self, _key: &str) -> bool {
        false
    }

    fn forget(&mut self, _key: &str) {}

    fn flush(&mut self) {}
}

#[derive(Debug, Clone)]
struct Entry<V> {
    value: V,
    expires_at: Instant,
}

/// In-process cache. Expired entries are dropped when they are next looked up.
#[derive(Debug, Clone)]
pub struct MemoryCache<V> {
    entries: HashMap<String, Entry<V>>,
}

impl<V> Default for MemoryCache<V> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }
}

impl<V> MemoryCache<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries, expired ones included until they are evicted
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<V: Clone> Cache<V> for MemoryCache<V> {
    fn get(&mut self, key: &str) -> Option<V> {
        if !self.has(key) {
            return None;
        }
        self.entries.get(key).map(|entry| entry.value.clone())
    }

    fn set(&mut self, key: &str, value: V, ttl: Duration) {
        let expires_at = Instant::now() + ttl;
        self.entries
            .insert(key.to_owned(), Entry { value, expires_at });
    }

    fn has(&mut self, key: &str) -> bool {
        let expired = match self.entries.get(key) {
            None => return false,
            Some(entry) => entry.expires_at <= Instant::now(),
        };
        if expired {
            self.entries.remove(key);
            trace!(key, "cache entry expired");
        }
        !expired
    }

    fn forget(&mut self, key: &str) {
        self.entries.remove(key);
    }

    fn flush(&mut self) {
        self.entries.clear();
    }
}

/// Returns the cached value for `key`, or computes, stores and returns it.
///
/// Failed computations are not cached.
///
/// # Errors
/// Propagates the error from `compute`.
pub fn remember<V, E, C, F>(cache: &mut C, key: &str, ttl: Duration, compute: F) -> Result<V, E>
where
    V: Clone,
    C: Cache<V> + ?Sized,
    F: FnOnce() -> Result<V, E>,
{
    if let Some(value) = cache.get(key) {
        trace!(key, "cache hit");
        return Ok(value);
    }
    trace!(key, "cache miss");
    let value = compute()?;
    cache.set(key, value.clone(), ttl);
    Ok(value)
}
