//! LRU cache for computed layout models.
//!
//! Keys are full layout contexts, compared structurally. A lookup only hits
//! when every input of the computation is equal, so a changed text, font,
//! width or inset is always a different entry and never stale geometry.

use lru::LruCache;
use parking_lot::Mutex;
use std::hash::Hash;
use std::num::NonZeroUsize;
use std::sync::Arc;
use tracing::{debug, trace};

/// Capacity used when none (or zero) is configured.
pub const DEFAULT_CAPACITY: usize = 1000;

/// Configuration for a layout cache.
///
/// Loaded from config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize)]
#[serde(default)]
pub struct LayoutCacheConfig {
    /// Maximum number of cached models (default: 1000).
    pub capacity: usize,
}

impl Default for LayoutCacheConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
        }
    }
}

/// Bounded LRU map from layout context to computed model.
///
/// Not synchronized; see [`SharedLayoutCache`] for the guarded variant.
pub struct LayoutCache<C, M> {
    cache: LruCache<C, Arc<M>>,
}

impl<C: Hash + Eq, M> LayoutCache<C, M> {
    /// Create new cache with given capacity.
    ///
    /// If capacity is 0, uses default of 1000.
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity)
            .unwrap_or(NonZeroUsize::MIN.saturating_add(DEFAULT_CAPACITY - 1));
        Self {
            cache: LruCache::new(capacity),
        }
    }

    /// Create from config.
    pub fn from_config(config: &LayoutCacheConfig) -> Self {
        Self::new(config.capacity)
    }

    /// Get cached model if present.
    ///
    /// Updates LRU ordering (most recently used).
    pub fn get(&mut self, context: &C) -> Option<Arc<M>> {
        self.cache.get(context).cloned()
    }

    /// Insert a model. Evicts the least recently used entry when full.
    pub fn put(&mut self, context: C, model: Arc<M>) {
        self.cache.put(context, model);
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        self.cache.clear();
    }

    /// Number of cached models.
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    /// Check if cache is empty.
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    /// Maximum number of entries.
    pub fn capacity(&self) -> usize {
        self.cache.cap().get()
    }
}

impl<C: Hash + Eq, M> Default for LayoutCache<C, M> {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

/// Hit and miss counters of a [`SharedLayoutCache`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CacheStats {
    /// Lookups answered from the cache.
    pub hits: u64,
    /// Lookups that computed a new model.
    pub misses: u64,
}

struct Inner<C, M> {
    cache: LayoutCache<C, M>,
    stats: CacheStats,
}

/// A layout cache behind a mutex.
///
/// One lock covers lookup, computation on a miss, and insertion, so at most
/// one computation is in flight per cache. Sizing passes on a background
/// thread and the primary thread therefore never interleave on the same keys.
pub struct SharedLayoutCache<C, M> {
    name: &'static str,
    inner: Mutex<Inner<C, M>>,
}

impl<C: Hash + Eq, M> SharedLayoutCache<C, M> {
    /// Create a named cache. The name only appears in logs.
    pub fn new(name: &'static str, capacity: usize) -> Self {
        Self {
            name,
            inner: Mutex::new(Inner {
                cache: LayoutCache::new(capacity),
                stats: CacheStats::default(),
            }),
        }
    }

    /// Create from config.
    pub fn from_config(name: &'static str, config: &LayoutCacheConfig) -> Self {
        Self::new(name, config.capacity)
    }

    /// Return the cached model for `context`, computing and storing it on a miss.
    pub fn get_or_compute(&self, context: C, compute: impl FnOnce(&C) -> M) -> Arc<M> {
        let mut inner = self.inner.lock();
        if let Some(model) = inner.cache.get(&context) {
            inner.stats.hits += 1;
            trace!(cache = self.name, "layout cache hit");
            return model;
        }

        inner.stats.misses += 1;
        let model = Arc::new(compute(&context));
        inner.cache.put(context, Arc::clone(&model));
        debug!(
            cache = self.name,
            len = inner.cache.len(),
            "layout cache miss, model computed"
        );
        model
    }

    /// Lookup without computing.
    pub fn get(&self, context: &C) -> Option<Arc<M>> {
        self.inner.lock().cache.get(context)
    }

    /// Insert a model.
    pub fn put(&self, context: C, model: Arc<M>) {
        self.inner.lock().cache.put(context, model);
    }

    /// Remove every entry. Counters are kept.
    pub fn clear(&self) {
        self.inner.lock().cache.clear();
    }

    /// Number of cached models.
    pub fn len(&self) -> usize {
        self.inner.lock().cache.len()
    }

    /// Check if cache is empty.
    pub fn is_empty(&self) -> bool {
        self.inner.lock().cache.is_empty()
    }

    /// Current hit and miss counts.
    pub fn stats(&self) -> CacheStats {
        self.inner.lock().stats
    }
}
