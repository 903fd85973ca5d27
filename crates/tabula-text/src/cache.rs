#![forbid(unsafe_code)]

//! LRU cache in front of a [`TextMeasurer`].
//!
//! Column widths are measured once per inserted value, but every render pass
//! measures each cell again for its ink bearing. Wrapping the measurer in a
//! [`CachedMeasurer`] turns those repeated queries into lookups.
//!
//! # Example
//! ```
//! use tabula_text::{CachedMeasurer, FontStyle, MonospaceMeasurer, TextMeasurer};
//!
//! let measurer = CachedMeasurer::new(MonospaceMeasurer::new(), 256);
//! let font = FontStyle::default();
//!
//! let first = measurer.measure("42.000000", &font);
//! let second = measurer.measure("42.000000", &font);
//! assert_eq!(first, second);
//!
//! let stats = measurer.stats();
//! assert_eq!(stats.hits, 1);
//! assert_eq!(stats.misses, 1);
//! ```

use std::cell::{Cell, RefCell};
use std::hash::{Hash, Hasher};
use std::num::NonZeroUsize;

use lru::LruCache;
use rustc_hash::FxHasher;

use crate::font::FontStyle;
use crate::measure::{FontExtents, TextExtents, TextMeasurer};

/// Default cache capacity.
pub const DEFAULT_CACHE_CAPACITY: usize = 4096;

/// Statistics about cache performance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CacheStats {
    /// Number of cache hits.
    pub hits: u64,
    /// Number of cache misses.
    pub misses: u64,
    /// Current number of entries.
    pub size: usize,
    /// Maximum capacity.
    pub capacity: usize,
}

impl CacheStats {
    /// Calculate hit rate (0.0 to 1.0).
    #[must_use]
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

/// A measurer that memoizes another measurer's extents.
///
/// Keys are 64-bit FxHash digests of `(text, font)`, not the strings
/// themselves. Interior mutability keeps [`TextMeasurer::measure`] on
/// `&self`; the type is therefore not `Sync` and belongs to one thread.
#[derive(Debug)]
pub struct CachedMeasurer<M> {
    inner: M,
    cache: RefCell<LruCache<u64, TextExtents>>,
    hits: Cell<u64>,
    misses: Cell<u64>,
}

impl<M: TextMeasurer> CachedMeasurer<M> {
    /// Wrap `inner` with a cache of `capacity` entries (minimum 1).
    #[must_use]
    pub fn new(inner: M, capacity: usize) -> Self {
        Self {
            inner,
            cache: RefCell::new(LruCache::new(non_zero(capacity))),
            hits: Cell::new(0),
            misses: Cell::new(0),
        }
    }

    /// Wrap `inner` with the default capacity (4096 entries).
    #[must_use]
    pub fn with_default_capacity(inner: M) -> Self {
        Self::new(inner, DEFAULT_CACHE_CAPACITY)
    }

    /// The wrapped measurer.
    pub fn inner(&self) -> &M {
        &self.inner
    }

    /// Check if `(text, font)` is cached. Does not touch LRU order or stats.
    #[must_use]
    pub fn contains(&self, text: &str, font: &FontStyle) -> bool {
        self.cache.borrow().contains(&cache_key(text, font))
    }

    /// Drop every cached entry.
    pub fn clear(&self) {
        let mut cache = self.cache.borrow_mut();
        tracing::trace!(entries = cache.len(), "extents cache cleared");
        cache.clear();
    }

    /// Reset hit/miss counters.
    pub fn reset_stats(&self) {
        self.hits.set(0);
        self.misses.set(0);
    }

    /// Get cache statistics.
    #[must_use]
    pub fn stats(&self) -> CacheStats {
        let cache = self.cache.borrow();
        CacheStats {
            hits: self.hits.get(),
            misses: self.misses.get(),
            size: cache.len(),
            capacity: cache.cap().get(),
        }
    }

    /// Number of cached entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cache.borrow().len()
    }

    /// Check if the cache is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cache.borrow().is_empty()
    }

    /// Cache capacity.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.cache.borrow().cap().get()
    }

    /// Change the capacity, evicting least recently used entries if needed.
    pub fn resize(&self, capacity: usize) {
        self.cache.borrow_mut().resize(non_zero(capacity));
    }
}

impl<M: TextMeasurer> TextMeasurer for CachedMeasurer<M> {
    fn measure(&self, text: &str, font: &FontStyle) -> TextExtents {
        let key = cache_key(text, font);

        if let Some(&extents) = self.cache.borrow_mut().get(&key) {
            self.hits.set(self.hits.get() + 1);
            return extents;
        }

        self.misses.set(self.misses.get() + 1);
        let extents = self.inner.measure(text, font);
        if self.cache.borrow_mut().push(key, extents).is_some() {
            tracing::trace!("extents cache evicted least recently used entry");
        }
        extents
    }

    // Font-wide metrics are queried once per layout; no need to cache them.
    fn font_extents(&self, font: &FontStyle) -> FontExtents {
        self.inner.font_extents(font)
    }
}

fn non_zero(capacity: usize) -> NonZeroUsize {
    NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN)
}

#[inline]
fn cache_key(text: &str, font: &FontStyle) -> u64 {
    let mut hasher = FxHasher::default();
    text.hash(&mut hasher);
    font.hash(&mut hasher);
    hasher.finish()
}
