//! Injectable query-result caches.
//!
//! The pipeline owns its cache explicitly; nothing here is process-global.
//! [`BoundedQueryCache`] evicts the oldest inserted entry once full, and
//! [`NoopQueryCache`] never stores anything.

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex, MutexGuard};

use encore_core::MatchResult;

use crate::Fingerprint;

/// Default number of result sets a [`BoundedQueryCache`] retains.
pub const DEFAULT_CACHE_CAPACITY: usize = 100;

/// Shared storage for previously computed match lists.
///
/// Implementations must be safe to share between threads. Entries are stored
/// whole and returned whole, so a reader never observes a partially written
/// result set.
pub trait QueryCache: Send + Sync {
    /// Return the stored matches for `key`, if any.
    fn get(&self, key: &Fingerprint) -> Option<Arc<[MatchResult]>>;

    /// Store `matches` under `key`, replacing any previous value.
    fn insert(&self, key: Fingerprint, matches: Arc<[MatchResult]>);

    /// Number of stored entries.
    fn len(&self) -> usize;

    /// Whether nothing is stored.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every entry.
    fn clear(&self);
}

#[derive(Debug, Default)]
struct Entries {
    values: HashMap<Fingerprint, Arc<[MatchResult]>>,
    order: VecDeque<Fingerprint>,
}

/// Mutex-guarded cache with first-in, first-out eviction.
///
/// Replacing an existing key keeps its original insertion position. A
/// capacity of zero stores nothing. A poisoned lock is logged and treated as
/// a miss on reads and a skipped store on writes.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use encore_core::{MatchParams, Query};
/// use encore_matcher::{BoundedQueryCache, Fingerprint, QueryCache};
///
/// let cache = BoundedQueryCache::with_capacity(1);
/// let first = Fingerprint::of(&Query::new(), MatchParams::default());
/// let second = Fingerprint::of(&Query::new().with_location("Bronx"), MatchParams::default());
/// cache.insert(first.clone(), Arc::from(Vec::new()));
/// cache.insert(second.clone(), Arc::from(Vec::new()));
/// assert!(cache.get(&first).is_none());
/// assert!(cache.get(&second).is_some());
/// ```
#[derive(Debug)]
pub struct BoundedQueryCache {
    capacity: usize,
    entries: Mutex<Entries>,
}

impl BoundedQueryCache {
    /// Create a cache holding at most [`DEFAULT_CACHE_CAPACITY`] entries.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CACHE_CAPACITY)
    }

    /// Create a cache holding at most `capacity` entries.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            entries: Mutex::new(Entries::default()),
        }
    }

    /// Maximum number of retained entries.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    fn lock(&self) -> Option<MutexGuard<'_, Entries>> {
        match self.entries.lock() {
            Ok(guard) => Some(guard),
            Err(_) => {
                log::warn!("query cache lock poisoned; bypassing cache");
                None
            }
        }
    }
}

impl Default for BoundedQueryCache {
    fn default() -> Self {
        Self::new()
    }
}

impl QueryCache for BoundedQueryCache {
    fn get(&self, key: &Fingerprint) -> Option<Arc<[MatchResult]>> {
        self.lock()?.values.get(key).map(Arc::clone)
    }

    fn insert(&self, key: Fingerprint, matches: Arc<[MatchResult]>) {
        if self.capacity == 0 {
            return;
        }
        let Some(mut entries) = self.lock() else {
            return;
        };
        if let Some(existing) = entries.values.get_mut(&key) {
            *existing = matches;
            return;
        }
        while entries.order.len() >= self.capacity {
            let Some(oldest) = entries.order.pop_front() else {
                break;
            };
            entries.values.remove(&oldest);
        }
        entries.order.push_back(key.clone());
        entries.values.insert(key, matches);
    }

    fn len(&self) -> usize {
        self.lock().map_or(0, |entries| entries.values.len())
    }

    fn clear(&self) {
        if let Some(mut entries) = self.lock() {
            entries.values.clear();
            entries.order.clear();
        }
    }
}

/// Cache that stores nothing; every lookup misses.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopQueryCache;

impl QueryCache for NoopQueryCache {
    fn get(&self, _key: &Fingerprint) -> Option<Arc<[MatchResult]>> {
        None
    }

    fn insert(&self, _key: Fingerprint, _matches: Arc<[MatchResult]>) {}

    fn len(&self) -> usize {
        0
    }

    fn clear(&self) {}
}
