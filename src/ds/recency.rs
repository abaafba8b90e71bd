//! Last-occurrence index per reference.
//!
//! Maps each key to the position of its most recent occurrence in the
//! reference stream. One entry per key ever recorded; re-recording a key
//! overwrites its position.

use std::hash::Hash;

use rustc_hash::FxHashMap;

/// Key → index of latest occurrence.
#[derive(Debug, Clone)]
pub struct RecencyTable<K> {
    last_seen: FxHashMap<K, usize>,
}

impl<K> Default for RecencyTable<K> {
    fn default() -> Self {
        Self {
            last_seen: FxHashMap::default(),
        }
    }
}

impl<K> RecencyTable<K>
where
    K: Eq + Hash,
{
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty table sized for `capacity` distinct keys.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            last_seen: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// Records that `key` occurred at `position`, returning its previous position.
    #[inline]
    pub fn record(&mut self, key: K, position: usize) -> Option<usize> {
        self.last_seen.insert(key, position)
    }

    /// Returns the position of `key`'s latest occurrence.
    ///
    /// `None` means "never referenced", which orders below every position.
    #[inline]
    pub fn last_seen(&self, key: &K) -> Option<usize> {
        self.last_seen.get(key).copied()
    }

    /// Number of distinct keys recorded.
    #[inline]
    pub fn len(&self) -> usize {
        self.last_seen.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.last_seen.is_empty()
    }

    pub fn clear(&mut self) {
        self.last_seen.clear();
    }
}
