// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Memoized insertion points in stack B.
//!
//! Many sibling states share the same B (every rotation of A leaves it
//! alone), so the insertion point of a value into a given B is computed once
//! and looked up afterwards. The cache lives in the search context, is
//! cleared at the start of each chunk search and is bounded by
//! [`ROTATION_CACHE_CAPACITY`].

use crate::machine::constants::ROTATION_CACHE_CAPACITY;
use crate::machine::StackBuffer;
use rustc_hash::FxHashMap;

#[derive(Debug, Default)]
pub struct RotationCache {
    /// (fingerprint of B, value) → insertion index.
    entries: FxHashMap<(u64, i32), usize>,
    hits: u64,
    misses: u64,
}

impl RotationCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index in `b` that must be rotated to the top before pushing `value`,
    /// so that B stays in cyclic descending order.
    ///
    /// That is the largest value of B below `value`, or B's maximum when
    /// `value` is smaller than everything in B. Returns 0 for an empty B.
    /// `fingerprint` must be `b.fingerprint()`.
    pub fn insertion_index(&mut self, b: &StackBuffer, fingerprint: u64, value: i32) -> usize {
        if b.is_empty() {
            return 0;
        }
        if let Some(&index) = self.entries.get(&(fingerprint, value)) {
            self.hits += 1;
            return index;
        }
        self.misses += 1;
        if self.entries.len() >= ROTATION_CACHE_CAPACITY {
            self.entries.clear();
        }
        let index = insertion_index(b, value);
        self.entries.insert((fingerprint, value), index);
        index
    }

    /// Drop all entries and reset the hit and miss counts.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.hits = 0;
        self.misses = 0;
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }
}

fn insertion_index(b: &StackBuffer, value: i32) -> usize {
    let target = b.iter().filter(|&v| v < value).max().or_else(|| b.max());
    target.and_then(|t| b.index_of(t)).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insertion_index() {
        let b = StackBuffer::from_slice(8, &[9, 7, 4, 2]);
        let mut cache = RotationCache::new();
        let fp = b.fingerprint();
        assert_eq!(cache.insertion_index(&b, fp, 5), 2); // below 7, above 4
        assert_eq!(cache.insertion_index(&b, fp, 10), 0); // new maximum
        assert_eq!(cache.insertion_index(&b, fp, 1), 0); // new minimum goes above the max
        assert_eq!(cache.insertion_index(&b, fp, 3), 3);
    }

    #[test]
    fn test_rotated_b() {
        let b = StackBuffer::from_slice(8, &[4, 2, 9, 7]);
        let mut cache = RotationCache::new();
        assert_eq!(cache.insertion_index(&b, b.fingerprint(), 8), 3);
        assert_eq!(cache.insertion_index(&b, b.fingerprint(), 1), 2);
    }

    #[test]
    fn test_empty_b() {
        let b = StackBuffer::with_capacity(4);
        let mut cache = RotationCache::new();
        assert_eq!(cache.insertion_index(&b, b.fingerprint(), 3), 0);
        assert_eq!(cache.misses(), 0);
    }

    #[test]
    fn test_hits_and_clear() {
        let b = StackBuffer::from_slice(4, &[3, 1]);
        let fp = b.fingerprint();
        let mut cache = RotationCache::new();
        cache.insertion_index(&b, fp, 2);
        cache.insertion_index(&b, fp, 2);
        cache.insertion_index(&b, fp, 4);
        assert_eq!((cache.hits(), cache.misses(), cache.len()), (1, 2, 2));
        cache.clear();
        assert!(cache.is_empty());
        assert_eq!((cache.hits(), cache.misses()), (0, 0));
    }
}
