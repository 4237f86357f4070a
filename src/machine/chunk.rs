// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Chunks: bounded ranges of consecutive sorted values.
//!
//! The orchestrator sorts the input once, cuts the sorted values into chunks
//! of at most `max_size` values, and runs one search per chunk.

use std::fmt;

/// An inclusive value range together with the sorted input values inside it.
///
/// Since the input is split at consecutive positions of its sorted order,
/// a value lies in the range exactly when it is one of `values`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Chunk {
    min: i32,
    max: i32,
    values: Vec<i32>,
}

impl Chunk {
    /// Create a chunk from strictly ascending values.
    ///
    /// # Panics
    ///
    /// Panics if `values` is empty or not strictly ascending.
    pub fn new(values: Vec<i32>) -> Self {
        assert!(!values.is_empty(), "Chunk must contain at least one value");
        assert!(
            values.windows(2).all(|w| w[0] < w[1]),
            "Chunk values must be strictly ascending: {:?}",
            values
        );
        Self {
            min: values[0],
            max: values[values.len() - 1],
            values,
        }
    }

    /// Split `values` into chunks of at most `max_size` consecutive sorted values.
    ///
    /// Returns chunks in ascending order; all chunks are full except possibly the last.
    ///
    /// # Panics
    ///
    /// Panics if `max_size` is zero or `values` contains duplicates.
    pub fn partition(values: &[i32], max_size: usize) -> Vec<Chunk> {
        assert!(max_size > 0, "Chunk size must be positive");
        let mut sorted = values.to_vec();
        sorted.sort_unstable();
        sorted
            .chunks(max_size)
            .map(|values| Chunk::new(values.to_vec()))
            .collect()
    }

    pub fn min(&self) -> i32 {
        self.min
    }

    pub fn max(&self) -> i32 {
        self.max
    }

    /// The chunk's values, ascending.
    pub fn values(&self) -> &[i32] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Check if a value lies within the chunk's range.
    #[inline]
    pub fn contains(&self, value: i32) -> bool {
        self.min <= value && value <= self.max
    }
}

impl fmt::Display for Chunk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}
