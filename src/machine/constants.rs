// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Compile-time constants for the two-stack machine and its search.
//!
//! MAX_CHUNK_SIZE can be configured at compile time via cargo features.
//!
//! # Supported chunk sizes
//!
//! - 5, 6: smaller sub-problems, faster searches, longer move lists
//! - 7: **default**
//! - 8: larger sub-problems; the search state space grows combinatorially
//!
//! # Example
//!
//! ```bash
//! # Default: MAX_CHUNK_SIZE=7
//! cargo build
//!
//! # Build with chunks of at most 5 values
//! cargo build --features chunk_5
//! ```

/// Maximum number of values in one chunk.
///
/// This is configurable at compile time via cargo features:
/// - `chunk_5` → 5
/// - `chunk_6` → 6
/// - `chunk_7` → 7 (explicit)
/// - `chunk_8` → 8
/// - (default) → 7 (when no feature specified)
///
/// `SearchConfig::max_chunk_size` overrides it at runtime for tests and tuning.
#[cfg(not(any(feature = "chunk_5", feature = "chunk_6", feature = "chunk_8")))]
pub const MAX_CHUNK_SIZE: usize = 7;

#[cfg(feature = "chunk_5")]
pub const MAX_CHUNK_SIZE: usize = 5;

#[cfg(feature = "chunk_6")]
pub const MAX_CHUNK_SIZE: usize = 6;

#[cfg(feature = "chunk_8")]
pub const MAX_CHUNK_SIZE: usize = 8;

/// Inputs of at most this many values skip the search and use the closed-form solver.
pub const SMALL_SORT_LIMIT: usize = 5;

/// Number of bits used to encode one move in a packed history.
///
/// Eleven moves need four bits.
pub const BITS_PER_MOVE: usize = 4;

/// Number of moves stored in one `u64` word of a packed history.
pub const MOVES_PER_WORD: usize = u64::BITS as usize / BITS_PER_MOVE;

/// Mask selecting one encoded move.
pub const MOVE_MASK: u64 = (1 << BITS_PER_MOVE) - 1;

/// Upper bound on memoized insertion points kept during one chunk search.
///
/// The cache is cleared when it reaches this size.
pub const ROTATION_CACHE_CAPACITY: usize = 1 << 16;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_packing_constants() {
        assert_eq!(MOVES_PER_WORD, 16);
        assert_eq!(MOVE_MASK, 0xF);
    }

    #[test]
    #[cfg(chunk_eq_7)]
    fn test_default_chunk_size() {
        assert_eq!(MAX_CHUNK_SIZE, 7);
    }

    #[test]
    fn test_small_sort_below_chunk_size() {
        assert!(SMALL_SORT_LIMIT <= MAX_CHUNK_SIZE);
    }
}
