// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Packed, append-only move history.
//!
//! Every search state carries the moves that produced it. Sibling states
//! differ only in their last move, so histories are cloned constantly; packing
//! sixteen 4-bit move codes into each `u64` keeps those clones small.
//!
//! # Example
//!
//! ```
//! use pushswap_search::history::MoveHistory;
//! use pushswap_search::machine::Move;
//!
//! let mut history = MoveHistory::new();
//! history.push(Move::Pb);
//! history.push(Move::Rra);
//! assert_eq!(history.len(), 2);
//! assert_eq!(history.last(), Some(Move::Rra));
//! assert_eq!(history.to_vec(), vec![Move::Pb, Move::Rra]);
//! ```

use crate::machine::constants::{BITS_PER_MOVE, MOVES_PER_WORD, MOVE_MASK};
use crate::machine::Move;
use std::fmt;

/// Bit-packed list of moves.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct MoveHistory {
    /// Move codes, least significant nibble first within each word.
    words: Vec<u64>,
    len: usize,
}

impl MoveHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Append a move.
    pub fn push(&mut self, m: Move) {
        let (word, shift) = Self::locate(self.len);
        if word == self.words.len() {
            self.words.push(0);
        }
        self.words[word] |= (m.code() as u64) << shift;
        self.len += 1;
    }

    /// Move at position `i`, oldest first.
    pub fn get(&self, i: usize) -> Option<Move> {
        if i >= self.len {
            return None;
        }
        let (word, shift) = Self::locate(i);
        Move::from_code(((self.words[word] >> shift) & MOVE_MASK) as u8)
    }

    /// Most recently applied move.
    pub fn last(&self) -> Option<Move> {
        self.len.checked_sub(1).and_then(|i| self.get(i))
    }

    pub fn iter(&self) -> impl Iterator<Item = Move> + '_ {
        (0..self.len).filter_map(move |i| self.get(i))
    }

    pub fn to_vec(&self) -> Vec<Move> {
        self.iter().collect()
    }

    #[inline]
    fn locate(i: usize) -> (usize, usize) {
        (i / MOVES_PER_WORD, (i % MOVES_PER_WORD) * BITS_PER_MOVE)
    }
}

impl Extend<Move> for MoveHistory {
    fn extend<I: IntoIterator<Item = Move>>(&mut self, iter: I) {
        for m in iter {
            self.push(m);
        }
    }
}

impl FromIterator<Move> for MoveHistory {
    fn from_iter<I: IntoIterator<Item = Move>>(iter: I) -> Self {
        let mut history = MoveHistory::new();
        history.extend(iter);
        history
    }
}

impl fmt::Debug for MoveHistory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl fmt::Display for MoveHistory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, m) in self.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", m)?;
        }
        Ok(())
    }
}

/// Remove adjacent pairs of mutually inverse moves, repeatedly.
///
/// Chunk searches never emit such a pair internally, but the alignment
/// rotations stitched between chunks can abut a search's final rotation.
/// Each removed pair is a no-op on the machine, so the result leaves the
/// stacks in the same final state.
pub fn cancel_inverses(moves: &[Move]) -> Vec<Move> {
    let mut kept: Vec<Move> = Vec::with_capacity(moves.len());
    for &m in moves {
        if kept.last() == Some(&m.inverse()) {
            kept.pop();
        } else {
            kept.push(m);
        }
    }
    kept
}
