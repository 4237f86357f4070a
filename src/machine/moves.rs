// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The move vocabulary of the two-stack machine.
//!
//! There are exactly eleven legal moves. Each one has a unique inverse:
//! swaps are self-inverse, rotate and reverse-rotate undo each other per
//! stack, and the two pushes undo each other.
//!
//! # Example
//!
//! ```
//! use pushswap_search::machine::{Move, MoveSet};
//!
//! let m: Move = "rra".parse().unwrap();
//! assert_eq!(m, Move::Rra);
//! assert_eq!(m.inverse(), Move::Ra);
//! assert_eq!(m.to_string(), "rra");
//!
//! assert!(MoveSet::MIXED.contains(Move::Rr));
//! assert!(!MoveSet::SINGLES.contains(Move::Rr));
//! ```

use super::StackBuffer;
use strum::EnumCount;
use strum_macros::{Display, EnumCount as EnumCountMacro, EnumIter, EnumString};

/// One operation of the two-stack machine.
///
/// Displays and parses as the conventional lowercase token (`sa`, `rra`, ...).
/// The discriminant is the 4-bit code stored in a packed move history.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumCountMacro, EnumIter,
    EnumString,
)]
#[strum(serialize_all = "lowercase")]
#[repr(u8)]
pub enum Move {
    /// Swap the top two values of A.
    Sa,
    /// Swap the top two values of B.
    Sb,
    /// `sa` and `sb` at once.
    Ss,
    /// Move the top of B onto A.
    Pa,
    /// Move the top of A onto B.
    Pb,
    /// Rotate A: its top value becomes its bottom value.
    Ra,
    /// Rotate B.
    Rb,
    /// `ra` and `rb` at once.
    Rr,
    /// Reverse-rotate A: its bottom value becomes its top value.
    Rra,
    /// Reverse-rotate B.
    Rrb,
    /// `rra` and `rrb` at once.
    Rrr,
}

impl Move {
    /// All moves, in discriminant order.
    pub const ALL: [Move; Move::COUNT] = [
        Move::Sa,
        Move::Sb,
        Move::Ss,
        Move::Pa,
        Move::Pb,
        Move::Ra,
        Move::Rb,
        Move::Rr,
        Move::Rra,
        Move::Rrb,
        Move::Rrr,
    ];

    /// The move that exactly undoes this one.
    pub const fn inverse(self) -> Move {
        match self {
            Move::Sa => Move::Sa,
            Move::Sb => Move::Sb,
            Move::Ss => Move::Ss,
            Move::Pa => Move::Pb,
            Move::Pb => Move::Pa,
            Move::Ra => Move::Rra,
            Move::Rb => Move::Rrb,
            Move::Rr => Move::Rrr,
            Move::Rra => Move::Ra,
            Move::Rrb => Move::Rb,
            Move::Rrr => Move::Rr,
        }
    }

    /// The packed 4-bit code of this move.
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Decode a packed 4-bit code, returning None for unused codes.
    pub fn from_code(code: u8) -> Option<Move> {
        Move::ALL.get(code as usize).copied()
    }

    /// True for `sa`, `sb` and `ss`.
    pub const fn is_swap(self) -> bool {
        matches!(self, Move::Sa | Move::Sb | Move::Ss)
    }

    /// True for `pa` and `pb`.
    pub const fn is_push(self) -> bool {
        matches!(self, Move::Pa | Move::Pb)
    }

    /// True for the moves acting on both stacks at once (`ss`, `rr`, `rrr`).
    pub const fn is_double(self) -> bool {
        matches!(self, Move::Ss | Move::Rr | Move::Rrr)
    }

    /// True if this move reorders the top pair of A.
    pub const fn swaps_a(self) -> bool {
        matches!(self, Move::Sa | Move::Ss)
    }

    /// Apply this move to the stack pair `(a, b)`.
    ///
    /// Returns false, leaving both stacks untouched, if the move's
    /// precondition fails. A simultaneous move needs both of its halves to
    /// succeed.
    pub fn apply(self, a: &mut StackBuffer, b: &mut StackBuffer) -> bool {
        match self {
            Move::Sa => a.swap(),
            Move::Sb => b.swap(),
            Move::Ra => a.rotate(),
            Move::Rb => b.rotate(),
            Move::Rra => a.reverse_rotate(),
            Move::Rrb => b.reverse_rotate(),
            Move::Pa => b.push(a),
            Move::Pb => a.push(b),
            Move::Ss | Move::Rr | Move::Rrr => {
                if a.len() < 2 || b.len() < 2 {
                    return false;
                }
                match self {
                    Move::Ss => a.swap() && b.swap(),
                    Move::Rr => a.rotate() && b.rotate(),
                    _ => a.reverse_rotate() && b.reverse_rotate(),
                }
            }
        }
    }

    const fn bit(self) -> u16 {
        1 << (self as u16)
    }
}

/// A named subset of the move vocabulary.
///
/// The successor generator only tries moves in the configured set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MoveSet(u16);

impl MoveSet {
    /// The empty set.
    pub const EMPTY: MoveSet = MoveSet(0);

    /// Every move. Inverse round trips and non-chunk pushes are rejected at
    /// runtime instead.
    pub const MIXED: MoveSet = MoveSet((1 << Move::COUNT) - 1);

    /// Every move except the three simultaneous ones.
    pub const SINGLES: MoveSet =
        MoveSet(MoveSet::MIXED.0 & !(Move::Ss.bit() | Move::Rr.bit() | Move::Rrr.bit()));

    /// Rotations of either stack, alone or together.
    pub const ROTATIONS: MoveSet = MoveSet(
        Move::Ra.bit()
            | Move::Rb.bit()
            | Move::Rr.bit()
            | Move::Rra.bit()
            | Move::Rrb.bit()
            | Move::Rrr.bit(),
    );

    /// Check if the set contains a move.
    pub const fn contains(self, m: Move) -> bool {
        self.0 & m.bit() != 0
    }

    /// Number of moves in the set.
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterate over the moves in the set, in discriminant order.
    pub fn iter(self) -> impl Iterator<Item = Move> {
        Move::ALL.into_iter().filter(move |&m| self.contains(m))
    }
}

impl Default for MoveSet {
    fn default() -> Self {
        MoveSet::MIXED
    }
}
