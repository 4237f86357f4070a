// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Direct solver for inputs of at most five values.
//!
//! Three values are sorted by a lookup on their relative order. Four or five
//! values are reduced to three by pushing the smallest one or two values to
//! B, and pulled back at the end. No search is involved.

use crate::machine::constants::SMALL_SORT_LIMIT;
use crate::machine::{Move, StackBuffer};

/// Sort `values` (first value on top of A) without searching.
///
/// The result may contain a push immediately undone by a pull when the
/// remaining three values were already in order.
///
/// # Panics
///
/// Panics if `values` holds more than five values.
pub fn solve(values: &[i32]) -> Vec<Move> {
    assert!(
        values.len() <= SMALL_SORT_LIMIT,
        "Small solver handles at most 5 values, got {}",
        values.len()
    );
    let mut a = StackBuffer::from_slice(values.len(), values);
    let mut b = StackBuffer::with_capacity(values.len());
    let mut moves = Vec::new();

    let pushed = values.len().saturating_sub(3);
    for _ in 0..pushed {
        let Some(min) = a.iter().min() else {
            break;
        };
        let index = a.index_of(min).unwrap_or(0);
        for m in rotations_to_head(index, a.len()) {
            play(m, &mut a, &mut b, &mut moves);
        }
        play(Move::Pb, &mut a, &mut b, &mut moves);
    }
    for &m in sort_three(&a.to_vec()) {
        play(m, &mut a, &mut b, &mut moves);
    }
    for _ in 0..pushed {
        play(Move::Pa, &mut a, &mut b, &mut moves);
    }
    moves
}

/// Apply `m` and record it.
///
/// # Panics
///
/// Panics if the buffers refuse the move.
fn play(m: Move, a: &mut StackBuffer, b: &mut StackBuffer, moves: &mut Vec<Move>) {
    if !m.apply(a, b) {
        panic!("Move {} failed in the small solver: A = {:?}, B = {:?}", m, a, b);
    }
    moves.push(m);
}

/// Moves sorting up to three values on A.
fn sort_three(values: &[i32]) -> &'static [Move] {
    match values {
        [x, y] if x > y => &[Move::Sa],
        [x, y, z] => {
            let (ab, bc, ac) = (x < y, y < z, x < z);
            match (ab, bc, ac) {
                (true, true, _) => &[],
                (false, true, true) => &[Move::Sa],
                (false, false, _) => &[Move::Sa, Move::Rra],
                (false, true, false) => &[Move::Ra],
                (true, false, true) => &[Move::Sa, Move::Ra],
                (true, false, false) => &[Move::Rra],
            }
        }
        _ => &[],
    }
}

/// The shorter rotation bringing position `index` of a stack of `len`
/// values to the top.
fn rotations_to_head(index: usize, len: usize) -> impl Iterator<Item = Move> {
    let (m, count) = if index <= len - index {
        (Move::Ra, index)
    } else {
        (Move::Rra, len - index)
    };
    std::iter::repeat(m).take(count)
}
