// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Independent replay of a move list.
//!
//! The verifier shares nothing with the search but the [`Move`] vocabulary:
//! it replays moves on two plain deques, so a defect in the search buffers
//! cannot hide itself. A move whose precondition fails makes the whole
//! list fail, even when the rest would sort.

use crate::error::VerifyError;
use crate::machine::Move;
use rustc_hash::FxHashSet;
use std::collections::VecDeque;
use std::fmt;

/// Outcome of a replay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// A ends up equal to the expected values and B is empty.
    Ok,
    /// Anything else.
    Ko,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Ok => write!(f, "OK"),
            Verdict::Ko => write!(f, "KO"),
        }
    }
}

/// Replay `moves` against `input` (first value on top of A) and compare
/// the final A with `expected`.
///
/// # Example
///
/// ```
/// use pushswap_search::machine::Move;
/// use pushswap_search::verifier::{verify, Verdict};
///
/// assert_eq!(verify(&[Move::Sa], &[2, 1, 3], &[1, 2, 3]), Ok(Verdict::Ok));
/// assert_eq!(verify(&[Move::Ra], &[2, 1, 3], &[1, 2, 3]), Ok(Verdict::Ko));
/// ```
pub fn verify(moves: &[Move], input: &[i32], expected: &[i32]) -> Result<Verdict, VerifyError> {
    if let Some(v) = first_duplicate(input) {
        return Err(VerifyError::DuplicateInput(v));
    }
    if let Some(v) = first_duplicate(expected) {
        return Err(VerifyError::DuplicateExpected(v));
    }
    if input.len() != expected.len() {
        return Err(VerifyError::LengthMismatch {
            input: input.len(),
            expected: expected.len(),
        });
    }
    let mut machine = Machine::new(input);
    for &m in moves {
        if !machine.apply(m) {
            return Ok(Verdict::Ko);
        }
    }
    Ok(machine.verdict(expected))
}

/// Parse move tokens, then [`verify`] them.
///
/// Every token is parsed before anything is replayed, so an unknown token
/// is reported even after a failing move.
pub fn verify_tokens<I, S>(
    tokens: I,
    input: &[i32],
    expected: &[i32],
) -> Result<Verdict, VerifyError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let moves = tokens
        .into_iter()
        .map(|token| {
            let token = token.as_ref();
            token
                .parse::<Move>()
                .map_err(|_| VerifyError::UnknownMove(token.to_string()))
        })
        .collect::<Result<Vec<_>, _>>()?;
    verify(&moves, input, expected)
}

fn first_duplicate(values: &[i32]) -> Option<i32> {
    let mut seen = FxHashSet::default();
    values.iter().copied().find(|&v| !seen.insert(v))
}

struct Machine {
    a: VecDeque<i32>,
    b: VecDeque<i32>,
}

impl Machine {
    fn new(input: &[i32]) -> Self {
        Self {
            a: input.iter().copied().collect(),
            b: VecDeque::with_capacity(input.len()),
        }
    }

    fn apply(&mut self, m: Move) -> bool {
        let (a, b) = (&mut self.a, &mut self.b);
        match m {
            Move::Sa => swap(a),
            Move::Sb => swap(b),
            Move::Ss => a.len() >= 2 && b.len() >= 2 && swap(a) && swap(b),
            Move::Pa => push(b, a),
            Move::Pb => push(a, b),
            Move::Ra => rotate(a),
            Move::Rb => rotate(b),
            Move::Rr => a.len() >= 2 && b.len() >= 2 && rotate(a) && rotate(b),
            Move::Rra => reverse_rotate(a),
            Move::Rrb => reverse_rotate(b),
            Move::Rrr => {
                a.len() >= 2 && b.len() >= 2 && reverse_rotate(a) && reverse_rotate(b)
            }
        }
    }

    fn verdict(&self, expected: &[i32]) -> Verdict {
        if self.b.is_empty() && self.a.iter().eq(expected.iter()) {
            Verdict::Ok
        } else {
            Verdict::Ko
        }
    }
}

fn swap(stack: &mut VecDeque<i32>) -> bool {
    if stack.len() < 2 {
        return false;
    }
    stack.swap(0, 1);
    true
}

fn push(from: &mut VecDeque<i32>, to: &mut VecDeque<i32>) -> bool {
    match from.pop_front() {
        Some(v) => {
            to.push_front(v);
            true
        }
        None => false,
    }
}

fn rotate(stack: &mut VecDeque<i32>) -> bool {
    if stack.len() < 2 {
        return false;
    }
    stack.rotate_left(1);
    true
}

fn reverse_rotate(stack: &mut VecDeque<i32>) -> bool {
    if stack.len() < 2 {
        return false;
    }
    stack.rotate_right(1);
    true
}
