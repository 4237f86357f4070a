// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use pushswap_search::machine::Move;
use pushswap_search::verifier::{verify, Verdict};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// All permutations of `1..=n`, in lexicographic order.
pub fn permutations(n: usize) -> Vec<Vec<i32>> {
    let count: usize = (1..=n).product();
    (0..count).map(|k| nth_permutation(n, k)).collect()
}

/// The `k`-th permutation of `1..=n` in lexicographic order.
pub fn nth_permutation(n: usize, mut k: usize) -> Vec<i32> {
    let mut pool: Vec<i32> = (1..=n as i32).collect();
    let mut factorial: usize = (1..n).product();
    let mut result = Vec::with_capacity(n);
    for remaining in (1..=n).rev() {
        let index = k / factorial;
        k %= factorial;
        result.push(pool.remove(index));
        if remaining > 1 {
            factorial /= remaining - 1;
        }
    }
    result
}

/// `1..=n` interleaved from both ends: 1, n, 2, n - 1, ...
pub fn zigzag(n: usize) -> Vec<i32> {
    let (mut low, mut high) = (1, n as i32);
    let mut result = Vec::with_capacity(n);
    while low <= high {
        result.push(low);
        if low != high {
            result.push(high);
        }
        low += 1;
        high -= 1;
    }
    result
}

/// A reproducible shuffle of `1..=n`.
pub fn random_permutation(n: usize, seed: u64) -> Vec<i32> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut values: Vec<i32> = (1..=n as i32).collect();
    values.shuffle(&mut rng);
    values
}

/// Replay `moves` with the independent verifier and require a full sort.
pub fn assert_sorts(values: &[i32], moves: &[Move]) {
    let mut expected = values.to_vec();
    expected.sort_unstable();
    assert_eq!(
        verify(moves, values, &expected),
        Ok(Verdict::Ok),
        "moves {:?} do not sort {:?}",
        moves,
        values
    );
}

/// Two consecutive moves undoing each other, if any.
pub fn adjacent_inverse(moves: &[Move]) -> Option<(usize, Move, Move)> {
    moves
        .windows(2)
        .position(|w| w[1] == w[0].inverse())
        .map(|i| (i, moves[i], moves[i + 1]))
}
