// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Named inputs with known outcomes.

mod common;

use common::{adjacent_inverse, assert_sorts, random_permutation, zigzag};
use pushswap_search::state::statistics::Counter;
use pushswap_search::{sort_moves, ChunkSorter, Move, MoveSet, SearchConfig};

#[test]
fn test_empty_and_single() {
    assert!(sort_moves(&[]).is_empty());
    assert!(sort_moves(&[1]).is_empty());
    assert!(sort_moves(&[-1]).is_empty());
}

#[test]
fn test_sorted_inputs() {
    for n in 2..=40 {
        let values: Vec<i32> = (1..=n).collect();
        assert!(sort_moves(&values).is_empty(), "n = {}", n);
    }
}

#[test]
fn test_swap_first_pair() {
    assert_eq!(sort_moves(&[2, 1, 3]), vec![Move::Sa]);
}

#[test]
fn test_reversed_three() {
    let moves = sort_moves(&[3, 2, 1]);
    assert_eq!(moves, vec![Move::Sa, Move::Rra]);
    assert_sorts(&[3, 2, 1], &moves);
}

#[test]
fn test_zigzag_twenty() {
    let values = zigzag(20);
    assert_eq!(&values[..4], &[1, 20, 2, 19]);
    let moves = sort_moves(&values);
    assert_sorts(&values, &moves);
    assert_eq!(adjacent_inverse(&moves), None);
}

#[test]
fn test_descending_twenty_by_chunk_size() {
    let values: Vec<i32> = (1..=20).rev().collect();
    for size in [1, 2, 3, 5, 8] {
        let mut sorter = ChunkSorter::with_config(SearchConfig::default().with_max_chunk_size(size));
        let moves = sorter.sort(&values);
        assert_sorts(&values, &moves);
        assert_eq!(
            sorter.context().statistics.get(Counter::ChunksSolved),
            20usize.div_ceil(size) as u64,
            "chunk size {}",
            size
        );
    }
}

#[test]
#[ignore = "slow: one hundred descending values"]
fn test_descending_hundred() {
    let values: Vec<i32> = (1..=100).rev().collect();
    assert_sorts(&values, &sort_moves(&values));
}

#[test]
fn test_move_subsets() {
    let values = [6, 11, 2, 9, 1, 12, 4, 8, 3, 10, 7, 5];
    let configs = [
        SearchConfig::default().with_local_swaps(false),
        SearchConfig::default().with_allowed_moves(MoveSet::SINGLES),
        SearchConfig::default()
            .with_allowed_moves(MoveSet::SINGLES)
            .with_local_swaps(false),
    ];
    for config in configs {
        let mut sorter = ChunkSorter::with_config(config);
        let moves = sorter.sort(&values);
        assert_sorts(&values, &moves);
        if !config.allowed_moves.contains(Move::Rr) {
            assert!(moves.iter().all(|m| !m.is_double()), "{:?}", config);
        }
        if !config.local_swaps {
            assert_eq!(sorter.context().statistics.get(Counter::LocalSwaps), 0);
        }
    }
}

#[test]
fn test_local_swaps_stay_within_singles() {
    let config = SearchConfig::default().with_allowed_moves(MoveSet::SINGLES);
    assert!(config.local_swaps);
    for seed in 0..40 {
        let values = random_permutation(14, seed);
        let mut sorter = ChunkSorter::with_config(config);
        let moves = sorter.sort(&values);
        assert_sorts(&values, &moves);
        assert!(
            moves.iter().all(|&m| MoveSet::SINGLES.contains(m)),
            "seed {}: {:?}",
            seed,
            values
        );
    }
}

#[test]
fn test_statistics_accumulate_across_sorts() {
    let mut sorter = ChunkSorter::new();
    sorter.sort(&[9, 4, 7, 1, 8, 2, 6, 3, 5]);
    let first = sorter.context().statistics.get(Counter::ChunksSolved);
    sorter.sort(&[9, 4, 7, 1, 8, 2, 6, 3, 5]);
    assert_eq!(
        sorter.context().statistics.get(Counter::ChunksSolved),
        2 * first
    );
    assert!(sorter.context().statistics.get(Counter::Expanded) > 0);
}
