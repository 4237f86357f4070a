// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Sorting integers on two stacks with a best-first search.
//!
//! The machine has two stacks, A and B, and eleven moves (`sa`, `sb`, `ss`,
//! `pa`, `pb`, `ra`, `rb`, `rr`, `rra`, `rrb`, `rrr`). Given distinct
//! integers on A, the sorter returns a move list that leaves them ascending
//! on A, smallest on top, with B empty.
//!
//! # Architecture
//!
//! Searching the whole input at once is hopeless, so the sorted values are
//! cut into small chunks and each chunk gets its own A* search:
//!
//! - [`machine`]: the stack buffers, the move vocabulary and chunks
//! - [`history`]: move lists packed four bits per move
//! - [`state`]: one search node, plus search statistics
//! - [`estimator`]: the cost estimate guiding the search
//! - [`engine`]: the priority queue, successor generation and search loop
//! - [`solver`]: the chunk orchestrator and the direct solver for tiny inputs
//!
//! Around the core, [`input`] parses command-line integers and [`verifier`]
//! replays a move list independently, for the `push_swap` and `checker`
//! binaries.
//!
//! # Example
//!
//! ```
//! use pushswap_search::solver::sort_moves;
//! use pushswap_search::verifier::{verify, Verdict};
//!
//! let values = [5, 9, 1, 7, 3, 8, 2, 6, 4];
//! let moves = sort_moves(&values);
//! let sorted: Vec<i32> = (1..=9).collect();
//! assert_eq!(verify(&moves, &values, &sorted), Ok(Verdict::Ok));
//! ```

pub mod context;
pub mod engine;
pub mod error;
pub mod estimator;
pub mod history;
pub mod input;
pub mod machine;
pub mod solver;
pub mod state;
pub mod verifier;

// Re-export commonly used types
pub use context::{SearchConfig, SearchContext};
pub use engine::SearchEngine;
pub use machine::{Move, MoveSet};
pub use solver::{sort_moves, ChunkSorter};
pub use verifier::Verdict;
