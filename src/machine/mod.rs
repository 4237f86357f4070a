// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The two-stack machine: buffers, moves and chunks.
//!
//! These are the immutable vocabulary and the O(1) primitives that every
//! search state is built from.

pub mod buffer;
pub mod chunk;
pub mod constants;
pub mod moves;

pub use buffer::StackBuffer;
pub use chunk::Chunk;
pub use moves::{Move, MoveSet};
