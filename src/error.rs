// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Errors raised by the command-line layers.
//!
//! The sorter itself never returns an error: impossible moves and invalid
//! estimates prune the search, and broken invariants panic.

use thiserror::Error;

/// Rejected program arguments.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("not an integer: {0:?}")]
    NotAnInteger(String),
    #[error("integer out of range: {0}")]
    OutOfRange(String),
    #[error("duplicate value: {0}")]
    Duplicate(i32),
    #[error("blank argument")]
    BlankArgument,
}

/// Misuse of the verifier, as opposed to a move list that fails to sort.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VerifyError {
    #[error("duplicate value in input: {0}")]
    DuplicateInput(i32),
    #[error("duplicate value in expected result: {0}")]
    DuplicateExpected(i32),
    #[error("input has {input} values but expected result has {expected}")]
    LengthMismatch { input: usize, expected: usize },
    #[error("unknown move: {0:?}")]
    UnknownMove(String),
}
