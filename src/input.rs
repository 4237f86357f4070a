// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Parsing of the integer list given on the command line.
//!
//! Every argument is split on whitespace, so `push_swap "3 1 2"` and
//! `push_swap 3 1 2` read the same values. The first value read is the top
//! of stack A.

use crate::error::InputError;
use rustc_hash::FxHashSet;
use std::num::IntErrorKind;

/// Parse `args` into distinct `i32` values, in order.
///
/// # Example
///
/// ```
/// use pushswap_search::input::parse_args;
///
/// assert_eq!(parse_args(["3 -1", "2"]), Ok(vec![3, -1, 2]));
/// assert!(parse_args(["1", "1"]).is_err());
/// ```
pub fn parse_args<I, S>(args: I) -> Result<Vec<i32>, InputError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut values = Vec::new();
    let mut seen = FxHashSet::default();
    for arg in args {
        let arg = arg.as_ref();
        if arg.trim().is_empty() {
            return Err(InputError::BlankArgument);
        }
        for token in arg.split_whitespace() {
            let value = parse_value(token)?;
            if !seen.insert(value) {
                return Err(InputError::Duplicate(value));
            }
            values.push(value);
        }
    }
    Ok(values)
}

fn parse_value(token: &str) -> Result<i32, InputError> {
    token.parse::<i32>().map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
            InputError::OutOfRange(token.to_string())
        }
        _ => InputError::NotAnInteger(token.to_string()),
    })
}
