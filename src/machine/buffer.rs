// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Fixed-capacity circular buffer backing one stack of the machine.
//!
//! Logical position 0 is the top of the stack. Every mutating operation is
//! O(1): swaps exchange two slots, rotations move the head offset and copy
//! one value, and a push moves one value between the heads of two buffers.
//!
//! Operations whose preconditions fail (too few values, full destination)
//! return `false` and leave both buffers untouched.
//!
//! # Example
//!
//! ```
//! use pushswap_search::machine::StackBuffer;
//!
//! let mut a = StackBuffer::from_slice(3, &[3, 1, 2]);
//! let mut b = StackBuffer::with_capacity(3);
//!
//! assert!(a.rotate());
//! assert_eq!(a.to_vec(), vec![1, 2, 3]);
//! assert!(a.push(&mut b));
//! assert_eq!((a.to_vec(), b.to_vec()), (vec![2, 3], vec![1]));
//! assert!(!b.swap()); // needs two values
//! ```

use rustc_hash::FxHasher;
use std::cell::Cell;
use std::fmt;
use std::hash::{Hash, Hasher};

/// One stack of the two-stack machine.
///
/// Capacity is fixed at construction and equals the total number of values
/// in the problem, so either stack can hold everything.
///
/// The maximum is tracked incrementally: pushes onto the buffer update it in
/// place, and removing the current maximum marks it dirty so the next query
/// rescans.
#[derive(Clone)]
pub struct StackBuffer {
    slots: Box<[i32]>,
    head: usize,
    len: usize,
    max: Cell<Option<i32>>,
    max_dirty: Cell<bool>,
}

impl StackBuffer {
    /// Create an empty buffer.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: vec![0; capacity].into_boxed_slice(),
            head: 0,
            len: 0,
            max: Cell::new(None),
            max_dirty: Cell::new(false),
        }
    }

    /// Create a buffer holding `values`, top of stack first.
    ///
    /// # Panics
    ///
    /// Panics if `values` does not fit in `capacity`.
    pub fn from_slice(capacity: usize, values: &[i32]) -> Self {
        assert!(
            values.len() <= capacity,
            "List size {} exceeds buffer capacity {}",
            values.len(),
            capacity
        );
        let mut slots = vec![0; capacity].into_boxed_slice();
        slots[..values.len()].copy_from_slice(values);
        Self {
            slots,
            head: 0,
            len: values.len(),
            max: Cell::new(values.iter().copied().max()),
            max_dirty: Cell::new(false),
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == self.slots.len()
    }

    #[inline]
    fn slot(&self, i: usize) -> usize {
        (self.head + i) % self.slots.len()
    }

    /// Value at logical position `i` (0 is the top).
    #[inline]
    pub fn get(&self, i: usize) -> Option<i32> {
        (i < self.len).then(|| self.slots[self.slot(i)])
    }

    /// Top of the stack.
    pub fn peek(&self) -> Option<i32> {
        self.get(0)
    }

    /// Bottom of the stack.
    pub fn last(&self) -> Option<i32> {
        self.len.checked_sub(1).and_then(|i| self.get(i))
    }

    /// Exchange the top two values.
    pub fn swap(&mut self) -> bool {
        if self.len < 2 {
            return false;
        }
        let (i, j) = (self.slot(0), self.slot(1));
        self.slots.swap(i, j);
        true
    }

    /// Move the top value to the bottom.
    pub fn rotate(&mut self) -> bool {
        if self.len < 2 {
            return false;
        }
        let top = self.slots[self.head];
        let tail = self.slot(self.len);
        self.slots[tail] = top;
        self.head = self.slot(1);
        true
    }

    /// Move the bottom value to the top.
    pub fn reverse_rotate(&mut self) -> bool {
        if self.len < 2 {
            return false;
        }
        let capacity = self.slots.len();
        let bottom = self.slots[self.slot(self.len - 1)];
        self.head = (self.head + capacity - 1) % capacity;
        self.slots[self.head] = bottom;
        true
    }

    /// Remove the top value of this buffer and place it on top of `dest`.
    ///
    /// Fails if this buffer is empty or `dest` is full.
    pub fn push(&mut self, dest: &mut StackBuffer) -> bool {
        if self.is_empty() || dest.is_full() {
            return false;
        }
        let value = self.slots[self.head];
        self.head = self.slot(1);
        self.len -= 1;
        if self.len == 0 {
            self.max.set(None);
            self.max_dirty.set(false);
        } else if self.max.get() == Some(value) {
            self.max_dirty.set(true);
        }

        let capacity = dest.slots.len();
        dest.head = (dest.head + capacity - 1) % capacity;
        dest.slots[dest.head] = value;
        dest.len += 1;
        if !dest.max_dirty.get() {
            dest.max.set(Some(dest.max.get().map_or(value, |m| m.max(value))));
        }
        true
    }

    /// Largest value in the buffer.
    pub fn max(&self) -> Option<i32> {
        if self.max_dirty.get() {
            self.max.set(self.iter().max());
            self.max_dirty.set(false);
        }
        self.max.get()
    }

    pub fn contains(&self, value: i32) -> bool {
        self.iter().any(|v| v == value)
    }

    /// Logical position of `value`, if present.
    pub fn index_of(&self, value: i32) -> Option<usize> {
        self.iter().position(|v| v == value)
    }

    /// Values from top to bottom.
    pub fn iter(&self) -> impl Iterator<Item = i32> + '_ {
        (0..self.len).map(move |i| self.slots[self.slot(i)])
    }

    /// All values in cyclic order, starting at logical position `start`.
    pub fn cyclic_iter(&self, start: usize) -> impl Iterator<Item = i32> + '_ {
        (0..self.len).map(move |i| self.slots[self.slot((start + i) % self.len)])
    }

    pub fn to_vec(&self) -> Vec<i32> {
        self.iter().collect()
    }

    /// Hash of the logical contents, for memo keys.
    pub fn fingerprint(&self) -> u64 {
        let mut hasher = FxHasher::default();
        self.hash(&mut hasher);
        hasher.finish()
    }

    /// Overwrite logical position `i`. Test-only escape hatch.
    ///
    /// # Panics
    ///
    /// Panics if `i` is out of bounds.
    #[cfg(test)]
    pub(crate) fn set(&mut self, i: usize, value: i32) {
        assert!(i < self.len, "Index {} out of bounds (size={})", i, self.len);
        let slot = self.slot(i);
        self.slots[slot] = value;
        self.max_dirty.set(true);
    }
}

impl PartialEq for StackBuffer {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl Eq for StackBuffer {}

impl Hash for StackBuffer {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len);
        for v in self.iter() {
            state.write_i32(v);
        }
    }
}

impl fmt::Debug for StackBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
