// This file is part of advance-store.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::mini::MiniStore;

impl<T: PartialEq> MiniStore<T> {
    /// Returns `true` if some element equals `value`.
    #[inline]
    pub fn contains(&self, value: &T) -> bool {
        self.data.contains(value)
    }

    /// Returns the position of the first element equal to `value`, or `None`.
    #[inline]
    pub fn find(&self, value: &T) -> Option<usize> {
        self.data.iter().position(|x| x == value)
    }

    /// Number of elements equal to `value`.
    #[inline]
    pub fn count(&self, value: &T) -> usize {
        self.data.iter().filter(|x| *x == value).count()
    }

    /// Returns `true` if at least one element equals `value`.
    #[inline]
    pub fn any_of_value(&self, value: &T) -> bool {
        self.contains(value)
    }

    /// Returns `true` if every element equals `value`. `true` when empty.
    #[inline]
    pub fn all_of_value(&self, value: &T) -> bool {
        self.data.iter().all(|x| x == value)
    }

    /// Returns `true` if no element equals `value`.
    #[inline]
    pub fn none_of_value(&self, value: &T) -> bool {
        !self.contains(value)
    }
}

impl<T> MiniStore<T> {
    /// `false` when empty.
    #[inline]
    pub fn any_of<P: FnMut(&T) -> bool>(&self, pred: P) -> bool {
        self.data.iter().any(pred)
    }

    /// `true` when empty.
    #[inline]
    pub fn all_of<P: FnMut(&T) -> bool>(&self, pred: P) -> bool {
        self.data.iter().all(pred)
    }

    /// `true` when empty.
    #[inline]
    pub fn none_of<P: FnMut(&T) -> bool>(&self, mut pred: P) -> bool {
        !self.data.iter().any(&mut pred)
    }
}
