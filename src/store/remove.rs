// This file is part of advance-store.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, store::Store};

impl<T> Store<T> {
    /// Removes and returns the last element, or [`Error::OutOfRange`] when empty.
    #[inline]
    pub fn pop_back(&mut self) -> Result<T, Error> {
        self.data.pop().ok_or(Error::OutOfRange)
    }

    /// Removes and returns the first element, or [`Error::OutOfRange`] when
    /// empty. `O(len)`.
    #[inline]
    pub fn pop_front(&mut self) -> Result<T, Error> {
        if self.data.is_empty() {
            return Err(Error::OutOfRange);
        }
        Ok(self.data.remove(0))
    }

    /// Removes and returns the element at `pos`, shifting later elements left.
    ///
    /// Returns [`Error::OutOfRange`] if `pos >= len`, leaving the store
    /// unchanged.
    #[inline]
    pub fn remove_at(&mut self, pos: usize) -> Result<T, Error> {
        if pos >= self.data.len() {
            return Err(Error::OutOfRange);
        }
        Ok(self.data.remove(pos))
    }
}
