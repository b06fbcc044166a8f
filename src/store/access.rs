// This file is part of advance-store.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{cmp, error::Error, store::Store};

impl<T> Store<T> {
    /// Returns the element at `pos`, or [`Error::OutOfRange`] if `pos >= len`.
    #[inline]
    pub fn at(&self, pos: usize) -> Result<&T, Error> {
        self.data.get(pos).ok_or(Error::OutOfRange)
    }

    /// Mutable variant of [`at`](Store::at).
    #[inline]
    pub fn at_mut(&mut self, pos: usize) -> Result<&mut T, Error> {
        self.data.get_mut(pos).ok_or(Error::OutOfRange)
    }

    /// Returns the first element, or [`Error::OutOfRange`] when empty.
    #[inline]
    pub fn front(&self) -> Result<&T, Error> {
        self.data.first().ok_or(Error::OutOfRange)
    }

    /// Returns the element at `len / 2`, or [`Error::OutOfRange`] when empty.
    ///
    /// For an even length this is the upper of the two middle elements.
    #[inline]
    pub fn mid(&self) -> Result<&T, Error> {
        self.data.get(self.data.len() / 2).ok_or(Error::OutOfRange)
    }

    /// Returns the last element, or [`Error::OutOfRange`] when empty.
    #[inline]
    pub fn back(&self) -> Result<&T, Error> {
        self.data.last().ok_or(Error::OutOfRange)
    }

    /// Returns the greatest element, or [`Error::OutOfRange`] when empty.
    ///
    /// On ties the first one in iteration order wins.
    #[inline]
    pub fn max(&self) -> Result<&T, Error>
    where
        T: PartialOrd,
    {
        cmp::first_max(&self.data).ok_or(Error::OutOfRange)
    }

    /// Returns the least element, or [`Error::OutOfRange`] when empty.
    ///
    /// On ties the first one in iteration order wins.
    #[inline]
    pub fn min(&self) -> Result<&T, Error>
    where
        T: PartialOrd,
    {
        cmp::first_min(&self.data).ok_or(Error::OutOfRange)
    }
}
