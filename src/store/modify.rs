// This file is part of advance-store.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, store::Store};

impl<T> Store<T> {
    /// Overwrites the element at `pos` and returns the previous value.
    ///
    /// Returns [`Error::OutOfRange`] if `pos >= len`.
    #[inline]
    pub fn replace_at(&mut self, pos: usize, value: T) -> Result<T, Error> {
        let slot = self.data.get_mut(pos).ok_or(Error::OutOfRange)?;
        Ok(core::mem::replace(slot, value))
    }

    /// Replaces every element equal to `old` with a clone of `new`.
    pub fn replace_all(&mut self, old: &T, new: T) -> &mut Self
    where
        T: PartialEq + Clone,
    {
        for x in self.data.iter_mut().filter(|x| **x == *old) {
            *x = new.clone();
        }
        self
    }

    /// Overwrites every element with a clone of `value`. Length is unchanged.
    pub fn fill(&mut self, value: T) -> &mut Self
    where
        T: Clone,
    {
        self.data.fill(value);
        self
    }
}
