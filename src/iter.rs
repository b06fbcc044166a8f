// This file is part of advance-store.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Iterator support for [`Store`](crate::Store) and
//! [`MiniStore`](crate::MiniStore).
//!
//! - Owned iteration yields by value through `alloc::vec::IntoIter`, which is
//!   double-ended, exact-size and fused.
//! - `&Store` and `&mut Store` iterate as slices, so `.rev()` gives reverse
//!   iteration and generic slice algorithms apply unchanged.
//! - Collecting (`FromIterator`) is the range constructor.

// Crate imports
use crate::{mini::MiniStore, store::Store};

// Alloc imports
use alloc::vec::{IntoIter, Vec};

impl<T> FromIterator<T> for Store<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Vec::from_iter(iter).into()
    }
}

impl<T> IntoIterator for Store<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;
    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}
impl<'a, T> IntoIterator for &'a Store<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}
impl<'a, T> IntoIterator for &'a mut Store<T> {
    type Item = &'a mut T;
    type IntoIter = core::slice::IterMut<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.data.iter_mut()
    }
}

impl<T> FromIterator<T> for MiniStore<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Vec::from_iter(iter).into()
    }
}

impl<T> IntoIterator for MiniStore<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;
    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}
impl<'a, T> IntoIterator for &'a MiniStore<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}
impl<'a, T> IntoIterator for &'a mut MiniStore<T> {
    type Item = &'a mut T;
    type IntoIter = core::slice::IterMut<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.data.iter_mut()
    }
}
