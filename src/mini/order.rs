// This file is part of advance-store.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{cmp, mini::MiniStore};

// Core imports
use core::cmp::Ordering;

impl<T> MiniStore<T> {
    /// Sorts by natural order, ascending or descending.
    pub fn sort(&mut self, ascending: bool) -> &mut Self
    where
        T: PartialOrd,
    {
        if ascending {
            self.data.sort_by(cmp::natural);
        } else {
            self.data.sort_by(|a, b| cmp::natural(b, a));
        }
        self
    }

    /// Sorts with a caller-supplied comparator.
    pub fn sort_by<F: FnMut(&T, &T) -> Ordering>(&mut self, compare: F) -> &mut Self {
        self.data.sort_by(compare);
        self
    }

    /// Reverses element order in place.
    #[inline]
    pub fn reverse(&mut self) -> &mut Self {
        self.data.reverse();
        self
    }

    /// Collapses runs of equal neighbors. Never sorts.
    ///
    /// Call [`sort`](MiniStore::sort) first for a global deduplication.
    pub fn unique(&mut self) -> &mut Self
    where
        T: PartialEq,
    {
        self.data.dedup();
        self
    }
}
