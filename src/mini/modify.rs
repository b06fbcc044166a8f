// This file is part of advance-store.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::mini::MiniStore;

impl<T> MiniStore<T> {
    /// Appends `value`. Amortized `O(1)`.
    #[inline]
    pub fn push_back(&mut self, value: T) {
        self.data.push(value);
    }

    /// Appends every item of `items`, in order.
    #[inline]
    pub fn push_back_iter<I: IntoIterator<Item = T>>(&mut self, items: I) {
        self.data.extend(items);
    }

    /// Prepends `value`, shifting every element right. `O(len)`.
    #[inline]
    pub fn push_front(&mut self, value: T) {
        self.data.insert(0, value);
    }

    /// Prepends every item of `items` as one block, keeping its order.
    #[inline]
    pub fn push_front_iter<I: IntoIterator<Item = T>>(&mut self, items: I) {
        self.data.splice(0..0, items);
    }

    /// Removes the last element, forwarding [`Vec::pop`](alloc::vec::Vec::pop).
    #[inline]
    pub fn pop_back(&mut self) -> Option<T> {
        self.data.pop()
    }

    /// Removes the first element. No-op on an empty store.
    #[inline]
    pub fn pop_front(&mut self) -> Option<T> {
        if self.data.is_empty() {
            return None;
        }
        Some(self.data.remove(0))
    }

    /// Inserts `value` before `pos`; `pos == len` appends.
    ///
    /// Silently does nothing when `pos > len`.
    #[inline]
    pub fn insert(&mut self, pos: usize, value: T) {
        if pos <= self.data.len() {
            self.data.insert(pos, value);
        }
    }

    /// Removes the element at `pos`.
    ///
    /// Silently does nothing (returns `None`) when `pos >= len`.
    #[inline]
    pub fn remove_at(&mut self, pos: usize) -> Option<T> {
        (pos < self.data.len()).then(|| self.data.remove(pos))
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

    /// Overwrites every element with a clone of `value`.
    pub fn fill(&mut self, value: T) -> &mut Self
    where
        T: Clone,
    {
        self.data.fill(value);
        self
    }
}
