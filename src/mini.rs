// This file is part of advance-store.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The unchecked `MiniStore` type and its inherent API.
//!
//! `MiniStore<T>` is the small, unchecked sibling of [`Store`]: the same
//! storage, fewer operations, and no error reporting. Invalid positions and
//! empty-container reads are handed straight to the underlying `Vec`/slice
//! primitive, which panics. This is deliberate and observable; it must not be
//! "fixed" by adding checks.

mod access;
mod aggregate;
mod modify;
mod order;
mod search;

// Crate imports
use crate::store::Store;

// Alloc imports
use alloc::vec::Vec;

// Core imports
use core::{
    borrow::{Borrow, BorrowMut},
    fmt,
    ops::{Deref, DerefMut},
};

/// A growable, ordered sequence with **unchecked** access.
///
/// `MiniStore<T>` offers the core container operations of [`Store`] plus the
/// aggregates [`sum`](MiniStore::sum) and [`average`](MiniStore::average),
/// but performs no bounds or emptiness checks.
///
/// # Unchecked behavior
///
/// The following delegate to the `Vec`/slice primitive and **panic** when
/// their precondition is violated:
///
/// - indexing, [`front`](MiniStore::front), [`back`](MiniStore::back),
///   [`mid`](MiniStore::mid), [`max`](MiniStore::max),
///   [`min`](MiniStore::min) on an empty store or out of bounds.
///
/// The following are documented no-ops instead:
///
/// - [`pop_front`](MiniStore::pop_front) on an empty store;
/// - [`insert`](MiniStore::insert) with `pos > len`;
/// - [`remove_at`](MiniStore::remove_at) with `pos >= len`.
///
/// [`pop_back`](MiniStore::pop_back) forwards `Vec::pop` and returns `None`
/// when empty.
///
/// # Deduplication
///
/// [`unique`](MiniStore::unique) never sorts: only runs of equal neighbors
/// collapse. Sort first for a global deduplication. [`Store::unique`] sorts by
/// default.
///
/// # Examples
///
/// ```rust
/// use advance_store::MiniStore;
///
/// let mut m = MiniStore::from([5, 2, 8, 1, 9, 2, 5]);
/// m.unique();
/// assert_eq!(m.len(), 7);
///
/// m.sort(true).unique();
/// assert_eq!(m.as_slice(), &[1, 2, 5, 8, 9]);
/// assert_eq!(m.find(&8), Some(3));
/// assert_eq!(m.sum(), 25);
/// assert_eq!(m.average(), 5.0);
/// ```
#[derive(Clone, PartialEq, Eq, PartialOrd, Hash)]
pub struct MiniStore<T> {
    pub(crate) data: Vec<T>,
}

impl<T> MiniStore<T> {
    /// Constructs an empty store without allocating.
    #[inline]
    pub const fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Constructs an empty store with room for at least `capacity` elements.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    /// Constructs a store holding `len` default values.
    #[inline]
    pub fn with_len(len: usize) -> Self
    where
        T: Default,
    {
        let mut data = Vec::with_capacity(len);
        data.resize_with(len, T::default);
        Self { data }
    }

    /// Returns the number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the store holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the number of elements the store can hold without reallocating.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Ensures `capacity() >= capacity` (a total, not an increment).
    #[inline]
    pub fn reserve(&mut self, capacity: usize) {
        let additional = capacity.saturating_sub(self.data.len());
        self.data.reserve(additional);
    }

    /// Asks the allocator to drop unused capacity.
    #[inline]
    pub fn shrink_to_fit(&mut self) {
        self.data.shrink_to_fit();
    }

    /// Resizes to `new_len`, dropping trailing elements or appending
    /// default values.
    #[inline]
    pub fn resize(&mut self, new_len: usize)
    where
        T: Default,
    {
        self.data.resize_with(new_len, T::default);
    }

    /// Removes every element. Capacity is retained.
    #[inline]
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Exchanges the contents of two stores in `O(1)`.
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        core::mem::swap(&mut self.data, &mut other.data);
    }

    /// Returns the elements as a shared slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Returns the elements as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Consumes the store and returns the underlying vector.
    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Shorthand for `self.as_slice().iter()`.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Shorthand for `self.as_mut_slice().iter_mut()`.
    #[inline]
    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> {
        self.data.iter_mut()
    }
}

impl<T> Default for MiniStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for MiniStore<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MiniStore")
            .field("len", &self.data.len())
            .field("elements", &self.data.as_slice())
            .finish()
    }
}

impl<T> Deref for MiniStore<T> {
    type Target = [T];
    fn deref(&self) -> &Self::Target {
        &self.data
    }
}
impl<T> DerefMut for MiniStore<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.data
    }
}

impl<T> AsRef<[T]> for MiniStore<T> {
    fn as_ref(&self) -> &[T] {
        &self.data
    }
}
impl<T> AsMut<[T]> for MiniStore<T> {
    fn as_mut(&mut self) -> &mut [T] {
        &mut self.data
    }
}
impl<T> Borrow<[T]> for MiniStore<T> {
    fn borrow(&self) -> &[T] {
        &self.data
    }
}
impl<T> BorrowMut<[T]> for MiniStore<T> {
    fn borrow_mut(&mut self) -> &mut [T] {
        &mut self.data
    }
}

impl<T> From<Vec<T>> for MiniStore<T> {
    fn from(data: Vec<T>) -> Self {
        Self { data }
    }
}

impl<T, const N: usize> From<[T; N]> for MiniStore<T> {
    fn from(items: [T; N]) -> Self {
        Self {
            data: Vec::from(items),
        }
    }
}

impl<T: Clone> From<&[T]> for MiniStore<T> {
    fn from(items: &[T]) -> Self {
        Self {
            data: items.to_vec(),
        }
    }
}

impl<T> From<MiniStore<T>> for Vec<T> {
    fn from(store: MiniStore<T>) -> Self {
        store.data
    }
}

impl<T> From<Store<T>> for MiniStore<T> {
    fn from(store: Store<T>) -> Self {
        Self {
            data: store.into_vec(),
        }
    }
}

impl<T> Extend<T> for MiniStore<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.data.extend(iter);
    }
}
