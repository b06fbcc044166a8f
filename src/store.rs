// This file is part of advance-store.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The checked `Store` type and its inherent API.
//!
//! `Store<T>` wraps a `Vec<T>` and adds double-ended insertion, search,
//! sorting, functional pipelines and typed conversion. Every position-based or
//! emptiness-sensitive operation is checked and reports [`Error`](crate::Error) instead of
//! panicking. The operations live in one submodule per group.

mod access;
mod convert;
mod insert;
mod modify;
mod order;
mod pipeline;
mod remove;
mod search;

// Crate imports
use crate::mini::MiniStore;

// Alloc imports
use alloc::vec::Vec;

// Core imports
use core::{
    borrow::{Borrow, BorrowMut},
    fmt,
    ops::{AddAssign, Deref, DerefMut},
};

/// A growable, ordered sequence with checked access.
///
/// `Store<T>` owns a `Vec<T>` and keeps its semantics: elements are stored in
/// insertion order, duplicates are allowed, and `len() <= capacity()` always
/// holds. On top of that it offers:
///
/// - front insertion and removal ([`push_front`](Store::push_front),
///   [`pop_front`](Store::pop_front)), `O(len)`;
/// - checked access ([`at`](Store::at), [`front`](Store::front),
///   [`mid`](Store::mid), [`back`](Store::back), [`max`](Store::max),
///   [`min`](Store::min)) returning [`Error::OutOfRange`];
/// - search ([`find_all`](Store::find_all), [`count`](Store::count),
///   quantifiers);
/// - reordering ([`sort`](Store::sort), [`reverse`](Store::reverse),
///   [`unique`](Store::unique)), chainable through `&mut Self`;
/// - a functional pipeline ([`filter`](Store::filter),
///   [`transform`](Store::transform));
/// - typed conversion ([`to_int`](Store::to_int),
///   [`to_double`](Store::to_double), [`to_char`](Store::to_char),
///   [`to_string`](Store::to_string)).
///
/// Indexing (`store[i]`) is **not** checked and panics out of bounds, exactly
/// like `Vec`. Use [`at`](Store::at) for a checked read.
///
/// # Moves
///
/// Moving a `Store` moves its buffer. To move out of a place and leave an
/// empty store behind, use [`core::mem::take`].
///
/// # Examples
///
/// ```rust
/// use advance_store::{Error, Store};
///
/// let mut s = Store::from([5, 2, 8, 1, 9, 2, 5]);
/// s.unique(true);
/// assert_eq!(s.as_slice(), &[1, 2, 5, 8, 9]);
///
/// s.push_front(0);
/// assert_eq!(s.front(), Ok(&0));
/// assert_eq!(s.at(42), Err(Error::OutOfRange));
///
/// let evens = s.filter(|x| x % 2 == 0);
/// assert_eq!(evens.as_slice(), &[0, 2, 8]);
/// ```
#[derive(Clone, PartialEq, Eq, PartialOrd, Hash)]
pub struct Store<T> {
    pub(crate) data: Vec<T>,
}

impl<T> Store<T> {
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

    /// Ensures `capacity() >= capacity`, leaving `len()` unchanged.
    ///
    /// Unlike [`Vec::reserve`], the argument is the total capacity wanted,
    /// not the additional room.
    #[inline]
    pub fn reserve(&mut self, capacity: usize) {
        let additional = capacity.saturating_sub(self.data.len());
        self.data.reserve(additional);
    }

    /// Asks the allocator to drop unused capacity. Non-binding.
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

    /// Exchanges the contents of two stores in `O(1)`; no element is moved.
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

    // iterators
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

impl<T> Default for Store<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for Store<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("len", &self.data.len())
            .field("elements", &self.data.as_slice())
            .finish()
    }
}

impl<T> Deref for Store<T> {
    type Target = [T];
    fn deref(&self) -> &Self::Target {
        &self.data
    }
}
impl<T> DerefMut for Store<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.data
    }
}

impl<T> AsRef<[T]> for Store<T> {
    fn as_ref(&self) -> &[T] {
        &self.data
    }
}
impl<T> AsMut<[T]> for Store<T> {
    fn as_mut(&mut self) -> &mut [T] {
        &mut self.data
    }
}

// Borrow ergonomics (treat as a slice)
impl<T> Borrow<[T]> for Store<T> {
    fn borrow(&self) -> &[T] {
        &self.data
    }
}
impl<T> BorrowMut<[T]> for Store<T> {
    fn borrow_mut(&mut self) -> &mut [T] {
        &mut self.data
    }
}

impl<T> From<Vec<T>> for Store<T> {
    fn from(data: Vec<T>) -> Self {
        Self { data }
    }
}

impl<T, const N: usize> From<[T; N]> for Store<T> {
    fn from(items: [T; N]) -> Self {
        Self {
            data: Vec::from(items),
        }
    }
}

impl<T: Clone> From<&[T]> for Store<T> {
    fn from(items: &[T]) -> Self {
        Self {
            data: items.to_vec(),
        }
    }
}

impl<T> From<Store<T>> for Vec<T> {
    fn from(store: Store<T>) -> Self {
        store.data
    }
}

impl<T> From<MiniStore<T>> for Store<T> {
    fn from(mini: MiniStore<T>) -> Self {
        Self {
            data: mini.into_vec(),
        }
    }
}

impl<T> AddAssign for Store<T> {
    /// Moves every element of `other` to the back of `self`.
    fn add_assign(&mut self, mut other: Self) {
        self.append(&mut other);
    }
}
