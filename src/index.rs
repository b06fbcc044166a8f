// This file is part of advance-store.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Unchecked indexing for [`Store`](crate::Store) and
//! [`MiniStore`](crate::MiniStore).
//!
//! `Index` and `IndexMut` forward to the slice, so they:
//! - accept a position or any standard range form;
//! - **panic** on out-of-bounds or inverted ranges, exactly like `Vec`.
//!
//! This is the unchecked access path of both variants. Callers that need a
//! recoverable failure use [`Store::at`](crate::Store::at) instead.

// Crate imports
use crate::{mini::MiniStore, store::Store};

// Core imports
use core::{
    ops::{Index, IndexMut},
    slice::SliceIndex,
};

impl<T, I: SliceIndex<[T]>> Index<I> for Store<T> {
    type Output = I::Output;
    fn index(&self, index: I) -> &Self::Output {
        &self.data[index]
    }
}
impl<T, I: SliceIndex<[T]>> IndexMut<I> for Store<T> {
    fn index_mut(&mut self, index: I) -> &mut Self::Output {
        &mut self.data[index]
    }
}

impl<T, I: SliceIndex<[T]>> Index<I> for MiniStore<T> {
    type Output = I::Output;
    fn index(&self, index: I) -> &Self::Output {
        &self.data[index]
    }
}
impl<T, I: SliceIndex<[T]>> IndexMut<I> for MiniStore<T> {
    fn index_mut(&mut self, index: I) -> &mut Self::Output {
        &mut self.data[index]
    }
}
