// This file is part of advance-store.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, store::Store};

impl<T> Store<T> {
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

    /// Appends clones of every element of `items`.
    #[inline]
    pub fn push_back_slice(&mut self, items: &[T])
    where
        T: Clone,
    {
        self.data.extend_from_slice(items);
    }

    /// Prepends `value`, shifting every element right. `O(len)`.
    #[inline]
    pub fn push_front(&mut self, value: T) {
        self.data.insert(0, value);
    }

    /// Prepends every item of `items` as one block, keeping its order.
    ///
    /// `[3, 4].push_front_iter([1, 2])` gives `[1, 2, 3, 4]`.
    #[inline]
    pub fn push_front_iter<I: IntoIterator<Item = T>>(&mut self, items: I) {
        self.data.splice(0..0, items);
    }

    /// Prepends clones of every element of `items`, keeping their order.
    #[inline]
    pub fn push_front_slice(&mut self, items: &[T])
    where
        T: Clone,
    {
        self.push_front_iter(items.iter().cloned());
    }

    /// Inserts `value` before `pos`, shifting later elements right.
    ///
    /// `pos == len` appends. Returns [`Error::OutOfRange`] if `pos > len`,
    /// leaving the store unchanged.
    #[inline]
    pub fn insert(&mut self, pos: usize, value: T) -> Result<(), Error> {
        if pos > self.data.len() {
            return Err(Error::OutOfRange);
        }
        self.data.insert(pos, value);
        Ok(())
    }

    /// Moves every element of `other` to the back, leaving `other` empty.
    #[inline]
    pub fn append(&mut self, other: &mut Self) {
        self.data.append(&mut other.data);
    }
}

impl<T> Extend<T> for Store<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.data.extend(iter);
    }
}

impl<'a, T: Copy + 'a> Extend<&'a T> for Store<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.data.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::{Error, Store};
    use alloc::{string::String, vec};

    #[test]
    fn test_push_back_forms() {
        let mut s = Store::new();
        s.push_back(1);
        s.push_back_slice(&[2, 3]);
        s.push_back_iter(vec![4, 5]);
        assert_eq!(s.as_slice(), &[1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_push_front_forms_keep_block_order() {
        let mut s = Store::from([5]);
        s.push_front(4);
        s.push_front_slice(&[2, 3]);
        s.push_front_iter(vec![0, 1]);
        assert_eq!(s.as_slice(), &[0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_push_front_on_empty() {
        let mut s: Store<String> = Store::new();
        s.push_front(String::from("a"));
        s.push_front_iter(core::iter::empty());
        assert_eq!(s.len(), 1);
        assert_eq!(s.front().map(String::as_str), Ok("a"));
    }

    #[test]
    fn test_insert_valid_positions() {
        let mut s = Store::from([1, 3]);
        assert_eq!(s.insert(1, 2), Ok(()));
        assert_eq!(s.insert(0, 0), Ok(()));
        assert_eq!(s.insert(4, 4), Ok(()));
        assert_eq!(s.as_slice(), &[0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_insert_past_len_errors_and_is_noop() {
        let mut s = Store::from([1, 2]);
        assert_eq!(s.insert(3, 9), Err(Error::OutOfRange));
        assert_eq!(s.as_slice(), &[1, 2]);

        let mut empty: Store<i32> = Store::new();
        assert_eq!(empty.insert(1, 9), Err(Error::OutOfRange));
        assert_eq!(empty.insert(0, 9), Ok(()));
        assert_eq!(empty.as_slice(), &[9]);
    }

    #[test]
    fn test_append_and_extend() {
        let mut a = Store::from([1]);
        let mut b = Store::from([2, 3]);
        a.append(&mut b);
        assert!(b.is_empty());

        a.extend([4, 5]);
        a.extend(&[6]);
        assert_eq!(a.as_slice(), &[1, 2, 3, 4, 5, 6]);
    }
}
