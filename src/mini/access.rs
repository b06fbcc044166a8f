// This file is part of advance-store.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{cmp, mini::MiniStore};

impl<T> MiniStore<T> {
    /// Returns the first element.
    ///
    /// # Panics
    ///
    /// Panics if the store is empty.
    #[inline]
    pub fn front(&self) -> &T {
        &self.data[0]
    }

    /// Returns the first element mutably.
    ///
    /// # Panics
    ///
    /// Panics if the store is empty.
    #[inline]
    pub fn front_mut(&mut self) -> &mut T {
        &mut self.data[0]
    }

    /// Returns the last element.
    ///
    /// # Panics
    ///
    /// Panics if the store is empty.
    #[inline]
    pub fn back(&self) -> &T {
        let last = self.data.len().wrapping_sub(1);
        &self.data[last]
    }

    /// Returns the last element mutably.
    ///
    /// # Panics
    ///
    /// Panics if the store is empty.
    #[inline]
    pub fn back_mut(&mut self) -> &mut T {
        let last = self.data.len().wrapping_sub(1);
        &mut self.data[last]
    }

    /// Returns the element at `len / 2`.
    ///
    /// # Panics
    ///
    /// Panics if the store is empty.
    #[inline]
    pub fn mid(&self) -> &T {
        &self.data[self.data.len() / 2]
    }

    /// Returns the first greatest element.
    ///
    /// # Panics
    ///
    /// Panics if the store is empty.
    pub fn max(&self) -> &T
    where
        T: PartialOrd,
    {
        match cmp::first_max(&self.data) {
            Some(x) => x,
            None => &self.data[0],
        }
    }

    /// Returns the first least element.
    ///
    /// # Panics
    ///
    /// Panics if the store is empty.
    pub fn min(&self) -> &T
    where
        T: PartialOrd,
    {
        match cmp::first_min(&self.data) {
            Some(x) => x,
            None => &self.data[0],
        }
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::MiniStore;

    #[test]
    fn test_front_mid_back() {
        let mut m = MiniStore::from([1, 2, 3, 4, 5]);
        assert_eq!(*m.front(), 1);
        assert_eq!(*m.mid(), 3);
        assert_eq!(*m.back(), 5);

        *m.front_mut() = 10;
        *m.back_mut() = 50;
        assert_eq!(m.as_slice(), &[10, 2, 3, 4, 50]);
    }

    #[test]
    fn test_max_min() {
        let m = MiniStore::from([5, 2, 8, 1, 9, 2, 5]);
        assert_eq!(*m.max(), 9);
        assert_eq!(*m.min(), 1);
        assert!(core::ptr::eq(m.min(), &m[3]));
    }

    #[test]
    #[should_panic]
    fn test_front_on_empty_panics() {
        let m: MiniStore<i32> = MiniStore::new();
        let _ = m.front();
    }

    #[test]
    #[should_panic]
    fn test_back_on_empty_panics() {
        let m: MiniStore<i32> = MiniStore::new();
        let _ = m.back();
    }

    #[test]
    #[should_panic]
    fn test_mid_on_empty_panics() {
        let m: MiniStore<i32> = MiniStore::new();
        let _ = m.mid();
    }

    #[test]
    #[should_panic]
    fn test_max_on_empty_panics() {
        let m: MiniStore<i32> = MiniStore::new();
        let _ = m.max();
    }
}
