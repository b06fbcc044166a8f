// This file is part of advance-store.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{convert::Convertible, mini::MiniStore};

// Core imports
use core::iter::Sum;

impl<T> MiniStore<T> {
    /// Sums every element. An empty store sums to the type's zero.
    pub fn sum(&self) -> T
    where
        T: Clone + Sum,
    {
        self.data.iter().cloned().sum()
    }

    /// Arithmetic mean as `f64`, or `0.0` for an empty store.
    ///
    /// The sum is computed in `T` first, so it can overflow for narrow
    /// integer types.
    pub fn average(&self) -> f64
    where
        T: Clone + Sum + Convertible,
    {
        if self.data.is_empty() {
            return 0.0;
        }
        self.sum().to_double() / self.data.len() as f64
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::MiniStore;

    #[test]
    fn test_sum() {
        assert_eq!(MiniStore::from([1, 2, 3, 4]).sum(), 10);
        assert_eq!(MiniStore::from([0.5, 0.25]).sum(), 0.75);
        assert_eq!(MiniStore::<i64>::new().sum(), 0);
    }

    #[test]
    fn test_average() {
        assert_eq!(MiniStore::from([1, 2, 3, 4]).average(), 2.5);
        assert_eq!(MiniStore::from([2.0_f32, 4.0]).average(), 3.0);
        assert_eq!(MiniStore::<u32>::new().average(), 0.0);
    }
}
