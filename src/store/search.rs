// This file is part of advance-store.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::store::Store;

// Alloc imports
use alloc::vec::Vec;

impl<T> Store<T> {
    /// Returns `true` if some element equals `value`.
    #[inline]
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.data.contains(value)
    }

    /// Returns every position holding an element equal to `value`, ascending.
    pub fn find_all(&self, value: &T) -> Vec<usize>
    where
        T: PartialEq,
    {
        self.find_all_if(|x| x == value)
    }

    /// Returns every position whose element satisfies `pred`, ascending.
    pub fn find_all_if<P: FnMut(&T) -> bool>(&self, mut pred: P) -> Vec<usize> {
        self.data
            .iter()
            .enumerate()
            .filter_map(|(i, x)| pred(x).then_some(i))
            .collect()
    }

    /// Number of elements equal to `value`.
    #[inline]
    pub fn count(&self, value: &T) -> usize
    where
        T: PartialEq,
    {
        self.count_if(|x| x == value)
    }

    /// Number of elements satisfying `pred`.
    #[inline]
    pub fn count_if<P: FnMut(&T) -> bool>(&self, mut pred: P) -> usize {
        self.data.iter().filter(|x| pred(x)).count()
    }

    /// Returns `true` if at least one element satisfies `pred`. `false` when empty.
    #[inline]
    pub fn any_of<P: FnMut(&T) -> bool>(&self, pred: P) -> bool {
        self.data.iter().any(pred)
    }

    /// Returns `true` if every element satisfies `pred`. `true` when empty.
    #[inline]
    pub fn all_of<P: FnMut(&T) -> bool>(&self, pred: P) -> bool {
        self.data.iter().all(pred)
    }

    /// Returns `true` if no element satisfies `pred`. `true` when empty.
    #[inline]
    pub fn none_of<P: FnMut(&T) -> bool>(&self, mut pred: P) -> bool {
        !self.data.iter().any(&mut pred)
    }

    /// Returns `true` if at least one element equals `value`.
    #[inline]
    pub fn any_of_value(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.any_of(|x| x == value)
    }

    /// Returns `true` if every element equals `value`.
    #[inline]
    pub fn all_of_value(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.all_of(|x| x == value)
    }

    /// Returns `true` if no element equals `value`.
    #[inline]
    pub fn none_of_value(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.none_of(|x| x == value)
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::Store;
    use alloc::vec;

    #[test]
    fn test_contains_and_count() {
        let s = Store::from([5, 2, 8, 1, 9, 2, 5]);
        assert!(s.contains(&8));
        assert!(!s.contains(&7));
        assert_eq!(s.count(&2), 2);
        assert_eq!(s.count(&7), 0);
        assert_eq!(s.count_if(|x| *x > 4), 4);
    }

    #[test]
    fn test_find_all_ascending() {
        let s = Store::from([5, 2, 8, 1, 9, 2, 5]);
        assert_eq!(s.find_all(&5), vec![0, 6]);
        assert_eq!(s.find_all(&2), vec![1, 5]);
        assert!(s.find_all(&42).is_empty());
        assert_eq!(s.find_all_if(|x| x % 2 == 0), vec![1, 2, 5]);
        assert!(s.find_all_if(|_| false).is_empty());
    }

    #[test]
    fn test_quantifiers() {
        let s = Store::from([2, 4, 6]);
        assert!(s.all_of(|x| x % 2 == 0));
        assert!(s.any_of(|x| *x == 4));
        assert!(s.none_of(|x| *x > 10));
        assert!(s.any_of_value(&6));
        assert!(!s.all_of_value(&6));
        assert!(s.none_of_value(&5));
        assert!(Store::from([3, 3]).all_of_value(&3));
    }

    #[test]
    fn test_quantifiers_on_empty() {
        let s: Store<i32> = Store::new();
        assert!(!s.any_of(|_| true));
        assert!(s.all_of(|_| false));
        assert!(s.none_of(|_| true));
        assert!(!s.any_of_value(&0));
        assert!(s.all_of_value(&0));
        assert!(s.none_of_value(&0));
    }
}
