// This file is part of advance-store.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{cmp, store::Store};

// Core imports
use core::cmp::Ordering;

impl<T> Store<T> {
    /// Sorts by natural order, ascending or descending.
    ///
    /// NaN-like values (not comparable with themselves) go last when
    /// ascending and first when descending. The sort happens to be
    /// stable; the contract does not promise it.
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

    /// Removes duplicates.
    ///
    /// Only *consecutive* equal elements collapse. With `auto_sort` the store
    /// is first sorted ascending, which makes the deduplication global;
    /// without it, `[1, 2, 1]` stays `[1, 2, 1]`.
    pub fn unique(&mut self, auto_sort: bool) -> &mut Self
    where
        T: PartialOrd,
    {
        if auto_sort {
            self.sort(true);
        }
        self.data.dedup();
        self
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::Store;
    use alloc::{string::String, vec::Vec};

    const SAMPLE: [i32; 7] = [5, 2, 8, 1, 9, 2, 5];

    #[test]
    fn test_sort_both_directions() {
        let mut s = Store::from(SAMPLE);
        s.sort(true);
        assert_eq!(s.as_slice(), &[1, 2, 2, 5, 5, 8, 9]);
        s.sort(false);
        assert_eq!(s.as_slice(), &[9, 8, 5, 5, 2, 2, 1]);
    }

    #[test]
    fn test_sort_floats() {
        let mut s = Store::from([2.5, -1.0, 0.0]);
        s.sort(true);
        assert_eq!(s.as_slice(), &[-1.0, 0.0, 2.5]);
    }

    #[test]
    fn test_sort_and_unique_with_many_nans() {
        // Long enough to leave the small-slice sort path.
        let values: Vec<f64> = (0..600)
            .map(|i| if i % 3 == 0 { f64::NAN } else { (i % 7) as f64 })
            .collect();
        let mut s = Store::from(values);
        s.sort(true).unique(true);

        assert_eq!(&s[..7], &[0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert_eq!(s.len(), 7 + 200);
        assert!(s[7..].iter().all(|x| x.is_nan()));

        s.sort(false);
        assert!(s[..200].iter().all(|x| x.is_nan()));
        assert_eq!(&s[200..], &[6.0, 5.0, 4.0, 3.0, 2.0, 1.0, 0.0]);
    }

    #[test]
    fn test_sort_by_comparator() {
        let mut s: Store<String> = ["ccc", "a", "bb"].iter().map(|s| String::from(*s)).collect();
        s.sort_by(|a, b| b.len().cmp(&a.len()));
        assert_eq!(s.as_slice(), &["ccc", "bb", "a"]);
    }

    #[test]
    fn test_reverse_and_chaining() {
        let mut s = Store::from([3, 1, 2]);
        s.sort(true).reverse();
        assert_eq!(s.as_slice(), &[3, 2, 1]);
        s.reverse();
        assert_eq!(s.as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn test_unique_auto_sort_dedups_globally() {
        let mut s = Store::from(SAMPLE);
        s.unique(true);
        assert_eq!(s.as_slice(), &[1, 2, 5, 8, 9]);
    }

    #[test]
    fn test_unique_without_sort_only_collapses_runs() {
        let mut s = Store::from(SAMPLE);
        s.unique(false);
        assert_eq!(s.as_slice(), &SAMPLE);

        let mut runs = Store::from([1, 1, 2, 2, 1]);
        runs.unique(false);
        assert_eq!(runs.as_slice(), &[1, 2, 1]);
    }

    #[test]
    fn test_filter_then_sort_pipeline() {
        let s = Store::from(SAMPLE);
        let mut odd = s.filter(|x| x % 2 == 1);
        let sorted: Vec<i32> = odd.sort(false).to_vec();
        assert_eq!(sorted, [9, 5, 5, 1]);
    }
}
