// This file is part of advance-store.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::store::Store;

impl<T> Store<T> {
    /// Returns a new store with the elements satisfying `pred`, in their
    /// original relative order. `self` is not modified.
    pub fn filter<P: FnMut(&T) -> bool>(&self, mut pred: P) -> Store<T>
    where
        T: Clone,
    {
        self.data.iter().filter(|x| pred(x)).cloned().collect()
    }

    /// Replaces every element `x` with `func(&x)`, in place.
    ///
    /// The element type cannot change; use the `to_*` conversions for that.
    pub fn transform<F: FnMut(&T) -> T>(&mut self, mut func: F) -> &mut Self {
        for x in self.data.iter_mut() {
            *x = func(x);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::Store;
    use alloc::string::String;

    #[test]
    fn test_filter_keeps_order_and_source() {
        let s = Store::from([1, 2, 3, 4, 5]);
        let evens = s.filter(|x| x % 2 == 0);
        assert_eq!(evens.as_slice(), &[2, 4]);
        assert_eq!(evens.len(), 2);
        assert_eq!(s.as_slice(), &[1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_filter_none_and_all() {
        let s = Store::from([1, 2, 3]);
        assert!(s.filter(|_| false).is_empty());
        assert_eq!(s.filter(|_| true), s);
    }

    #[test]
    fn test_transform_in_place() {
        let mut s = Store::from([1, 2, 3]);
        s.transform(|x| x * 10);
        assert_eq!(s.as_slice(), &[10, 20, 30]);

        let mut words: Store<String> = Store::from([String::from("ab"), String::from("c")]);
        words.transform(|w| w.to_uppercase());
        assert_eq!(words.as_slice(), &["AB", "C"]);
    }

    #[test]
    fn test_chained_pipeline_materializes_stages() {
        let s = Store::from([5, 2, 8, 1, 9, 2, 5]);
        let mut stage = s.filter(|x| *x > 2);
        stage.transform(|x| x - 1).sort(true).unique(false);
        assert_eq!(stage.as_slice(), &[4, 7, 8]);
        assert_eq!(s.len(), 7);
    }
}
