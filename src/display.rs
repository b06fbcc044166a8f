// This file is part of advance-store.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Diagnostic rendering: elements separated by single spaces.
//!
//! [`Spaced`] works in `no_std`. With the `std` feature, `print` writes the
//! same rendering to standard output.

// Crate imports
use crate::{mini::MiniStore, store::Store};

// Core imports
use core::fmt;

/// `Display` adapter rendering a sequence as `a b c`.
///
/// Returned by [`Store::display`] and [`MiniStore::display`]. No separator
/// is written after the last element, and nothing at all for an empty
/// sequence.
#[derive(Debug, Clone, Copy)]
pub struct Spaced<'a, T>(&'a [T]);

impl<T: fmt::Display> fmt::Display for Spaced<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut items = self.0.iter();
        if let Some(first) = items.next() {
            write!(f, "{first}")?;
            for item in items {
                write!(f, " {item}")?;
            }
        }
        Ok(())
    }
}

impl<T> Store<T> {
    /// Returns a `Display` adapter rendering the elements space-separated.
    #[inline]
    pub fn display(&self) -> Spaced<'_, T> {
        Spaced(&self.data)
    }

    /// Prints the elements space-separated to standard output, followed by a
    /// newline when `new_line` is `true`.
    #[cfg(feature = "std")]
    pub fn print(&self, new_line: bool)
    where
        T: fmt::Display,
    {
        print_spaced(self.display(), new_line);
    }
}

impl<T> MiniStore<T> {
    /// Returns a `Display` adapter rendering the elements space-separated.
    #[inline]
    pub fn display(&self) -> Spaced<'_, T> {
        Spaced(&self.data)
    }

    /// Prints the elements space-separated to standard output, followed by a
    /// newline when `new_line` is `true`.
    #[cfg(feature = "std")]
    pub fn print(&self, new_line: bool)
    where
        T: fmt::Display,
    {
        print_spaced(self.display(), new_line);
    }
}

#[cfg(feature = "std")]
fn print_spaced<T: fmt::Display>(spaced: Spaced<'_, T>, new_line: bool) {
    if new_line {
        std::println!("{spaced}");
    } else {
        std::print!("{spaced}");
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::{MiniStore, Store};
    use alloc::{format, string::String};

    #[test]
    fn test_space_separated_without_trailing_space() {
        let s = Store::from([1, 2, 3]);
        assert_eq!(format!("{}", s.display()), "1 2 3");
    }

    #[test]
    fn test_single_and_empty() {
        assert_eq!(format!("{}", Store::from(["solo"]).display()), "solo");
        let empty: MiniStore<i32> = MiniStore::new();
        assert_eq!(format!("{}", empty.display()), "");
    }

    #[test]
    fn test_display_uses_element_display() {
        let m = MiniStore::from([String::from("a b"), String::from("c")]);
        assert_eq!(format!("{}", m.display()), "a b c");
        let floats = Store::from([1.5, 2.0]);
        assert_eq!(format!("[{}]", floats.display()), "[1.5 2]");
    }

    #[cfg(feature = "std")]
    #[test]
    fn test_print_does_not_panic() {
        Store::from([1, 2]).print(false);
        MiniStore::from(['x']).print(true);
        Store::<u8>::new().print(true);
    }
}
