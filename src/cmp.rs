// This file is part of advance-store.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Natural-order helpers shared by both containers.
//!
//! Element types only need `PartialOrd`, so `f32`/`f64` stores can be sorted.
//! A value that is not comparable with itself (NaN) sorts after every other
//! value, and two such values compare equal. This keeps the order total for
//! floats, which `slice::sort_by` requires.

// Core imports
use core::cmp::Ordering;

/// `true` for values such as NaN that do not even compare with themselves.
#[inline]
fn is_unordered<T: PartialOrd>(x: &T) -> bool {
    x.partial_cmp(x).is_none()
}

/// Total ordering induced by `PartialOrd`, with unordered values last.
#[inline]
pub(crate) fn natural<T: PartialOrd>(a: &T, b: &T) -> Ordering {
    match (is_unordered(a), is_unordered(b)) {
        (false, false) => a.partial_cmp(b).unwrap_or(Ordering::Equal),
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
    }
}

/// The first greatest element in iteration order.
///
/// `Iterator::max` returns the last one on ties, hence the hand-written fold.
pub(crate) fn first_max<T: PartialOrd>(items: &[T]) -> Option<&T> {
    items
        .iter()
        .reduce(|best, x| if natural(x, best) == Ordering::Greater { x } else { best })
}

/// The first least element in iteration order.
pub(crate) fn first_min<T: PartialOrd>(items: &[T]) -> Option<&T> {
    items
        .iter()
        .reduce(|best, x| if natural(x, best) == Ordering::Less { x } else { best })
}
