// This file is part of advance-store.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for [`Store`](crate::Store).
//!
//! Only the checked container reports errors. [`MiniStore`](crate::MiniStore)
//! never returns them; see its documentation for what happens instead.
//! Errors are `Copy` and implement `core::error::Error`.

// Core imports
use core::{error::Error as CoreError, fmt};

/// Errors returned by operations on [`Store`](crate::Store).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Error {
    /// A position was outside the current bounds, or the operation needs at
    /// least one element and the store was empty.
    OutOfRange,
    /// An argument failed validation.
    ///
    /// Part of the taxonomy; no operation currently produces it.
    InvalidArgument,
    /// A conversion (`to_int`, `to_double`, `to_char`, `to_string`) was
    /// invoked on an empty store.
    RuntimeError,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange => f.write_str("out of range"),
            Self::InvalidArgument => f.write_str("invalid argument"),
            Self::RuntimeError => f.write_str("runtime error"),
        }
    }
}

impl CoreError for Error {}

#[cfg(test)]
mod tests {
    // Imports
    use crate::Error;
    use alloc::string::{String, ToString};
    use core::error::Error as CoreError;

    fn takes_error(e: &dyn CoreError) -> String {
        e.to_string()
    }

    #[test]
    fn test_error_is_core_error() {
        let s = takes_error(&Error::OutOfRange);
        assert!(s.contains("out of range"));
    }

    #[test]
    fn test_display_names_every_kind() {
        assert_eq!(Error::OutOfRange.to_string(), "out of range");
        assert_eq!(Error::InvalidArgument.to_string(), "invalid argument");
        assert_eq!(Error::RuntimeError.to_string(), "runtime error");
    }
}
