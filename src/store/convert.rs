// This file is part of advance-store.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{convert::Convertible, error::Error, store::Store};

// Alloc imports
use alloc::string::{String, ToString};

// Core imports
use core::fmt::Display;

impl<T> Store<T> {
    /// Maps every element into a new store, refusing empty sources.
    fn convert_with<U, F: FnMut(&T) -> U>(&self, f: F) -> Result<Store<U>, Error> {
        if self.data.is_empty() {
            return Err(Error::RuntimeError);
        }
        Ok(self.data.iter().map(f).collect())
    }

    /// Converts every element to `i32`.
    ///
    /// Numbers are cast. Text is parsed from its leading integer; text that
    /// does not start with one becomes `0` instead of failing, so
    /// `["12", "abc", "7"]` gives `[12, 0, 7]`.
    ///
    /// Returns [`Error::RuntimeError`] when the store is empty.
    pub fn to_int(&self) -> Result<Store<i32>, Error>
    where
        T: Convertible,
    {
        self.convert_with(Convertible::to_int)
    }

    /// Converts every element to `f64`.
    ///
    /// Numbers are cast. Text is parsed from its leading floating-point
    /// literal; unparsable text becomes `0.0`.
    ///
    /// Returns [`Error::RuntimeError`] when the store is empty.
    pub fn to_double(&self) -> Result<Store<f64>, Error>
    where
        T: Convertible,
    {
        self.convert_with(Convertible::to_double)
    }

    /// Converts every element to `char`.
    ///
    /// Numbers are truncated to a byte. Text yields its first character, or
    /// `'\0'` when empty.
    ///
    /// Returns [`Error::RuntimeError`] when the store is empty.
    pub fn to_char(&self) -> Result<Store<char>, Error>
    where
        T: Convertible,
    {
        self.convert_with(Convertible::to_char)
    }

    /// Renders every element with its `Display` implementation.
    ///
    /// Returns [`Error::RuntimeError`] when the store is empty.
    pub fn to_string(&self) -> Result<Store<String>, Error>
    where
        T: Display,
    {
        self.convert_with(ToString::to_string)
    }
}
