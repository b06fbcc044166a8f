// This file is part of advance-store.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # `advance-store`
//!
//! A growable sequence container that wraps `Vec<T>` and adds the operations
//! people keep re-writing around it: double-ended insertion, search, sorting,
//! deduplication, filter/transform pipelines and typed conversion.
//!
//! Two container types share one storage model and differ in safety policy:
//!
//! - [`Store<T>`] (**checked**): every position-based or emptiness-sensitive
//!   operation returns [`Result`] with an [`Error`]. Adds the functional
//!   pipeline ([`Store::filter`], [`Store::transform`]), multi-position search
//!   ([`Store::find_all`]) and typed conversion ([`Store::to_int`],
//!   [`Store::to_double`], [`Store::to_char`], [`Store::to_string`]).
//! - [`MiniStore<T>`] (**unchecked**): a smaller API with aggregates
//!   ([`MiniStore::sum`], [`MiniStore::average`]) and no error reporting.
//!   Violated preconditions panic inside the `Vec`/slice primitive, except for
//!   a few documented no-ops. See [`MiniStore`] for the list.
//!
//! The two are deliberately separate types: their observable behavior
//! differs, for instance [`Store::unique`] sorts first by default and
//! [`MiniStore::unique`] never does.
//!
//! ## Error kinds
//!
//! - [`Error::OutOfRange`]: invalid position, or an empty store where one
//!   element is needed (`front`, `back`, `mid`, `max`, `min`, `pop_*`).
//! - [`Error::RuntimeError`]: a typed conversion on an empty store.
//! - [`Error::InvalidArgument`] is reserved.
//!
//! Text-to-number conversion never errors: unparsable elements become `0` /
//! `0.0`. See [`Convertible`].
//!
//! ## Features
//!
//! - `std` (default): enables [`Store::print`] / [`MiniStore::print`].
//!   Without it the crate is `no_std` (it still needs `alloc`).
//! - `serde`: `Serialize` / `Deserialize` for both containers, as plain
//!   sequences.
//! - `log`: emits `debug` records through the `log` facade whenever a text
//!   conversion substitutes a zero.
//!
//! ## Example
//!
//! ```rust
//! use advance_store::{Error, Store};
//!
//! let mut s = Store::from([5, 2, 8, 1, 9, 2, 5]);
//! s.push_front(7);
//! assert_eq!(s.find_all(&5), vec![1, 7]);
//!
//! let mut big = s.filter(|x| *x > 4);
//! big.sort(false).unique(false);
//! assert_eq!(big.as_slice(), &[9, 8, 7, 5]);
//!
//! let words = big.to_string()?;
//! assert_eq!(format!("{}", words.display()), "9 8 7 5");
//!
//! let empty: Store<i32> = Store::new();
//! assert_eq!(empty.front(), Err(Error::OutOfRange));
//! assert_eq!(empty.to_int(), Err(Error::RuntimeError));
//! # Ok::<(), Error>(())
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(not(any(test, feature = "std")), no_std)]

extern crate alloc;

// Modules
mod cmp;
mod convert;
mod display;
mod error;
mod index;
mod iter;
mod mini;
#[cfg(feature = "serde")]
mod serde;
mod store;

// Public exports (crate API surface)
pub use convert::Convertible;
pub use display::Spaced;
pub use error::Error;
pub use mini::MiniStore;
pub use store::Store;
