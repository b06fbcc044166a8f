// This file is part of advance-store.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `serde` support for [`Store`](crate::Store) and
//! [`MiniStore`](crate::MiniStore).
//!
//! - **Serialize**: as a sequence of `len` elements.
//! - **Deserialize**: from any sequence, of any length.
//!
//! Both containers use the same representation, so data written by one
//! variant reads back into the other.

// Crate imports
use crate::{mini::MiniStore, store::Store};

// Alloc imports
use alloc::vec::Vec;

// Core imports
use core::{fmt, marker::PhantomData};

// External imports - serde
use serde::{de, ser, Deserialize, Deserializer, Serialize, Serializer};

/// Upper bound on the up-front reservation taken from a `size_hint`, so a
/// hostile length prefix cannot force a huge allocation.
const MAX_PREALLOC: usize = 4096;

fn serialize_elements<T: Serialize, S: Serializer>(items: &[T], s: S) -> Result<S::Ok, S::Error> {
    use ser::SerializeSeq;
    let mut seq = s.serialize_seq(Some(items.len()))?;
    for item in items {
        seq.serialize_element(item)?;
    }
    seq.end()
}

impl<T: Serialize> Serialize for Store<T> {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        serialize_elements(self.as_slice(), s)
    }
}

impl<T: Serialize> Serialize for MiniStore<T> {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        serialize_elements(self.as_slice(), s)
    }
}

/// Visitor shared by both containers; `C` is the container being built.
struct SeqVisitor<T, C>(PhantomData<(T, C)>);

impl<'de, T, C> de::Visitor<'de> for SeqVisitor<T, C>
where
    T: Deserialize<'de>,
    C: From<Vec<T>>,
{
    type Value = C;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a sequence of store elements")
    }

    fn visit_seq<A: de::SeqAccess<'de>>(self, mut a: A) -> Result<Self::Value, A::Error> {
        let hint = a.size_hint().unwrap_or(0).min(MAX_PREALLOC);
        let mut out = Vec::with_capacity(hint);
        while let Some(elem) = a.next_element::<T>()? {
            out.push(elem);
        }
        Ok(C::from(out))
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Store<T> {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        d.deserialize_seq(SeqVisitor::<T, Self>(PhantomData))
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for MiniStore<T> {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        d.deserialize_seq(SeqVisitor::<T, Self>(PhantomData))
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::{MiniStore, Store};
    use alloc::string::{String, ToString};

    #[test]
    fn test_serde_roundtrip_json() {
        let s = Store::from([1, 2, 3]);
        let json = serde_json::to_string(&s).unwrap();
        assert_eq!(json, "[1,2,3]");
        let back: Store<i32> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, s);
    }

    #[test]
    fn test_serde_roundtrip_empty_json() {
        let s: MiniStore<String> = MiniStore::new();
        let json = serde_json::to_string(&s).unwrap();
        assert_eq!(json, "[]");
        let back: MiniStore<String> = serde_json::from_str(&json).unwrap();
        assert!(back.is_empty());
    }

    #[test]
    fn test_variants_share_representation() {
        let mini = MiniStore::from(["a".to_string(), "b".to_string()]);
        let json = serde_json::to_string(&mini).unwrap();
        let full: Store<String> = serde_json::from_str(&json).unwrap();
        assert_eq!(full.as_slice(), &["a", "b"]);
    }

    #[test]
    fn test_visitor_expecting_message() {
        let err = serde_json::from_str::<Store<i32>>(r#"{"not":"a sequence"}"#).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("a sequence of store elements"), "unexpected error message: {msg}");
    }

    #[test]
    fn test_element_errors_propagate() {
        assert!(serde_json::from_str::<Store<u8>>("[1, 300]").is_err());
    }
}
