// This file is part of advance-store.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Element-level conversions used by [`Store::to_int`](crate::Store::to_int),
//! [`Store::to_double`](crate::Store::to_double) and
//! [`Store::to_char`](crate::Store::to_char).
//!
//! Numeric sources are cast with `as`. Text sources are parsed from their
//! longest numeric prefix, the way C's `strtol`/`strtod` read input:
//!
//! - leading whitespace is skipped;
//! - `" 42abc"` converts to `42`, `"3.5kg"` to `3.5`;
//! - text with no leading number, or a number outside the target range,
//!   converts to `0` / `0.0`. This substitution is silent: it is part of the
//!   conversion contract, not an error.
//!
//! With the `log` feature enabled, each substitution emits a `debug` record.

// Alloc imports
use alloc::{boxed::Box, string::String};

/// Conversion of a single element into the target types of the typed
/// conversion operations.
///
/// Implemented for every primitive integer, `f32`, `f64`, `bool`, `char`,
/// `String`, `Box<str>` and `&str`.
pub trait Convertible {
    /// Converts to `i32`. Never fails; see the module docs for text input.
    fn to_int(&self) -> i32;

    /// Converts to `f64`. Never fails; see the module docs for text input.
    fn to_double(&self) -> f64;

    /// Converts to `char`.
    ///
    /// Numbers are truncated to a byte first (`65` becomes `'A'`). Text yields
    /// its first character, or `'\0'` when empty.
    fn to_char(&self) -> char;
}

macro_rules! impl_convertible_numeric {
    ($($t:ty),* $(,)?) => {
        $(
            impl Convertible for $t {
                #[inline]
                fn to_int(&self) -> i32 {
                    *self as i32
                }

                #[inline]
                fn to_double(&self) -> f64 {
                    *self as f64
                }

                #[inline]
                fn to_char(&self) -> char {
                    char::from(*self as u8)
                }
            }
        )*
    };
}

impl_convertible_numeric!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

impl Convertible for bool {
    #[inline]
    fn to_int(&self) -> i32 {
        i32::from(*self)
    }

    #[inline]
    fn to_double(&self) -> f64 {
        f64::from(u8::from(*self))
    }

    #[inline]
    fn to_char(&self) -> char {
        char::from(u8::from(*self))
    }
}

impl Convertible for char {
    #[inline]
    fn to_int(&self) -> i32 {
        *self as i32
    }

    #[inline]
    fn to_double(&self) -> f64 {
        f64::from(u32::from(*self))
    }

    #[inline]
    fn to_char(&self) -> char {
        *self
    }
}

impl Convertible for str {
    fn to_int(&self) -> i32 {
        parse_int_prefix(self).unwrap_or_else(|| {
            #[cfg(feature = "log")]
            log::debug!("no integer prefix in {:?}, substituting 0", self);
            0
        })
    }

    fn to_double(&self) -> f64 {
        parse_double_prefix(self).unwrap_or_else(|| {
            #[cfg(feature = "log")]
            log::debug!("no floating-point prefix in {:?}, substituting 0.0", self);
            0.0
        })
    }

    #[inline]
    fn to_char(&self) -> char {
        self.chars().next().unwrap_or('\0')
    }
}

impl Convertible for String {
    #[inline]
    fn to_int(&self) -> i32 {
        self.as_str().to_int()
    }

    #[inline]
    fn to_double(&self) -> f64 {
        self.as_str().to_double()
    }

    #[inline]
    fn to_char(&self) -> char {
        self.as_str().to_char()
    }
}

impl Convertible for Box<str> {
    #[inline]
    fn to_int(&self) -> i32 {
        (**self).to_int()
    }

    #[inline]
    fn to_double(&self) -> f64 {
        (**self).to_double()
    }

    #[inline]
    fn to_char(&self) -> char {
        (**self).to_char()
    }
}

impl<U: Convertible + ?Sized> Convertible for &U {
    #[inline]
    fn to_int(&self) -> i32 {
        (**self).to_int()
    }

    #[inline]
    fn to_double(&self) -> f64 {
        (**self).to_double()
    }

    #[inline]
    fn to_char(&self) -> char {
        (**self).to_char()
    }
}

/// Length in bytes of the leading run of ASCII digits in `bytes`.
fn digit_run(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Length in bytes of an optional leading `+` / `-`.
fn sign_len(bytes: &[u8]) -> usize {
    usize::from(matches!(bytes.first(), Some(b'+' | b'-')))
}

/// Parses the longest leading decimal integer of `text`.
///
/// Returns `None` when there are no digits or the value overflows `i32`.
pub(crate) fn parse_int_prefix(text: &str) -> Option<i32> {
    let s = text.trim_start();
    let bytes = s.as_bytes();
    let sign = sign_len(bytes);
    let digits = digit_run(&bytes[sign..]);
    if digits == 0 {
        return None;
    }
    s[..sign + digits].parse().ok()
}

/// Parses the longest leading floating-point literal of `text`.
///
/// Accepts `[sign] digits [. digits] [e [sign] digits]` with at least one
/// mantissa digit, or `inf` / `infinity` / `nan` in any case. Returns `None`
/// when nothing matches or a finite literal overflows to infinity.
pub(crate) fn parse_double_prefix(text: &str) -> Option<f64> {
    let s = text.trim_start();
    let bytes = s.as_bytes();
    let sign = sign_len(bytes);
    let rest = &bytes[sign..];

    for word in ["infinity", "inf", "nan"] {
        if rest.len() >= word.len() && rest[..word.len()].eq_ignore_ascii_case(word.as_bytes()) {
            return s[..sign + word.len()].parse().ok();
        }
    }

    let int_digits = digit_run(rest);
    let mut end = int_digits;
    let mut frac_digits = 0;
    if rest.get(end) == Some(&b'.') {
        frac_digits = digit_run(&rest[end + 1..]);
        end += 1 + frac_digits;
    }
    if int_digits + frac_digits == 0 {
        return None;
    }
    if matches!(rest.get(end), Some(b'e' | b'E')) {
        let exp_sign = sign_len(&rest[end + 1..]);
        let exp_digits = digit_run(&rest[end + 1 + exp_sign..]);
        if exp_digits > 0 {
            end += 1 + exp_sign + exp_digits;
        }
    }

    let value: f64 = s[..sign + end].parse().ok()?;
    (!value.is_infinite()).then_some(value)
}

#[cfg(test)]
mod tests {
    // Imports
    use super::{parse_double_prefix, parse_int_prefix, Convertible};
    use alloc::string::String;

    #[test]
    fn test_int_prefix_parsing() {
        assert_eq!(parse_int_prefix("12"), Some(12));
        assert_eq!(parse_int_prefix("  -7"), Some(-7));
        assert_eq!(parse_int_prefix("+3"), Some(3));
        assert_eq!(parse_int_prefix("42abc"), Some(42));
        assert_eq!(parse_int_prefix("4.9"), Some(4));
        assert_eq!(parse_int_prefix("abc"), None);
        assert_eq!(parse_int_prefix(""), None);
        assert_eq!(parse_int_prefix("-"), None);
        assert_eq!(parse_int_prefix("99999999999"), None);
    }

    #[test]
    fn test_double_prefix_parsing() {
        assert_eq!(parse_double_prefix("3.5"), Some(3.5));
        assert_eq!(parse_double_prefix(" -0.25rest"), Some(-0.25));
        assert_eq!(parse_double_prefix("1e3"), Some(1000.0));
        assert_eq!(parse_double_prefix("2E-2x"), Some(0.02));
        assert_eq!(parse_double_prefix("5e"), Some(5.0));
        assert_eq!(parse_double_prefix("7."), Some(7.0));
        assert_eq!(parse_double_prefix(".5"), Some(0.5));
        assert_eq!(parse_double_prefix("."), None);
        assert_eq!(parse_double_prefix("abc"), None);
        assert_eq!(parse_double_prefix("1e999"), None);
    }

    #[test]
    fn test_double_prefix_special_words() {
        assert_eq!(parse_double_prefix("inf"), Some(f64::INFINITY));
        assert_eq!(parse_double_prefix("-Infinity"), Some(f64::NEG_INFINITY));
        assert!(parse_double_prefix("NaN").is_some_and(f64::is_nan));
        assert_eq!(parse_double_prefix("info"), Some(f64::INFINITY));
    }

    #[test]
    fn test_multibyte_text_does_not_panic() {
        assert_eq!("é1".to_int(), 0);
        assert_eq!("ñan".to_double(), 0.0);
        assert_eq!("é".to_char(), 'é');
    }

    #[test]
    fn test_text_recovers_to_zero() {
        assert_eq!(String::from("abc").to_int(), 0);
        assert_eq!(String::from("abc").to_double(), 0.0);
        assert_eq!("".to_char(), '\0');
        assert_eq!("xyz".to_char(), 'x');
    }

    #[test]
    fn test_numeric_casts() {
        assert_eq!(3.9_f64.to_int(), 3);
        assert_eq!((-3.9_f32).to_int(), -3);
        assert_eq!(7_u64.to_double(), 7.0);
        assert_eq!(65_i32.to_char(), 'A');
        assert_eq!('A'.to_int(), 65);
        assert_eq!('a'.to_char(), 'a');
        assert_eq!(true.to_int(), 1);
        assert_eq!(false.to_double(), 0.0);
    }
}
