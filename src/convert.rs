//! Typed reads of stored values.
//!
//! Values are always stored as raw text. [`FromValue`] is the conversion
//! capability behind [`Document::get_as`](crate::Document::get_as).
//! `String` converts as the identity; integers, floats, and `bool` use
//! locale-neutral parsers that skip surrounding whitespace.
//!
//! Two reading modes exist:
//!
//! - strict ([`convert`]): the whole value must convert.
//! - lossy ([`convert_lossy`]): the longest convertible leading prefix is
//!   used, so `10 # note` reads as `10`. Text with no convertible prefix
//!   yields `T::default()`.
//!
//! `bool` accepts `true`/`false` (any case) and `1`/`0`.

use crate::error::IniError;

/// Convert stored value text into `Self`.
pub trait FromValue: Sized {
    /// Convert the whole of `text`.
    fn from_value(text: &str) -> Result<Self, String>;

    /// Convert the longest leading part of `text` that forms a value.
    fn from_value_prefix(text: &str) -> Option<Self> {
        Self::from_value(text).ok()
    }
}

impl FromValue for String {
    fn from_value(text: &str) -> Result<Self, String> {
        Ok(text.to_string())
    }
}

impl FromValue for bool {
    fn from_value(text: &str) -> Result<Self, String> {
        match text.trim() {
            "1" => Ok(true),
            "0" => Ok(false),
            s if s.eq_ignore_ascii_case("true") => Ok(true),
            s if s.eq_ignore_ascii_case("false") => Ok(false),
            s => Err(format!("expected true, false, 1 or 0, got '{s}'")),
        }
    }

    fn from_value_prefix(text: &str) -> Option<Self> {
        let s = text.trim_start();
        let starts_with = |word: &str| s.get(..word.len()).is_some_and(|p| p.eq_ignore_ascii_case(word));
        if starts_with("true") || s.starts_with('1') {
            Some(true)
        } else if starts_with("false") || s.starts_with('0') {
            Some(false)
        } else {
            None
        }
    }
}

/// Length of an optional sign followed by ASCII digits at the start of `s`.
fn integer_prefix_len(s: &str) -> usize {
    let bytes = s.as_bytes();
    let sign = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let digits = bytes[sign..].iter().take_while(|b| b.is_ascii_digit()).count();
    if digits == 0 { 0 } else { sign + digits }
}

/// Length of the run of characters that can appear in a decimal float.
fn float_candidate_len(s: &str) -> usize {
    s.bytes()
        .take_while(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E'))
        .count()
}

macro_rules! integer_from_value {
    ($($ty:ty),*) => {$(
        impl FromValue for $ty {
            fn from_value(text: &str) -> Result<Self, String> {
                text.trim().parse::<$ty>().map_err(|e| e.to_string())
            }

            fn from_value_prefix(text: &str) -> Option<Self> {
                let s = text.trim_start();
                s[..integer_prefix_len(s)].parse::<$ty>().ok()
            }
        }
    )*};
}

macro_rules! float_from_value {
    ($($ty:ty),*) => {$(
        impl FromValue for $ty {
            fn from_value(text: &str) -> Result<Self, String> {
                text.trim().parse::<$ty>().map_err(|e| e.to_string())
            }

            fn from_value_prefix(text: &str) -> Option<Self> {
                let s = text.trim_start();
                let candidate = &s[..float_candidate_len(s)];
                (1..=candidate.len())
                    .rev()
                    .find_map(|end| candidate[..end].parse::<$ty>().ok())
            }
        }
    )*};
}

integer_from_value!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
float_from_value!(f32, f64);

/// Convert `text`, naming `key` in the error.
pub fn convert<T: FromValue>(key: &str, text: &str) -> Result<T, IniError> {
    T::from_value(text).map_err(|reason| IniError::InvalidValue {
        key: key.into(),
        reason,
    })
}

/// Permissive conversion: the longest convertible prefix wins, and text
/// with none yields `T::default()`.
pub fn convert_lossy<T: FromValue + Default>(key: &str, text: &str) -> T {
    match T::from_value_prefix(text) {
        Some(v) => v,
        None => {
            log::warn!("value of '{key}' is not convertible ('{text}'), using default");
            T::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_is_identity() {
        let s: String = convert("name", "  spaced value ; ").unwrap();
        assert_eq!(s, "  spaced value ; ");
        assert_eq!(convert_lossy::<String>("name", " x # y"), " x # y");
    }

    #[test]
    fn parses_numbers_and_bools() {
        assert_eq!(convert::<u16>("port", "8080").unwrap(), 8080);
        assert_eq!(convert::<i64>("delta", "-3").unwrap(), -3);
        assert_eq!(convert::<f64>("ratio", "0.25").unwrap(), 0.25);
        assert_eq!(convert::<u16>("port", " 8080 ").unwrap(), 8080);
        assert!(convert::<bool>("debug", "true").unwrap());
    }

    #[test]
    fn bool_accepts_digits() {
        assert!(convert::<bool>("debug", "1").unwrap());
        assert!(!convert::<bool>("debug", "0").unwrap());
        assert!(convert::<bool>("debug", "TRUE").unwrap());
        assert!(convert::<bool>("debug", "yes").is_err());
    }

    #[test]
    fn malformed_reports_key() {
        let err = convert::<u16>("port", "eighty").unwrap_err();
        match err {
            IniError::InvalidValue { key, .. } => assert_eq!(key, "port"),
            other => panic!("Expected InvalidValue, got {other:?}"),
        }
    }

    #[test]
    fn strict_rejects_trailing_text() {
        assert!(convert::<i32>("n", "10 # note").is_err());
    }

    #[test]
    fn lossy_reads_leading_number() {
        assert_eq!(convert_lossy::<i32>("n", "10 # note"), 10);
        assert_eq!(convert_lossy::<i32>("n", "  -7px"), -7);
        assert_eq!(convert_lossy::<f64>("ratio", "2.5e1 units"), 25.0);
        assert_eq!(convert_lossy::<f64>("ratio", "3.5."), 3.5);
        assert!(convert_lossy::<bool>("debug", "1 # on"));
        assert!(!convert_lossy::<bool>("debug", "false, for now"));
    }

    #[test]
    fn lossy_falls_back_to_default() {
        assert_eq!(convert_lossy::<u32>("port", "eighty"), 0);
        assert_eq!(convert_lossy::<u32>("port", "81"), 81);
        assert_eq!(convert_lossy::<u32>("port", "-"), 0);
        assert_eq!(convert_lossy::<f32>("ratio", "."), 0.0);
        assert!(!convert_lossy::<bool>("debug", "yes"));
    }
}
