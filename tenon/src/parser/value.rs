//! Parsing of raw option values into target types.
//!
//! [`RawValue`] is the single conversion point shared by the list
//! accessor and the binder's list slots: one comma-separated piece in,
//! one parsed element out, `None` for anything unparseable so the caller
//! can drop the entry and keep going.

use num_complex::{Complex32, Complex64};

/// Maps a canonical boolean word to its value.
///
/// Recognized, case-insensitively: `yes`/`true`/`on` and
/// `no`/`false`/`off`. Everything else is unrecognized.
pub(crate) fn bool_word(word: &str) -> Option<bool> {
    match word.to_lowercase().as_str() {
        "yes" | "true" | "on" => Some(true),
        "no" | "false" | "off" => Some(false),
        _ => None,
    }
}

/// Parses a complex literal of the form `a+bi`, with or without
/// enclosing parentheses.
pub(crate) fn complex64(raw: &str) -> Option<Complex64> {
    stripped(raw).parse().ok()
}

pub(crate) fn complex32(raw: &str) -> Option<Complex32> {
    stripped(raw).parse().ok()
}

fn stripped(raw: &str) -> &str {
    raw.strip_prefix('(')
        .and_then(|inner| inner.strip_suffix(')'))
        .unwrap_or(raw)
}

/// A value that can be produced from one piece of a raw option value.
///
/// `code_points` selects code-point semantics where the type supports
/// them: an `i32` piece is then read as its first Unicode scalar value
/// instead of a decimal literal. `char` always reads the first scalar
/// value; every other type ignores the flag.
pub trait RawValue: Sized {
    /// Parses one trimmed piece, or `None` if the piece is unusable.
    fn parse_piece(piece: &str, code_points: bool) -> Option<Self>;
}

impl RawValue for String {
    fn parse_piece(piece: &str, _code_points: bool) -> Option<Self> {
        // String pieces never fail; empty pieces are kept.
        Some(piece.to_string())
    }
}

impl RawValue for bool {
    fn parse_piece(piece: &str, _code_points: bool) -> Option<Self> {
        bool_word(piece)
    }
}

impl RawValue for char {
    fn parse_piece(piece: &str, _code_points: bool) -> Option<Self> {
        piece.chars().next()
    }
}

impl RawValue for i32 {
    fn parse_piece(piece: &str, code_points: bool) -> Option<Self> {
        if code_points {
            piece.chars().next().map(|c| c as i32)
        } else {
            piece.parse().ok()
        }
    }
}

macro_rules! numeric_raw_value {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl RawValue for $ty {
                fn parse_piece(piece: &str, _code_points: bool) -> Option<Self> {
                    piece.parse().ok()
                }
            }
        )+
    };
}

numeric_raw_value!(i8, i16, i64, isize, u8, u16, u32, u64, usize, f32, f64);

impl RawValue for Complex64 {
    fn parse_piece(piece: &str, _code_points: bool) -> Option<Self> {
        complex64(piece)
    }
}

impl RawValue for Complex32 {
    fn parse_piece(piece: &str, _code_points: bool) -> Option<Self> {
        complex32(piece)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bool_word_table() {
        for word in ["yes", "true", "on", "YES", "True", "On"] {
            assert_eq!(bool_word(word), Some(true), "word: {word}");
        }
        for word in ["no", "false", "off", "NO", "False", "Off"] {
            assert_eq!(bool_word(word), Some(false), "word: {word}");
        }
        for word in ["1", "0", "enabled", ""] {
            assert_eq!(bool_word(word), None, "word: {word}");
        }
    }

    #[test]
    fn test_complex_forms() {
        let c = complex64("1+2i").unwrap();
        assert_eq!(c, Complex64::new(1.0, 2.0));

        let c = complex64("(3-4i)").unwrap();
        assert_eq!(c, Complex64::new(3.0, -4.0));

        let c = complex64("5").unwrap();
        assert_eq!(c, Complex64::new(5.0, 0.0));

        assert!(complex64("(1+2i").is_none());
        assert!(complex64("nope").is_none());
    }

    #[test]
    fn test_string_pieces_never_fail() {
        assert_eq!(String::parse_piece("", false), Some(String::new()));
        assert_eq!(String::parse_piece("x", false), Some("x".to_string()));
    }

    #[test]
    fn test_integer_pieces() {
        assert_eq!(i64::parse_piece("42", false), Some(42));
        assert_eq!(i64::parse_piece("-7", false), Some(-7));
        assert_eq!(i64::parse_piece("x", false), None);
        assert_eq!(u16::parse_piece("-1", false), None);
        assert_eq!(i8::parse_piece("300", false), None);
    }

    #[test]
    fn test_i32_code_points() {
        assert_eq!(i32::parse_piece("9", true), Some('9' as i32));
        assert_eq!(i32::parse_piece("abc", true), Some('a' as i32));
        assert_eq!(i32::parse_piece("", true), None);
        assert_eq!(i32::parse_piece("9", false), Some(9));
    }

    #[test]
    fn test_char_pieces() {
        assert_eq!(char::parse_piece("x", false), Some('x'));
        assert_eq!(char::parse_piece("xyz", true), Some('x'));
        assert_eq!(char::parse_piece("", false), None);
    }

    #[test]
    fn test_float_pieces() {
        assert_eq!(f64::parse_piece("1.5", false), Some(1.5));
        assert_eq!(f32::parse_piece("-0.25", false), Some(-0.25));
        assert_eq!(f64::parse_piece("x", false), None);
    }
}
