//! Per-field resolution policy.
//!
//! One function, one match over [`Slot`]. The rules preserve a
//! deliberate asymmetry: a successfully fetched zero is data and is
//! assigned, while a default literal only contributes when it parses —
//! an absent or malformed default leaves the field at its prior value.

use super::field::Field;
use super::slot::Slot;
use crate::parser::value::bool_word;
use crate::parser::ConfigParser;

pub(crate) fn resolve(parser: &ConfigParser, field: Field<'_>) {
    let Field {
        section,
        key,
        default,
        code_points,
        slot,
    } = field;
    apply(parser, section, key, default, code_points, slot);
}

fn apply(
    parser: &ConfigParser,
    section: &str,
    key: &str,
    default: Option<&str>,
    code_points: bool,
    slot: Slot<'_>,
) {
    match slot {
        // Resolve the wrapper to its contained kind, then run the
        // ordinary scalar rule against the allocated value.
        Slot::Optional(optional) => {
            apply(parser, section, key, default, code_points, optional.materialize());
        }

        Slot::Str(dest) => match parser.get(section, key) {
            Ok(value) => *dest = value,
            Err(_) => {
                if let Some(literal) = default {
                    if !literal.is_empty() {
                        *dest = literal.to_string();
                    }
                }
            }
        },

        Slot::Int(dest) => {
            if code_points {
                // Code-point mode: a zero code point means absent.
                if let Ok(c) = parser.get_char(section, key) {
                    if c != '\0' {
                        dest.store(i64::from(u32::from(c)));
                    }
                }
            } else {
                match parser.get_i64(section, key) {
                    Ok(value) => dest.store(value),
                    Err(_) => {
                        if let Some(value) = default.and_then(|d| d.parse::<i64>().ok()) {
                            dest.store(value);
                        }
                    }
                }
            }
        }

        Slot::Uint(dest) => match parser.get_i64(section, key) {
            #[allow(clippy::cast_sign_loss)]
            Ok(value) => dest.store(value as u64),
            Err(_) => {
                if let Some(value) = default.and_then(|d| d.parse::<u64>().ok()) {
                    dest.store(value);
                }
            }
        },

        Slot::Float(dest) => match parser.get_f64(section, key) {
            Ok(value) => dest.store(value),
            Err(_) => {
                if let Some(value) = default.and_then(|d| d.parse::<f64>().ok()) {
                    dest.store(value);
                }
            }
        },

        Slot::Complex(dest) => match parser.get_complex(section, key) {
            Ok(value) => dest.store(value),
            Err(_) => {
                if let Some(value) =
                    default.and_then(crate::parser::value::complex64)
                {
                    dest.store(value);
                }
            }
        },

        Slot::Bool(dest) => match parser.get_bool(section, key) {
            Ok(value) => *dest = value,
            Err(_) => {
                if let Some(value) = default.and_then(bool_word) {
                    *dest = value;
                }
            }
        },

        Slot::Char(dest) => {
            // Same rule as code-point integers; the default literal is
            // not consulted.
            if let Ok(c) = parser.get_char(section, key) {
                if c != '\0' {
                    *dest = c;
                }
            }
        }

        Slot::List(dest) => {
            // Lists have no default fallback; an empty or failed parse
            // leaves the field untouched.
            let _ = dest.fill_from(parser, section, key, code_points);
        }
    }
}
