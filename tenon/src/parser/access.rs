//! Typed accessors over the parsed model.
//!
//! Every accessor resolves `(section, key)` with the same layered
//! lookup (section first, defaults second) and then converts the raw
//! string. Conversion failures are reported as
//! [`Error::InvalidValue`](crate::Error::InvalidValue), distinct from
//! the lookup-miss errors, though most callers collapse both through
//! [`Error::is_unavailable`](crate::Error::is_unavailable).

use num_complex::Complex64;

use super::value::{self, RawValue};
use super::ConfigParser;
use crate::error::{Error, Result};

impl ConfigParser {
    /// Returns the raw string stored for `(section, key)`.
    ///
    /// The value is exactly what followed the `=` separator in the
    /// input; no trimming is applied on the value side.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoSection`] for an unknown section and
    /// [`Error::NoOption`] when the key is in neither the section nor
    /// the defaults bag.
    pub fn get(&self, section: &str, key: &str) -> Result<String> {
        self.lookup(section, key).map(str::to_string)
    }

    /// Returns the value for `(section, key)` parsed as a decimal `i64`.
    ///
    /// # Errors
    ///
    /// Lookup errors as in [`ConfigParser::get`], plus
    /// [`Error::InvalidValue`] if the value is not a decimal integer.
    pub fn get_i64(&self, section: &str, key: &str) -> Result<i64> {
        let raw = self.lookup(section, key)?;
        raw.parse().map_err(|_| {
            Error::invalid_value(section, key, format!("not a decimal integer: {raw:?}"))
        })
    }

    /// Returns the value for `(section, key)` parsed as a boolean.
    ///
    /// Recognized words, case-insensitively: `yes`/`true`/`on` and
    /// `no`/`false`/`off`.
    ///
    /// # Errors
    ///
    /// Lookup errors as in [`ConfigParser::get`], plus
    /// [`Error::InvalidValue`] for an unrecognized word.
    pub fn get_bool(&self, section: &str, key: &str) -> Result<bool> {
        let raw = self.lookup(section, key)?;
        value::bool_word(raw).ok_or_else(|| {
            Error::invalid_value(section, key, format!("not a boolean word: {raw:?}"))
        })
    }

    /// Returns the value for `(section, key)` parsed as an `f64`.
    ///
    /// # Errors
    ///
    /// Lookup errors as in [`ConfigParser::get`], plus
    /// [`Error::InvalidValue`] if the value is not a float literal.
    pub fn get_f64(&self, section: &str, key: &str) -> Result<f64> {
        let raw = self.lookup(section, key)?;
        raw.parse()
            .map_err(|_| Error::invalid_value(section, key, format!("not a float: {raw:?}")))
    }

    /// Returns the value for `(section, key)` parsed as a complex
    /// number of the form `a+bi`, with or without enclosing parentheses.
    ///
    /// # Errors
    ///
    /// Lookup errors as in [`ConfigParser::get`], plus
    /// [`Error::InvalidValue`] if the value is not a complex literal.
    ///
    /// # Examples
    ///
    /// ```
    /// use num_complex::Complex64;
    /// use tenon::ConfigParser;
    ///
    /// let parser: ConfigParser = "[math]\nz = 1+2i\n".parse().unwrap();
    /// assert_eq!(
    ///     parser.get_complex("math", "z").unwrap(),
    ///     Complex64::new(1.0, 2.0)
    /// );
    /// ```
    pub fn get_complex(&self, section: &str, key: &str) -> Result<Complex64> {
        let raw = self.lookup(section, key)?;
        value::complex64(raw).ok_or_else(|| {
            Error::invalid_value(section, key, format!("not a complex literal: {raw:?}"))
        })
    }

    /// Returns the first Unicode scalar value of the raw string for
    /// `(section, key)`.
    ///
    /// # Errors
    ///
    /// Lookup errors as in [`ConfigParser::get`], plus
    /// [`Error::InvalidValue`] for an empty value.
    pub fn get_char(&self, section: &str, key: &str) -> Result<char> {
        let raw = self.lookup(section, key)?;
        raw.chars()
            .next()
            .ok_or_else(|| Error::invalid_value(section, key, "empty value"))
    }

    /// Splits the value for `(section, key)` on commas and parses each
    /// trimmed piece as a `T`.
    ///
    /// Pieces that fail to parse are dropped silently; the remaining
    /// entries keep their input order. `code_points` switches `i32` and
    /// `char` elements to leading-code-point semantics (see
    /// [`RawValue`]).
    ///
    /// # Errors
    ///
    /// Lookup errors as in [`ConfigParser::get`]. Parse failures of
    /// individual pieces are never errors.
    ///
    /// # Examples
    ///
    /// ```
    /// use tenon::ConfigParser;
    ///
    /// let parser: ConfigParser = "[s]\nids = 1, 2, x, 3\n".parse().unwrap();
    /// let ids: Vec<i64> = parser.get_list("s", "ids", false).unwrap();
    /// assert_eq!(ids, vec![1, 2, 3]);
    /// ```
    pub fn get_list<T: RawValue>(
        &self,
        section: &str,
        key: &str,
        code_points: bool,
    ) -> Result<Vec<T>> {
        let raw = self.lookup(section, key)?;
        Ok(raw
            .split(',')
            .map(str::trim)
            .filter_map(|piece| T::parse_piece(piece, code_points))
            .collect())
    }
}
