//! Error types for the tenon library.
//!
//! This module provides the error hierarchy for parsing and lookups,
//! using `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Result type alias for operations that may fail with a tenon error.
///
/// # Examples
///
/// ```
/// use tenon::{Error, Result};
///
/// fn example_operation() -> Result<String> {
///     Ok("value".to_string())
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the tenon library.
///
/// Only [`Error::Io`] and [`Error::MissingSectionHeader`] abort a parse;
/// the remaining variants describe per-lookup conditions that binding
/// absorbs locally and that only direct accessor callers observe.
#[derive(Debug, Error)]
pub enum Error {
    /// An I/O error occurred while reading input.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An assignment line appeared before any section header.
    #[error("missing section header at line {line}: {text}")]
    MissingSectionHeader {
        /// The 1-based physical line number of the offending line.
        line: usize,
        /// The offending line, trimmed.
        text: String,
    },

    /// The addressed section does not exist.
    #[error("no section: '{section}'")]
    NoSection {
        /// The section that was addressed.
        section: String,
    },

    /// The addressed option exists in neither the section nor the defaults.
    #[error("no option '{option}' in section: '{section}'")]
    NoOption {
        /// The section that was addressed.
        section: String,
        /// The option that was addressed.
        option: String,
    },

    /// A value was present but could not be converted to the requested type.
    #[error("invalid value for option '{option}' in section '{section}': {reason}")]
    InvalidValue {
        /// The section the value came from.
        section: String,
        /// The option the value came from.
        option: String,
        /// Why the conversion failed.
        reason: String,
    },
}

impl Error {
    pub(crate) fn invalid_value(
        section: &str,
        option: &str,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidValue {
            section: section.to_string(),
            option: option.to_string(),
            reason: reason.into(),
        }
    }

    /// Check if the error is a lookup miss (unknown section or option).
    ///
    /// # Examples
    ///
    /// ```
    /// use tenon::Error;
    ///
    /// let err = Error::NoSection { section: "server".to_string() };
    /// assert!(err.is_lookup_miss());
    /// ```
    #[must_use]
    pub fn is_lookup_miss(&self) -> bool {
        matches!(self, Self::NoSection { .. } | Self::NoOption { .. })
    }

    /// Check if the error is a conversion failure on a present value.
    #[must_use]
    pub fn is_invalid_value(&self) -> bool {
        matches!(self, Self::InvalidValue { .. })
    }

    /// Check if the error means "value unavailable" for defaulting purposes.
    ///
    /// Lookup misses and conversion failures are treated identically by
    /// callers that fall back to a default.
    ///
    /// # Examples
    ///
    /// ```
    /// use tenon::Error;
    ///
    /// let miss = Error::NoOption {
    ///     section: "server".to_string(),
    ///     option: "port".to_string(),
    /// };
    /// assert!(miss.is_unavailable());
    /// ```
    #[must_use]
    pub fn is_unavailable(&self) -> bool {
        self.is_lookup_miss() || self.is_invalid_value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_section_header_error() {
        let err = Error::MissingSectionHeader {
            line: 3,
            text: "key = value".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("missing section header"));
        assert!(display.contains("line 3"));
        assert!(display.contains("key = value"));
    }

    #[test]
    fn test_no_section_error() {
        let err = Error::NoSection {
            section: "server".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("no section"));
        assert!(display.contains("server"));
    }

    #[test]
    fn test_no_option_error() {
        let err = Error::NoOption {
            section: "server".to_string(),
            option: "port".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("no option 'port'"));
        assert!(display.contains("section: 'server'"));
    }

    #[test]
    fn test_invalid_value_error() {
        let err = Error::invalid_value("server", "port", "not a valid integer");
        let display = format!("{err}");
        assert!(display.contains("invalid value"));
        assert!(display.contains("port"));
        assert!(display.contains("not a valid integer"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        let display = format!("{err}");
        assert!(display.contains("I/O error"));
    }

    #[test]
    fn test_unavailable_classification() {
        let miss = Error::NoSection {
            section: "a".to_string(),
        };
        let bad = Error::invalid_value("a", "b", "bad");
        let fatal = Error::MissingSectionHeader {
            line: 1,
            text: "x = y".to_string(),
        };

        assert!(miss.is_lookup_miss());
        assert!(!miss.is_invalid_value());
        assert!(miss.is_unavailable());

        assert!(bad.is_invalid_value());
        assert!(!bad.is_lookup_miss());
        assert!(bad.is_unavailable());

        assert!(!fatal.is_unavailable());
    }
}
