//! Line-oriented scanning of INI-style text.
//!
//! The scanner classifies each physical line of input as a comment, a
//! section header, an assignment, or noise, and accumulates the results
//! into a [`SectionMap`] plus the defaults [`Section`]. Both input
//! sources — a whole string and a buffered reader — feed the same
//! per-line routine, so classification and line numbering are identical
//! regardless of where the text came from.
//!
//! Grammar, applied to each whitespace-trimmed line:
//!
//! - empty, or first character `#` → ignored;
//! - `[name]` (whole line, non-empty name without brackets) → opens the
//!   named section, or the defaults bag when the name is
//!   [`DEFAULT_SECTION`];
//! - `key = value` → records the trimmed key with the value taken
//!   verbatim after the `=` separator and its surrounding whitespace;
//! - anything else → silently ignored.
//!
//! An assignment before the first section header is a fatal
//! [`Error::MissingSectionHeader`] naming the line.

use std::io::BufRead;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Error, Result};
use crate::model::{Section, SectionMap, DEFAULT_SECTION};

static SECTION_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\[([^\[\]]+)\]$").expect("section header pattern"));

static ASSIGNMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([^=]+?)\s*=\s*(.*)$").expect("assignment pattern"));

/// Which bag receives the next assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Target {
    Defaults,
    Named(String),
}

/// Accumulates sections from a stream of input lines.
///
/// # Examples
///
/// ```
/// use tenon::scan::Scanner;
///
/// let (sections, defaults) = Scanner::scan_str(
///     "[default]\nretries = 3\n[server]\nhost = localhost\n",
/// )
/// .unwrap();
/// assert_eq!(sections["server"].get("host"), Some("localhost"));
/// assert_eq!(defaults.get("retries"), Some("3"));
/// ```
#[derive(Debug)]
pub struct Scanner {
    sections: SectionMap,
    defaults: Section,
    current: Option<Target>,
}

impl Scanner {
    /// Creates a scanner with empty state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            sections: SectionMap::new(),
            defaults: Section::new(DEFAULT_SECTION),
            current: None,
        }
    }

    /// Scans a complete document held in memory.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingSectionHeader`] if an assignment precedes
    /// the first section header.
    pub fn scan_str(text: &str) -> Result<(SectionMap, Section)> {
        let mut scanner = Self::new();
        for (index, raw) in text.lines().enumerate() {
            scanner.feed(index + 1, raw)?;
        }
        Ok(scanner.finish())
    }

    /// Scans a document from a buffered reader, line by line.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if reading fails, or
    /// [`Error::MissingSectionHeader`] if an assignment precedes the
    /// first section header.
    pub fn scan_reader<R: BufRead>(reader: R) -> Result<(SectionMap, Section)> {
        let mut scanner = Self::new();
        for (index, raw) in reader.lines().enumerate() {
            let raw = raw?;
            scanner.feed(index + 1, &raw)?;
        }
        Ok(scanner.finish())
    }

    /// Classifies and records a single physical line.
    ///
    /// `line_no` is the 1-based number of the line in its source; every
    /// physical line counts, including blanks and comments.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingSectionHeader`] for an assignment seen
    /// before any section header.
    pub fn feed(&mut self, line_no: usize, raw: &str) -> Result<()> {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(());
        }

        if let Some(captures) = SECTION_HEADER.captures(line) {
            let name = &captures[1];
            if name == DEFAULT_SECTION {
                self.current = Some(Target::Defaults);
            } else {
                self.sections
                    .entry(name.to_string())
                    .or_insert_with(|| Section::new(name));
                self.current = Some(Target::Named(name.to_string()));
            }
            return Ok(());
        }

        if let Some(captures) = ASSIGNMENT.captures(line) {
            let key = captures[1].trim().to_string();
            let value = captures[2].to_string();
            match &self.current {
                None => {
                    return Err(Error::MissingSectionHeader {
                        line: line_no,
                        text: line.to_string(),
                    });
                }
                Some(Target::Defaults) => self.defaults.add(key, value),
                Some(Target::Named(name)) => {
                    if let Some(section) = self.sections.get_mut(name) {
                        section.add(key, value);
                    }
                }
            }
        }

        // Lines matching neither pattern carry no information.
        Ok(())
    }

    /// Consumes the scanner and returns the accumulated model.
    #[must_use]
    pub fn finish(self) -> (SectionMap, Section) {
        (self.sections, self.defaults)
    }
}

impl Default for Scanner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_basic_document() {
        let (sections, defaults) = Scanner::scan_str(
            "[server]\nhost = localhost\nport = 8080\n",
        )
        .unwrap();

        assert_eq!(sections.len(), 1);
        assert_eq!(sections["server"].get("host"), Some("localhost"));
        assert_eq!(sections["server"].get("port"), Some("8080"));
        assert!(defaults.is_empty());
    }

    #[test]
    fn test_defaults_section_not_in_map() {
        let (sections, defaults) =
            Scanner::scan_str("[default]\nretries = 3\n[server]\nhost = a\n").unwrap();

        assert!(!sections.contains_key("default"));
        assert_eq!(defaults.get("retries"), Some("3"));
        assert_eq!(sections["server"].get("host"), Some("a"));
    }

    #[test]
    fn test_comments_and_blanks_ignored() {
        let text = "\n# leading comment\n[server]\n\n  # indented comment\nhost = a\n\n";
        let (sections, _) = Scanner::scan_str(text).unwrap();
        assert_eq!(sections["server"].len(), 1);
    }

    #[test]
    fn test_value_kept_verbatim_after_separator() {
        let (sections, _) =
            Scanner::scan_str("[s]\nmotd =   hello   world\n").unwrap();
        // The separator's surrounding whitespace is consumed; the rest of
        // the value is untouched.
        assert_eq!(sections["s"].get("motd"), Some("hello   world"));
    }

    #[test]
    fn test_key_is_trimmed() {
        let (sections, _) = Scanner::scan_str("[s]\n  spaced key   = v\n").unwrap();
        assert_eq!(sections["s"].get("spaced key"), Some("v"));
    }

    #[test]
    fn test_assignment_without_spaces() {
        let (sections, _) = Scanner::scan_str("[s]\nkey=value\n").unwrap();
        assert_eq!(sections["s"].get("key"), Some("value"));
    }

    #[test]
    fn test_value_may_contain_separator() {
        let (sections, _) = Scanner::scan_str("[s]\nexpr = a = b\n").unwrap();
        assert_eq!(sections["s"].get("expr"), Some("a = b"));
    }

    #[test]
    fn test_assignment_before_header_is_fatal() {
        let err = Scanner::scan_str("# intro\n\nkey = value\n").unwrap_err();
        match err {
            Error::MissingSectionHeader { line, text } => {
                assert_eq!(line, 3);
                assert_eq!(text, "key = value");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_unclassifiable_lines_ignored() {
        let (sections, _) =
            Scanner::scan_str("[s]\njust some words\n[not a header] extra\nk = v\n")
                .unwrap();
        assert_eq!(sections["s"].len(), 1);
        assert_eq!(sections["s"].get("k"), Some("v"));
    }

    #[test]
    fn test_reopened_section_becomes_current_again() {
        let text = "[a]\nx = 1\n[b]\ny = 2\n[a]\nz = 3\n";
        let (sections, _) = Scanner::scan_str(text).unwrap();

        assert_eq!(sections["a"].get("x"), Some("1"));
        assert_eq!(sections["a"].get("z"), Some("3"));
        assert_eq!(sections["b"].get("y"), Some("2"));
        assert_eq!(sections["b"].len(), 1);
    }

    #[test]
    fn test_reader_and_str_sources_agree() {
        let text = "[default]\nd = 0\n[s]\na = 1\nnoise\n# c\nb = 2\n";
        let from_str = Scanner::scan_str(text).unwrap();
        let from_reader = Scanner::scan_reader(Cursor::new(text)).unwrap();

        assert_eq!(from_str.0, from_reader.0);
        assert_eq!(from_str.1, from_reader.1);
    }

    #[test]
    fn test_reader_reports_same_line_numbers() {
        let text = "\n\nkey = value\n";
        let err = Scanner::scan_reader(Cursor::new(text)).unwrap_err();
        match err {
            Error::MissingSectionHeader { line, .. } => assert_eq!(line, 3),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_crlf_input() {
        let (sections, _) = Scanner::scan_str("[s]\r\nkey = value\r\n").unwrap();
        assert_eq!(sections["s"].get("key"), Some("value"));
    }

    #[test]
    fn test_empty_brackets_not_a_header() {
        // "[]" opens nothing; a later assignment still has no section.
        let err = Scanner::scan_str("[]\nk = v\n").unwrap_err();
        assert!(matches!(err, Error::MissingSectionHeader { line: 2, .. }));
    }
}
