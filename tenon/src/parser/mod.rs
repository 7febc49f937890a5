//! Typed access over parsed configuration.
//!
//! [`ConfigParser`] owns the section map and the defaults section
//! produced by a scan, and layers typed lookups on top:
//!
//! 1. An empty section name, or the reserved defaults name, addresses
//!    the defaults bag directly.
//! 2. Otherwise the named section is consulted first and the defaults
//!    bag second, so a default value shines through wherever a section
//!    does not override it.
//!
//! Once constructed a parser is read-only; sharing `&ConfigParser`
//! across threads during binding needs no further synchronization.
//!
//! # Examples
//!
//! ```
//! use tenon::ConfigParser;
//!
//! let parser: ConfigParser = "\
//! [default]
//! retries = 3
//! [server]
//! host = localhost
//! "
//! .parse()
//! .unwrap();
//!
//! assert_eq!(parser.get("server", "host").unwrap(), "localhost");
//! // `retries` is not set under [server]; the defaults bag answers.
//! assert_eq!(parser.get_i64("server", "retries").unwrap(), 3);
//! ```

mod access;
pub(crate) mod value;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use value::RawValue;

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::model::{Dict, Section, SectionMap, DEFAULT_SECTION};
use crate::scan::Scanner;

/// A parsed configuration document with layered, typed lookups.
#[derive(Debug, Clone)]
pub struct ConfigParser {
    sections: SectionMap,
    defaults: Section,
}

impl Default for ConfigParser {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigParser {
    /// Creates an empty parser with no sections and no defaults.
    #[must_use]
    pub fn new() -> Self {
        Self {
            sections: SectionMap::new(),
            defaults: Section::new(DEFAULT_SECTION),
        }
    }

    /// Creates an empty parser pre-seeded with default values.
    ///
    /// # Examples
    ///
    /// ```
    /// use tenon::{ConfigParser, Dict};
    ///
    /// let mut defaults = Dict::new();
    /// defaults.insert("retries".to_string(), "3".to_string());
    ///
    /// let parser = ConfigParser::with_defaults(defaults);
    /// assert_eq!(parser.get("", "retries").unwrap(), "3");
    /// ```
    #[must_use]
    pub fn with_defaults(defaults: Dict) -> Self {
        let mut parser = Self::new();
        for (key, value) in defaults {
            parser.defaults.add(key, value);
        }
        parser
    }

    /// Parses the file at `path`.
    ///
    /// The file handle lives only for the duration of this call and is
    /// released on every exit path, including parse errors.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be opened or read, or
    /// [`Error::MissingSectionHeader`] for a structurally invalid
    /// document.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let parsed = Scanner::scan_reader(BufReader::new(file))?;
        let parser = Self::from_parts(parsed);
        log::debug!(
            "parsed {} section(s) from {}",
            parser.sections.len(),
            path.display()
        );
        Ok(parser)
    }

    /// Parses a byte buffer, replacing invalid UTF-8 sequences.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingSectionHeader`] for a structurally
    /// invalid document.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let text = String::from_utf8_lossy(bytes);
        Scanner::scan_str(&text).map(Self::from_parts)
    }

    fn from_parts((sections, defaults): (SectionMap, Section)) -> Self {
        Self { sections, defaults }
    }

    /// Looks up a named section. The defaults section is not addressable
    /// this way; use [`ConfigParser::defaults`].
    #[must_use]
    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.get(name)
    }

    /// Returns true if a section with this name was parsed.
    #[must_use]
    pub fn has_section(&self, name: &str) -> bool {
        self.sections.contains_key(name)
    }

    /// Iterates over all named sections in unspecified order.
    pub fn sections(&self) -> impl Iterator<Item = &Section> {
        self.sections.values()
    }

    /// Iterates over all section names in unspecified order.
    pub fn section_names(&self) -> impl Iterator<Item = &str> {
        self.sections.keys().map(String::as_str)
    }

    /// Returns the defaults section.
    #[must_use]
    pub fn defaults(&self) -> &Section {
        &self.defaults
    }

    pub(crate) fn lookup(&self, section: &str, key: &str) -> Result<&str> {
        if section.is_empty() || section == DEFAULT_SECTION {
            return self.defaults.get(key).ok_or_else(|| Error::NoOption {
                section: DEFAULT_SECTION.to_string(),
                option: key.to_string(),
            });
        }

        let named = self.sections.get(section).ok_or_else(|| Error::NoSection {
            section: section.to_string(),
        })?;

        named
            .get(key)
            .or_else(|| self.defaults.get(key))
            .ok_or_else(|| Error::NoOption {
                section: section.to_string(),
                option: key.to_string(),
            })
    }
}

impl FromStr for ConfigParser {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self> {
        Scanner::scan_str(text).map(Self::from_parts)
    }
}
