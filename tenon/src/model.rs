//! The parsed configuration model.
//!
//! A document is a set of named [`Section`]s plus one distinguished
//! defaults section. Each section is a flat bag of raw string values.
//! The model is built once by the scanner and never mutated afterwards.

use std::collections::HashMap;

use serde::Serialize;

/// Name of the reserved defaults section.
///
/// A section header carrying this exact name routes assignments into the
/// defaults bag instead of a named section.
pub const DEFAULT_SECTION: &str = "default";

/// A flat string-to-string map of raw option values.
///
/// Keys are unique; insertion order is not preserved.
pub type Dict = HashMap<String, String>;

/// Mapping of section name to [`Section`], as produced by a scan.
///
/// The defaults section is never stored here; it travels separately.
pub type SectionMap = HashMap<String, Section>;

/// A named group of key/value pairs from the input document.
///
/// `Section::get` is a plain lookup; the defaults fallback is applied one
/// layer up, by [`ConfigParser`](crate::ConfigParser).
///
/// # Examples
///
/// ```
/// use tenon::Section;
///
/// let mut section = Section::new("server");
/// section.add("host", "localhost");
/// assert_eq!(section.get("host"), Some("localhost"));
/// assert_eq!(section.get("port"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Section {
    name: String,
    values: Dict,
}

impl Section {
    /// Creates an empty section with the given name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            values: Dict::new(),
        }
    }

    /// Returns the section name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Records a key/value pair. A repeated key overwrites the old value.
    pub fn add(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    /// Looks up a raw value by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Returns true if the section holds the given key.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Number of key/value pairs in the section.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if the section holds no pairs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates over the keys of the section in unspecified order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// Returns the underlying key/value map.
    #[must_use]
    pub fn values(&self) -> &Dict {
        &self.values
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_get() {
        let mut section = Section::new("server");
        section.add("host", "localhost");
        section.add("port", "8080");

        assert_eq!(section.name(), "server");
        assert_eq!(section.get("host"), Some("localhost"));
        assert_eq!(section.get("port"), Some("8080"));
        assert_eq!(section.get("missing"), None);
        assert_eq!(section.len(), 2);
        assert!(!section.is_empty());
    }

    #[test]
    fn test_repeated_key_overwrites() {
        let mut section = Section::new("server");
        section.add("host", "first");
        section.add("host", "second");

        assert_eq!(section.get("host"), Some("second"));
        assert_eq!(section.len(), 1);
    }

    #[test]
    fn test_no_defaults_fallback_at_section_level() {
        // The section itself knows nothing about the defaults bag.
        let section = Section::new("server");
        assert_eq!(section.get("anything"), None);
    }

    #[test]
    fn test_value_kept_verbatim() {
        let mut section = Section::new("server");
        section.add("motd", "  spaced   out  ");
        assert_eq!(section.get("motd"), Some("  spaced   out  "));
    }

    #[test]
    fn test_keys_iteration() {
        let mut section = Section::new("s");
        section.add("a", "1");
        section.add("b", "2");

        let mut keys: Vec<&str> = section.keys().collect();
        keys.sort_unstable();
        assert_eq!(keys, vec!["a", "b"]);
    }

    #[test]
    fn test_serialize() {
        let mut section = Section::new("server");
        section.add("host", "localhost");

        let json = serde_json::to_string(&section).unwrap();
        assert!(json.contains("\"name\":\"server\""));
        assert!(json.contains("\"host\":\"localhost\""));
    }
}
