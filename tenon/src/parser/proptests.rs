//! Property-based tests for parsing and layered lookup.

use proptest::prelude::*;

use super::ConfigParser;

// Strategy for section names: no brackets, no leading '#', no '='.
fn section_name_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z][a-zA-Z0-9_-]{0,15}"
}

// Strategy for option keys: no '=' and no surrounding whitespace.
fn key_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z][a-zA-Z0-9_.-]{0,15}"
}

// Strategy for values with no surrounding whitespace (surrounding
// whitespace dies with the line trim; interior content is verbatim).
fn value_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_.:/-]{0,20}"
}

proptest! {
    // A value written under a section comes back byte-for-byte.
    #[test]
    fn prop_roundtrip_raw_value(
        section in section_name_strategy(),
        key in key_strategy(),
        value in value_strategy(),
    ) {
        // Exclude the one reserved name; it routes to the defaults bag.
        prop_assume!(section != "default");

        let text = format!("[{section}]\n{key} = {value}\n");
        let parser: ConfigParser = text.parse().unwrap();

        prop_assert_eq!(parser.get(&section, &key).unwrap(), value);
    }

    // A key missing from the addressed section resolves through defaults.
    #[test]
    fn prop_defaults_fallback(
        section in section_name_strategy(),
        key in key_strategy(),
        value in value_strategy(),
    ) {
        prop_assume!(section != "default");

        let text = format!("[default]\n{key} = {value}\n[{section}]\n");
        let parser: ConfigParser = text.parse().unwrap();

        prop_assert_eq!(parser.get(&section, &key).unwrap(), value);
    }

    // Integers survive formatting and typed retrieval.
    #[test]
    fn prop_roundtrip_i64(value in any::<i64>(), key in key_strategy()) {
        let text = format!("[nums]\n{key} = {value}\n");
        let parser: ConfigParser = text.parse().unwrap();

        prop_assert_eq!(parser.get_i64("nums", &key).unwrap(), value);
    }

    // Every valid entry of a comma-separated list is kept, in order.
    #[test]
    fn prop_list_keeps_valid_entries(values in prop::collection::vec(any::<i64>(), 0..10)) {
        let joined = values
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        let text = format!("[s]\nids = {joined}\n");
        let parser: ConfigParser = text.parse().unwrap();

        let parsed: Vec<i64> = parser.get_list("s", "ids", false).unwrap();
        if values.is_empty() {
            // An empty value splits into one empty piece, which drops.
            prop_assert!(parsed.is_empty());
        } else {
            prop_assert_eq!(parsed, values);
        }
    }

    // Scanning never panics on arbitrary input; the only error is the
    // structural one.
    #[test]
    fn prop_scan_total(text in "\\PC{0,200}") {
        match text.parse::<ConfigParser>() {
            Ok(_) => {}
            Err(err) => prop_assert!(
                matches!(err, crate::error::Error::MissingSectionHeader { .. })
            ),
        }
    }
}
