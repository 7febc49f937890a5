//! Small string helpers shared by configuration consumers.
//!
//! Splitting accepts several separators at once by compiling them into
//! one alternation; empty (or blank) pieces are dropped so callers see
//! only meaningful fragments.

use regex::Regex;

fn separator_pattern(separators: &[&str]) -> Option<Regex> {
    if separators.is_empty() {
        return None;
    }
    let pattern = separators
        .iter()
        .map(|s| regex::escape(s))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&pattern).ok()
}

/// Splits `s` on any of the given separators, dropping empty pieces.
///
/// With no separators the input comes back whole.
///
/// # Examples
///
/// ```
/// use tenon::text::split_any;
///
/// let parts = split_any("a,b;;c", &[",", ";"]);
/// assert_eq!(parts, vec!["a", "b", "c"]);
/// ```
#[must_use]
pub fn split_any(s: &str, separators: &[&str]) -> Vec<String> {
    match separator_pattern(separators) {
        Some(re) => re
            .split(s)
            .filter(|piece| !piece.is_empty())
            .map(str::to_string)
            .collect(),
        None => vec![s.to_string()],
    }
}

/// Like [`split_any`], but also drops whitespace-only pieces.
///
/// # Examples
///
/// ```
/// use tenon::text::split_any_non_blank;
///
/// let parts = split_any_non_blank("a, ,b", &[","]);
/// assert_eq!(parts, vec!["a", "b"]);
/// ```
#[must_use]
pub fn split_any_non_blank(s: &str, separators: &[&str]) -> Vec<String> {
    match separator_pattern(separators) {
        Some(re) => re
            .split(s)
            .filter(|piece| !piece.trim().is_empty())
            .map(str::to_string)
            .collect(),
        None => vec![s.to_string()],
    }
}

/// Like [`split_any`], limited to at most `limit` pieces before the
/// empty-piece filter. A limit of 0 means unlimited.
#[must_use]
pub fn split_any_n(s: &str, separators: &[&str], limit: usize) -> Vec<String> {
    if limit == 0 {
        return split_any(s, separators);
    }
    match separator_pattern(separators) {
        Some(re) => re
            .splitn(s, limit)
            .filter(|piece| !piece.is_empty())
            .map(str::to_string)
            .collect(),
        None => vec![s.to_string()],
    }
}

/// Lenient truthiness check: `yes`, `true`, and `on` (any case,
/// surrounding whitespace ignored) are true; everything else is false.
///
/// For strict boolean handling use
/// [`ConfigParser::get_bool`](crate::ConfigParser::get_bool), which
/// also recognizes the falsy words and reports unknown ones.
#[must_use]
pub fn to_bool(s: &str) -> bool {
    matches!(
        s.trim().to_lowercase().as_str(),
        "yes" | "true" | "on"
    )
}

/// Renders a boolean as `"Yes"` or `"No"`.
#[must_use]
pub fn yes_or_no(value: bool) -> &'static str {
    if value {
        "Yes"
    } else {
        "No"
    }
}

/// Keeps only the numeric characters of `s`.
///
/// # Examples
///
/// ```
/// use tenon::text::digits_only;
///
/// assert_eq!(digits_only("+98 (555) 123"), "98555123");
/// ```
#[must_use]
pub fn digits_only(s: &str) -> String {
    s.chars().filter(|c| c.is_numeric()).collect()
}

/// Extracts the digits of `s` and parses them as an `i64`, returning 0
/// when nothing parseable remains.
#[must_use]
pub fn to_i64_lenient(s: &str) -> i64 {
    digits_only(s).parse().unwrap_or(0)
}

/// Returns true if every character is an ASCII digit.
///
/// The empty string is vacuously all digits.
#[must_use]
pub fn is_all_digits(s: &str) -> bool {
    s.chars().all(|c| c.is_ascii_digit())
}

/// Returns true if `s` mixes upper- and lowercase characters.
#[must_use]
pub fn is_mixed_case(s: &str) -> bool {
    s.to_lowercase() != s && s.to_uppercase() != s
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_any_multiple_separators() {
        assert_eq!(split_any("a,b;c", &[",", ";"]), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_split_any_drops_empty_pieces() {
        assert_eq!(split_any(",,a,,b,,", &[","]), vec!["a", "b"]);
    }

    #[test]
    fn test_split_any_no_separators() {
        assert_eq!(split_any("whole", &[]), vec!["whole"]);
    }

    #[test]
    fn test_split_any_regex_metacharacters_are_literal() {
        assert_eq!(split_any("a.b|c", &[".", "|"]), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_split_any_non_blank() {
        assert_eq!(split_any_non_blank("a,  ,b", &[","]), vec!["a", "b"]);
        assert_eq!(
            split_any_non_blank("x - y", &["-"]),
            vec!["x ", " y"]
        );
    }

    #[test]
    fn test_split_any_n() {
        assert_eq!(split_any_n("a,b,c", &[","], 2), vec!["a", "b,c"]);
        assert_eq!(split_any_n("a,b,c", &[","], 0), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_to_bool() {
        assert!(to_bool("yes"));
        assert!(to_bool("  TRUE "));
        assert!(to_bool("On"));
        assert!(!to_bool("no"));
        assert!(!to_bool("1"));
        assert!(!to_bool(""));
    }

    #[test]
    fn test_yes_or_no() {
        assert_eq!(yes_or_no(true), "Yes");
        assert_eq!(yes_or_no(false), "No");
    }

    #[test]
    fn test_digits_only() {
        assert_eq!(digits_only("a1b2c3"), "123");
        assert_eq!(digits_only("none"), "");
    }

    #[test]
    fn test_to_i64_lenient() {
        assert_eq!(to_i64_lenient("port 8080!"), 8080);
        assert_eq!(to_i64_lenient("no digits"), 0);
    }

    #[test]
    fn test_is_all_digits() {
        assert!(is_all_digits("12345"));
        assert!(is_all_digits(""));
        assert!(!is_all_digits("12a45"));
        assert!(!is_all_digits("١٢٣"));
    }

    #[test]
    fn test_is_mixed_case() {
        assert!(is_mixed_case("MixedCase"));
        assert!(!is_mixed_case("lower"));
        assert!(!is_mixed_case("UPPER"));
        assert!(!is_mixed_case("1234"));
    }
}
