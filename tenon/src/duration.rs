//! Human-readable duration parsing and formatting.
//!
//! A duration string is a possibly signed sequence of decimal numbers,
//! each with an optional fraction and a unit suffix: `300ms`, `-1.5h`,
//! `2h45m`, `1y2w3d`. Embedded spaces are ignored. The unit table lives
//! on the [`DurationParser`] value; custom units are added at
//! construction time rather than through process-wide registration.
//!
//! # Examples
//!
//! ```
//! use chrono::TimeDelta;
//! use tenon::duration::DurationParser;
//!
//! let parser = DurationParser::new();
//! assert_eq!(parser.parse("2h45m").unwrap(), TimeDelta::minutes(165));
//! assert_eq!(parser.parse("1d").unwrap(), TimeDelta::hours(24));
//!
//! let parser = parser.with_unit("fortnight", 14 * 24 * 3_600_000_000_000);
//! assert_eq!(parser.parse("1fortnight").unwrap(), TimeDelta::days(14));
//! ```

use std::collections::HashMap;

use chrono::TimeDelta;
use thiserror::Error;

const NANOSECOND: u64 = 1;
const MICROSECOND: u64 = 1_000 * NANOSECOND;
const MILLISECOND: u64 = 1_000 * MICROSECOND;
const SECOND: u64 = 1_000 * MILLISECOND;
const MINUTE: u64 = 60 * SECOND;
const HOUR: u64 = 60 * MINUTE;
const DAY: u64 = 24 * HOUR;
const WEEK: u64 = 7 * DAY;
const MONTH: u64 = 30 * DAY;
const YEAR: u64 = 365 * DAY;

// Values above this cannot be represented in a signed nanosecond count.
const LIMIT: u64 = 1 << 63;

/// Errors from [`DurationParser::parse`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DurationError {
    /// The input is not a duration (bad syntax or overflow).
    #[error("invalid duration {0:?}")]
    Invalid(String),

    /// A number was not followed by a unit.
    #[error("missing unit in duration {0:?}")]
    MissingUnit(String),

    /// A unit is not in the parser's table.
    #[error("unknown unit {unit:?} in duration {input:?}")]
    UnknownUnit {
        /// The unrecognized unit.
        unit: String,
        /// The complete input.
        input: String,
    },
}

/// Parses duration strings against a configurable unit table.
///
/// The default table recognizes `ns`, `us` (with both micro-sign
/// spellings), `ms`, `s`, `m`, `h`, `d`, `w`, `mo`, and `y`.
#[derive(Debug, Clone)]
pub struct DurationParser {
    units: HashMap<String, u64>,
}

impl Default for DurationParser {
    fn default() -> Self {
        let mut units = HashMap::new();
        for (unit, value) in [
            ("ns", NANOSECOND),
            ("us", MICROSECOND),
            ("µs", MICROSECOND), // U+00B5, micro sign
            ("μs", MICROSECOND), // U+03BC, Greek small letter mu
            ("ms", MILLISECOND),
            ("s", SECOND),
            ("m", MINUTE),
            ("h", HOUR),
            ("d", DAY),
            ("w", WEEK),
            ("mo", MONTH),
            ("y", YEAR),
        ] {
            units.insert(unit.to_string(), value);
        }
        Self { units }
    }
}

impl DurationParser {
    /// Creates a parser with the default unit table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or replaces) a unit worth `nanos` nanoseconds.
    ///
    /// Whitespace inside the unit is removed; an empty unit or a
    /// zero-valued one is ignored.
    #[must_use]
    pub fn with_unit(mut self, unit: &str, nanos: u64) -> Self {
        let unit = unit.replace(' ', "");
        if !unit.is_empty() && nanos > 0 {
            self.units.insert(unit, nanos);
        }
        self
    }

    /// Parses a duration string.
    ///
    /// # Errors
    ///
    /// [`DurationError::Invalid`] for malformed input or overflow,
    /// [`DurationError::MissingUnit`] for a bare number, and
    /// [`DurationError::UnknownUnit`] for a unit outside the table.
    #[allow(clippy::cast_possible_wrap)]
    pub fn parse(&self, input: &str) -> Result<TimeDelta, DurationError> {
        let cleaned = input.replace(' ', "");
        let mut rest = cleaned.as_str();
        let mut negative = false;

        if let Some(stripped) = rest.strip_prefix('-') {
            negative = true;
            rest = stripped;
        } else if let Some(stripped) = rest.strip_prefix('+') {
            rest = stripped;
        }

        if rest == "0" {
            return Ok(TimeDelta::zero());
        }
        if rest.is_empty() {
            return Err(DurationError::Invalid(input.to_string()));
        }

        let mut total: u64 = 0;
        while !rest.is_empty() {
            let first = rest.as_bytes()[0];
            if first != b'.' && !first.is_ascii_digit() {
                return Err(DurationError::Invalid(input.to_string()));
            }

            let before = rest.len();
            let (mut value, after_int) =
                leading_int(rest).ok_or_else(|| DurationError::Invalid(input.to_string()))?;
            rest = after_int;
            let has_integer = before != rest.len();

            let mut fraction: u64 = 0;
            let mut scale: f64 = 1.0;
            let mut has_fraction = false;
            if let Some(after_dot) = rest.strip_prefix('.') {
                let before = after_dot.len();
                let (f, s, after_frac) = leading_fraction(after_dot);
                fraction = f;
                scale = s;
                rest = after_frac;
                has_fraction = before != rest.len();
            }

            if !has_integer && !has_fraction {
                return Err(DurationError::Invalid(input.to_string()));
            }

            let unit_len = rest
                .find(|c: char| c == '.' || c.is_ascii_digit())
                .unwrap_or(rest.len());
            if unit_len == 0 {
                return Err(DurationError::MissingUnit(input.to_string()));
            }
            let (unit_name, after_unit) = rest.split_at(unit_len);
            rest = after_unit;

            let unit =
                *self
                    .units
                    .get(unit_name)
                    .ok_or_else(|| DurationError::UnknownUnit {
                        unit: unit_name.to_string(),
                        input: input.to_string(),
                    })?;

            if value > LIMIT / unit {
                return Err(DurationError::Invalid(input.to_string()));
            }
            value *= unit;

            if fraction > 0 {
                // f64 keeps fractions of the largest units nanosecond
                // accurate.
                #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
                #[allow(clippy::cast_sign_loss)]
                {
                    value += (fraction as f64 * (unit as f64 / scale)) as u64;
                }
                if value > LIMIT {
                    return Err(DurationError::Invalid(input.to_string()));
                }
            }

            total = total.saturating_add(value);
            if total > LIMIT {
                return Err(DurationError::Invalid(input.to_string()));
            }
        }

        if negative {
            Ok(TimeDelta::nanoseconds((total as i64).wrapping_neg()))
        } else if total > LIMIT - 1 {
            Err(DurationError::Invalid(input.to_string()))
        } else {
            Ok(TimeDelta::nanoseconds(total as i64))
        }
    }

    /// Parses a duration, falling back to `default`.
    ///
    /// An empty input returns the default unchanged. A bare number
    /// multiplies the default (so `"3"` with a default of one day is
    /// three days). Anything else unparseable returns the default.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::TimeDelta;
    /// use tenon::duration::DurationParser;
    ///
    /// let parser = DurationParser::new();
    /// let day = TimeDelta::hours(24);
    /// assert_eq!(parser.parse_with_default("", day), day);
    /// assert_eq!(parser.parse_with_default("123", day), day * 123);
    /// assert_eq!(parser.parse_with_default("5m", day), TimeDelta::minutes(5));
    /// ```
    #[must_use]
    pub fn parse_with_default(&self, input: &str, default: TimeDelta) -> TimeDelta {
        if input.is_empty() {
            return default;
        }
        match self.parse(input) {
            Ok(delta) => delta,
            Err(DurationError::MissingUnit(_)) => match input.parse::<i64>() {
                Ok(factor) => multiply(default, factor).unwrap_or(default),
                Err(_) => default,
            },
            Err(_) => default,
        }
    }
}

fn multiply(delta: TimeDelta, factor: i64) -> Option<TimeDelta> {
    let nanos = delta.num_nanoseconds()?;
    Some(TimeDelta::nanoseconds(nanos.checked_mul(factor)?))
}

// Consumes the leading [0-9]* of s; None on overflow past the signed
// nanosecond range.
fn leading_int(s: &str) -> Option<(u64, &str)> {
    let bytes = s.as_bytes();
    let mut value: u64 = 0;
    let mut index = 0;
    while index < bytes.len() && bytes[index].is_ascii_digit() {
        if value > LIMIT / 10 {
            return None;
        }
        value = value * 10 + u64::from(bytes[index] - b'0');
        if value > LIMIT {
            return None;
        }
        index += 1;
    }
    Some((value, &s[index..]))
}

// Consumes the leading [0-9]* of s as a fraction; overflow stops
// accumulating precision instead of failing.
fn leading_fraction(s: &str) -> (u64, f64, &str) {
    let bytes = s.as_bytes();
    let mut value: u64 = 0;
    let mut scale: f64 = 1.0;
    let mut overflow = false;
    let mut index = 0;
    while index < bytes.len() && bytes[index].is_ascii_digit() {
        if !overflow {
            if value > (LIMIT - 1) / 10 {
                overflow = true;
            } else {
                let next = value * 10 + u64::from(bytes[index] - b'0');
                if next > LIMIT {
                    overflow = true;
                } else {
                    value = next;
                    scale *= 10.0;
                }
            }
        }
        index += 1;
    }
    (value, scale, &s[index..])
}

/// Renders a delta as counts of years, months, days, hours, minutes,
/// and seconds.
///
/// With `shorten` the day-and-below components use `d`/`h`/`m`/`s`
/// suffixes, producing a string [`DurationParser::parse`] accepts back;
/// shortening is suppressed as soon as a month or year component
/// appears, since those only exist in word form.
///
/// # Examples
///
/// ```
/// use chrono::TimeDelta;
/// use tenon::duration::{pretty, DurationParser};
///
/// let delta = TimeDelta::hours(2) + TimeDelta::seconds(3);
/// assert_eq!(pretty(delta, false), "2 hours 0 minutes 3 seconds");
///
/// let short = pretty(delta, true);
/// assert_eq!(short, "2h 0m 3s");
/// assert_eq!(DurationParser::new().parse(&short).unwrap(), delta);
/// ```
#[must_use]
pub fn pretty(delta: TimeDelta, shorten: bool) -> String {
    let mut seconds = delta.num_seconds();

    let years = seconds / (60 * 60 * 24 * 365);
    seconds -= years * 60 * 60 * 24 * 365;
    let months = seconds / (60 * 60 * 24 * 30);
    seconds -= months * 60 * 60 * 24 * 30;
    let days = seconds / (60 * 60 * 24);
    seconds -= days * 60 * 60 * 24;
    let hours = seconds / (60 * 60);
    seconds -= hours * 60 * 60;
    let minutes = seconds / 60;
    seconds -= minutes * 60;

    let show_years = years > 0;
    let show_months = months > 0 || show_years;
    let shorten = shorten && !show_months;
    let show_days = days > 0 || show_months;
    let show_hours = hours > 0 || show_days;

    let mut parts = Vec::new();
    if show_years {
        parts.push(plural(years, "year"));
    }
    if show_months {
        parts.push(plural(months, "month"));
    }
    if show_days {
        parts.push(component(days, "day", "d", shorten));
    }
    if show_hours {
        parts.push(component(hours, "hour", "h", shorten));
    }
    parts.push(component(minutes, "minute", "m", shorten));
    parts.push(component(seconds, "second", "s", shorten));

    parts.join(" ")
}

fn component(count: i64, word: &str, suffix: &str, shorten: bool) -> String {
    if shorten {
        format!("{count}{suffix}")
    } else {
        plural(count, word)
    }
}

fn plural(count: i64, word: &str) -> String {
    if count == 1 {
        format!("{count} {word}")
    } else {
        format!("{count} {word}s")
    }
}
