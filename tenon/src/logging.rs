//! Logging setup for tenon consumers.
//!
//! The library itself only emits through the `log` facade; this module
//! provides a minimal stderr backend and a [`LogLevel`] that maps the
//! usual quiet/normal/verbose trio onto facade filters. Binaries call
//! [`init_logger`] once at startup.

use std::env;
use std::fmt;

use log::{LevelFilter, Log, Metadata, Record};

/// Verbosity selection for the stderr logger.
///
/// # Examples
///
/// ```
/// use tenon::LogLevel;
///
/// assert!(LogLevel::Quiet < LogLevel::Normal);
/// assert!(LogLevel::Normal < LogLevel::Verbose);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// Suppress everything below errors.
    Quiet,
    /// Errors and warnings.
    Normal,
    /// Everything, including debug output.
    Verbose,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Quiet => write!(f, "quiet"),
            Self::Normal => write!(f, "normal"),
            Self::Verbose => write!(f, "verbose"),
        }
    }
}

impl LogLevel {
    /// Parses a log level name, case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns the offending input if it names no level.
    ///
    /// # Examples
    ///
    /// ```
    /// use tenon::LogLevel;
    ///
    /// assert_eq!(LogLevel::parse("VERBOSE").unwrap(), LogLevel::Verbose);
    /// assert!(LogLevel::parse("loud").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "quiet" => Ok(Self::Quiet),
            "normal" => Ok(Self::Normal),
            "verbose" => Ok(Self::Verbose),
            _ => Err(format!("invalid log level: {s}")),
        }
    }

    /// The facade filter this level corresponds to.
    #[must_use]
    pub fn filter(self) -> LevelFilter {
        match self {
            Self::Quiet => LevelFilter::Error,
            Self::Normal => LevelFilter::Warn,
            Self::Verbose => LevelFilter::Debug,
        }
    }
}

struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record<'_>) {
        if self.enabled(record.metadata()) {
            eprintln!("{}: {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

/// Installs the stderr logger and returns the level it runs at.
///
/// Priority order: the `verbose` flag, then the `quiet` flag, then the
/// `TENON_LOG_MODE` environment variable, then [`LogLevel::Normal`].
/// Calling this more than once keeps the first installed backend and
/// only adjusts the filter.
///
/// # Examples
///
/// ```
/// use tenon::{init_logger, LogLevel};
///
/// let level = init_logger(true, false);
/// assert_eq!(level, LogLevel::Verbose);
/// ```
pub fn init_logger(verbose: bool, quiet: bool) -> LogLevel {
    let level = if verbose {
        LogLevel::Verbose
    } else if quiet {
        LogLevel::Quiet
    } else {
        env::var("TENON_LOG_MODE")
            .ok()
            .and_then(|value| LogLevel::parse(&value).ok())
            .unwrap_or(LogLevel::Normal)
    };

    let _ = log::set_logger(&LOGGER);
    log::set_max_level(level.filter());
    level
}
