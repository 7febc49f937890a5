//! CLI-specific error types with exit codes.
//!
//! This module defines error types specific to the CLI layer, wrapping
//! library errors and providing appropriate exit codes.

use std::fmt;
use tenon::Error as LibError;

/// CLI-specific error type with exit code mapping.
#[derive(Debug)]
pub enum CliError {
    /// Requested value unavailable (missing or unconvertible) - exit code 1.
    Unavailable(String),

    /// Library error (wrapped).
    Library(LibError),

    /// Invalid command-line arguments.
    InvalidArguments(String),

    /// I/O error.
    Io(std::io::Error),
}

impl CliError {
    /// Get the appropriate exit code for this error.
    ///
    /// Exit codes:
    /// - 0: Success (not an error)
    /// - 1: Value unavailable (missing key or failed conversion)
    /// - 2: Parse or library error
    /// - 4: Invalid arguments
    /// - 5: I/O error
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Unavailable(_) => 1,
            CliError::Library(_) => 2,
            CliError::InvalidArguments(_) => 4,
            CliError::Io(_) => 5,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Unavailable(msg) => write!(f, "{msg}"),
            CliError::Library(e) => write!(f, "{e}"),
            CliError::InvalidArguments(msg) => write!(f, "Invalid arguments: {msg}"),
            CliError::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Library(e) => Some(e),
            CliError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<LibError> for CliError {
    fn from(e: LibError) -> Self {
        match e {
            LibError::Io(io) => CliError::Io(io),
            other => CliError::Library(other),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(CliError::Unavailable("x".to_string()).exit_code(), 1);
        assert_eq!(
            CliError::Library(LibError::NoSection {
                section: "s".to_string()
            })
            .exit_code(),
            2
        );
        assert_eq!(CliError::InvalidArguments("x".to_string()).exit_code(), 4);
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        assert_eq!(CliError::Io(io).exit_code(), 5);
    }

    #[test]
    fn test_library_io_errors_map_to_io() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: CliError = LibError::from(io).into();
        assert_eq!(err.exit_code(), 5);
    }

    #[test]
    fn test_display() {
        let err = CliError::InvalidArguments("bad flag".to_string());
        assert!(format!("{err}").contains("bad flag"));
    }
}
