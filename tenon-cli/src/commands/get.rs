//! Command to look up a single configuration value.

use crate::error::CliError;
use clap::{Args, ValueEnum};
use std::path::PathBuf;
use tenon::ConfigParser;

/// How to interpret the raw value before printing it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ValueType {
    /// Print the raw string.
    String,
    /// Parse as a decimal integer.
    Int,
    /// Parse as a float.
    Float,
    /// Parse as a boolean word.
    Bool,
    /// Parse as a complex literal.
    Complex,
    /// Take the first Unicode code point.
    Char,
}

/// Look up a single value by section and key.
#[derive(Args)]
pub struct GetCommand {
    /// Configuration file to read
    #[arg(value_name = "CONFIG_PATH")]
    pub path: PathBuf,

    /// Section to address; empty or "default" reads the defaults bag
    pub section: String,

    /// Key to look up
    pub key: String,

    /// Interpret the value as this type before printing
    #[arg(long = "type", value_enum, default_value = "string")]
    pub value_type: ValueType,

    /// Fallback printed when the value is unavailable
    #[arg(long)]
    pub default: Option<String>,
}

impl GetCommand {
    pub fn execute(self) -> Result<(), CliError> {
        let parser = ConfigParser::from_file(&self.path)?;

        let printed = match self.resolve(&parser) {
            Ok(value) => value,
            Err(err) => match self.default {
                Some(fallback) => fallback,
                None => return Err(CliError::Unavailable(err.to_string())),
            },
        };

        println!("{printed}");
        Ok(())
    }

    fn resolve(&self, parser: &ConfigParser) -> Result<String, tenon::Error> {
        let section = &self.section;
        let key = &self.key;
        match self.value_type {
            ValueType::String => parser.get(section, key),
            ValueType::Int => parser.get_i64(section, key).map(|v| v.to_string()),
            ValueType::Float => parser.get_f64(section, key).map(|v| v.to_string()),
            ValueType::Bool => parser.get_bool(section, key).map(|v| v.to_string()),
            ValueType::Complex => parser.get_complex(section, key).map(|v| v.to_string()),
            ValueType::Char => parser.get_char(section, key).map(String::from),
        }
    }
}
