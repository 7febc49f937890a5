//! Command to print a whole document.

use crate::error::CliError;
use clap::{Args, ValueEnum};
use std::collections::BTreeMap;
use std::path::PathBuf;
use tenon::{ConfigParser, Section};

/// Output format for the dump.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DumpFormat {
    /// INI-shaped text with sorted sections and keys.
    Text,
    /// A JSON object keyed by section name.
    Json,
}

/// Print a whole document, defaults included.
#[derive(Args)]
pub struct DumpCommand {
    /// Configuration file to read
    #[arg(value_name = "CONFIG_PATH")]
    pub path: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: DumpFormat,
}

type SortedSections = BTreeMap<String, BTreeMap<String, String>>;

impl DumpCommand {
    pub fn execute(self) -> Result<(), CliError> {
        let parser = ConfigParser::from_file(&self.path)?;

        let mut sorted = SortedSections::new();
        if !parser.defaults().is_empty() {
            sorted.insert("default".to_string(), sorted_values(parser.defaults()));
        }
        for section in parser.sections() {
            sorted.insert(section.name().to_string(), sorted_values(section));
        }

        match self.format {
            DumpFormat::Json => {
                let rendered = serde_json::to_string_pretty(&sorted)
                    .map_err(|e| CliError::InvalidArguments(e.to_string()))?;
                println!("{rendered}");
            }
            DumpFormat::Text => {
                for (name, values) in &sorted {
                    println!("[{name}]");
                    for (key, value) in values {
                        println!("{key} = {value}");
                    }
                    println!();
                }
            }
        }

        Ok(())
    }
}

fn sorted_values(section: &Section) -> BTreeMap<String, String> {
    section
        .values()
        .iter()
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect()
}
