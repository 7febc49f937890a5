//! Command to list the sections of a document.

use crate::error::CliError;
use clap::Args;
use std::path::PathBuf;
use tenon::ConfigParser;

/// List the sections of a document, sorted by name.
#[derive(Args)]
pub struct SectionsCommand {
    /// Configuration file to read
    #[arg(value_name = "CONFIG_PATH")]
    pub path: PathBuf,

    /// Also show how many options each section holds
    #[arg(long)]
    pub counts: bool,
}

impl SectionsCommand {
    pub fn execute(self) -> Result<(), CliError> {
        let parser = ConfigParser::from_file(&self.path)?;

        let mut names: Vec<&str> = parser.section_names().collect();
        names.sort_unstable();

        if self.counts && !parser.defaults().is_empty() {
            println!("default ({} options)", parser.defaults().len());
        }
        for name in names {
            if self.counts {
                let count = parser.section(name).map_or(0, tenon::Section::len);
                println!("{name} ({count} options)");
            } else {
                println!("{name}");
            }
        }

        Ok(())
    }
}
