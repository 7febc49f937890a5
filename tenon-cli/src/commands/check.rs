//! Command to validate a configuration file.

use crate::error::CliError;
use clap::Args;
use std::path::PathBuf;
use tenon::ConfigParser;

/// Validate that a configuration file parses.
#[derive(Args)]
pub struct CheckCommand {
    /// Configuration file to validate
    #[arg(value_name = "CONFIG_PATH")]
    pub path: PathBuf,
}

impl CheckCommand {
    pub fn execute(self) -> Result<(), CliError> {
        if !self.path.exists() {
            return Err(CliError::InvalidArguments(format!(
                "File not found: {}",
                self.path.display()
            )));
        }

        let parser = ConfigParser::from_file(&self.path)?;

        let sections = parser.sections().count();
        let options: usize = parser
            .sections()
            .map(tenon::Section::len)
            .sum::<usize>()
            + parser.defaults().len();

        println!("OK: {sections} section(s), {options} option(s)");
        Ok(())
    }
}
