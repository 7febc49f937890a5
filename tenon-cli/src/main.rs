//! Main entry point for the tenon CLI.
//!
//! This is the command-line interface for inspecting INI-style
//! configuration files. It provides commands for querying and
//! validating documents:
//! - `get`: Look up a single value, optionally typed
//! - `sections`: List the sections of a document
//! - `dump`: Print a whole document as text or JSON
//! - `check`: Validate that a document parses
//! - `completions`: Generate shell completion scripts

mod cli;
mod commands;
mod error;

use clap::Parser;
use cli::Cli;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    let _level = tenon::init_logger(cli.verbose, cli.quiet);

    // Execute the command
    let result = match cli.command {
        cli::Command::Get(cmd) => cmd.execute(),
        cli::Command::Sections(cmd) => cmd.execute(),
        cli::Command::Dump(cmd) => cmd.execute(),
        cli::Command::Check(cmd) => cmd.execute(),
        cli::Command::Completions(cmd) => cmd.execute(),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
