//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive
//! macros, including global options and subcommands.

use crate::commands::{
    CheckCommand, CompletionsCommand, DumpCommand, GetCommand, SectionsCommand,
};
use clap::{Parser, Subcommand};

/// Command-line tool for inspecting INI-style configuration files.
#[derive(Parser)]
#[command(name = "tenon")]
#[command(version, about = "Inspect INI-style configuration files", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Look up a single value
    Get(GetCommand),

    /// List the sections of a document
    Sections(SectionsCommand),

    /// Print a whole document
    Dump(DumpCommand),

    /// Validate that a document parses
    Check(CheckCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
