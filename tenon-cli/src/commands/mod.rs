//! CLI command implementations.

mod check;
mod completions;
mod dump;
mod get;
mod sections;

pub use check::CheckCommand;
pub use completions::CompletionsCommand;
pub use dump::DumpCommand;
pub use get::GetCommand;
pub use sections::SectionsCommand;
