//! Presentation layer for civic-helpdesk
//!
//! This crate contains CLI definitions, output formatters,
//! progress indication, and the interactive chat interface.

pub mod chat;
pub mod cli;
pub mod output;
pub mod progress;
pub mod runner;

// Re-export commonly used types
pub use chat::{ChatRepl, ReplCommand};
pub use cli::commands::{Cli, Command, OutputFormat};
pub use output::{ConsoleFormatter, JsonFormatter, OutputFormatter};
pub use progress::Spinner;
pub use runner::CommandRunner;
