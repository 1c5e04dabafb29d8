//! CLI command definitions

use clap::{Parser, Subcommand, ValueEnum};
use helpdesk_domain::ChatId;
use std::path::PathBuf;

/// Output format for command results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable console output
    #[default]
    Text,
    /// JSON output
    Json,
}

/// CLI arguments for civic-helpdesk
#[derive(Parser, Debug)]
#[command(name = "civic-helpdesk")]
#[command(author, version, about = "Government services help desk")]
#[command(long_about = r#"
civic-helpdesk answers questions about government services.

When an API token is available (HF_API_KEY by default) questions are first
sent to a hosted text-generation model; otherwise, or when that call fails,
answers come from the built-in knowledge base. Feedback on an answer is
scored for sentiment and summarised on the dashboard.

Configuration files are loaded from (in priority order):
1. HELPDESK_* environment variables
2. --config <path>     Explicit config file
3. ./helpdesk.toml     Project-level config
4. ~/.config/civic-helpdesk/config.toml   Global config

Example:
  civic-helpdesk ask "How do I renew my driver's license?"
  civic-helpdesk feedback 1 "Very helpful, thanks"
  civic-helpdesk dashboard
  civic-helpdesk --user alice chat
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Name the records are kept under
    #[arg(short, long, global = true, default_value = "guest")]
    pub user: String,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value = "text")]
    pub output: OutputFormat,

    /// Never call the external responder
    #[arg(long, global = true)]
    pub offline: bool,

    /// Record file (overrides [storage].path)
    #[arg(long, global = true, value_name = "PATH")]
    pub store: Option<PathBuf>,

    /// Keep records in memory for this run only
    #[arg(long, global = true, conflicts_with = "store")]
    pub ephemeral: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Also write logs to this file
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Suppress progress indicators
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Ask a question
    Ask {
        /// The question (may be given unquoted)
        #[arg(required = true, num_args = 1..)]
        question: Vec<String>,
    },
    /// Give feedback on an earlier answer
    Feedback {
        /// Chat id printed with the answer
        chat_id: ChatId,
        /// Feedback text (may be given unquoted)
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },
    /// Show feedback statistics and recent feedback
    Dashboard,
    /// Interactive chat (the default)
    Chat,
    /// Print the sentiment of a text without storing anything
    Classify {
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },
}

impl Cli {
    /// The subcommand to run; no subcommand means interactive chat.
    pub fn effective_command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Chat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ask_unquoted() {
        let cli = Cli::parse_from(["civic-helpdesk", "ask", "where", "do", "I", "vote?"]);
        assert_eq!(
            cli.effective_command(),
            Command::Ask {
                question: vec![
                    "where".to_string(),
                    "do".to_string(),
                    "I".to_string(),
                    "vote?".to_string()
                ]
            }
        );
        assert_eq!(cli.user, "guest");
        assert_eq!(cli.output, OutputFormat::Text);
    }

    #[test]
    fn test_parse_feedback_with_global_flags() {
        let cli = Cli::parse_from([
            "civic-helpdesk",
            "feedback",
            "3",
            "great",
            "--user",
            "alice",
            "-o",
            "json",
            "-vv",
        ]);
        assert_eq!(
            cli.effective_command(),
            Command::Feedback {
                chat_id: ChatId(3),
                text: vec!["great".to_string()]
            }
        );
        assert_eq!(cli.user, "alice");
        assert_eq!(cli.output, OutputFormat::Json);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_bad_chat_id_is_rejected() {
        assert!(Cli::try_parse_from(["civic-helpdesk", "feedback", "abc", "great"]).is_err());
    }

    #[test]
    fn test_default_command_is_chat() {
        let cli = Cli::parse_from(["civic-helpdesk", "--offline"]);
        assert_eq!(cli.effective_command(), Command::Chat);
        assert!(cli.offline);
    }

    #[test]
    fn test_ephemeral_conflicts_with_store() {
        let result =
            Cli::try_parse_from(["civic-helpdesk", "--ephemeral", "--store", "x.jsonl", "dashboard"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
