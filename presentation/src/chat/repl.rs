//! REPL (Read-Eval-Print Loop) for interactive chat

use crate::runner::CommandRunner;
use helpdesk_domain::ChatId;
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};

/// A parsed REPL input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    Ask(String),
    Feedback(String),
    Dashboard,
    Help,
    Quit,
    Unknown(String),
}

impl ReplCommand {
    /// Parse a trimmed, non-empty input line
    pub fn parse(line: &str) -> Self {
        let Some(rest) = line.strip_prefix('/') else {
            return ReplCommand::Ask(line.to_string());
        };

        let (cmd, arg) = match rest.split_once(char::is_whitespace) {
            Some((cmd, arg)) => (cmd, arg.trim()),
            None => (rest, ""),
        };

        match cmd {
            "quit" | "exit" | "q" => ReplCommand::Quit,
            "help" | "h" | "?" => ReplCommand::Help,
            "dashboard" | "d" => ReplCommand::Dashboard,
            "feedback" | "f" => ReplCommand::Feedback(arg.to_string()),
            _ => ReplCommand::Unknown(line.to_string()),
        }
    }
}

/// Interactive chat REPL
pub struct ChatRepl {
    runner: CommandRunner,
    last_chat: Option<ChatId>,
}

impl ChatRepl {
    pub fn new(runner: CommandRunner) -> Self {
        Self {
            runner,
            last_chat: None,
        }
    }

    /// Run the interactive REPL
    pub async fn run(&mut self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        let history_path = dirs::data_dir().map(|p| p.join("civic-helpdesk").join("history.txt"));

        if let Some(ref path) = history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        self.print_welcome();

        loop {
            match rl.readline("? ") {
                Ok(line) => {
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }

                    let _ = rl.add_history_entry(line);

                    if self.handle(ReplCommand::parse(line)).await {
                        break;
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("Bye!");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        if let Some(ref path) = history_path {
            let _ = rl.save_history(path);
        }

        Ok(())
    }

    /// Handle one command. Returns true if the REPL should exit.
    async fn handle(&mut self, command: ReplCommand) -> bool {
        match command {
            ReplCommand::Quit => {
                println!("Bye!");
                return true;
            }
            ReplCommand::Help => Self::print_help(),
            ReplCommand::Dashboard => {
                self.runner.dashboard().await;
            }
            ReplCommand::Feedback(text) => match self.last_chat {
                Some(chat_id) => {
                    self.runner.feedback(chat_id, &text).await;
                }
                None => println!("Ask a question first, then rate the answer."),
            },
            ReplCommand::Ask(question) => {
                println!();
                if let Some(chat) = self.runner.ask(&question).await {
                    self.last_chat = Some(chat.id);
                }
            }
            ReplCommand::Unknown(cmd) => {
                println!("Unknown command: {}", cmd);
                println!("Type /help for available commands");
            }
        }
        false
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│       Government Services Help Desk         │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!("Signed in as: {}", self.runner.user());
        println!("Ask about licenses, voting, taxes, benefits, passports or legal aid.");
        Self::print_help();
    }

    fn print_help() {
        println!();
        println!("Commands:");
        println!("  /feedback <text>  - Rate the last answer");
        println!("  /dashboard        - Show your feedback summary");
        println!("  /help             - Show this help");
        println!("  /quit             - Exit chat");
        println!();
    }
}
