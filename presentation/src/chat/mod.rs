//! Interactive chat module
//!
//! Provides a readline-based interactive help-desk session.

mod repl;

pub use repl::{ChatRepl, ReplCommand};
