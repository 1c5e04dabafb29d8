//! Application layer for civic-helpdesk
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{Credential, ResponderMode};
pub use ports::{
    helpdesk_repository::{HelpdeskRepository, RepositoryError},
    text_generator::{GenerationOutcome, NoTextGenerator, TextGenerator},
};
pub use use_cases::ask_question::{AskQuestionError, AskQuestionInput, AskQuestionUseCase};
pub use use_cases::classify_feedback::ClassifyFeedbackUseCase;
pub use use_cases::dashboard::{DashboardOutput, DashboardUseCase, RECENT_FEEDBACK_LIMIT};
pub use use_cases::resolve_answer::ResolveAnswerUseCase;
pub use use_cases::submit_feedback::{
    SubmitFeedbackError, SubmitFeedbackInput, SubmitFeedbackUseCase,
};
