//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Invalid question: {0}")]
    InvalidQuestion(String),

    #[error("Invalid feedback: {0}")]
    InvalidFeedback(String),

    #[error("Sentiment estimation failed: {0}")]
    SentimentEstimation(String),
}
