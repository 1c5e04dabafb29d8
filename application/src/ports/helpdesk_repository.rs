//! Help-desk repository port
//!
//! Storage for answered questions and the feedback given on them.

use async_trait::async_trait;
use helpdesk_domain::{
    ChatId, ChatRecord, FeedbackRecord, FeedbackStats, NewChat, NewFeedback, RecentFeedback,
};
use thiserror::Error;

/// Errors that can occur in repository operations
#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Corrupt record at line {line}: {reason}")]
    Corrupt { line: usize, reason: String },

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Chat {0} not found")]
    ChatNotFound(ChatId),

    #[error("No {0} ids left")]
    IdsExhausted(&'static str),

    #[error("Storage lock poisoned")]
    Poisoned,
}

/// Port for persisting chats and feedback.
///
/// Implementations assign ids (sequential, starting at 1) and timestamps.
#[async_trait]
pub trait HelpdeskRepository: Send + Sync {
    /// Store an answered question
    async fn save_chat(&self, chat: NewChat) -> Result<ChatRecord, RepositoryError>;

    /// Look up an answered question by id
    async fn find_chat(&self, id: ChatId) -> Result<Option<ChatRecord>, RepositoryError>;

    /// Store feedback. The referenced chat must exist.
    async fn save_feedback(&self, feedback: NewFeedback) -> Result<FeedbackRecord, RepositoryError>;

    /// Sentiment counts over all feedback by `user`
    async fn feedback_stats(&self, user: &str) -> Result<FeedbackStats, RepositoryError>;

    /// Latest feedback by `user` with the rated chat, newest first
    async fn recent_feedback(
        &self,
        user: &str,
        limit: usize,
    ) -> Result<Vec<RecentFeedback>, RepositoryError>;
}
