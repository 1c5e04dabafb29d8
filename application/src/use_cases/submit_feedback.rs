//! Submit Feedback use case.
//!
//! Classifies feedback on a previous answer and stores it. Only the user who
//! asked the question may rate the answer.

use super::classify_feedback::ClassifyFeedbackUseCase;
use crate::ports::helpdesk_repository::{HelpdeskRepository, RepositoryError};
use helpdesk_domain::{ChatId, FeedbackRecord, NewFeedback};
use std::sync::Arc;
use thiserror::Error;
use tracing::{error, info, warn};

/// Errors that can occur while submitting feedback
#[derive(Error, Debug)]
pub enum SubmitFeedbackError {
    #[error("Feedback cannot be empty")]
    EmptyFeedback,

    #[error("Invalid chat session: {0} does not exist")]
    ChatNotFound(ChatId),

    #[error("Invalid chat session: {0} belongs to another user")]
    NotChatOwner(ChatId),

    #[error("Failed to store feedback: {0}")]
    Repository(#[from] RepositoryError),
}

impl SubmitFeedbackError {
    /// Whether the error is about the referenced chat rather than storage
    pub fn is_invalid_chat(&self) -> bool {
        matches!(
            self,
            SubmitFeedbackError::ChatNotFound(_) | SubmitFeedbackError::NotChatOwner(_)
        )
    }
}

/// Input for the [`SubmitFeedbackUseCase`].
#[derive(Debug, Clone)]
pub struct SubmitFeedbackInput {
    pub user: String,
    pub chat_id: ChatId,
    pub text: String,
}

impl SubmitFeedbackInput {
    pub fn new(user: impl Into<String>, chat_id: ChatId, text: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            chat_id,
            text: text.into(),
        }
    }
}

#[derive(Clone)]
pub struct SubmitFeedbackUseCase {
    classifier: ClassifyFeedbackUseCase,
    repository: Arc<dyn HelpdeskRepository>,
}

impl SubmitFeedbackUseCase {
    pub fn new(classifier: ClassifyFeedbackUseCase, repository: Arc<dyn HelpdeskRepository>) -> Self {
        Self {
            classifier,
            repository,
        }
    }

    pub async fn execute(
        &self,
        input: SubmitFeedbackInput,
    ) -> Result<FeedbackRecord, SubmitFeedbackError> {
        let text = input.text.trim();
        if text.is_empty() {
            return Err(SubmitFeedbackError::EmptyFeedback);
        }

        let chat = self
            .repository
            .find_chat(input.chat_id)
            .await?
            .ok_or(SubmitFeedbackError::ChatNotFound(input.chat_id))?;
        if !chat.is_owned_by(&input.user) {
            warn!(
                "User {} tried to rate chat {} owned by {}",
                input.user, chat.id, chat.user
            );
            return Err(SubmitFeedbackError::NotChatOwner(chat.id));
        }

        let sentiment = self.classifier.classify(text);
        let feedback = NewFeedback {
            user: input.user,
            chat_id: chat.id,
            feedback_text: text.to_string(),
            sentiment,
        };

        let record = self.repository.save_feedback(feedback).await.map_err(|e| {
            error!("Error processing feedback: {}", e);
            SubmitFeedbackError::Repository(e)
        })?;
        info!("Stored feedback {} on chat {}: {}", record.id, chat.id, sentiment);
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::test_support::FakeRepository;
    use helpdesk_domain::{AnswerResult, NewChat, SentimentLabel};

    async fn repo_with_chat(owner: &str) -> Arc<FakeRepository> {
        let repo = Arc::new(FakeRepository::default());
        repo.save_chat(NewChat::new(
            owner,
            "voting?",
            AnswerResult::fallback("canned"),
        ))
        .await
        .unwrap();
        repo
    }

    #[tokio::test]
    async fn test_feedback_is_classified_and_stored() {
        let repo = repo_with_chat("alice").await;
        let use_case = SubmitFeedbackUseCase::new(ClassifyFeedbackUseCase::default(), repo.clone());

        let record = use_case
            .execute(SubmitFeedbackInput::new(
                "alice",
                ChatId(1),
                "  Really helpful, thank you!  ",
            ))
            .await
            .unwrap();

        assert_eq!(record.sentiment, SentimentLabel::Positive);
        assert_eq!(record.feedback_text, "Really helpful, thank you!");
        assert_eq!(record.chat_id, ChatId(1));
        assert_eq!(repo.feedback.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_unknown_chat_is_rejected() {
        let repo = repo_with_chat("alice").await;
        let use_case = SubmitFeedbackUseCase::new(ClassifyFeedbackUseCase::default(), repo);

        let err = use_case
            .execute(SubmitFeedbackInput::new("alice", ChatId(99), "great"))
            .await
            .unwrap_err();

        assert!(matches!(err, SubmitFeedbackError::ChatNotFound(ChatId(99))));
        assert!(err.is_invalid_chat());
    }

    #[tokio::test]
    async fn test_other_users_chat_is_rejected() {
        let repo = repo_with_chat("alice").await;
        let use_case = SubmitFeedbackUseCase::new(ClassifyFeedbackUseCase::default(), repo.clone());

        let err = use_case
            .execute(SubmitFeedbackInput::new("mallory", ChatId(1), "terrible"))
            .await
            .unwrap_err();

        assert!(matches!(err, SubmitFeedbackError::NotChatOwner(ChatId(1))));
        assert!(repo.feedback.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_blank_feedback_is_rejected() {
        let repo = repo_with_chat("alice").await;
        let use_case = SubmitFeedbackUseCase::new(ClassifyFeedbackUseCase::default(), repo);

        let err = use_case
            .execute(SubmitFeedbackInput::new("alice", ChatId(1), " \n "))
            .await
            .unwrap_err();

        assert!(matches!(err, SubmitFeedbackError::EmptyFeedback));
        assert!(!err.is_invalid_chat());
    }
}
