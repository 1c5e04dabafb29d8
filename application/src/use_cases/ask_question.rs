//! Ask Question use case.
//!
//! Resolves a user's question and stores the exchange so feedback can refer
//! to it later.

use super::resolve_answer::ResolveAnswerUseCase;
use crate::ports::helpdesk_repository::{HelpdeskRepository, RepositoryError};
use helpdesk_domain::{ChatRecord, NewChat, Question, preview};
use std::sync::Arc;
use thiserror::Error;
use tracing::{error, info};

/// Errors that can occur while asking a question
#[derive(Error, Debug)]
pub enum AskQuestionError {
    #[error("Question cannot be empty")]
    EmptyQuestion,

    #[error("Failed to store chat: {0}")]
    Repository(#[from] RepositoryError),
}

/// Input for the [`AskQuestionUseCase`].
#[derive(Debug, Clone)]
pub struct AskQuestionInput {
    pub user: String,
    pub question: String,
}

impl AskQuestionInput {
    pub fn new(user: impl Into<String>, question: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            question: question.into(),
        }
    }
}

#[derive(Clone)]
pub struct AskQuestionUseCase {
    resolver: ResolveAnswerUseCase,
    repository: Arc<dyn HelpdeskRepository>,
}

impl AskQuestionUseCase {
    pub fn new(resolver: ResolveAnswerUseCase, repository: Arc<dyn HelpdeskRepository>) -> Self {
        Self {
            resolver,
            repository,
        }
    }

    pub async fn execute(&self, input: AskQuestionInput) -> Result<ChatRecord, AskQuestionError> {
        let question = Question::new(input.question).map_err(|_| AskQuestionError::EmptyQuestion)?;
        info!(
            "Question from {}: {}",
            input.user,
            preview(question.content(), 80)
        );

        let answer = self.resolver.resolve(&question).await;
        let chat = NewChat::new(input.user, question.into_content(), answer);

        let record = self.repository.save_chat(chat).await.map_err(|e| {
            error!("Error processing chat: {}", e);
            AskQuestionError::Repository(e)
        })?;
        info!("Stored chat {} ({} answer)", record.id, record.source);
        Ok(record)
    }
}
