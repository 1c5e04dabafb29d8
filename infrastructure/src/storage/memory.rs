//! Process-local repository

use super::state::{RecordState, StoredRecord};
use async_trait::async_trait;
use helpdesk_application::{HelpdeskRepository, RepositoryError};
use helpdesk_domain::{
    ChatId, ChatRecord, FeedbackRecord, FeedbackStats, NewChat, NewFeedback, RecentFeedback,
};
use std::sync::{Mutex, MutexGuard};

/// Repository that keeps everything in memory; records are lost on exit.
#[derive(Default)]
pub struct InMemoryRepository {
    state: Mutex<RecordState>,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> Result<MutexGuard<'_, RecordState>, RepositoryError> {
        self.state.lock().map_err(|_| RepositoryError::Poisoned)
    }
}

#[async_trait]
impl HelpdeskRepository for InMemoryRepository {
    async fn save_chat(&self, chat: NewChat) -> Result<ChatRecord, RepositoryError> {
        let mut state = self.state()?;
        let record = state.next_chat(chat, chrono::Utc::now())?;
        state.apply(StoredRecord::Chat(record.clone()));
        Ok(record)
    }

    async fn find_chat(&self, id: ChatId) -> Result<Option<ChatRecord>, RepositoryError> {
        Ok(self.state()?.find_chat(id).cloned())
    }

    async fn save_feedback(
        &self,
        feedback: NewFeedback,
    ) -> Result<FeedbackRecord, RepositoryError> {
        let mut state = self.state()?;
        let record = state.next_feedback(feedback, chrono::Utc::now())?;
        state.apply(StoredRecord::Feedback(record.clone()));
        Ok(record)
    }

    async fn feedback_stats(&self, user: &str) -> Result<FeedbackStats, RepositoryError> {
        Ok(self.state()?.stats(user))
    }

    async fn recent_feedback(
        &self,
        user: &str,
        limit: usize,
    ) -> Result<Vec<RecentFeedback>, RepositoryError> {
        Ok(self.state()?.recent(user, limit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use helpdesk_domain::{AnswerResult, SentimentLabel};

    fn feedback(user: &str, chat_id: ChatId, sentiment: SentimentLabel) -> NewFeedback {
        NewFeedback {
            user: user.to_string(),
            chat_id,
            feedback_text: format!("{sentiment} feedback"),
            sentiment,
        }
    }

    #[tokio::test]
    async fn test_ids_are_sequential() {
        let repo = InMemoryRepository::new();
        let a = repo
            .save_chat(NewChat::new("alice", "q1", AnswerResult::fallback("a1")))
            .await
            .unwrap();
        let b = repo
            .save_chat(NewChat::new("alice", "q2", AnswerResult::fallback("a2")))
            .await
            .unwrap();
        assert_eq!(a.id, ChatId(1));
        assert_eq!(b.id, ChatId(2));
        assert_eq!(repo.find_chat(ChatId(2)).await.unwrap().unwrap().question, "q2");
        assert!(repo.find_chat(ChatId(3)).await.unwrap().is_none());
        assert!(repo.find_chat(ChatId(0)).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_feedback_requires_existing_chat() {
        let repo = InMemoryRepository::new();
        let err = repo
            .save_feedback(feedback("alice", ChatId(1), SentimentLabel::Positive))
            .await
            .unwrap_err();
        assert!(matches!(err, RepositoryError::ChatNotFound(ChatId(1))));
    }

    #[tokio::test]
    async fn test_stats_and_recent_are_per_user() {
        let repo = InMemoryRepository::new();
        repo.save_chat(NewChat::new("alice", "q", AnswerResult::fallback("a")))
            .await
            .unwrap();
        repo.save_chat(NewChat::new("bob", "q", AnswerResult::fallback("a")))
            .await
            .unwrap();
        repo.save_feedback(feedback("alice", ChatId(1), SentimentLabel::Positive))
            .await
            .unwrap();
        repo.save_feedback(feedback("alice", ChatId(1), SentimentLabel::Neutral))
            .await
            .unwrap();
        repo.save_feedback(feedback("bob", ChatId(2), SentimentLabel::Negative))
            .await
            .unwrap();

        let stats = repo.feedback_stats("alice").await.unwrap();
        assert_eq!((stats.positive, stats.negative, stats.neutral), (1, 0, 1));

        let recent = repo.recent_feedback("alice", 5).await.unwrap();
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].feedback.sentiment, SentimentLabel::Neutral);
        assert_eq!(recent[0].chat.user, "alice");

        assert_eq!(repo.recent_feedback("alice", 1).await.unwrap().len(), 1);
    }
}
