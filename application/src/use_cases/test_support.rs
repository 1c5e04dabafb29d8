//! Shared fakes for use case tests.

use crate::ports::helpdesk_repository::{HelpdeskRepository, RepositoryError};
use async_trait::async_trait;
use chrono::{Duration, TimeZone, Utc};
use helpdesk_domain::{
    ChatId, ChatRecord, FeedbackId, FeedbackRecord, FeedbackStats, NewChat, NewFeedback,
    RecentFeedback,
};
use std::sync::Mutex;

/// Vec-backed repository with deterministic, strictly increasing timestamps.
#[derive(Default)]
pub(crate) struct FakeRepository {
    pub chats: Mutex<Vec<ChatRecord>>,
    pub feedback: Mutex<Vec<FeedbackRecord>>,
    pub fail_writes: bool,
}

impl FakeRepository {
    pub fn failing() -> Self {
        Self {
            fail_writes: true,
            ..Default::default()
        }
    }

    fn tick(n: usize) -> chrono::DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap() + Duration::seconds(n as i64)
    }

    fn write_error() -> RepositoryError {
        RepositoryError::Io(std::io::Error::other("disk full"))
    }
}

#[async_trait]
impl HelpdeskRepository for FakeRepository {
    async fn save_chat(&self, chat: NewChat) -> Result<ChatRecord, RepositoryError> {
        if self.fail_writes {
            return Err(Self::write_error());
        }
        let mut chats = self.chats.lock().unwrap();
        let n = chats.len() + 1;
        let record = chat.into_record(ChatId(n as u64), Self::tick(n));
        chats.push(record.clone());
        Ok(record)
    }

    async fn find_chat(&self, id: ChatId) -> Result<Option<ChatRecord>, RepositoryError> {
        Ok(self.chats.lock().unwrap().iter().find(|c| c.id == id).cloned())
    }

    async fn save_feedback(
        &self,
        feedback: NewFeedback,
    ) -> Result<FeedbackRecord, RepositoryError> {
        if self.fail_writes {
            return Err(Self::write_error());
        }
        let mut entries = self.feedback.lock().unwrap();
        let n = entries.len() + 1;
        let record = feedback.into_record(FeedbackId(n as u64), Self::tick(1000 + n));
        entries.push(record.clone());
        Ok(record)
    }

    async fn feedback_stats(&self, user: &str) -> Result<FeedbackStats, RepositoryError> {
        let entries = self.feedback.lock().unwrap();
        Ok(entries.iter().filter(|f| f.user == user).collect())
    }

    async fn recent_feedback(
        &self,
        user: &str,
        limit: usize,
    ) -> Result<Vec<RecentFeedback>, RepositoryError> {
        let entries = self.feedback.lock().unwrap();
        let chats = self.chats.lock().unwrap();
        Ok(entries
            .iter()
            .rev()
            .filter(|f| f.user == user)
            .filter_map(|f| {
                let chat = chats.iter().find(|c| c.id == f.chat_id)?;
                Some(RecentFeedback {
                    feedback: f.clone(),
                    chat: chat.clone(),
                })
            })
            .take(limit)
            .collect())
    }
}
