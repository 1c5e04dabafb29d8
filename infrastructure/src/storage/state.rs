//! In-memory record state shared by the repository implementations

use chrono::{DateTime, Utc};
use helpdesk_application::RepositoryError;
use helpdesk_domain::{
    ChatId, ChatRecord, FeedbackId, FeedbackRecord, FeedbackStats, NewChat, NewFeedback,
    RecentFeedback,
};
use serde::{Deserialize, Serialize};

/// One persisted line
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub(crate) enum StoredRecord {
    Chat(ChatRecord),
    Feedback(FeedbackRecord),
}

fn next_id(last: Option<u64>, kind: &'static str) -> Result<u64, RepositoryError> {
    match last {
        None => Ok(1),
        Some(id) => id.checked_add(1).ok_or(RepositoryError::IdsExhausted(kind)),
    }
}

/// Records in insertion order; each new id is one past the last stored id.
#[derive(Debug, Default)]
pub(crate) struct RecordState {
    chats: Vec<ChatRecord>,
    feedback: Vec<FeedbackRecord>,
}

impl RecordState {
    pub fn next_chat(
        &self,
        chat: NewChat,
        now: DateTime<Utc>,
    ) -> Result<ChatRecord, RepositoryError> {
        let id = next_id(self.chats.last().map(|c| c.id.0), "chat")?;
        Ok(chat.into_record(ChatId(id), now))
    }

    pub fn next_feedback(
        &self,
        feedback: NewFeedback,
        now: DateTime<Utc>,
    ) -> Result<FeedbackRecord, RepositoryError> {
        if self.find_chat(feedback.chat_id).is_none() {
            return Err(RepositoryError::ChatNotFound(feedback.chat_id));
        }
        let id = next_id(self.feedback.last().map(|f| f.id.0), "feedback")?;
        Ok(feedback.into_record(FeedbackId(id), now))
    }

    /// Add a record, as produced by `next_*` or read back from storage.
    pub fn apply(&mut self, record: StoredRecord) {
        match record {
            StoredRecord::Chat(chat) => self.chats.push(chat),
            StoredRecord::Feedback(feedback) => self.feedback.push(feedback),
        }
    }

    pub fn find_chat(&self, id: ChatId) -> Option<&ChatRecord> {
        self.chats.iter().find(|c| c.id == id)
    }

    pub fn stats(&self, user: &str) -> FeedbackStats {
        self.feedback.iter().filter(|f| f.user == user).collect()
    }

    pub fn recent(&self, user: &str, limit: usize) -> Vec<RecentFeedback> {
        // insertion order is creation order
        self.feedback
            .iter()
            .rev()
            .filter(|f| f.user == user)
            .filter_map(|f| {
                let chat = self.find_chat(f.chat_id)?;
                Some(RecentFeedback {
                    feedback: f.clone(),
                    chat: chat.clone(),
                })
            })
            .take(limit)
            .collect()
    }

    pub fn chat_count(&self) -> usize {
        self.chats.len()
    }

    pub fn feedback_count(&self) -> usize {
        self.feedback.len()
    }
}
