//! Persisted help-desk entities

use crate::answer::{AnswerResult, AnswerSource};
use crate::sentiment::SentimentLabel;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier of a stored chat exchange
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChatId(pub u64);

impl std::fmt::Display for ChatId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for ChatId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(ChatId)
    }
}

/// Identifier of a stored feedback entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeedbackId(pub u64);

impl std::fmt::Display for FeedbackId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A question together with the answer it received
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatRecord {
    pub id: ChatId,
    pub user: String,
    pub question: String,
    pub response: String,
    pub source: AnswerSource,
    pub created_at: DateTime<Utc>,
}

impl ChatRecord {
    pub fn is_owned_by(&self, user: &str) -> bool {
        self.user == user
    }
}

/// A chat exchange that has not been stored yet
#[derive(Debug, Clone, PartialEq)]
pub struct NewChat {
    pub user: String,
    pub question: String,
    pub response: String,
    pub source: AnswerSource,
}

impl NewChat {
    pub fn new(user: impl Into<String>, question: impl Into<String>, answer: AnswerResult) -> Self {
        let source = answer.source();
        Self {
            user: user.into(),
            question: question.into(),
            response: answer.into_text(),
            source,
        }
    }

    /// Attach storage identity and timestamp
    pub fn into_record(self, id: ChatId, created_at: DateTime<Utc>) -> ChatRecord {
        ChatRecord {
            id,
            user: self.user,
            question: self.question,
            response: self.response,
            source: self.source,
            created_at,
        }
    }
}

/// Free-text feedback on one chat exchange, with its sentiment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackRecord {
    pub id: FeedbackId,
    pub user: String,
    pub chat_id: ChatId,
    pub feedback_text: String,
    pub sentiment: SentimentLabel,
    pub created_at: DateTime<Utc>,
}

/// Feedback that has not been stored yet
#[derive(Debug, Clone, PartialEq)]
pub struct NewFeedback {
    pub user: String,
    pub chat_id: ChatId,
    pub feedback_text: String,
    pub sentiment: SentimentLabel,
}

impl NewFeedback {
    pub fn into_record(self, id: FeedbackId, created_at: DateTime<Utc>) -> FeedbackRecord {
        FeedbackRecord {
            id,
            user: self.user,
            chat_id: self.chat_id,
            feedback_text: self.feedback_text,
            sentiment: self.sentiment,
            created_at,
        }
    }
}
