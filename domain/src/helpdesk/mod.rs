//! Help-desk records: answered questions, feedback on them and the
//! per-user dashboard summary.

pub mod entities;
pub mod stats;

pub use entities::{ChatId, ChatRecord, FeedbackId, FeedbackRecord, NewChat, NewFeedback};
pub use stats::{FeedbackStats, RecentFeedback};
