//! Output formatting for help-desk results

pub mod console;
pub mod formatter;
pub mod json;

pub use console::ConsoleFormatter;
pub use formatter::OutputFormatter;
pub use json::JsonFormatter;

#[cfg(test)]
pub(crate) mod test_support {
    use chrono::{TimeZone, Utc};
    use helpdesk_application::DashboardOutput;
    use helpdesk_domain::{
        AnswerSource, ChatId, ChatRecord, FeedbackId, FeedbackRecord, FeedbackStats,
        RecentFeedback, SentimentLabel,
    };

    pub fn chat(id: u64, source: AnswerSource) -> ChatRecord {
        ChatRecord {
            id: ChatId(id),
            user: "alice".to_string(),
            question: "Where do I vote?".to_string(),
            response: "Contact your local election office.".to_string(),
            source,
            created_at: Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap(),
        }
    }

    pub fn feedback(id: u64, sentiment: SentimentLabel) -> FeedbackRecord {
        FeedbackRecord {
            id: FeedbackId(id),
            user: "alice".to_string(),
            chat_id: ChatId(7),
            feedback_text: "very helpful".to_string(),
            sentiment,
            created_at: Utc.with_ymd_and_hms(2024, 3, 1, 9, 31, 0).unwrap(),
        }
    }

    pub fn dashboard() -> DashboardOutput {
        let entry = feedback(1, SentimentLabel::Positive);
        let stats: FeedbackStats = std::iter::once(&entry).collect();
        DashboardOutput {
            user: "alice".to_string(),
            stats,
            recent: vec![RecentFeedback {
                feedback: entry,
                chat: chat(7, AnswerSource::Fallback),
            }],
        }
    }
}
