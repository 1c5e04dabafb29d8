//! JSON output formatter

use crate::output::formatter::OutputFormatter;
use helpdesk_application::DashboardOutput;
use helpdesk_domain::{ChatRecord, FeedbackRecord, SentimentLabel};
use serde_json::{Value, json};

/// Formats help-desk results as pretty-printed JSON
pub struct JsonFormatter;

impl JsonFormatter {
    fn render(value: Value) -> String {
        serde_json::to_string_pretty(&value).unwrap_or_else(|_| "{}".to_string())
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_answer(&self, chat: &ChatRecord) -> String {
        Self::render(json!({
            "chat_id": chat.id,
            "question": chat.question,
            "response": chat.response,
            "source": chat.source,
            "created_at": chat.created_at,
        }))
    }

    fn format_feedback(&self, feedback: &FeedbackRecord) -> String {
        Self::render(json!({
            "feedback_id": feedback.id,
            "chat_id": feedback.chat_id,
            "sentiment": feedback.sentiment,
        }))
    }

    fn format_dashboard(&self, dashboard: &DashboardOutput) -> String {
        let recent: Vec<Value> = dashboard
            .recent
            .iter()
            .map(|entry| {
                json!({
                    "feedback_text": entry.feedback.feedback_text,
                    "sentiment": entry.feedback.sentiment,
                    "created_at": entry.feedback.created_at,
                    "chat_id": entry.chat.id,
                    "question": entry.chat.question,
                    "response": entry.chat.response,
                })
            })
            .collect();

        Self::render(json!({
            "user": dashboard.user,
            "stats": dashboard.stats,
            "recent": recent,
        }))
    }

    fn format_sentiment(&self, text: &str, label: SentimentLabel) -> String {
        Self::render(json!({ "text": text, "sentiment": label }))
    }

    fn format_error(&self, message: &str) -> String {
        Self::render(json!({ "error": message }))
    }
}
