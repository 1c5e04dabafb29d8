//! Output formatter trait

use helpdesk_application::DashboardOutput;
use helpdesk_domain::{ChatRecord, FeedbackRecord, SentimentLabel};

/// Shown when a question could not be answered or stored
pub const ASK_FAILED: &str = "Sorry, there was an error processing your question. Please try again.";

/// Shown when feedback refers to a chat that is missing or belongs to someone else
pub const INVALID_CHAT: &str = "Invalid chat session.";

/// Shown when feedback could not be stored
pub const FEEDBACK_FAILED: &str = "Error submitting feedback. Please try again.";

/// Shown when the dashboard could not be read
pub const DASHBOARD_FAILED: &str = "Error loading dashboard. Please try again.";

/// Trait for formatting help-desk results
pub trait OutputFormatter: Send + Sync {
    /// Format an answered question
    fn format_answer(&self, chat: &ChatRecord) -> String;

    /// Format the confirmation for stored feedback
    fn format_feedback(&self, feedback: &FeedbackRecord) -> String;

    /// Format the per-user feedback summary
    fn format_dashboard(&self, dashboard: &DashboardOutput) -> String;

    /// Format a standalone sentiment classification
    fn format_sentiment(&self, text: &str, label: SentimentLabel) -> String;

    /// Format a user-facing error message
    fn format_error(&self, message: &str) -> String;
}
