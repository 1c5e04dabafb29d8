//! Console output formatter for help-desk results

use crate::output::formatter::OutputFormatter;
use colored::{ColoredString, Colorize};
use helpdesk_application::DashboardOutput;
use helpdesk_domain::{AnswerSource, ChatRecord, FeedbackRecord, SentimentLabel, preview};

/// Characters of the rated question shown per dashboard entry
const QUESTION_PREVIEW_CHARS: usize = 60;

/// Formats help-desk results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format an answer together with the id feedback should refer to
    pub fn format_answer(chat: &ChatRecord) -> String {
        let mut output = String::new();

        output.push_str(&format!("{} {}\n\n", "Q:".bold(), chat.question));
        output.push_str(&chat.response);
        output.push_str("\n\n");

        let source = match chat.source {
            AnswerSource::External => "generated answer".green(),
            AnswerSource::Fallback => "knowledge base".yellow(),
        };
        output.push_str(&format!(
            "{} {} {}\n",
            format!("[chat #{}]", chat.id).dimmed(),
            source,
            format!("(rate it with: feedback {} <text>)", chat.id).dimmed()
        ));

        output
    }

    pub fn format_feedback(feedback: &FeedbackRecord) -> String {
        format!(
            "Feedback submitted! Sentiment: {}\n",
            Self::label(feedback.sentiment)
        )
    }

    /// Format the dashboard: counts for every label, then recent feedback
    pub fn format_dashboard(dashboard: &DashboardOutput) -> String {
        let mut output = String::new();

        output.push_str(&Self::header(&format!("Dashboard: {}", dashboard.user)));
        output.push('\n');

        output.push_str(&Self::section_header("Feedback"));
        for label in SentimentLabel::ALL {
            output.push_str(&format!(
                "  {:<10} {}\n",
                Self::label(label),
                dashboard.stats.count(label)
            ));
        }
        output.push_str(&format!(
            "  {:<10} {}\n",
            "Total".bold(),
            dashboard.stats.total()
        ));

        output.push_str(&Self::section_header("Recent Feedback"));
        if dashboard.recent.is_empty() {
            output.push_str(&format!("  {}\n", "No feedback yet.".dimmed()));
        }
        for entry in &dashboard.recent {
            output.push_str(&format!(
                "\n  {} {}\n",
                Self::label(entry.feedback.sentiment),
                entry.feedback.feedback_text
            ));
            output.push_str(&format!(
                "    {} {}\n",
                format!("chat #{}:", entry.chat.id).dimmed(),
                preview(&entry.chat.question, QUESTION_PREVIEW_CHARS)
            ));
            output.push_str(&format!(
                "    {}\n",
                entry
                    .feedback
                    .created_at
                    .format("%Y-%m-%d %H:%M UTC")
                    .to_string()
                    .dimmed()
            ));
        }

        output.push_str(&Self::footer());
        output
    }

    pub fn format_sentiment(text: &str, label: SentimentLabel) -> String {
        format!(
            "{} {}\n",
            Self::label(label),
            format!("\"{}\"", preview(text, QUESTION_PREVIEW_CHARS)).dimmed()
        )
    }

    pub fn format_error(message: &str) -> String {
        message.red().to_string()
    }

    fn label(label: SentimentLabel) -> ColoredString {
        match label {
            SentimentLabel::Positive => label.title().green().bold(),
            SentimentLabel::Negative => label.title().red().bold(),
            SentimentLabel::Neutral => label.title().yellow().bold(),
        }
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_answer(&self, chat: &ChatRecord) -> String {
        Self::format_answer(chat)
    }

    fn format_feedback(&self, feedback: &FeedbackRecord) -> String {
        Self::format_feedback(feedback)
    }

    fn format_dashboard(&self, dashboard: &DashboardOutput) -> String {
        Self::format_dashboard(dashboard)
    }

    fn format_sentiment(&self, text: &str, label: SentimentLabel) -> String {
        Self::format_sentiment(text, label)
    }

    fn format_error(&self, message: &str) -> String {
        Self::format_error(message)
    }
}
