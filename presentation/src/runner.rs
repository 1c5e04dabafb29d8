//! Command runner shared by one-shot subcommands and the chat REPL
//!
//! Runs a use case, prints the formatted result to stdout and a user-facing
//! message to stderr on failure. Details of failures go to the log only.

use crate::output::formatter::{
    ASK_FAILED, DASHBOARD_FAILED, FEEDBACK_FAILED, INVALID_CHAT, OutputFormatter,
};
use crate::progress::Spinner;
use helpdesk_application::{
    AskQuestionError, AskQuestionInput, AskQuestionUseCase, ClassifyFeedbackUseCase,
    DashboardUseCase, SubmitFeedbackError, SubmitFeedbackInput, SubmitFeedbackUseCase,
};
use helpdesk_domain::{ChatId, ChatRecord, FeedbackRecord};
use tracing::debug;

/// User-facing message for a failed question
pub fn ask_error_message(error: &AskQuestionError) -> &'static str {
    match error {
        AskQuestionError::EmptyQuestion => "Please enter a question.",
        AskQuestionError::Repository(_) => ASK_FAILED,
    }
}

/// User-facing message for failed feedback
pub fn feedback_error_message(error: &SubmitFeedbackError) -> &'static str {
    match error {
        SubmitFeedbackError::EmptyFeedback => "Please enter some feedback.",
        SubmitFeedbackError::ChatNotFound(_) | SubmitFeedbackError::NotChatOwner(_) => {
            INVALID_CHAT
        }
        SubmitFeedbackError::Repository(_) => FEEDBACK_FAILED,
    }
}

/// The use cases a front end needs, bound to one user and one output format
pub struct CommandRunner {
    user: String,
    ask: AskQuestionUseCase,
    feedback: SubmitFeedbackUseCase,
    dashboard: DashboardUseCase,
    classifier: ClassifyFeedbackUseCase,
    formatter: Box<dyn OutputFormatter>,
    show_progress: bool,
}

impl CommandRunner {
    pub fn new(
        user: impl Into<String>,
        ask: AskQuestionUseCase,
        feedback: SubmitFeedbackUseCase,
        dashboard: DashboardUseCase,
        classifier: ClassifyFeedbackUseCase,
        formatter: Box<dyn OutputFormatter>,
    ) -> Self {
        Self {
            user: user.into(),
            ask,
            feedback,
            dashboard,
            classifier,
            formatter,
            show_progress: true,
        }
    }

    /// Set whether to show a spinner while answering
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    pub fn user(&self) -> &str {
        &self.user
    }

    /// Answer and store a question. Returns `None` after reporting a failure.
    pub async fn ask(&self, question: &str) -> Option<ChatRecord> {
        let spinner = Spinner::start("Looking up an answer...", self.show_progress);
        let result = self
            .ask
            .execute(AskQuestionInput::new(self.user.clone(), question))
            .await;
        spinner.finish();

        match result {
            Ok(chat) => {
                println!("{}", self.formatter.format_answer(&chat));
                Some(chat)
            }
            Err(e) => {
                debug!("Ask failed: {}", e);
                self.report(ask_error_message(&e));
                None
            }
        }
    }

    /// Classify and store feedback on `chat_id`
    pub async fn feedback(&self, chat_id: ChatId, text: &str) -> Option<FeedbackRecord> {
        let input = SubmitFeedbackInput::new(self.user.clone(), chat_id, text);
        match self.feedback.execute(input).await {
            Ok(record) => {
                println!("{}", self.formatter.format_feedback(&record));
                Some(record)
            }
            Err(e) => {
                debug!("Feedback failed: {}", e);
                self.report(feedback_error_message(&e));
                None
            }
        }
    }

    pub async fn dashboard(&self) -> bool {
        match self.dashboard.execute(&self.user).await {
            Ok(output) => {
                println!("{}", self.formatter.format_dashboard(&output));
                true
            }
            Err(e) => {
                debug!("Dashboard failed: {}", e);
                self.report(DASHBOARD_FAILED);
                false
            }
        }
    }

    /// Print the sentiment of `text` without storing anything
    pub fn classify(&self, text: &str) {
        let label = self.classifier.classify(text);
        println!("{}", self.formatter.format_sentiment(text, label));
    }

    fn report(&self, message: &str) {
        eprintln!("{}", self.formatter.format_error(message));
    }
}
