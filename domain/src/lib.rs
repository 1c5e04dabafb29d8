//! Domain layer for civic-helpdesk
//!
//! This crate contains the core help-desk logic: the rule-based knowledge
//! base, sentiment labelling, answer value objects and the records kept for
//! the dashboard. It has no dependencies on infrastructure or presentation
//! concerns.
//!
//! # Core Concepts
//!
//! ## Answers
//!
//! Every question receives an [`AnswerResult`], tagged with its
//! [`AnswerSource`]: either text from the external responder or a canned
//! answer from the [`knowledge`] base, which covers every question.
//!
//! ## Sentiment
//!
//! Feedback is scored by a [`PolarityEstimator`] and bucketed into a
//! [`SentimentLabel`].

pub mod answer;
pub mod core;
pub mod helpdesk;
pub mod knowledge;
pub mod prompt;
pub mod sentiment;

// Re-export commonly used types
pub use answer::{AnswerResult, AnswerSource, MIN_GENERATED_CHARS, accept_generated};
pub use core::{error::DomainError, question::Question, text::preview};
pub use helpdesk::{
    ChatId, ChatRecord, FeedbackId, FeedbackRecord, FeedbackStats, NewChat, NewFeedback,
    RecentFeedback,
};
pub use knowledge::{Category, KNOWLEDGE_BASE, KnowledgeEntry, OVERVIEW_ANSWER};
pub use prompt::{ASSISTANT_PERSONA, PromptTemplate};
pub use sentiment::{LexiconPolarity, PolarityEstimator, SentimentLabel};
