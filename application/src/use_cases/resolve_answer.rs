//! Resolve Answer use case.
//!
//! Turns a question into an answer. When a credential is configured the
//! external [`TextGenerator`] is tried once; anything other than an accepted
//! generation falls through to the knowledge base, so this use case always
//! produces an answer and never fails.

use crate::config::ResponderMode;
use crate::ports::text_generator::{GenerationOutcome, TextGenerator};
use helpdesk_domain::{AnswerResult, Question, knowledge};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Use case for resolving a question into an answer.
#[derive(Clone)]
pub struct ResolveAnswerUseCase {
    generator: Arc<dyn TextGenerator>,
    mode: ResponderMode,
}

impl ResolveAnswerUseCase {
    pub fn new(generator: Arc<dyn TextGenerator>, mode: ResponderMode) -> Self {
        Self { generator, mode }
    }

    /// Knowledge-base-only resolver
    pub fn offline() -> Self {
        Self::new(
            Arc::new(crate::ports::text_generator::NoTextGenerator),
            ResponderMode::Unconfigured,
        )
    }

    pub fn mode(&self) -> &ResponderMode {
        &self.mode
    }

    /// Produce an answer for `question`.
    pub async fn resolve(&self, question: &Question) -> AnswerResult {
        let outcome = match &self.mode {
            ResponderMode::Unconfigured => {
                info!("No responder credential available, using rule-based responses");
                GenerationOutcome::Unconfigured
            }
            ResponderMode::Configured { credential } => {
                self.generator
                    .generate(question.content(), credential)
                    .await
            }
        };

        match outcome {
            GenerationOutcome::Accepted(text) => {
                debug!("Using generated answer from {}", self.generator.name());
                return AnswerResult::external(text);
            }
            GenerationOutcome::TransientUpstreamFailure { reason } => {
                info!("Responder temporarily unavailable ({}), using fallback", reason);
            }
            GenerationOutcome::UnexpectedStatus { status } => {
                warn!("Responder returned status {}, using fallback", status);
            }
            GenerationOutcome::MalformedResponse { reason } => {
                debug!("Responder output rejected ({}), using fallback", reason);
            }
            GenerationOutcome::Unconfigured => {}
        }

        Self::fallback(question)
    }

    /// Knowledge base answer for `question`, matched on its lower-cased form.
    pub fn fallback(question: &Question) -> AnswerResult {
        let lower = question.to_lowercase();
        debug!("Knowledge base category: {}", knowledge::categorize(&lower));
        AnswerResult::fallback(knowledge::match_answer(&lower))
    }
}
