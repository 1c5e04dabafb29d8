//! Text generator port
//!
//! Defines the interface for the hosted text-generation service that may
//! answer a question before the knowledge base is consulted.

use crate::config::Credential;
use async_trait::async_trait;

/// Outcome of one generation attempt.
///
/// Only [`GenerationOutcome::Accepted`] carries usable text; every other
/// variant tells the caller to fall back to the knowledge base.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationOutcome {
    /// Cleaned generated text, long enough to be shown
    Accepted(String),
    /// Model loading (503), timeout or transport failure
    TransientUpstreamFailure { reason: String },
    /// Any other non-success HTTP status
    UnexpectedStatus { status: u16 },
    /// Success status but the body had the wrong shape or too little text
    MalformedResponse { reason: String },
    /// The generator was not invoked because no credential is configured
    Unconfigured,
}

impl GenerationOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, GenerationOutcome::Accepted(_))
    }
}

/// Port for the external text-generation service.
///
/// Implementations never fail: every error is reported as a
/// [`GenerationOutcome`] variant.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Ask the service to answer `question` using `credential`
    async fn generate(&self, question: &str, credential: &Credential) -> GenerationOutcome;

    /// Human-readable name used in logs
    fn name(&self) -> &str;
}

/// Generator used when the external path is disabled outright.
pub struct NoTextGenerator;

#[async_trait]
impl TextGenerator for NoTextGenerator {
    async fn generate(&self, _question: &str, _credential: &Credential) -> GenerationOutcome {
        GenerationOutcome::Unconfigured
    }

    fn name(&self) -> &str {
        "none"
    }
}
