//! Error types for the responder adapter

use thiserror::Error;

/// Errors raised while building the HTTP responder.
///
/// Request-time failures are never errors; they become
/// [`GenerationOutcome`](helpdesk_application::GenerationOutcome) variants.
#[derive(Error, Debug)]
pub enum ResponderError {
    #[error("Failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),

    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),
}
