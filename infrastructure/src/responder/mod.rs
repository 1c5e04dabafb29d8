//! External responder: hosted text-generation adapter.
//!
//! Provides [`HuggingFaceResponder`], which implements the
//! [`TextGenerator`](helpdesk_application::TextGenerator) port over HTTP,
//! and [`resolver_from_config`] to wire it from configuration.

pub mod error;
mod huggingface;
mod resolver;
mod settings;

pub use error::ResponderError;
pub use huggingface::{HuggingFaceResponder, interpret_response};
pub use resolver::resolver_from_config;
pub use settings::{GenerationParameters, ResponderSettings};
