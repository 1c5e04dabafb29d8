//! Prompt templates sent to the external text-generation service

pub mod template;

pub use template::{ASSISTANT_PERSONA, PromptTemplate};
