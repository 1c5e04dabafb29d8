//! Prompt template for the external responder

/// Persona line placed in front of every question sent to the text-generation service
pub const ASSISTANT_PERSONA: &str =
    "As a government services assistant, please help with this question:";

/// Builds prompts for the hosted model
pub struct PromptTemplate;

impl PromptTemplate {
    /// Prefix the raw question with the assistant persona.
    pub fn government_services(question: &str) -> String {
        format!("{} {}", ASSISTANT_PERSONA, question)
    }
}
