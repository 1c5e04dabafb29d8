//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod ask_question;
pub mod classify_feedback;
pub mod dashboard;
pub mod resolve_answer;
pub mod submit_feedback;

#[cfg(test)]
pub(crate) mod test_support;
