//! Application-level configuration.
//!
//! - [`ResponderMode`]: whether the external responder is used, and with which [`Credential`]

pub mod responder_mode;

pub use responder_mode::{Credential, ResponderMode};
