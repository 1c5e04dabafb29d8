//! Infrastructure layer for civic-helpdesk
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod responder;
pub mod storage;

// Re-export commonly used types
pub use config::{
    ConfigIssue, ConfigLoader, FileConfig, FileOutputConfig, FileResponderConfig,
    FileStorageConfig,
};
pub use responder::{
    HuggingFaceResponder, ResponderError, ResponderSettings, resolver_from_config,
};
pub use storage::{InMemoryRepository, JsonlRepository};
