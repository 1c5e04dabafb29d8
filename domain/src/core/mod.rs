//! Core domain concepts shared across all subdomains.
//!
//! - [`question::Question`]: a validated question posed to the help desk
//! - [`error::DomainError`]: domain-level errors
//! - [`text`]: small text helpers used when displaying records

pub mod error;
pub mod question;
pub mod text;
