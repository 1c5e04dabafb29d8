//! Record storage: implementations of the
//! [`HelpdeskRepository`](helpdesk_application::HelpdeskRepository) port.

mod jsonl;
mod memory;
mod state;

pub use jsonl::JsonlRepository;
pub use memory::InMemoryRepository;
