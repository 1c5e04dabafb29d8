//! Progress indication while an answer is being prepared

pub mod spinner;

pub use spinner::Spinner;
