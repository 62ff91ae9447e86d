//! Terminal output formatting
//!
//! Pure formatting: every function takes records and returns a `String`,
//! leaving printing to the CLI layer.

pub mod contact;
pub mod finance;
pub mod note;
pub mod task;
