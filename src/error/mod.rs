//! Error handling module
//!
//! Error types carrying exit codes, and helpers to attach codes to errors

pub mod attach;
pub mod types;

pub use attach::*;
pub use types::*;
