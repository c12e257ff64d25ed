//! Exit code resolution
//!
//! Inspects error chains and picks the exit code, with an optional custom
//! handler in front of the builtin rules

pub mod chain;
pub mod global;
pub mod policy;

pub use chain::{Chain, MAX_CHAIN_DEPTH, chain};
pub use global::{clear_handler, exit, recognize, set_handler, status, status_of, terminate};
pub use policy::{Handler, Resolver, is_help_request};
