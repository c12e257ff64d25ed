//! Operations module
//!
//! The work behind each subcommand: listing codes, explaining a code and
//! running a child program

pub mod explain;
pub mod list;
pub mod run;

pub use explain::*;
pub use list::*;
pub use run::*;
