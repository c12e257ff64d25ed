//! `exitpolicy` - pick meaningful process exit codes for errors
//!
//! Errors can be handed to [`exit`] to terminate with a code chosen from the
//! kind and type of the error, or [`status`] can compute the code for later
//! use. A [`CodedError`](error::CodedError) pins an explicit code on an
//! error; codes survive any number of further wrapping layers.
//!
//! ```
//! use exitpolicy::{codes, error::ResultExt as _};
//!
//! fn load() -> Result<Vec<u8>, exitpolicy::error::CodedError> {
//!     std::fs::read("/definitely/not/here").exit_code(codes::NOINPUT)
//! }
//!
//! assert_eq!(exitpolicy::status_of(&load()), codes::NOINPUT);
//! ```
//!
//! The builtin rules are documented on [`resolver::Resolver`]. A custom
//! handler installed with [`set_handler`] (or on an explicit `Resolver`)
//! gets first refusal on every error.

pub mod cli;
pub mod codes;
pub mod error;
pub mod operations;
pub mod resolver;
pub mod system;

pub use resolver::{Resolver, clear_handler, exit, recognize, set_handler, status, status_of, terminate};

use anyhow::Result;
use cli::{Args, Commands};
use operations::{OutputFormat, explain, render_codes, run_program};

/// Main entry point for the exitpolicy command-line tool
///
/// # Errors
///
/// Returns the error of the selected subcommand.
pub fn run(args: &Args) -> Result<()> {
    match &args.command {
        Commands::Codes { format } => {
            let format = format.parse::<OutputFormat>()?;
            // Output to stdout (not using logging)
            println!("{}", render_codes(format)?);
            Ok(())
        }
        Commands::Explain { code } => {
            let info = explain(code)?;
            println!("{} {}: {}", info.code, info.name, info.description);
            Ok(())
        }
        Commands::Run { code, command } => run_program(command, *code),
    }
}
