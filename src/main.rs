//! # `exitpolicy`
//!
//! `exitpolicy` is a command-line companion to the `exitpolicy` library, which
//! maps errors to process exit codes.
//!
//! ## Features
//! - List the named exit codes (generic codes plus BSD sysexits).
//! - Explain a code given as a number or a name.
//! - Run a program and exit with the code its outcome maps to, optionally
//!   pinning a fixed code on any failure.
//!
//! ## Usage
//!
//! ```sh
//! exitpolicy codes --format json
//! exitpolicy explain EX_NOPERM
//! exitpolicy run --code 75 -- curl https://example.com
//! ```

use clap::Parser as _;
use exitpolicy::cli::Args;
use exitpolicy::system::{Process, RealProcess};
use tracing::error;
use tracing_subscriber::{EnvFilter, fmt};

fn main() {
    let process = RealProcess::new();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            // clap renders help, version and usage errors itself
            if let Err(print_err) = err.print() {
                eprintln!("{print_err}");
            }
            exitpolicy::terminate(&process, Some(&err));
            return;
        }
    };

    let log_level = if args.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();

    let result = exitpolicy::run(&args);
    if let Err(err) = &result {
        error!("{}", err);
    }

    process.exit(exitpolicy::status_of(&result));
}
