//! Running a child program and propagating its exit status

use crate::codes;
use crate::error::{CodedError, check_status, with_exit_code};
use crate::exit_error;
use anyhow::Result;
use std::io;
use std::process::Command;
use tracing::{debug, info};

/// Run `command` with inherited stdio
///
/// A child that exits unsuccessfully yields a
/// [`ChildExitError`](crate::error::ChildExitError) carrying its status.
/// When `pinned` is set, every failure resolves to that code instead.
///
/// # Errors
///
/// Returns an error if:
/// - `command` is empty
/// - The program cannot be started
/// - The program exits unsuccessfully
pub fn run_program(command: &[String], pinned: Option<i32>) -> Result<()> {
    match pinned {
        Some(code) => Ok(with_exit_code(code, || execute(command))?),
        None => execute(command),
    }
}

fn execute(command: &[String]) -> Result<()> {
    let Some((program, args)) = command.split_first() else {
        return Err(exit_error!(codes::USAGE, "No program given").into());
    };

    info!("Executing: {}", command.join(" "));

    let status = Command::new(program)
        .args(args)
        .status()
        .map_err(|err| spawn_error(program, err))?;

    debug!("{} finished with {}", program, status);
    check_status(program.as_str(), status)?;

    Ok(())
}

/// Map a failure to start `program` onto a sysexits code
fn spawn_error(program: &str, err: io::Error) -> CodedError {
    let code = match err.kind() {
        io::ErrorKind::NotFound => codes::UNAVAILABLE,
        io::ErrorKind::PermissionDenied => codes::NOPERM,
        _ => codes::OSERR,
    };

    exit_error!(code, source = err, "Failed to start {program}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_error_codes() {
        let not_found = io::Error::from(io::ErrorKind::NotFound);
        assert_eq!(spawn_error("x", not_found).code(), codes::UNAVAILABLE);

        let denied = io::Error::from(io::ErrorKind::PermissionDenied);
        assert_eq!(spawn_error("x", denied).code(), codes::NOPERM);

        let other = io::Error::other("fork failed");
        let err = spawn_error("x", other);
        assert_eq!(err.code(), codes::OSERR);
        assert_eq!(err.to_string(), "Failed to start x");
    }

    #[test]
    fn test_empty_command() {
        let err = run_program(&[], None).unwrap_err();
        assert_eq!(crate::status_of(&Err::<(), _>(err)), codes::USAGE);
    }
}
