//! Error types that carry exit codes

use crate::codes;
use std::error::Error as StdError;
use std::process::ExitStatus;
use thiserror::Error;

/// Boxed, thread-safe error used as the payload of a [`CodedError`]
pub type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// An error that knows which exit code the process should terminate with
///
/// Implemented by [`CodedError`], [`ChildExitError`] and `clap::Error`.
/// Other types become visible to a resolver once registered with
/// [`Resolver::recognize`](crate::resolver::Resolver::recognize).
pub trait ExitCodeError: StdError {
    /// The exit code this error asks for
    fn exit_code(&self) -> i32;
}

/// An error paired with the exit code it should produce
///
/// The carrier displays the message of the wrapped error unchanged and
/// reports it as its `source()`, so chain walkers still reach it.
#[derive(Error, Debug)]
#[error("{inner}")]
pub struct CodedError {
    code: i32,
    #[source]
    inner: BoxError,
}

impl CodedError {
    /// Wrap `err` so that it resolves to `code`
    #[inline]
    pub fn new<E: Into<BoxError>>(code: i32, err: E) -> Self {
        Self {
            code,
            inner: err.into(),
        }
    }

    /// The pinned exit code
    #[must_use]
    #[inline]
    pub const fn code(&self) -> i32 {
        self.code
    }

    /// The wrapped error
    #[must_use]
    #[inline]
    pub fn get_ref(&self) -> &(dyn StdError + Send + Sync + 'static) {
        &*self.inner
    }

    /// Drop the code and return the wrapped error
    #[must_use]
    #[inline]
    pub fn into_inner(self) -> BoxError {
        self.inner
    }
}

impl ExitCodeError for CodedError {
    #[inline]
    fn exit_code(&self) -> i32 {
        self.code
    }
}

impl AsRef<dyn StdError + Send + Sync + 'static> for CodedError {
    #[inline]
    fn as_ref(&self) -> &(dyn StdError + Send + Sync + 'static) {
        self
    }
}

/// A formatted message, optionally caused by another error
///
/// Built by the [`exit_error!`](crate::exit_error) macro.
#[derive(Error, Debug)]
#[error("{message}")]
pub struct Message {
    message: String,
    #[source]
    source: Option<BoxError>,
}

impl Message {
    /// A message without a cause
    #[inline]
    pub fn new<S: Into<String>>(message: S) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    /// A message caused by `source`
    #[inline]
    pub fn with_source<S: Into<String>, E: Into<BoxError>>(message: S, source: E) -> Self {
        Self {
            message: message.into(),
            source: Some(source.into()),
        }
    }
}

/// Sentinel signalling that help output was requested instead of work
///
/// Anywhere in an error chain it resolves to [`codes::HELP`], ahead of any
/// explicit exit code in the same chain.
#[derive(Error, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[error("help requested")]
pub struct HelpRequested;

/// A child process that did not exit successfully
#[derive(Error, Debug, Clone)]
#[error("{program} failed: {status}")]
pub struct ChildExitError {
    program: String,
    status: ExitStatus,
}

impl ChildExitError {
    /// The program that was run
    #[must_use]
    #[inline]
    pub fn program(&self) -> &str {
        &self.program
    }

    /// The status the child terminated with
    #[must_use]
    #[inline]
    pub const fn status(&self) -> ExitStatus {
        self.status
    }
}

impl ExitCodeError for ChildExitError {
    /// The child's own exit code. A child killed by a signal maps to
    /// `128 + signal` on Unix, following the shell convention.
    fn exit_code(&self) -> i32 {
        if let Some(code) = self.status.code() {
            return code;
        }

        #[cfg(unix)]
        {
            use std::os::unix::process::ExitStatusExt as _;
            if let Some(signal) = self.status.signal() {
                return 128 + signal;
            }
        }

        codes::ERR
    }
}

/// Turn an unsuccessful child status into a [`ChildExitError`]
///
/// # Errors
///
/// Returns an error if `status` is not a success.
#[inline]
pub fn check_status<S: Into<String>>(program: S, status: ExitStatus) -> Result<(), ChildExitError> {
    if status.success() {
        return Ok(());
    }

    Err(ChildExitError {
        program: program.into(),
        status,
    })
}

impl ExitCodeError for clap::Error {
    #[inline]
    fn exit_code(&self) -> i32 {
        clap::Error::exit_code(self)
    }
}
