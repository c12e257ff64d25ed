//! Exit code policy
//!
//! A [`Resolver`] picks the exit code for an error:
//!
//! 1. no error is always [`codes::OK`], without asking the handler
//! 2. a custom handler, if installed, gets first refusal
//! 3. a help request anywhere in the chain gives [`codes::HELP`]
//! 4. the first link carrying an explicit exit code gives that code
//! 5. anything else is [`codes::ERR`]

use super::chain::chain;
use crate::codes;
use crate::error::{ChildExitError, CodedError, ExitCodeError, HelpRequested};
use crate::system::Process;
use clap::error::ErrorKind;
use core::any::TypeId;
use core::fmt;
use std::error::Error as StdError;
use std::sync::Arc;
use tracing::{debug, trace};

/// Custom policy consulted before the builtin rules
///
/// Returns `Some(code)` when it decided the exit code for the error.
pub type Handler = dyn Fn(&(dyn StdError + 'static)) -> Option<i32> + Send + Sync;

type Probe = fn(&(dyn StdError + 'static)) -> Option<i32>;

fn probe<T: ExitCodeError + 'static>(link: &(dyn StdError + 'static)) -> Option<i32> {
    link.downcast_ref::<T>().map(ExitCodeError::exit_code)
}

/// Whether `link` is one of the known "help requested" sentinels
#[must_use]
pub fn is_help_request(link: &(dyn StdError + 'static)) -> bool {
    if link.is::<HelpRequested>() {
        return true;
    }

    link.downcast_ref::<clap::Error>().is_some_and(|err| {
        matches!(
            err.kind(),
            ErrorKind::DisplayHelp | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
        )
    })
}

/// Maps errors to exit codes
#[derive(Clone)]
pub struct Resolver {
    handler: Option<Arc<Handler>>,
    probes: Vec<(TypeId, Probe)>,
}

impl Resolver {
    /// A resolver without a custom handler that recognizes [`CodedError`],
    /// [`ChildExitError`] and `clap::Error`
    #[must_use]
    pub fn new() -> Self {
        Self {
            handler: None,
            probes: Vec::new(),
        }
        .recognize::<CodedError>()
        .recognize::<ChildExitError>()
        .recognize::<clap::Error>()
    }

    /// Install `handler` (builder pattern)
    #[must_use]
    #[inline]
    pub fn with_handler<F>(mut self, handler: F) -> Self
    where
        F: Fn(&(dyn StdError + 'static)) -> Option<i32> + Send + Sync + 'static,
    {
        self.set_handler(handler);
        self
    }

    /// Replace the custom handler
    #[inline]
    pub fn set_handler<F>(&mut self, handler: F)
    where
        F: Fn(&(dyn StdError + 'static)) -> Option<i32> + Send + Sync + 'static,
    {
        self.handler = Some(Arc::new(handler));
    }

    /// Remove the custom handler
    #[inline]
    pub fn clear_handler(&mut self) {
        self.handler = None;
    }

    /// Whether a custom handler is installed
    #[must_use]
    #[inline]
    pub fn has_handler(&self) -> bool {
        self.handler.is_some()
    }

    /// Treat links of type `T` as carrying an explicit exit code
    ///
    /// Types are consulted in registration order for each link.
    #[must_use]
    pub fn recognize<T: ExitCodeError + 'static>(mut self) -> Self {
        let id = TypeId::of::<T>();
        if !self.probes.iter().any(|(known, _)| *known == id) {
            self.probes.push((id, probe::<T>));
        }
        self
    }

    /// Pick the exit code for `err`; `None` means success
    #[must_use]
    pub fn status(&self, err: Option<&(dyn StdError + 'static)>) -> i32 {
        let Some(err) = err else {
            return codes::OK;
        };

        if let Some(handler) = self.handler.as_deref() {
            if let Some(code) = handler(err) {
                debug!(code, "exit code chosen by custom handler");
                return code;
            }
        }

        if chain(err).any(is_help_request) {
            debug!(code = codes::HELP, "help requested");
            return codes::HELP;
        }

        if let Some(code) = chain(err).find_map(|link| self.explicit_code(link)) {
            debug!(code, "exit code carried by error");
            return code;
        }

        trace!("no exit code information, using generic failure");
        codes::ERR
    }

    /// Pick the exit code for the outcome of an operation
    #[must_use]
    pub fn status_of<T, E>(&self, result: &Result<T, E>) -> i32
    where
        E: AsRef<dyn StdError + Send + Sync + 'static>,
    {
        match result {
            Ok(_) => codes::OK,
            Err(err) => {
                let err: &(dyn StdError + Send + Sync + 'static) = err.as_ref();
                self.status(Some(err))
            }
        }
    }

    /// Terminate `process` with the exit code for `err`
    #[inline]
    pub fn terminate(&self, process: &dyn Process, err: Option<&(dyn StdError + 'static)>) {
        process.exit(self.status(err));
    }

    fn explicit_code(&self, link: &(dyn StdError + 'static)) -> Option<i32> {
        self.probes.iter().find_map(|(_, probe)| probe(link))
    }
}

impl Default for Resolver {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Resolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Resolver")
            .field("handler", &self.handler.is_some())
            .field("probes", &self.probes.len())
            .finish()
    }
}
