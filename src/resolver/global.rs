//! Process-wide default resolver
//!
//! Install a custom handler once, early in `main`, before errors are
//! resolved from several threads. Resolution works on a snapshot of the
//! resolver, so a handler swapped concurrently may or may not be seen.

use super::policy::Resolver;
use crate::error::ExitCodeError;
use crate::system::Process;
use std::error::Error as StdError;
use std::sync::{LazyLock, PoisonError, RwLock};

static DEFAULT: LazyLock<RwLock<Resolver>> = LazyLock::new(|| RwLock::new(Resolver::new()));

fn snapshot() -> Resolver {
    DEFAULT
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

fn update(f: impl FnOnce(&mut Resolver)) {
    let mut resolver = DEFAULT.write().unwrap_or_else(PoisonError::into_inner);
    f(&mut resolver);
}

/// Replace the custom handler of the default resolver
///
/// ```
/// use exitpolicy::{codes, error::ChildExitError};
///
/// exitpolicy::set_handler(|err| err.is::<ChildExitError>().then_some(codes::UNAVAILABLE));
/// # exitpolicy::clear_handler();
/// ```
#[inline]
pub fn set_handler<F>(handler: F)
where
    F: Fn(&(dyn StdError + 'static)) -> Option<i32> + Send + Sync + 'static,
{
    update(|resolver| resolver.set_handler(handler));
}

/// Remove the custom handler of the default resolver
#[inline]
pub fn clear_handler() {
    update(Resolver::clear_handler);
}

/// Make the default resolver treat `T` as carrying an exit code
#[inline]
pub fn recognize<T: ExitCodeError + 'static>() {
    update(|resolver| *resolver = resolver.clone().recognize::<T>());
}

/// Pick the exit code for `err` with the default resolver
#[must_use]
#[inline]
pub fn status(err: Option<&(dyn StdError + 'static)>) -> i32 {
    snapshot().status(err)
}

/// Pick the exit code for the outcome of an operation with the default
/// resolver
#[must_use]
#[inline]
pub fn status_of<T, E>(result: &Result<T, E>) -> i32
where
    E: AsRef<dyn StdError + Send + Sync + 'static>,
{
    snapshot().status_of(result)
}

/// Terminate `process` with the exit code for `err`
#[inline]
pub fn terminate(process: &dyn Process, err: Option<&(dyn StdError + 'static)>) {
    snapshot().terminate(process, err);
}

/// Exit the current process with the exit code for `err`
#[inline]
pub fn exit(err: Option<&(dyn StdError + 'static)>) -> ! {
    std::process::exit(status(err))
}
