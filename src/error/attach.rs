//! Attaching exit codes to errors

use super::types::{BoxError, CodedError};
use std::cell::RefCell;
use tracing::debug;

/// Attach `code` to `err`. No error stays no error.
#[must_use]
#[inline]
pub fn attach<E: Into<BoxError>>(code: i32, err: Option<E>) -> Option<CodedError> {
    err.map(|err| CodedError::new(code, err))
}

/// Replace the error in `slot` with one carrying `code`
///
/// An empty slot is left untouched.
#[inline]
pub fn attach_in_place(code: i32, slot: &mut Option<BoxError>) {
    if let Some(err) = slot.take() {
        *slot = Some(Box::new(CodedError::new(code, err)));
    }
}

/// Run `f` and attach `code` to whatever error it returns, on any path
///
/// ```
/// use exitpolicy::{codes, error::with_exit_code};
///
/// let result: Result<(), _> = with_exit_code(codes::IOERR, || {
///     std::fs::read("/definitely/not/here")?;
///     Ok::<_, std::io::Error>(())
/// });
/// assert_eq!(result.unwrap_err().code(), codes::IOERR);
/// ```
///
/// # Errors
///
/// Returns the error of `f`, wrapped in a [`CodedError`].
#[inline]
pub fn with_exit_code<T, E, F>(code: i32, f: F) -> Result<T, CodedError>
where
    F: FnOnce() -> Result<T, E>,
    E: Into<BoxError>,
{
    f().map_err(|err| CodedError::new(code, err))
}

/// Pins an exit code on a caller-owned error slot when dropped
///
/// Whatever error sits in the slot when the guard goes out of scope gets
/// wrapped exactly once, no matter which path left the scope.
///
/// ```
/// use exitpolicy::error::{BoxError, DeferredExitCode};
/// use std::cell::RefCell;
///
/// fn step(out: &RefCell<Option<BoxError>>, fail: bool) {
///     let _pin = DeferredExitCode::new(75, out);
///     if fail {
///         out.replace(Some("try again".into()));
///         return;
///     }
/// }
///
/// let slot = RefCell::new(None);
/// step(&slot, true);
/// let err: BoxError = slot.into_inner().unwrap();
/// let err: &(dyn std::error::Error + 'static) = &*err;
/// assert_eq!(exitpolicy::status(Some(err)), 75);
/// ```
#[derive(Debug)]
#[must_use = "the code is attached when the guard is dropped"]
pub struct DeferredExitCode<'slot> {
    code: i32,
    slot: &'slot RefCell<Option<BoxError>>,
}

impl<'slot> DeferredExitCode<'slot> {
    /// Guard that attaches `code` to whatever error `slot` holds when it is
    /// dropped
    #[inline]
    pub const fn new(code: i32, slot: &'slot RefCell<Option<BoxError>>) -> Self {
        Self { code, slot }
    }
}

impl Drop for DeferredExitCode<'_> {
    fn drop(&mut self) {
        // A slot still borrowed at drop time is left alone
        match self.slot.try_borrow_mut() {
            Ok(mut slot) => attach_in_place(self.code, &mut slot),
            Err(_) => debug!(
                code = self.code,
                "error slot still borrowed, exit code not attached"
            ),
        }
    }
}

/// Extension methods for attaching exit codes to `Result`s
pub trait ResultExt<T> {
    /// Attach `code` to the error side, leaving `Ok` untouched
    ///
    /// # Errors
    ///
    /// Returns the original error wrapped in a [`CodedError`].
    fn exit_code(self, code: i32) -> Result<T, CodedError>;
}

impl<T, E: Into<BoxError>> ResultExt<T> for Result<T, E> {
    #[inline]
    fn exit_code(self, code: i32) -> Result<T, CodedError> {
        self.map_err(|err| CodedError::new(code, err))
    }
}

/// Build a [`CodedError`] from a format string
///
/// `exit_error!(code, "fmt", args..)` creates a fresh message error;
/// `exit_error!(code, source = err, "fmt", args..)` additionally records
/// `err` as its cause.
#[macro_export]
macro_rules! exit_error {
    ($code:expr, source = $source:expr, $($arg:tt)+) => {
        $crate::error::CodedError::new(
            $code,
            $crate::error::Message::with_source(::std::format!($($arg)+), $source),
        )
    };
    ($code:expr, $($arg:tt)+) => {
        $crate::error::CodedError::new($code, $crate::error::Message::new(::std::format!($($arg)+)))
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;
    use std::io;

    #[test]
    fn test_attach_none_is_none() {
        assert!(attach::<io::Error>(127, None).is_none());
    }

    #[test]
    fn test_attach_some() {
        let err = attach(127, Some(io::Error::other("error"))).unwrap();
        assert_eq!(err.code(), 127);
    }

    #[test]
    fn test_attach_in_place() {
        let mut slot: Option<BoxError> = None;
        attach_in_place(127, &mut slot);
        assert!(slot.is_none());

        slot = Some("error".into());
        attach_in_place(127, &mut slot);
        let err = slot.unwrap();
        assert_eq!(err.downcast_ref::<CodedError>().map(CodedError::code), Some(127));
        assert_eq!(err.to_string(), "error");
    }

    #[test]
    fn test_guard_skips_empty_slot() {
        let slot = RefCell::new(None);
        {
            let _pin = DeferredExitCode::new(3, &slot);
        }
        assert!(slot.borrow().is_none());
    }

    #[test]
    fn test_guard_wraps_once() {
        let slot: RefCell<Option<BoxError>> = RefCell::new(Some("late".into()));
        {
            let _pin = DeferredExitCode::new(3, &slot);
        }
        let err = slot.into_inner().unwrap();
        let coded = err.downcast_ref::<CodedError>().unwrap();
        assert_eq!(coded.code(), 3);
        assert!(!coded.get_ref().is::<CodedError>());
    }

    #[test]
    fn test_guard_leaves_borrowed_slot_alone() {
        let slot: RefCell<Option<BoxError>> = RefCell::new(Some("busy".into()));
        let pin = DeferredExitCode::new(3, &slot);
        let held = slot.borrow_mut();
        drop(pin);
        drop(held);

        let err = slot.into_inner().unwrap();
        assert!(!err.is::<CodedError>());
        assert_eq!(err.to_string(), "busy");
    }

    #[test]
    fn test_exit_error_macro() {
        let err = exit_error!(64, "bad flag {}", "--x");
        assert_eq!(err.code(), 64);
        assert_eq!(err.to_string(), "bad flag --x");

        let err = exit_error!(74, source = io::Error::other("disk full"), "writing {}", "out.txt");
        assert_eq!(err.to_string(), "writing out.txt");
        let cause = err.source().and_then(|msg| msg.source()).unwrap();
        assert_eq!(cause.to_string(), "disk full");
    }
}
