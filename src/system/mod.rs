//! System abstraction for process termination
//!
//! Terminating the process is the one side effect this crate has. It goes
//! through the [`Process`] trait so tests can observe the chosen exit code
//! without ending the test binary.

pub mod mock;
pub mod real;

pub use mock::MockProcess;
pub use real::RealProcess;

/// Trait for terminating the current process
///
/// # Implementations
/// - `RealProcess`: Production implementation using `std::process::exit`
/// - `MockProcess`: Test implementation recording the requested codes
pub trait Process: Send + Sync {
    /// Terminate with `code`
    ///
    /// The production implementation never returns. Test doubles record
    /// the code and return normally.
    fn exit(&self, code: i32);
}
