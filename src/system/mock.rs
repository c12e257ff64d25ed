//! Mock process implementation for testing

use super::Process;
use std::sync::{Arc, PoisonError, RwLock};
use tracing::debug;

/// Process double that records exit codes instead of exiting
///
/// Clones share the recorded codes, so a clone can be handed to the code
/// under test while the original is inspected afterwards.
///
/// # Example
/// ```
/// use exitpolicy::system::{MockProcess, Process};
///
/// let process = MockProcess::new();
/// process.exit(74);
///
/// assert_eq!(process.last_code(), Some(74));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockProcess {
    codes: Arc<RwLock<Vec<i32>>>,
}

impl MockProcess {
    /// Create a new `MockProcess` with no recorded exits
    #[must_use]
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Every code passed to `exit`, oldest first
    #[must_use]
    pub fn codes(&self) -> Vec<i32> {
        self.codes
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// The code of the most recent `exit` call
    #[must_use]
    pub fn last_code(&self) -> Option<i32> {
        self.codes
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .last()
            .copied()
    }
}

impl Process for MockProcess {
    fn exit(&self, code: i32) {
        debug!(code, "mock process exit");
        self.codes
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(code);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_in_order() {
        let process = MockProcess::new();
        assert_eq!(process.last_code(), None);

        process.exit(1);
        process.exit(2);

        assert_eq!(process.codes(), vec![1, 2]);
        assert_eq!(process.last_code(), Some(2));
    }

    #[test]
    fn test_clones_share_codes() {
        let process = MockProcess::new();
        let handle = process.clone();
        handle.exit(77);

        assert_eq!(process.last_code(), Some(77));
    }
}
