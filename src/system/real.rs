//! Real process termination using `std::process::exit`

use super::Process;

/// Production implementation of the Process trait
#[derive(Debug, Clone, Copy)]
pub struct RealProcess;

impl RealProcess {
    /// Create a new `RealProcess` instance
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for RealProcess {
    fn default() -> Self {
        Self::new()
    }
}

impl Process for RealProcess {
    fn exit(&self, code: i32) {
        std::process::exit(code)
    }
}
