//! Tracks metadata for a rendering session.

use crate::log;

/// Metadata for a rendering session.
///
/// The calling renderer creates a `Session` when it starts a rendering
/// transaction and passes it down to the filter pipeline.  The pipeline
/// consults it to decide whether to emit log messages.
#[derive(Clone)]
pub struct Session {
    log_enabled: bool,
}

impl Session {
    pub fn new() -> Self {
        Self {
            log_enabled: log::log_enabled(),
        }
    }

    pub fn log_enabled(&self) -> bool {
        self.log_enabled
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
