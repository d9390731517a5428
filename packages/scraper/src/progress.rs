//! Progress reporting for page walks.
//!
//! [`crate::scrape_all`] reports one unit per page through
//! [`ProgressCallback`], keeping the library free of any terminal
//! rendering. `staff_directory_cli_utils` provides the `indicatif` bar.

use std::sync::Arc;

/// Receives progress updates from a scrape run.
pub trait ProgressCallback: Send + Sync {
    /// Set the total number of pages.
    fn set_total(&self, total: u64);

    /// Advance by `delta` pages.
    fn inc(&self, delta: u64);

    /// Show which page is being fetched.
    fn set_message(&self, msg: String);

    /// Mark the run as complete with a final message.
    fn finish(&self, msg: String);
}

/// Ignores every update. Used by tests and library callers without a
/// terminal.
pub struct NullProgress;

impl ProgressCallback for NullProgress {
    fn set_total(&self, _total: u64) {}
    fn inc(&self, _delta: u64) {}
    fn set_message(&self, _msg: String) {}
    fn finish(&self, _msg: String) {}
}

/// Returns a shared [`NullProgress`].
#[must_use]
pub fn null_progress() -> Arc<dyn ProgressCallback> {
    Arc::new(NullProgress)
}
