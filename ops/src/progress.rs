//! Progress observation for batch operations.

/// Observer for batch operation progress.
///
/// Reporting is observational only: an observer cannot cancel the
/// batch or otherwise influence control flow.
pub trait Progress {
    /// Called once before the first write, with the operation label
    /// and the number of targets in the batch.
    fn begin(&mut self, label: &str, total: usize) {
        let _ = (label, total);
    }

    /// Called after each successful write, with the number of targets
    /// completed so far.
    fn worked(&mut self, completed: usize) {
        let _ = completed;
    }

    /// Called after the last write. Not called when a write fails.
    fn end(&mut self) {}
}

/// Progress observer that discards all reports.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl Progress for NoProgress {}
