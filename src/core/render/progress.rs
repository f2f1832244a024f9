use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};

/// Shared render progress, written by the progressive driver on the worker
/// thread and read by the status overlay on the foreground thread.
///
/// The fields are independent atomics; no invariant spans more than one of
/// them, so a snapshot may pair a fresh pass number with a stale total for
/// one frame, which the overlay tolerates.
#[derive(Debug, Default)]
pub struct RenderProgress {
    in_progress: AtomicBool,
    current_pass: AtomicU32,
    total_passes: AtomicU32,
}

/// One coherent-enough read of the progress state.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ProgressSnapshot {
    pub in_progress: bool,
    pub current_pass: u32,
    pub total_passes: u32,
}

impl RenderProgress {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks a run of `total_passes` as started, before any pass begins.
    pub fn begin(&self, total_passes: u32) {
        self.total_passes.store(total_passes, Ordering::Relaxed);
        self.current_pass.store(0, Ordering::Relaxed);
        self.in_progress.store(true, Ordering::Release);
    }

    /// Records the 1-based pass now being rendered.
    pub fn set_pass(&self, pass: u32) {
        self.current_pass.store(pass, Ordering::Relaxed);
    }

    /// Clears the in-progress flag; pass counters keep their last values so
    /// the overlay can show how far a cancelled run got.
    pub fn finish(&self) {
        self.in_progress.store(false, Ordering::Release);
    }

    #[must_use]
    pub fn snapshot(&self) -> ProgressSnapshot {
        ProgressSnapshot {
            in_progress: self.in_progress.load(Ordering::Acquire),
            current_pass: self.current_pass.load(Ordering::Relaxed),
            total_passes: self.total_passes.load(Ordering::Relaxed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_idle() {
        let progress = RenderProgress::new();
        let snapshot = progress.snapshot();

        assert!(!snapshot.in_progress);
        assert_eq!(snapshot.current_pass, 0);
        assert_eq!(snapshot.total_passes, 0);
    }

    #[test]
    fn test_begin_resets_pass_and_sets_total() {
        let progress = RenderProgress::new();
        progress.begin(6);
        progress.set_pass(4);

        progress.begin(6);

        assert_eq!(
            progress.snapshot(),
            ProgressSnapshot {
                in_progress: true,
                current_pass: 0,
                total_passes: 6
            }
        );
    }

    #[test]
    fn test_set_pass_advances_current() {
        let progress = RenderProgress::new();
        progress.begin(6);
        progress.set_pass(3);

        assert_eq!(progress.snapshot().current_pass, 3);
    }

    #[test]
    fn test_finish_clears_flag_but_keeps_counters() {
        let progress = RenderProgress::new();
        progress.begin(6);
        progress.set_pass(6);

        progress.finish();

        assert_eq!(
            progress.snapshot(),
            ProgressSnapshot {
                in_progress: false,
                current_pass: 6,
                total_passes: 6
            }
        );
    }
}
