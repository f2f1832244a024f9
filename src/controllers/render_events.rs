use crate::core::render::progressive::RenderOutcome;
use std::time::Duration;

/// Notifications the render worker publishes to the presentation side.
///
/// The pixels themselves live in the shared session buffer; these events
/// only say when it is worth looking at it again.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RenderEvent {
    /// One full refinement level has landed in the buffer.
    PassCompleted { generation: u64, pass: u32 },
    /// The job ended, by finishing its plan or by being cancelled.
    Finished {
        generation: u64,
        outcome: RenderOutcome,
        duration: Duration,
    },
}
