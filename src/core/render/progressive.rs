use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::viewport::Viewport;
use crate::core::render::cancellation::CancelToken;
use crate::core::render::pass::render_pass;
use crate::core::render::pass_plan::PassPlan;
use crate::core::render::ports::PointSampler;
use crate::core::render::progress::RenderProgress;
use std::sync::Mutex;

/// How a progressive run ended. Cancellation is the expected way a run is
/// cut short; there is no failure mode.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RenderOutcome {
    Completed,
    Cancelled,
}

/// Runs every pass of the plan, coarsest block first, against one viewport
/// snapshot.
///
/// The current pass (1-based) is published to `progress` before the pass
/// starts; `publish` fires after each pass completes, so a presenter can
/// wake up exactly when the buffer has gained a full refinement level.
/// A cancelled pass ends the run without touching later passes. The
/// in-progress flag is cleared on every exit path.
pub fn run_passes<C: CancelToken>(
    plan: &PassPlan,
    buffer: &Mutex<PixelBuffer>,
    viewport: &Viewport,
    sampler: &dyn PointSampler,
    progress: &RenderProgress,
    cancel: &C,
    publish: impl Fn(u32),
) -> RenderOutcome {
    progress.begin(plan.pass_count());

    let mut outcome = RenderOutcome::Completed;

    for (index, block_size) in plan.block_sizes().enumerate() {
        if cancel.is_cancelled() {
            outcome = RenderOutcome::Cancelled;
            break;
        }

        let pass = index as u32 + 1;
        progress.set_pass(pass);

        if !render_pass(buffer, viewport, block_size, sampler, cancel) {
            outcome = RenderOutcome::Cancelled;
            break;
        }

        publish(pass);
    }

    progress.finish();
    outcome
}
