use crate::controllers::events::{InputEvent, Key, MouseButton};
use crate::controllers::ports::RenderEventSink;
use crate::controllers::render_events::RenderEvent;
use crate::controllers::session::RenderSession;
use crate::core::data::viewport::Viewport;
use crate::core::render::pass_plan::PassPlan;
use crate::core::render::ports::PointSampler;
use crate::core::render::progressive::{RenderOutcome, run_passes};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Condvar, Mutex};
use std::thread::{self, JoinHandle};
use std::time::Instant;

/// Range multiplier for a primary-button click.
pub const ZOOM_IN_FACTOR: f64 = 0.5;
/// Range multiplier for a secondary-button click.
pub const ZOOM_OUT_FACTOR: f64 = 2.0;

struct SharedState {
    session: Arc<RenderSession>,
    plan: PassPlan,
    sampler: Box<dyn PointSampler>,
    sink: Arc<dyn RenderEventSink>,
    generation: AtomicU64,
    last_completed_generation: AtomicU64,
    latest_request: Mutex<Option<(u64, Viewport)>>,
    wake: Condvar,
    shutdown: AtomicBool,
}

/// Serializes all rendering through one long-lived worker thread.
///
/// Viewport-changing input bumps the generation counter and replaces the
/// pending request; the running job's cancel token observes the bump at its
/// next block check and the worker drains to the newest snapshot. Because
/// there is only the one worker, a restarted render can never interleave
/// its buffer writes with the job it replaced.
pub struct RenderController {
    shared: Arc<SharedState>,
    worker: Option<JoinHandle<()>>,
}

impl RenderController {
    pub fn new(
        session: Arc<RenderSession>,
        plan: PassPlan,
        sampler: Box<dyn PointSampler>,
        sink: Arc<dyn RenderEventSink>,
    ) -> Self {
        let shared = Arc::new(SharedState {
            session,
            plan,
            sampler,
            sink,
            generation: AtomicU64::new(0),
            last_completed_generation: AtomicU64::new(0),
            latest_request: Mutex::new(None),
            wake: Condvar::new(),
            shutdown: AtomicBool::new(false),
        });

        let worker_shared = Arc::clone(&shared);

        let worker = thread::spawn(move || {
            Self::worker_loop(&worker_shared);
        });

        Self {
            shared,
            worker: Some(worker),
        }
    }

    #[must_use]
    pub fn session(&self) -> &Arc<RenderSession> {
        &self.shared.session
    }

    /// Requests a render of the given viewport snapshot, superseding any
    /// job still in flight.
    pub fn submit(&self, viewport: Viewport) -> u64 {
        let generation = self.shared.generation.fetch_add(1, Ordering::SeqCst) + 1;

        {
            let mut guard = self.shared.latest_request.lock().unwrap();
            *guard = Some((generation, viewport));
        }

        self.shared.wake.notify_one();

        generation
    }

    /// Reacts to one input event. Returns `false` once the caller should
    /// stop its loop and shut down.
    #[must_use]
    pub fn handle_event(&self, event: InputEvent) -> bool {
        match event {
            InputEvent::Quit | InputEvent::KeyPress(Key::Quit) => false,
            InputEvent::KeyPress(Key::Reset) => {
                self.shared.session.reset_view();
                self.submit(self.shared.session.viewport());
                true
            }
            InputEvent::MouseDown { button, x, y } => {
                let factor = match button {
                    MouseButton::Primary => ZOOM_IN_FACTOR,
                    MouseButton::Secondary => ZOOM_OUT_FACTOR,
                };

                match self.shared.session.zoom_at(x, y, factor) {
                    Ok(()) => {
                        self.submit(self.shared.session.viewport());
                    }
                    Err(err) => {
                        log::warn!("zoom at ({}, {}) refused: {}", x, y, err);
                    }
                }

                true
            }
        }
    }

    /// Stops the worker and waits for it to exit. Any in-flight job is
    /// cancelled at its next block check.
    pub fn shutdown(&mut self) {
        self.shared.shutdown.store(true, Ordering::Release);
        self.shared.wake.notify_one();

        if let Some(handle) = self.worker.take() {
            let _ = handle.join();
        }
    }

    /// Generation of the newest render that ran its full plan.
    #[must_use]
    pub fn last_completed_generation(&self) -> u64 {
        self.shared
            .last_completed_generation
            .load(Ordering::Acquire)
    }

    fn worker_loop(shared: &Arc<SharedState>) {
        loop {
            let (job_generation, viewport) = {
                let mut guard = shared.latest_request.lock().unwrap();
                loop {
                    if shared.shutdown.load(Ordering::Acquire) {
                        return;
                    }

                    if let Some(request) = guard.take() {
                        break request;
                    }

                    guard = shared.wake.wait(guard).unwrap();
                }
            };

            let cancel = || {
                shared.shutdown.load(Ordering::Relaxed)
                    || job_generation != shared.generation.load(Ordering::Relaxed)
            };

            log::debug!(
                "render generation {} starting: real [{}, {}] imag [{}, {}]",
                job_generation,
                viewport.real_min(),
                viewport.real_max(),
                viewport.imag_min(),
                viewport.imag_max()
            );

            let start = Instant::now();
            let outcome = run_passes(
                &shared.plan,
                shared.session.buffer(),
                &viewport,
                shared.sampler.as_ref(),
                shared.session.progress(),
                &cancel,
                |pass| {
                    shared.sink.present(RenderEvent::PassCompleted {
                        generation: job_generation,
                        pass,
                    });
                },
            );
            let duration = start.elapsed();

            log::debug!(
                "render generation {} {:?} after {} ms",
                job_generation,
                outcome,
                duration.as_millis()
            );

            if outcome == RenderOutcome::Completed {
                shared
                    .last_completed_generation
                    .store(job_generation, Ordering::Release);
            }

            shared.sink.present(RenderEvent::Finished {
                generation: job_generation,
                outcome,
                duration,
            });
        }
    }
}

impl Drop for RenderController {
    fn drop(&mut self) {
        self.shutdown();
    }
}
