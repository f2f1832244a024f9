use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::viewport::{Viewport, ViewportError, ZoomError};
use crate::core::render::progress::{ProgressSnapshot, RenderProgress};
use std::sync::Mutex;

/// The one shared state object of a running explorer: the viewport, the
/// fractal pixel buffer, and the render progress.
///
/// Exactly one session exists per program; the controller, the worker and
/// the presenter all hold it behind an `Arc`. The viewport is mutated only
/// on the foreground thread and handed to render jobs as a copied
/// snapshot, so a running pass never observes a half-applied zoom.
#[derive(Debug)]
pub struct RenderSession {
    viewport: Mutex<Viewport>,
    buffer: Mutex<PixelBuffer>,
    progress: RenderProgress,
}

impl RenderSession {
    pub fn new(width: u32, height: u32) -> Result<Self, ViewportError> {
        let viewport = Viewport::new(width, height)?;
        let buffer = PixelBuffer::new(width, height)
            .expect("viewport construction already validated the dimensions");

        Ok(Self {
            viewport: Mutex::new(viewport),
            buffer: Mutex::new(buffer),
            progress: RenderProgress::new(),
        })
    }

    /// A copy of the current viewport, suitable as a render snapshot.
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        *self.viewport.lock().unwrap()
    }

    pub fn zoom_at(&self, x: u32, y: u32, factor: f64) -> Result<(), ZoomError> {
        self.viewport.lock().unwrap().zoom_at(x, y, factor)
    }

    pub fn reset_view(&self) {
        self.viewport.lock().unwrap().reset();
    }

    #[must_use]
    pub fn buffer(&self) -> &Mutex<PixelBuffer> {
        &self.buffer
    }

    #[must_use]
    pub fn progress(&self) -> &RenderProgress {
        &self.progress
    }

    #[must_use]
    pub fn progress_snapshot(&self) -> ProgressSnapshot {
        self.progress.snapshot()
    }
}
