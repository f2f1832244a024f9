use crate::controllers::render_events::RenderEvent;
use crate::core::data::pixel_buffer::PixelBuffer;
use std::path::Path;

/// Receives worker notifications; implemented by the GUI adapter (which
/// wakes the event loop) and by test sinks.
pub trait RenderEventSink: Send + Sync {
    fn present(&self, event: RenderEvent);
}

/// Sink for callers that render without a presenter attached.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiscardEvents;

impl RenderEventSink for DiscardEvents {
    fn present(&self, _event: RenderEvent) {}
}

/// Writes a finished buffer to a file in some image format.
pub trait FilePresenterPort {
    fn present(&self, buffer: &PixelBuffer, filepath: impl AsRef<Path>) -> std::io::Result<()>;
}
