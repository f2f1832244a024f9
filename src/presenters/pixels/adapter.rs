use crate::controllers::ports::RenderEventSink;
use crate::controllers::render_events::RenderEvent;
use crate::input::gui::events::GuiEvent;
use std::sync::Mutex;
use winit::event_loop::EventLoopProxy;

/// Bridges the render worker to the winit loop: remembers the latest
/// worker event and pokes the event loop awake. Only the newest event
/// matters, since the pixels themselves are read from the shared buffer.
pub struct WakeAdapter {
    latest: Mutex<Option<RenderEvent>>,
    event_loop_proxy: EventLoopProxy<GuiEvent>,
}

impl RenderEventSink for WakeAdapter {
    fn present(&self, event: RenderEvent) {
        *self.latest.lock().unwrap() = Some(event);
        let _ = self.event_loop_proxy.send_event(GuiEvent::Wake);
    }
}

impl WakeAdapter {
    pub fn new(event_loop_proxy: EventLoopProxy<GuiEvent>) -> Self {
        Self {
            latest: Mutex::new(None),
            event_loop_proxy,
        }
    }

    pub fn take_latest(&self) -> Option<RenderEvent> {
        self.latest.lock().unwrap().take()
    }
}
