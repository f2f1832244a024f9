/// Custom user events for the GUI event loop.
#[derive(Debug, Clone)]
pub enum GuiEvent {
    /// The render worker has something new in the shared buffer; the
    /// handler decides whether a redraw is actually due.
    Wake,
}
