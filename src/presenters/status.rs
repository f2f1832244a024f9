use crate::core::data::viewport::{DEFAULT_REAL_MAX, DEFAULT_REAL_MIN, Viewport};
use crate::core::render::progress::ProgressSnapshot;

/// Formats the overlay lines: pass progress, both axis ranges, and the
/// magnification relative to the default view. Pure; how the lines get on
/// screen is the presenter's business.
#[must_use]
pub fn status_lines(viewport: &Viewport, progress: ProgressSnapshot) -> Vec<String> {
    let pass_line = if progress.in_progress {
        format!("Pass: {}/{}", progress.current_pass, progress.total_passes)
    } else {
        "Done".to_string()
    };

    let magnification = (DEFAULT_REAL_MAX - DEFAULT_REAL_MIN) / viewport.real_range();

    vec![
        pass_line,
        format!("X: [{:.6}, {:.6}]", viewport.real_min(), viewport.real_max()),
        format!("Y: [{:.6}, {:.6}]", viewport.imag_min(), viewport.imag_max()),
        format!("Zoom: {}x", format_magnitude(magnification)),
    ]
}

/// One decimal place, with k/M suffixes once the value leaves the
/// comfortably readable range.
fn format_magnitude(value: f64) -> String {
    if value >= 1e6 {
        format!("{:.1}M", value / 1e6)
    } else if value >= 1e3 {
        format!("{:.1}k", value / 1e3)
    } else {
        format!("{:.1}", value)
    }
}
