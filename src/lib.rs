mod controllers;
mod core;
mod input;
mod presenters;

pub use controllers::controller::{RenderController, ZOOM_IN_FACTOR, ZOOM_OUT_FACTOR};
pub use controllers::events::{InputEvent, Key, MouseButton};
pub use controllers::headless::HeadlessController;
pub use controllers::ports::{DiscardEvents, FilePresenterPort, RenderEventSink};
pub use controllers::render_events::RenderEvent;
pub use controllers::session::RenderSession;
pub use crate::core::data::colour::Colour;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::pixel_buffer::PixelBuffer;
pub use crate::core::data::point::Point;
pub use crate::core::data::viewport::{Viewport, ViewportError, ZoomError};
pub use crate::core::mandelbrot::evaluator::{DEFAULT_MAX_ITERATIONS, EscapeTimeEvaluator};
pub use crate::core::mandelbrot::palette::{ColourMap, PolynomialPalette};
pub use crate::core::mandelbrot::sampler::MandelbrotSampler;
pub use crate::core::render::cancellation::{CancelToken, NeverCancel};
pub use crate::core::render::pass::render_pass;
pub use crate::core::render::pass_plan::PassPlan;
pub use crate::core::render::ports::PointSampler;
pub use crate::core::render::progress::{ProgressSnapshot, RenderProgress};
pub use crate::core::render::progressive::{RenderOutcome, run_passes};
pub use presenters::file::ppm::PpmFilePresenter;
pub use presenters::status::status_lines;

#[cfg(feature = "gui")]
pub use input::gui::run_gui::RunGuiCommand;
