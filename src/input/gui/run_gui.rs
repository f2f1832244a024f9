use crate::controllers::controller::RenderController;
use crate::controllers::session::RenderSession;
use crate::core::mandelbrot::evaluator::{DEFAULT_MAX_ITERATIONS, EscapeTimeEvaluator};
use crate::core::mandelbrot::palette::PolynomialPalette;
use crate::core::mandelbrot::sampler::MandelbrotSampler;
use crate::core::render::pass_plan::PassPlan;
use crate::input::gui::app::GuiApp;
use crate::input::gui::events::GuiEvent;
use crate::presenters::pixels::presenter::PixelsPresenter;
use std::sync::Arc;
use winit::{
    dpi::LogicalSize,
    event_loop::EventLoopBuilder,
    window::{Window, WindowBuilder},
};

/// Fractal buffer dimensions; the window is created to match and is not
/// resizable, so one buffer serves the whole run.
const WIDTH: u32 = 1280;
const HEIGHT: u32 = 720;

#[derive(Debug, Default)]
pub struct RunGuiCommand {}

impl RunGuiCommand {
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }

    pub fn execute(&self) {
        let event_loop = EventLoopBuilder::<GuiEvent>::with_user_event()
            .build()
            .expect("Failed to create event loop");

        let event_loop_proxy = event_loop.create_proxy();

        let window: &'static Window = Box::leak(Box::new(
            WindowBuilder::new()
                .with_title("Mandelbrot - left click: zoom in, right click: zoom out, R: reset, Q: quit")
                .with_inner_size(LogicalSize::new(f64::from(WIDTH), f64::from(HEIGHT)))
                .with_resizable(false)
                .build(&event_loop)
                .expect("Failed to create window"),
        ));

        let session = Arc::new(
            RenderSession::new(WIDTH, HEIGHT).expect("window dimensions are non-zero"),
        );

        let presenter = PixelsPresenter::new(window, WIDTH, HEIGHT, event_loop_proxy);

        let sampler = Box::new(MandelbrotSampler::new(
            EscapeTimeEvaluator::new(DEFAULT_MAX_ITERATIONS)
                .expect("default iteration cap is non-zero"),
            PolynomialPalette::new(DEFAULT_MAX_ITERATIONS),
        ));

        let controller = RenderController::new(
            Arc::clone(&session),
            PassPlan::standard(),
            sampler,
            presenter.share_adapter(),
        );

        // first frame starts rendering immediately, before any input
        controller.submit(session.viewport());
        log::info!("explorer started at {}x{}", WIDTH, HEIGHT);

        let app = GuiApp::new(window, &event_loop, session, controller, presenter);
        app.run(event_loop, window);
    }
}
