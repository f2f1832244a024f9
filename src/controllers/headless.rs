use crate::controllers::ports::FilePresenterPort;
use crate::controllers::session::RenderSession;
use crate::core::mandelbrot::evaluator::EscapeTimeEvaluator;
use crate::core::mandelbrot::palette::PolynomialPalette;
use crate::core::mandelbrot::sampler::MandelbrotSampler;
use crate::core::render::cancellation::NeverCancel;
use crate::core::render::pass_plan::PassPlan;
use crate::core::render::progressive::{RenderOutcome, run_passes};
use std::path::Path;
use std::time::Instant;

const DEFAULT_WIDTH: u32 = 800;
const DEFAULT_HEIGHT: u32 = 600;
const DEFAULT_MAX_ITERATIONS: u32 = 256;

/// Renders the default view through the full pass plan, never cancelled,
/// and writes the finished buffer to a file. The non-interactive twin of
/// the GUI path, useful for smoke-testing the engine end to end.
pub struct HeadlessController<P: FilePresenterPort> {
    presenter: P,
    session: RenderSession,
    max_iterations: u32,
    rendered: bool,
}

impl<P: FilePresenterPort> HeadlessController<P> {
    pub fn new(presenter: P) -> Result<Self, Box<dyn std::error::Error>> {
        Self::with_dimensions(presenter, DEFAULT_WIDTH, DEFAULT_HEIGHT, DEFAULT_MAX_ITERATIONS)
    }

    pub fn with_dimensions(
        presenter: P,
        width: u32,
        height: u32,
        max_iterations: u32,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        Ok(Self {
            presenter,
            session: RenderSession::new(width, height)?,
            max_iterations,
            rendered: false,
        })
    }

    pub fn generate(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        let viewport = self.session.viewport();
        let plan = PassPlan::standard();

        log::info!(
            "rendering Mandelbrot set at {}x{}, {} iterations, {} passes",
            viewport.width(),
            viewport.height(),
            self.max_iterations,
            plan.pass_count()
        );

        let sampler = MandelbrotSampler::new(
            EscapeTimeEvaluator::new(self.max_iterations)?,
            PolynomialPalette::new(self.max_iterations),
        );

        let start = Instant::now();
        let outcome = run_passes(
            &plan,
            self.session.buffer(),
            &viewport,
            &sampler,
            self.session.progress(),
            &NeverCancel,
            |pass| log::debug!("pass {}/{} done", pass, plan.pass_count()),
        );

        debug_assert_eq!(outcome, RenderOutcome::Completed);
        log::info!("render finished in {:?}", start.elapsed());

        self.rendered = true;
        Ok(())
    }

    pub fn write(&self, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        if !self.rendered {
            return Ok(());
        }

        let buffer = self.session.buffer().lock().unwrap();
        self.presenter.present(&buffer, filepath)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::pixel_buffer::PixelBuffer;
    use std::sync::Mutex;

    struct RecordingPresenter {
        presented: Mutex<Option<(u32, u32, usize)>>,
    }

    impl FilePresenterPort for &RecordingPresenter {
        fn present(
            &self,
            buffer: &PixelBuffer,
            _filepath: impl AsRef<Path>,
        ) -> std::io::Result<()> {
            *self.presented.lock().unwrap() =
                Some((buffer.width(), buffer.height(), buffer.as_argb().len()));
            Ok(())
        }
    }

    #[test]
    fn test_generate_completes_the_full_plan() {
        let presenter = RecordingPresenter {
            presented: Mutex::new(None),
        };
        let mut controller =
            HeadlessController::with_dimensions(&presenter, 64, 48, 32).unwrap();

        controller.generate().unwrap();

        let snapshot = controller.session.progress_snapshot();
        assert!(!snapshot.in_progress);
        assert_eq!(snapshot.current_pass, 6);
        assert_eq!(snapshot.total_passes, 6);
    }

    #[test]
    fn test_write_before_generate_presents_nothing() {
        let presenter = RecordingPresenter {
            presented: Mutex::new(None),
        };
        let controller = HeadlessController::with_dimensions(&presenter, 64, 48, 32).unwrap();

        controller.write("unused.ppm").unwrap();

        assert!(presenter.presented.lock().unwrap().is_none());
    }

    #[test]
    fn test_write_after_generate_presents_the_buffer() {
        let presenter = RecordingPresenter {
            presented: Mutex::new(None),
        };
        let mut controller =
            HeadlessController::with_dimensions(&presenter, 64, 48, 32).unwrap();

        controller.generate().unwrap();
        controller.write("unused.ppm").unwrap();

        assert_eq!(*presenter.presented.lock().unwrap(), Some((64, 48, 64 * 48)));
    }
}
