fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let presenter = mandelzoom::PpmFilePresenter::new();
    let mut controller = mandelzoom::HeadlessController::new(presenter)?;

    controller.generate()?;
    controller.write("output/mandelbrot.ppm")?;

    Ok(())
}
