fn main() {
    env_logger::init();

    mandelzoom::RunGuiCommand::new().execute();
}
