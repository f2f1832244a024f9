use crate::controllers::controller::RenderController;
use crate::controllers::events::{InputEvent, Key, MouseButton};
use crate::controllers::session::RenderSession;
use crate::input::gui::events::GuiEvent;
use crate::presenters::pixels::presenter::PixelsPresenter;
use crate::presenters::status::status_lines;
use egui::Context;
use egui_winit::State as EguiWinitState;
use std::sync::Arc;
use std::time::{Duration, Instant};
use winit::{
    event::{ElementState, Event, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::Window,
};

/// The original presents at roughly 60 Hz; keep that cadence.
const FRAME_DELAY: Duration = Duration::from_millis(16);

/// Foreground side of the explorer: routes window events into controller
/// input events and recomposites the shared buffer plus overlay each frame.
pub struct GuiApp {
    session: Arc<RenderSession>,
    controller: RenderController,
    presenter: PixelsPresenter,
    egui_ctx: Context,
    egui_state: EguiWinitState,
    cursor_position: Option<(f32, f32)>,
}

impl GuiApp {
    pub fn new(
        window: &'static Window,
        event_loop: &EventLoop<GuiEvent>,
        session: Arc<RenderSession>,
        controller: RenderController,
        presenter: PixelsPresenter,
    ) -> Self {
        let egui_ctx = Context::default();
        let egui_state = EguiWinitState::new(
            egui_ctx.clone(),
            egui_ctx.viewport_id(),
            event_loop,
            Some(window.scale_factor() as f32),
            None, // max_texture_side, use default
        );

        Self {
            session,
            controller,
            presenter,
            egui_ctx,
            egui_state,
            cursor_position: None,
        }
    }

    pub fn run(mut self, event_loop: EventLoop<GuiEvent>, window: &'static Window) {
        event_loop
            .run(move |event, elwt| {
                elwt.set_control_flow(ControlFlow::WaitUntil(Instant::now() + FRAME_DELAY));

                match event {
                    Event::WindowEvent { event, .. } => {
                        let response = self.egui_state.on_window_event(window, &event);
                        if response.repaint {
                            window.request_redraw();
                        }
                        if response.consumed {
                            return;
                        }

                        self.handle_window_event(event, window, elwt);
                    }
                    Event::UserEvent(GuiEvent::Wake) => {
                        if let Some(render_event) = self.presenter.adapter().take_latest() {
                            log::trace!("worker event: {:?}", render_event);
                        }
                        window.request_redraw();
                    }
                    Event::AboutToWait => {
                        window.request_redraw();
                    }
                    _ => {}
                }
            })
            .expect("event loop terminated abnormally");
    }

    fn handle_window_event(
        &mut self,
        event: WindowEvent,
        window: &'static Window,
        elwt: &winit::event_loop::EventLoopWindowTarget<GuiEvent>,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                let _ = self.controller.handle_event(InputEvent::Quit);
                elwt.exit();
            }
            WindowEvent::Resized(size) => {
                self.presenter.resize_surface(size.width, size.height);
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor_position = Some((position.x as f32, position.y as f32));
            }
            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button,
                ..
            } => {
                self.handle_mouse_down(button);
            }
            WindowEvent::KeyboardInput { event, .. } if event.state == ElementState::Pressed => {
                if let Some(key) = translate_key(event.physical_key) {
                    if !self.controller.handle_event(InputEvent::KeyPress(key)) {
                        elwt.exit();
                    }
                }
            }
            WindowEvent::RedrawRequested => {
                let egui_output = self.update_overlay(window);

                {
                    let buffer = self.session.buffer().lock().unwrap();
                    self.presenter.copy_fractal(&buffer);
                }

                if let Err(err) = self.presenter.render(egui_output, &self.egui_ctx) {
                    log::error!("presentation failed: {}", err);
                    elwt.exit();
                }
            }
            _ => {}
        }
    }

    fn handle_mouse_down(&mut self, button: winit::event::MouseButton) {
        let button = match button {
            winit::event::MouseButton::Left => MouseButton::Primary,
            winit::event::MouseButton::Right => MouseButton::Secondary,
            _ => return,
        };

        let Some(position) = self.cursor_position else {
            return;
        };
        let Some((x, y)) = self.presenter.window_pos_to_pixel(position) else {
            return;
        };

        let _ = self
            .controller
            .handle_event(InputEvent::MouseDown { button, x, y });
    }

    fn update_overlay(&mut self, window: &Window) -> egui::FullOutput {
        let raw_input = self.egui_state.take_egui_input(window);
        let viewport = self.session.viewport();
        let progress = self.session.progress_snapshot();

        self.egui_ctx.run(raw_input, |ctx| {
            egui::Window::new("Status")
                .default_pos([10.0, 10.0])
                .resizable(false)
                .show(ctx, |ui| {
                    for line in status_lines(&viewport, progress) {
                        ui.monospace(line);
                    }
                });
        })
    }
}

fn translate_key(physical_key: PhysicalKey) -> Option<Key> {
    match physical_key {
        PhysicalKey::Code(KeyCode::KeyR) => Some(Key::Reset),
        PhysicalKey::Code(KeyCode::KeyQ) | PhysicalKey::Code(KeyCode::Escape) => Some(Key::Quit),
        _ => None,
    }
}
