use crate::controllers::ports::RenderEventSink;
use crate::core::data::colour::Colour;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::input::gui::events::GuiEvent;
use crate::presenters::pixels::adapter::WakeAdapter;
use egui::Context as EguiContext;
use egui_wgpu::Renderer as EguiRenderer;
use pixels::wgpu;
use pixels::{Pixels, SurfaceTexture};
use std::sync::Arc;
use winit::event_loop::EventLoopProxy;
use winit::window::Window;

/// Presents the shared fractal buffer through a `pixels` surface, with the
/// egui status overlay composited on top.
pub struct PixelsPresenter {
    pixels: Pixels<'static>,
    egui_renderer: EguiRenderer,
    adapter: Arc<WakeAdapter>,
    surface_width: u32,
    surface_height: u32,
}

impl PixelsPresenter {
    pub fn new(
        window: &'static Window,
        buffer_width: u32,
        buffer_height: u32,
        event_loop_proxy: EventLoopProxy<GuiEvent>,
    ) -> Self {
        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, window);

        let pixels = Pixels::new(buffer_width, buffer_height, surface_texture)
            .expect("Failed to create pixels surface");

        let egui_renderer = EguiRenderer::new(
            pixels.device(),
            pixels.render_texture_format(),
            None, // depth format
            1,    // msaa samples
        );

        Self {
            pixels,
            egui_renderer,
            adapter: Arc::new(WakeAdapter::new(event_loop_proxy)),
            surface_width: size.width,
            surface_height: size.height,
        }
    }

    /// The sink handed to the render controller.
    pub fn share_adapter(&self) -> Arc<dyn RenderEventSink> {
        Arc::clone(&self.adapter) as Arc<dyn RenderEventSink>
    }

    #[must_use]
    pub fn adapter(&self) -> &WakeAdapter {
        &self.adapter
    }

    /// Translates a physical cursor position into fractal buffer
    /// coordinates, or `None` when the cursor is outside the drawn area.
    #[must_use]
    pub fn window_pos_to_pixel(&self, position: (f32, f32)) -> Option<(u32, u32)> {
        self.pixels
            .window_pos_to_pixel(position)
            .ok()
            .map(|(x, y)| (x as u32, y as u32))
    }

    /// Copies the packed-ARGB fractal buffer into the RGBA frame.
    pub fn copy_fractal(&mut self, buffer: &PixelBuffer) {
        let frame = self.pixels.frame_mut();
        for (dst, &packed) in frame.chunks_exact_mut(4).zip(buffer.as_argb()) {
            let colour = Colour::from_argb(packed);
            dst[0] = colour.r;
            dst[1] = colour.g;
            dst[2] = colour.b;
            dst[3] = 255;
        }
    }

    pub fn resize_surface(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }

        self.surface_width = width;
        self.surface_height = height;
        self.pixels
            .resize_surface(width, height)
            .expect("Failed to resize surface");
    }

    /// Renders the scaled fractal frame, then the egui overlay on top.
    pub fn render(
        &mut self,
        egui_output: egui::FullOutput,
        egui_ctx: &EguiContext,
    ) -> Result<(), pixels::Error> {
        if self.surface_width == 0 || self.surface_height == 0 {
            return Ok(());
        }

        let clipped_primitives =
            egui_ctx.tessellate(egui_output.shapes, egui_ctx.pixels_per_point());

        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [self.surface_width, self.surface_height],
            pixels_per_point: egui_ctx.pixels_per_point(),
        };

        let textures_delta = egui_output.textures_delta;
        let egui_renderer = &mut self.egui_renderer;

        self.pixels.render_with(|encoder, render_target, context| {
            // the scaling pass draws the fractal frame
            context.scaling_renderer.render(encoder, render_target);

            for (id, delta) in &textures_delta.set {
                egui_renderer.update_texture(&context.device, &context.queue, *id, delta);
            }

            egui_renderer.update_buffers(
                &context.device,
                &context.queue,
                encoder,
                &clipped_primitives,
                &screen_descriptor,
            );

            {
                let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("egui"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view: render_target,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Load, // keep the fractal frame
                            store: wgpu::StoreOp::Store,
                        },
                    })],
                    depth_stencil_attachment: None,
                    ..Default::default()
                });

                egui_renderer.render(&mut render_pass, &clipped_primitives, &screen_descriptor);
            }

            for id in &textures_delta.free {
                egui_renderer.free_texture(id);
            }

            Ok(())
        })
    }
}
