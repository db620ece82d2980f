//! de Broglie Wavelength Visualizer
//!
//! Interactive comparison of electron and proton matter waves. Velocity
//! sliders feed λ = h/(m·v); each wavefunction sin(kx + φ) is redrawn as a
//! traveling wave, with the phase advancing on a fixed 50 ms tick.
//!
//! Controls:
//! - Sliders: adjust each particle's velocity
//! - Space: pause/resume the animation
//! - R: reset velocities to defaults

use debroglie::equations_ui::{
    draw_chart_titles, draw_control_panel, draw_description_panel, draw_equations_sidebar,
    DE_BROGLIE_EQUATIONS, DE_BROGLIE_VARIABLES,
};
use debroglie::graphics::GraphicsContext;
use debroglie::physics::{Particle, WaveModel, SAMPLE_COUNT};
use debroglie::renderer::{chart_viewports, ChartRenderer};
use winit::{
    event::{ElementState, Event, KeyEvent, WindowEvent},
    event_loop::ControlFlow,
    keyboard::{KeyCode, PhysicalKey},
};

/// Animation tick interval (s); each tick advances the phase one step
const TICK_SECONDS: f64 = 0.05;

struct EguiState {
    ctx: egui::Context,
    state: egui_winit::State,
    renderer: egui_wgpu::Renderer,
}

struct App {
    ctx: GraphicsContext,
    renderer: ChartRenderer,
    model: WaveModel,
    paused: bool,
    tick_accumulator: f64,
    egui: EguiState,
}

impl App {
    fn new(ctx: GraphicsContext) -> Self {
        let renderer = ChartRenderer::new(&ctx, SAMPLE_COUNT);
        let model = WaveModel::new();

        let egui_ctx = egui::Context::default();
        let egui_state = egui_winit::State::new(
            egui_ctx.clone(),
            egui::ViewportId::ROOT,
            &ctx.window,
            Some(ctx.window.scale_factor() as f32),
            None,
        );
        let egui_renderer = egui_wgpu::Renderer::new(&ctx.device, ctx.config.format, None, 1);

        Self {
            ctx,
            renderer,
            model,
            paused: false,
            tick_accumulator: 0.0,
            egui: EguiState {
                ctx: egui_ctx,
                state: egui_state,
                renderer: egui_renderer,
            },
        }
    }

    fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        self.ctx.resize(new_size);
    }

    /// Drain elapsed time in fixed ticks so the phase advances by exactly
    /// one step per 50 ms regardless of frame rate
    fn update(&mut self, dt: f64) {
        if self.paused {
            return;
        }

        self.tick_accumulator += dt;
        while self.tick_accumulator >= TICK_SECONDS {
            self.model.advance_phase();
            self.tick_accumulator -= TICK_SECONDS;
        }
    }

    fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        let output = self.ctx.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let pixels_per_point = self.ctx.pixels_per_point();
        let viewports = chart_viewports(self.ctx.size, pixels_per_point);
        let chart_rects = [0, 1].map(|i| {
            let vp = viewports[i];
            egui::Rect::from_min_size(
                egui::pos2(vp.x / pixels_per_point, vp.y / pixels_per_point),
                egui::vec2(vp.width / pixels_per_point, vp.height / pixels_per_point),
            )
        });

        // Build the UI first: slider edits land in the model before this
        // frame's snapshot is taken
        let raw_input = self.egui.state.take_egui_input(&self.ctx.window);
        let model = &mut self.model;
        let paused = self.paused;
        let full_output = self.egui.ctx.run(raw_input, |ctx| {
            draw_equations_sidebar(
                ctx,
                "Matter Waves",
                DE_BROGLIE_EQUATIONS,
                DE_BROGLIE_VARIABLES,
            );
            let changed = draw_control_panel(ctx, model, paused);
            if changed {
                log::debug!(
                    "velocity change: electron {:.0} m/s, proton {:.0} m/s",
                    model.velocity(Particle::Electron),
                    model.velocity(Particle::Proton),
                );
            }
            draw_description_panel(ctx);
            draw_chart_titles(ctx, &chart_rects);
        });

        let snapshot = self.model.snapshot();
        self.renderer
            .upload_traces(&self.ctx.queue, &snapshot, self.model.positions());

        self.egui
            .state
            .handle_platform_output(&self.ctx.window, full_output.platform_output);
        let tris = self
            .egui
            .ctx
            .tessellate(full_output.shapes, full_output.pixels_per_point);
        for (id, image_delta) in &full_output.textures_delta.set {
            self.egui
                .renderer
                .update_texture(&self.ctx.device, &self.ctx.queue, *id, image_delta);
        }

        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [self.ctx.size.width, self.ctx.size.height],
            pixels_per_point: full_output.pixels_per_point,
        };

        let mut encoder = self
            .ctx
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        self.renderer.render(&mut encoder, &view, &viewports);

        self.egui.renderer.update_buffers(
            &self.ctx.device,
            &self.ctx.queue,
            &mut encoder,
            &tris,
            &screen_descriptor,
        );
        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Egui Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Load,
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            self.egui
                .renderer
                .render(&mut render_pass, &tris, &screen_descriptor);
        }

        for id in &full_output.textures_delta.free {
            self.egui.renderer.free_texture(id);
        }

        self.ctx.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }

    fn handle_key(&mut self, key: KeyCode, state: ElementState) {
        if state != ElementState::Pressed {
            return;
        }

        match key {
            KeyCode::Space => self.paused = !self.paused,
            KeyCode::KeyR => self.model.reset(),
            _ => {}
        }
    }

    fn handle_window_event(&mut self, event: &WindowEvent) -> bool {
        self.egui
            .state
            .on_window_event(&self.ctx.window, event)
            .consumed
    }
}

fn main() {
    let (ctx, event_loop) = pollster::block_on(GraphicsContext::new(
        "de Broglie Wavelength - Electron and Proton",
        1280,
        800,
    ));

    let mut app = App::new(ctx);
    let mut last_time = std::time::Instant::now();

    event_loop
        .run(move |event, elwt| {
            elwt.set_control_flow(ControlFlow::Poll);

            match event {
                Event::WindowEvent { ref event, .. } => {
                    let consumed = app.handle_window_event(event);

                    if !consumed {
                        match event {
                            WindowEvent::CloseRequested => elwt.exit(),
                            WindowEvent::Resized(size) => app.resize(*size),
                            WindowEvent::KeyboardInput {
                                event:
                                    KeyEvent {
                                        physical_key: PhysicalKey::Code(key),
                                        state,
                                        ..
                                    },
                                ..
                            } => app.handle_key(*key, *state),
                            WindowEvent::RedrawRequested => {
                                let now = std::time::Instant::now();
                                let dt = (now - last_time).as_secs_f64().min(0.1);
                                last_time = now;

                                app.update(dt);
                                match app.render() {
                                    Ok(_) => {}
                                    Err(wgpu::SurfaceError::Lost) => app.resize(app.ctx.size),
                                    Err(wgpu::SurfaceError::OutOfMemory) => elwt.exit(),
                                    Err(e) => log::error!("Render error: {:?}", e),
                                }
                            }
                            _ => {}
                        }
                    }
                }
                Event::AboutToWait => {
                    app.ctx.window.request_redraw();
                }
                _ => {}
            }
        })
        .expect("Event loop error");
}
