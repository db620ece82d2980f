//! Chart rendering for the wavefunction panels
//!
//! Draws two side-by-side charts (electron left, proton right) sharing one
//! chart-space coordinate system: x in nanometers over the sampled extent,
//! y fixed to [-1.5, 1.5]. Each chart is a viewport into the same render
//! pass; the grid is a static line list, the waves are line strips
//! re-uploaded every frame.

use crate::graphics::GraphicsContext;
use crate::physics::{DisplaySnapshot, X_MAX};
use glam::Mat4;
use wgpu::util::DeviceExt;
use winit::dpi::PhysicalSize;

/// Chart x extent (nm), derived from the sampled position range
pub const X_SPAN_NM: f32 = (X_MAX * 1e9) as f32;

/// Fixed chart y extent (dimensionless amplitude)
pub const Y_LIMIT: f32 = 1.5;

// Logical-point layout reserved for the egui panels around the charts
const TOP_RESERVED_PT: f32 = 205.0;
const BOTTOM_RESERVED_PT: f32 = 150.0;
const SIDE_RESERVED_PT: f32 = 310.0;
const MARGIN_PT: f32 = 16.0;
const TITLE_RESERVED_PT: f32 = 26.0;

const BACKGROUND: wgpu::Color = wgpu::Color {
    r: 0.02,
    g: 0.02,
    b: 0.08,
    a: 1.0,
};

/// Vertex in chart space
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ChartVertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl ChartVertex {
    const ATTRIBS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
        0 => Float32x2,
        1 => Float32x4,
    ];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<ChartVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBS,
        }
    }
}

/// Chart-space projection uniform shared by both panels
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
struct ChartUniform {
    view_proj: [[f32; 4]; 4],
}

impl ChartUniform {
    fn new() -> Self {
        let proj = Mat4::orthographic_rh(0.0, X_SPAN_NM, -Y_LIMIT, Y_LIMIT, -1.0, 1.0);
        Self {
            view_proj: proj.to_cols_array_2d(),
        }
    }
}

/// Pixel rectangle of one chart panel
#[derive(Debug, Clone, Copy)]
pub struct ChartViewport {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Compute the two chart viewports for the current window size.
/// Space for the egui panels (controls on top, description below,
/// equations sidebar on the right) is reserved in logical points.
pub fn chart_viewports(size: PhysicalSize<u32>, pixels_per_point: f32) -> [ChartViewport; 2] {
    let width = size.width as f32;
    let height = size.height as f32;
    let margin = MARGIN_PT * pixels_per_point;

    let x0 = margin;
    let x1 = (width - SIDE_RESERVED_PT * pixels_per_point - margin).max(x0 + 2.0);
    let y0 = (TOP_RESERVED_PT + TITLE_RESERVED_PT) * pixels_per_point;
    let y1 = (height - BOTTOM_RESERVED_PT * pixels_per_point).max(y0 + 2.0);

    let panel_width = ((x1 - x0 - margin) / 2.0).max(1.0);
    let panel_height = (y1 - y0).max(1.0);

    let clamp = |vp: ChartViewport| ChartViewport {
        x: vp.x.clamp(0.0, width - 1.0),
        y: vp.y.clamp(0.0, height - 1.0),
        width: vp.width.min(width - vp.x.clamp(0.0, width - 1.0)).max(1.0),
        height: vp.height.min(height - vp.y.clamp(0.0, height - 1.0)).max(1.0),
    };

    [
        clamp(ChartViewport {
            x: x0,
            y: y0,
            width: panel_width,
            height: panel_height,
        }),
        clamp(ChartViewport {
            x: x0 + panel_width + margin,
            y: y0,
            width: panel_width,
            height: panel_height,
        }),
    ]
}

/// Renderer for the two wavefunction charts
pub struct ChartRenderer {
    grid_pipeline: wgpu::RenderPipeline,
    wave_pipeline: wgpu::RenderPipeline,
    grid_buffer: wgpu::Buffer,
    grid_vertex_count: u32,
    wave_buffer: wgpu::Buffer,
    samples_per_trace: usize,
    chart_bind_group: wgpu::BindGroup,
}

impl ChartRenderer {
    pub fn new(ctx: &GraphicsContext, samples_per_trace: usize) -> Self {
        let device = &ctx.device;

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Wave Shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/waves.wgsl").into()),
        });

        let uniform = ChartUniform::new();
        let chart_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Chart Uniform Buffer"),
            contents: bytemuck::cast_slice(&[uniform]),
            usage: wgpu::BufferUsages::UNIFORM,
        });

        let chart_bind_group_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("Chart Bind Group Layout"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                }],
            });

        let chart_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Chart Bind Group"),
            layout: &chart_bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: chart_buffer.as_entire_binding(),
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Chart Pipeline Layout"),
            bind_group_layouts: &[&chart_bind_group_layout],
            push_constant_ranges: &[],
        });

        let make_pipeline = |label, topology| {
            device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                label: Some(label),
                layout: Some(&pipeline_layout),
                vertex: wgpu::VertexState {
                    module: &shader,
                    entry_point: "vs_line",
                    buffers: &[ChartVertex::layout()],
                    compilation_options: Default::default(),
                },
                fragment: Some(wgpu::FragmentState {
                    module: &shader,
                    entry_point: "fs_line",
                    targets: &[Some(wgpu::ColorTargetState {
                        format: ctx.config.format,
                        blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                        write_mask: wgpu::ColorWrites::ALL,
                    })],
                    compilation_options: Default::default(),
                }),
                primitive: wgpu::PrimitiveState {
                    topology,
                    strip_index_format: None,
                    front_face: wgpu::FrontFace::Ccw,
                    cull_mode: None,
                    polygon_mode: wgpu::PolygonMode::Fill,
                    unclipped_depth: false,
                    conservative: false,
                },
                depth_stencil: None,
                multisample: wgpu::MultisampleState::default(),
                multiview: None,
            })
        };

        let grid_pipeline = make_pipeline("Grid Pipeline", wgpu::PrimitiveTopology::LineList);
        let wave_pipeline = make_pipeline("Wave Pipeline", wgpu::PrimitiveTopology::LineStrip);

        let grid_vertices = build_grid_vertices();
        let grid_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Grid Buffer"),
            contents: bytemuck::cast_slice(&grid_vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let wave_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Wave Buffer"),
            size: (std::mem::size_of::<ChartVertex>() * samples_per_trace * 2) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        Self {
            grid_pipeline,
            wave_pipeline,
            grid_buffer,
            grid_vertex_count: grid_vertices.len() as u32,
            wave_buffer,
            samples_per_trace,
            chart_bind_group,
        }
    }

    /// Upload both wave traces to the GPU, positions mapped to nanometers
    pub fn upload_traces(
        &self,
        queue: &wgpu::Queue,
        snapshot: &DisplaySnapshot,
        positions: &[f64],
    ) {
        let mut vertices = Vec::with_capacity(self.samples_per_trace * 2);

        for trace in &snapshot.traces {
            let color = trace.particle.color();
            let n = trace.amplitudes.len().min(self.samples_per_trace);
            for i in 0..n {
                vertices.push(ChartVertex {
                    position: [(positions[i] * 1e9) as f32, trace.amplitudes[i] as f32],
                    color,
                });
            }
            // Pad short traces so draw ranges stay aligned
            while vertices.len() % self.samples_per_trace != 0 {
                let last = *vertices.last().unwrap_or(&ChartVertex {
                    position: [0.0, 0.0],
                    color,
                });
                vertices.push(last);
            }
        }

        queue.write_buffer(&self.wave_buffer, 0, bytemuck::cast_slice(&vertices));
    }

    /// Draw the grid and wave for both chart panels in a single pass
    pub fn render(
        &self,
        encoder: &mut wgpu::CommandEncoder,
        view: &wgpu::TextureView,
        viewports: &[ChartViewport; 2],
    ) {
        let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("Chart Render Pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(BACKGROUND),
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });

        render_pass.set_bind_group(0, &self.chart_bind_group, &[]);

        render_pass.set_pipeline(&self.grid_pipeline);
        render_pass.set_vertex_buffer(0, self.grid_buffer.slice(..));
        for viewport in viewports {
            render_pass.set_viewport(
                viewport.x,
                viewport.y,
                viewport.width,
                viewport.height,
                0.0,
                1.0,
            );
            render_pass.draw(0..self.grid_vertex_count, 0..1);
        }

        render_pass.set_pipeline(&self.wave_pipeline);
        render_pass.set_vertex_buffer(0, self.wave_buffer.slice(..));
        let n = self.samples_per_trace as u32;
        for (i, viewport) in viewports.iter().enumerate() {
            render_pass.set_viewport(
                viewport.x,
                viewport.y,
                viewport.width,
                viewport.height,
                0.0,
                1.0,
            );
            let start = i as u32 * n;
            render_pass.draw(start..start + n, 0..1);
        }
    }
}

/// Static chart furniture: border frame, gridlines, highlighted zero axis
fn build_grid_vertices() -> Vec<ChartVertex> {
    let frame_color = [0.45, 0.45, 0.55, 0.9];
    let grid_color = [0.25, 0.25, 0.35, 0.5];
    let axis_color = [0.55, 0.55, 0.65, 0.9];

    let mut vertices = Vec::new();
    let mut line = |x0: f32, y0: f32, x1: f32, y1: f32, color: [f32; 4]| {
        vertices.push(ChartVertex {
            position: [x0, y0],
            color,
        });
        vertices.push(ChartVertex {
            position: [x1, y1],
            color,
        });
    };

    // Vertical gridlines every 1 nm
    let mut x = 1.0;
    while x < X_SPAN_NM - 0.5 {
        line(x, -Y_LIMIT, x, Y_LIMIT, grid_color);
        x += 1.0;
    }

    // Horizontal gridlines every 0.5 amplitude
    let mut y = -1.0;
    while y <= 1.0 {
        let color = if y == 0.0 { axis_color } else { grid_color };
        line(0.0, y, X_SPAN_NM, y, color);
        y += 0.5;
    }

    // Border frame
    line(0.0, -Y_LIMIT, X_SPAN_NM, -Y_LIMIT, frame_color);
    line(X_SPAN_NM, -Y_LIMIT, X_SPAN_NM, Y_LIMIT, frame_color);
    line(X_SPAN_NM, Y_LIMIT, 0.0, Y_LIMIT, frame_color);
    line(0.0, Y_LIMIT, 0.0, -Y_LIMIT, frame_color);

    vertices
}
