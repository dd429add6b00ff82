//! WebGPU surface and the single triangle-list pipeline
//!
//! The scene is rebuilt on the CPU every frame in canvas pixels; this module
//! only maps it to clip space and streams it into one growable vertex buffer.

use super::vertex::{Vertex, colors};

/// Vertices reserved up front (a full level with a busy particle field)
const INITIAL_VERTEX_CAPACITY: usize = 16 * 1024;

pub struct RenderState {
    pub surface: wgpu::Surface<'static>,
    pub device: wgpu::Device,
    pub queue: wgpu::Queue,
    pub config: wgpu::SurfaceConfiguration,
    pub pipeline: wgpu::RenderPipeline,
    vertex_buffer: wgpu::Buffer,
    /// Vertices the buffer can hold
    vertex_capacity: usize,
    /// Clip-space copy of the last scene, reused across frames
    scratch: Vec<Vertex>,
    /// Surface size in physical pixels
    pub size: (u32, u32),
    /// Playfield size in game units (CSS pixels)
    pub view: (f32, f32),
}

impl RenderState {
    pub async fn new(
        surface: wgpu::Surface<'static>,
        adapter: &wgpu::Adapter,
        width: u32,
        height: u32,
        view: (f32, f32),
    ) -> Result<Self, wgpu::RequestDeviceError> {
        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("neon-gravity-device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::downlevel_webgl2_defaults(),
                memory_hints: wgpu::MemoryHints::Performance,
                trace: Default::default(),
                experimental_features: Default::default(),
            })
            .await?;

        let caps = surface.get_capabilities(adapter);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: pick_format(&caps.formats),
            width,
            height,
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode: caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let pipeline = scene_pipeline(&device, config.format);
        let vertex_buffer = vertex_buffer(&device, INITIAL_VERTEX_CAPACITY);
        log::info!(
            "Renderer ready: {:?}, {}x{} px, view {:.0}x{:.0}",
            config.format,
            width,
            height,
            view.0,
            view.1
        );

        Ok(Self {
            surface,
            device,
            queue,
            config,
            pipeline,
            vertex_buffer,
            vertex_capacity: INITIAL_VERTEX_CAPACITY,
            scratch: Vec::with_capacity(INITIAL_VERTEX_CAPACITY),
            size: (width, height),
            view,
        })
    }

    /// Canvas resized; zero-sized surfaces are ignored
    pub fn resize(&mut self, width: u32, height: u32, view: (f32, f32)) {
        if width == 0 || height == 0 {
            return;
        }
        self.size = (width, height);
        self.view = view;
        self.config.width = width;
        self.config.height = height;
        self.surface.configure(&self.device, &self.config);
    }

    /// Reapply the current configuration after the surface was lost
    pub fn reconfigure(&mut self) {
        self.surface.configure(&self.device, &self.config);
    }

    /// Draw one frame of canvas-space vertices
    pub fn render(&mut self, vertices: &[Vertex]) -> Result<(), wgpu::SurfaceError> {
        let view = self.view;
        self.scratch.clear();
        self.scratch.extend(vertices.iter().map(|v| {
            let (x, y) = game_to_ndc(view, v.position[0], v.position[1]);
            Vertex::new(x, y, v.color)
        }));

        if self.scratch.len() > self.vertex_capacity {
            self.vertex_capacity = grown_capacity(self.vertex_capacity, self.scratch.len());
            self.vertex_buffer = vertex_buffer(&self.device, self.vertex_capacity);
            log::debug!("Vertex buffer grown to {} vertices", self.vertex_capacity);
        }
        if !self.scratch.is_empty() {
            self.queue
                .write_buffer(&self.vertex_buffer, 0, bytemuck::cast_slice(&self.scratch));
        }

        let frame = self.surface.get_current_texture()?;
        let target = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("scene-encoder"),
            });

        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene-pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &target,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(clear_color()),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
                multiview_mask: None,
            });

            if !self.scratch.is_empty() {
                pass.set_pipeline(&self.pipeline);
                pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
                pass.draw(0..self.scratch.len() as u32, 0..1);
            }
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        frame.present();
        Ok(())
    }
}

/// Prefer an sRGB surface so the neon palette is not washed out
fn pick_format(formats: &[wgpu::TextureFormat]) -> wgpu::TextureFormat {
    formats
        .iter()
        .copied()
        .find(wgpu::TextureFormat::is_srgb)
        .unwrap_or(formats[0])
}

fn clear_color() -> wgpu::Color {
    let [r, g, b, a] = colors::BACKGROUND;
    wgpu::Color {
        r: r as f64,
        g: g as f64,
        b: b as f64,
        a: a as f64,
    }
}

fn vertex_buffer(device: &wgpu::Device, capacity: usize) -> wgpu::Buffer {
    device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("scene-vertices"),
        size: (capacity * std::mem::size_of::<Vertex>()) as wgpu::BufferAddress,
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}

/// Alpha-blended, unculled triangle list over `shader.wgsl`
fn scene_pipeline(device: &wgpu::Device, format: wgpu::TextureFormat) -> wgpu::RenderPipeline {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("scene-shader"),
        source: wgpu::ShaderSource::Wgsl(include_str!("shader.wgsl").into()),
    });
    let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("scene-layout"),
        bind_group_layouts: &[],
        immediate_size: 0,
    });

    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("scene-pipeline"),
        layout: Some(&layout),
        vertex: wgpu::VertexState {
            module: &shader,
            entry_point: Some("vs_main"),
            buffers: &[Vertex::desc()],
            compilation_options: Default::default(),
        },
        fragment: Some(wgpu::FragmentState {
            module: &shader,
            entry_point: Some("fs_main"),
            targets: &[Some(wgpu::ColorTargetState {
                format,
                blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: Default::default(),
        }),
        primitive: wgpu::PrimitiveState {
            topology: wgpu::PrimitiveTopology::TriangleList,
            cull_mode: None,
            ..Default::default()
        },
        depth_stencil: None,
        multisample: wgpu::MultisampleState::default(),
        multiview_mask: None,
        cache: None,
    })
}

/// Next buffer size that fits `needed` vertices (doubling)
fn grown_capacity(current: usize, needed: usize) -> usize {
    let mut capacity = current.max(1);
    while capacity < needed {
        capacity *= 2;
    }
    capacity
}

/// Map canvas coordinates (origin top-left, y down) to NDC (-1..1, y up)
pub fn game_to_ndc(view: (f32, f32), x: f32, y: f32) -> (f32, f32) {
    let (w, h) = view;
    (x / w * 2.0 - 1.0, 1.0 - y / h * 2.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_to_ndc_corners() {
        let view = (800.0, 600.0);
        assert_eq!(game_to_ndc(view, 0.0, 0.0), (-1.0, 1.0));
        assert_eq!(game_to_ndc(view, 800.0, 600.0), (1.0, -1.0));
        assert_eq!(game_to_ndc(view, 400.0, 300.0), (0.0, 0.0));
    }

    #[test]
    fn test_vertex_buffer_grows_by_doubling() {
        assert_eq!(grown_capacity(1024, 1000), 1024);
        assert_eq!(grown_capacity(1024, 1025), 2048);
        assert_eq!(grown_capacity(1024, 5000), 8192);
        assert_eq!(grown_capacity(0, 3), 4);
    }

    #[test]
    fn test_prefers_srgb_surface() {
        let formats = [
            wgpu::TextureFormat::Bgra8Unorm,
            wgpu::TextureFormat::Bgra8UnormSrgb,
        ];
        assert_eq!(pick_format(&formats), wgpu::TextureFormat::Bgra8UnormSrgb);
        assert_eq!(
            pick_format(&[wgpu::TextureFormat::Rgba8Unorm]),
            wgpu::TextureFormat::Rgba8Unorm
        );
    }
}
