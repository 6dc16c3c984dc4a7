//! Per-frame rendering against a presentation surface.

use crate::device::GpuContext;
use crate::error::GpuError;
use crate::pipeline::FractalPipeline;
use crate::uniforms::ViewUniforms;

/// Owns a surface, the pipeline and the uniform buffer. One instance per
/// GPU canvas; recreated only if the canvas itself is replaced.
pub struct SurfaceRenderer {
    context: GpuContext,
    surface: wgpu::Surface<'static>,
    config: wgpu::SurfaceConfiguration,
    pipeline: FractalPipeline,
    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

impl SurfaceRenderer {
    /// Build the renderer for an HTML canvas. Only the wasm target can
    /// present to a canvas; elsewhere this reports the GPU path as
    /// unavailable.
    pub async fn for_canvas(
        canvas: web_sys::HtmlCanvasElement,
        width: u32,
        height: u32,
    ) -> Result<Self, GpuError> {
        #[cfg(target_arch = "wasm32")]
        {
            let instance = wgpu::Instance::new(wgpu::InstanceDescriptor {
                backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
                ..Default::default()
            });
            let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas))?;
            let context = GpuContext::for_surface(&instance, &surface).await?;
            Self::new(context, surface, width, height).await
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = (canvas, width, height);
            Err(GpuError::Unavailable(
                "canvas surfaces require the wasm32 target".into(),
            ))
        }
    }

    pub async fn new(
        context: GpuContext,
        surface: wgpu::Surface<'static>,
        width: u32,
        height: u32,
    ) -> Result<Self, GpuError> {
        let caps = surface.get_capabilities(&context.adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| f.is_srgb())
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| GpuError::Unavailable("surface reports no formats".into()))?;

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: width.max(1),
            height: height.max(1),
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: wgpu::CompositeAlphaMode::Auto,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&context.device, &config);

        let pipeline = FractalPipeline::new(&context.device, format).await?;

        let uniform_buffer = context.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("fractal_uniforms"),
            size: std::mem::size_of::<ViewUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group = context.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("fractal_bind_group"),
            layout: &pipeline.bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        Ok(Self {
            context,
            surface,
            config,
            pipeline,
            uniform_buffer,
            bind_group,
        })
    }

    /// Reconfigure the surface for new canvas dimensions. Zero-area sizes
    /// are remembered but not configured; `render` skips such frames.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.config.width = width;
        self.config.height = height;
        if width > 0 && height > 0 {
            self.surface.configure(&self.context.device, &self.config);
        }
    }

    /// Push the frame's uniforms and issue the single full-screen draw.
    ///
    /// A lost or outdated surface reconfigures and skips the frame;
    /// the next scheduled callback draws normally.
    pub fn render(&mut self, uniforms: &ViewUniforms) -> Result<(), GpuError> {
        if self.config.width == 0 || self.config.height == 0 {
            return Ok(());
        }

        self.context
            .queue
            .write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(uniforms));

        let frame = match self.surface.get_current_texture() {
            Ok(frame) => frame,
            Err(wgpu::SurfaceError::Lost) | Err(wgpu::SurfaceError::Outdated) => {
                self.surface.configure(&self.context.device, &self.config);
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        };

        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder =
            self.context
                .device
                .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                    label: Some("fractal_encoder"),
                });

        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("fractal_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            pass.set_pipeline(&self.pipeline.pipeline);
            pass.set_bind_group(0, &self.bind_group, &[]);
            pass.set_vertex_buffer(0, self.pipeline.vertex_buffer.slice(..));
            pass.draw(0..4, 0..1);
        }

        self.context.queue.submit(std::iter::once(encoder.finish()));
        frame.present();

        Ok(())
    }
}
