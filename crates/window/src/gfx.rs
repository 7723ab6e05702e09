use crate::config::WindowConfig;
use crate::error::PlatformError;
use std::sync::Arc;
use winit::window::Window;

/// The loop's view of the frame buffer: clear it, then present it.
///
/// The loop calls `clear` before the application renders and `present`
/// after. Split out as a trait so the frame cycle is testable without a
/// window or GPU.
pub(crate) trait FrameSink {
    fn clear(&mut self);
    fn present(&mut self);
}

/// wgpu-backed frame sink: owns the surface, device, and queue.
pub(crate) struct GpuSink {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    surface_config: wgpu::SurfaceConfiguration,
    sample_count: u32,
    msaa_target: Option<wgpu::TextureView>,
    // Acquired in clear, presented in present.
    pending: Option<wgpu::SurfaceTexture>,
}

impl GpuSink {
    pub(crate) fn new(window: Arc<Window>, config: &WindowConfig) -> Result<Self, PlatformError> {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        let surface = instance
            .create_surface(window)
            .map_err(PlatformError::CreateSurface)?;

        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::HighPerformance,
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        }))
        .ok_or(PlatformError::NoAdapter)?;

        let (device, queue) = pollster::block_on(adapter.request_device(
            &wgpu::DeviceDescriptor {
                label: Some("pyrite_device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
                memory_hints: Default::default(),
            },
            None,
        ))
        .map_err(PlatformError::RequestDevice)?;

        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .find(|f| f.is_srgb())
            .copied()
            .unwrap_or(caps.formats[0]);

        let present_mode = if config.vsync {
            wgpu::PresentMode::AutoVsync
        } else {
            wgpu::PresentMode::AutoNoVsync
        };

        let surface_config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: config.width.max(1),
            height: config.height.max(1),
            present_mode,
            alpha_mode: caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &surface_config);

        // wgpu only guarantees sample counts 1 and 4 for surface formats.
        let sample_count = if config.fsaa >= 4 { 4 } else { 1 };
        if sample_count != config.fsaa && config.fsaa > 1 {
            tracing::debug!("fsaa {} unsupported, using {}", config.fsaa, sample_count);
        }
        let msaa_target =
            (sample_count > 1).then(|| msaa_target(&device, &surface_config, sample_count));

        tracing::info!(
            "GPU initialized with {} backend",
            adapter.get_info().backend.to_str()
        );

        Ok(Self {
            surface,
            device,
            queue,
            surface_config,
            sample_count,
            msaa_target,
            pending: None,
        })
    }

    /// Reconfigure the surface (and multisample target) to a new size.
    pub(crate) fn resize(&mut self, width: u32, height: u32) {
        self.surface_config.width = width.max(1);
        self.surface_config.height = height.max(1);
        self.surface.configure(&self.device, &self.surface_config);
        if self.sample_count > 1 {
            self.msaa_target = Some(msaa_target(
                &self.device,
                &self.surface_config,
                self.sample_count,
            ));
        }
    }

    fn acquire(&mut self) -> Option<wgpu::SurfaceTexture> {
        match self.surface.get_current_texture() {
            Ok(frame) => Some(frame),
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                self.surface.configure(&self.device, &self.surface_config);
                match self.surface.get_current_texture() {
                    Ok(frame) => Some(frame),
                    Err(err) => {
                        tracing::error!("surface error after reconfigure: {err}");
                        None
                    }
                }
            }
            Err(err) => {
                tracing::error!("surface error: {err}");
                None
            }
        }
    }
}

impl FrameSink for GpuSink {
    fn clear(&mut self) {
        let Some(frame) = self.acquire() else {
            return;
        };
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("clear_encoder"),
            });
        {
            let (target, resolve) = match &self.msaa_target {
                Some(msaa) => (msaa, Some(&view)),
                None => (&view, None),
            };
            let _pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("clear_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: target,
                    resolve_target: resolve,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                ..Default::default()
            });
        }
        self.queue.submit(std::iter::once(encoder.finish()));
        self.pending = Some(frame);
    }

    fn present(&mut self) {
        if let Some(frame) = self.pending.take() {
            frame.present();
        }
    }
}

fn msaa_target(
    device: &wgpu::Device,
    config: &wgpu::SurfaceConfiguration,
    sample_count: u32,
) -> wgpu::TextureView {
    device
        .create_texture(&wgpu::TextureDescriptor {
            label: Some("msaa_target"),
            size: wgpu::Extent3d {
                width: config.width,
                height: config.height,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count,
            dimension: wgpu::TextureDimension::D2,
            format: config.format,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        })
        .create_view(&wgpu::TextureViewDescriptor::default())
}
