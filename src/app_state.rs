use crate::config::ViewerConfig;
use crate::state::{GpuContext, InputState, QuadBuffers, ScreenBuffers};
use crate::texture::ImageTexture;
use crate::vertex::{QUAD_INDICES, QuadVertex};
use crate::view::{Rect, ScreenUniforms, ViewTransform};
use anyhow::{Context, Result};
use image::RgbaImage;
use std::sync::Arc;
use wgpu::util::DeviceExt;
use winit::dpi::PhysicalSize;
use winit::window::Window;

pub struct State {
    pub window: Arc<Window>,
    pub size: PhysicalSize<u32>,

    pub gpu: GpuContext,
    pub screen: ScreenBuffers,
    pub quad: QuadBuffers,
    pub image: ImageTexture,
    pub input: InputState,

    pub view: ViewTransform,
    pub background: wgpu::Color,
}

impl State {
    pub async fn new(
        window: Arc<Window>,
        image: &RgbaImage,
        view: ViewTransform,
        viewer_config: &ViewerConfig,
    ) -> Result<State> {
        let size = window.inner_size();

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::PRIMARY,
            ..Default::default()
        });

        let surface = instance
            .create_surface(window.clone())
            .context("failed to create window surface")?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .context("no compatible GPU adapter")?;

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
                label: None,
                memory_hints: Default::default(),
                trace: wgpu::Trace::Off,
            })
            .await
            .context("failed to open GPU device")?;

        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .find(|f| f.is_srgb())
            .or_else(|| surface_caps.formats.first())
            .copied()
            .context("surface reports no supported formats")?;

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: surface_caps
                .present_modes
                .first()
                .copied()
                .unwrap_or(wgpu::PresentMode::Fifo),
            alpha_mode: surface_caps
                .alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto),
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };

        surface.configure(&device, &config);

        let logical = size.to_logical::<f32>(window.scale_factor());
        let uniform = ScreenUniforms::new((logical.width, logical.height));

        let screen_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Screen Uniform Buffer"),
            contents: bytemuck::cast_slice(&[uniform]),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let screen_bind_group_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
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
                label: Some("screen_bind_group_layout"),
            });

        let screen_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            layout: &screen_bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: screen_buffer.as_entire_binding(),
            }],
            label: Some("screen_bind_group"),
        });

        let image_bind_group_layout = ImageTexture::bind_group_layout(&device);
        let image_texture = ImageTexture::upload(
            &device,
            &queue,
            &image_bind_group_layout,
            image,
            viewer_config.pixelated,
        )?;

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Blit Shader"),
            source: wgpu::ShaderSource::Wgsl(
                include_str!("../data/shaders/blit_shader.wgsl").into(),
            ),
        });

        let blit_pipeline_layout =
            device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("Blit Pipeline Layout"),
                bind_group_layouts: &[&screen_bind_group_layout, &image_bind_group_layout],
                push_constant_ranges: &[],
            });

        let blit_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Blit Pipeline"),
            layout: Some(&blit_pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[QuadVertex::desc()],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: config.format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState {
                count: 1,
                mask: !0,
                alpha_to_coverage_enabled: false,
            },
            multiview: None,
            cache: None,
        });

        let vertex = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Quad Vertex Buffer"),
            size: std::mem::size_of::<[QuadVertex; 4]>() as wgpu::BufferAddress,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let index = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Quad Index Buffer"),
            contents: bytemuck::cast_slice(&QUAD_INDICES),
            usage: wgpu::BufferUsages::INDEX,
        });

        let gpu = GpuContext {
            surface,
            device,
            queue,
            config,
            blit_pipeline,
        };

        let screen = ScreenBuffers {
            uniform,
            buffer: screen_buffer,
            bind_group: screen_bind_group,
        };

        let quad = QuadBuffers {
            vertex,
            index,
            count: QUAD_INDICES.len() as u32,
        };

        let [r, g, b, a] = viewer_config.background;

        let (tex_w, tex_h) = image_texture.size();
        log::info!(
            "Viewer ready: surface {}x{} ({:?}), texture {}x{}",
            size.width,
            size.height,
            surface_format,
            tex_w,
            tex_h
        );

        Ok(Self {
            window,
            size,
            gpu,
            screen,
            quad,
            image: image_texture,
            input: InputState::default(),
            view,
            background: wgpu::Color { r, g, b, a },
        })
    }

    pub fn window(&self) -> &Arc<Window> {
        &self.window
    }

    /// The surface rectangle in logical pixels, the unit every
    /// [`ViewTransform`] input uses.
    pub fn surface_rect(&self) -> Rect {
        let logical = self.size.to_logical::<f32>(self.window.scale_factor());
        Rect::from_size(logical.width, logical.height)
    }
}
