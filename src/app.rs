use crate::app_state::State;
use crate::cli::CliArgs;
use crate::config::ViewerConfig;
use crate::view::ViewTransform;
use anyhow::{Context, Result};
use image::RgbaImage;
use std::sync::Arc;
use winit::{
    application::ApplicationHandler,
    dpi::{LogicalPosition, LogicalSize},
    event::*,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

pub const WINDOW_TITLE: &str = "Texture Viewer";

/// Decoded image and its transform, waiting for the window to exist.
struct PendingViewer {
    image: RgbaImage,
    view: ViewTransform,
}

struct App {
    config: ViewerConfig,
    pending: Option<PendingViewer>,
    state: Option<State>,
    error: Option<anyhow::Error>,
}

impl App {
    fn open(&mut self, event_loop: &ActiveEventLoop, pending: PendingViewer) -> Result<State> {
        let [width, height] = pending.view.surface_size();
        let [x, y] = self.config.window_position;

        let window_attributes = Window::default_attributes()
            .with_title(WINDOW_TITLE)
            .with_inner_size(LogicalSize::new(width as f64, height as f64))
            .with_position(LogicalPosition::new(x as f64, y as f64));

        let window = event_loop
            .create_window(window_attributes)
            .context("failed to create viewer window")?;

        log::info!("Opened {} at {}x{}", WINDOW_TITLE, width, height);

        pollster::block_on(State::new(
            Arc::new(window),
            &pending.image,
            pending.view,
            &self.config,
        ))
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() {
            return;
        }
        let Some(pending) = self.pending.take() else {
            return;
        };

        match self.open(event_loop, pending) {
            Ok(state) => {
                state.window().request_redraw();
                self.state = Some(state);
            }
            Err(e) => {
                log::error!("{:#}", e);
                self.error = Some(e);
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, window_id: WindowId, event: WindowEvent) {
        if let Some(state) = &mut self.state {
            if window_id == state.window().id() {
                if !state.input(&event) {
                    match event {
                        WindowEvent::CloseRequested
                        | WindowEvent::KeyboardInput {
                            event:
                                KeyEvent {
                                    state: ElementState::Pressed,
                                    physical_key: PhysicalKey::Code(KeyCode::Escape),
                                    ..
                                },
                            ..
                        } => event_loop.exit(),
                        WindowEvent::Resized(physical_size) => {
                            log::info!("WindowEvent::Resized: {}x{}", physical_size.width, physical_size.height);
                            state.resize(physical_size);
                        }
                        WindowEvent::ScaleFactorChanged { .. } => {
                            state.resize(state.window().inner_size());
                        }
                        WindowEvent::RedrawRequested => match state.render() {
                            Ok(_) => {}
                            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                                log::warn!("Surface lost, reconfiguring");
                                state.resize(state.size);
                                state.window().request_redraw();
                            }
                            Err(wgpu::SurfaceError::OutOfMemory) => {
                                log::error!("GPU out of memory");
                                event_loop.exit();
                            }
                            Err(e) => log::warn!("Frame skipped: {:?}", e),
                        },
                        _ => {}
                    }
                }
            }
        }
    }
}

/// Decodes the image named on the command line and runs the viewer until
/// its window closes.
pub fn run(args: CliArgs) -> Result<()> {
    env_logger::init();

    let config = args.resolve_config()?;

    let image = image::open(&args.image)
        .with_context(|| format!("failed to open image {}", args.image.display()))?
        .to_rgba8();
    let view = ViewTransform::with_config(&image, &config)
        .with_context(|| format!("cannot view {}", args.image.display()))?;

    log::info!(
        "Loaded {} ({}x{})",
        args.image.display(),
        image.width(),
        image.height()
    );

    let event_loop = EventLoop::new().context("failed to create event loop")?;
    event_loop.set_control_flow(ControlFlow::Wait);

    let mut app = App {
        config,
        pending: Some(PendingViewer { image, view }),
        state: None,
        error: None,
    };

    event_loop.run_app(&mut app).context("event loop terminated abnormally")?;

    match app.error.take() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
