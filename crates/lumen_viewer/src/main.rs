use std::sync::Arc;

use anyhow::Result;
use lumen_core::{color, config, Session};
use lumen_math::Vec2;
use lumen_render::{DrawList, RenderError, Renderer};
use lumen_tracer::trace_light;
use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

mod input;

use input::InputState;

/// Application state
struct App {
    window: Option<Arc<Window>>,
    renderer: Option<Renderer>,
    session: Session,
    input: InputState,
    draw_list: DrawList,
    /// Set when setup fails inside the event loop; returned from `main`.
    error: Option<anyhow::Error>,
}

impl App {
    fn new() -> Self {
        Self {
            window: None,
            renderer: None,
            session: Session::default(),
            input: InputState::new(1.0),
            draw_list: DrawList::new(),
            error: None,
        }
    }

    fn init(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let window_attrs = Window::default_attributes()
            .with_title(config::WINDOW_TITLE)
            .with_inner_size(LogicalSize::new(config::WINDOW_WIDTH, config::WINDOW_HEIGHT))
            .with_resizable(false);

        let window = Arc::new(event_loop.create_window(window_attrs)?);

        let scene_size = Vec2::new(config::WINDOW_WIDTH as f32, config::WINDOW_HEIGHT as f32);
        let renderer = pollster::block_on(Renderer::new(window.clone(), scene_size))?;

        self.input.set_scale_factor(window.scale_factor());
        self.window = Some(window);
        self.renderer = Some(renderer);

        log::info!("Window and renderer initialized");
        Ok(())
    }

    /// Build this frame's geometry: obstacles, then rays, then the light on top.
    fn build_frame(&mut self) {
        let scene = &self.session.scene;
        let list = &mut self.draw_list;

        list.clear();
        for obstacle in scene.obstacles() {
            list.fill_rect(obstacle.rect(), color::OBSTACLE);
        }
        trace_light(scene, &self.session.config, list);
        list.fill_circle(scene.light.position, scene.light.radius, color::LIGHT);
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        self.build_frame();

        let Some(renderer) = &mut self.renderer else {
            return;
        };

        match renderer.render(&self.draw_list, color::BACKGROUND) {
            Ok(()) => {}
            Err(RenderError::Surface(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated)) => {
                // Surface lost, reconfigure
                renderer.resize(renderer.size);
            }
            Err(RenderError::Surface(wgpu::SurfaceError::OutOfMemory)) => {
                log::error!("Out of memory!");
                event_loop.exit();
            }
            Err(e) => log::error!("Render error: {}", e),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if let Err(e) = self.init(event_loop) {
            log::error!("Failed to start: {:#}", e);
            self.error = Some(e);
            event_loop.exit();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                self.input.set_scale_factor(scale_factor);
            }
            WindowEvent::Resized(size) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize((size.width, size.height));
                }
            }
            WindowEvent::RedrawRequested => {
                self.redraw(event_loop);
            }
            event => {
                if let Some(input) = self.input.translate(&event) {
                    self.session.handle_event(input);
                }
            }
        }

        if !self.session.is_running() {
            log::info!("Closing window");
            event_loop.exit();
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("Starting Lumen");

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new();

    log::info!("Running event loop");
    event_loop.run_app(&mut app)?;

    match app.error.take() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
