//! Running Bot - Main Entry Point
//!
//! Hosts the walking figure: owns the window, turns key presses into
//! config edits, and builds one frame per redraw. Each iteration runs
//! input handling, then the frame build, then the draw hand-off, strictly
//! in that order.

mod controls;

use anyhow::Result;
use tracing::{debug, error, info, trace};
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::PhysicalKey;
use winit::window::WindowId;

use walker_core::Timer;
use walker_platform::{InputState, KeyCode, Window};
use walker_scene::{
    Camera, DrawCommand, MeshHandle, ObjectUniforms, SceneConfig, ShadingUniforms, SphereMesh,
    build_frame,
};

const WINDOW_WIDTH: u32 = 1280;
const WINDOW_HEIGHT: u32 = 800;
/// Renderer id of the shared body sphere.
const BODY_MESH_ID: u32 = 0;

struct App {
    window: Option<Window>,
    input: InputState,
    timer: Timer,
    config: SceneConfig,
    camera: Camera,
    mesh: SphereMesh,
    mesh_handle: MeshHandle,
    frame_count: u64,
}

impl App {
    fn new() -> Result<Self> {
        let mesh = SphereMesh::body()?;
        let mesh_handle = mesh.handle(BODY_MESH_ID);
        info!(
            "Body mesh ready: {} vertices ({} bytes), {} indices",
            mesh.vertices.len(),
            mesh.vertex_bytes().len(),
            mesh_handle.index_count
        );

        Ok(Self {
            window: None,
            input: InputState::new(),
            timer: Timer::new(),
            config: SceneConfig::default(),
            camera: Camera::new(),
            mesh,
            mesh_handle,
            frame_count: 0,
        })
    }

    /// Apply this frame's key presses to the config.
    fn handle_input(&mut self) {
        let shift = self.input.shift();
        for &key in self.input.just_pressed() {
            if let Some(action) = controls::action_for(key, shift) {
                self.config.apply(action);
                debug!(?action, frame_speed = self.config.frame_speed, "Config edited");
            }
        }
    }

    /// Build the figure and hand its draw list off.
    fn render_frame(&mut self) -> walker_core::Result<()> {
        let frame_time = self.timer.tick();
        let elapsed_ms = self.timer.elapsed_millis();
        let eye = self.camera.eye_transform(&self.config.pose);

        let frame = build_frame(&self.config, elapsed_ms, &eye, self.mesh_handle)?;
        let draws = frame.draw_list()?;
        let shading = ShadingUniforms::from_config(&self.config);

        let aspect = self
            .window
            .as_ref()
            .and_then(Window::aspect_ratio)
            .unwrap_or(WINDOW_WIDTH as f32 / WINDOW_HEIGHT as f32);
        let projection = self.camera.projection_matrix(aspect);

        self.submit(&draws, &shading, projection);

        self.frame_count += 1;
        trace!(
            frame = self.frame_count,
            elapsed_ms,
            frame_ms = frame_time.as_secs_f32() * 1000.0,
            head_yaw = frame.angles.head_yaw,
            "Frame built"
        );
        Ok(())
    }

    /// Hand the frame to the GPU backend. Without one attached, this only
    /// reports what would be drawn.
    fn submit(&self, draws: &[DrawCommand], shading: &ShadingUniforms, projection: glam::Mat4) {
        let light = shading.light_position;
        let index_total: u32 = draws.iter().map(|d| d.mesh.index_count).sum();
        let uniform_bytes = draws.len() * ObjectUniforms::SIZE + ShadingUniforms::SIZE;
        trace!(
            draws = draws.len(),
            index_total,
            uniform_bytes,
            projection_m00 = projection.x_axis.x,
            light_z = light.z,
            sphere_vertices = self.mesh.vertices.len(),
            "Submitted draw list"
        );
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            match Window::new(event_loop, WINDOW_WIDTH, WINDOW_HEIGHT, "Running Bot") {
                Ok(window) => {
                    info!("Initialization complete, entering main loop");
                    self.window = Some(window);
                }
                Err(e) => {
                    error!("Failed to create window: {}", e);
                    event_loop.exit();
                }
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                info!("Close requested, shutting down");
                event_loop.exit();
            }
            WindowEvent::Resized(size) => {
                if let Some(ref mut window) = self.window {
                    window.resize(size.width, size.height);
                }
            }
            WindowEvent::RedrawRequested => {
                self.handle_input();
                if let Err(e) = self.render_frame() {
                    error!("Frame skipped: {}", e);
                }
                self.input.begin_frame();
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(key) = event.physical_key {
                    if key == KeyCode::Escape && event.state.is_pressed() {
                        info!("Escape pressed, shutting down");
                        event_loop.exit();
                    } else if event.state.is_pressed() {
                        self.input.on_key_pressed(key, event.repeat);
                    } else {
                        self.input.on_key_released(key);
                    }
                }
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(ref window) = self.window {
            window.request_redraw();
        }
    }
}

fn main() -> Result<()> {
    // Initialize logging
    walker_core::init_logging();
    info!("Starting Running Bot");

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new()?;
    event_loop.run_app(&mut app)?;

    Ok(())
}
