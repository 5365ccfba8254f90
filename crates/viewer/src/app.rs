use std::sync::Arc;

use boxes::{MeshBatch, Scene};
use winit::application::ApplicationHandler;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::ActiveEventLoop;
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

use crate::game::FrameState;
use crate::render::Renderer;

pub struct App {
    scene: Scene,
    batch: MeshBatch,
    window: Option<Arc<Window>>,
    renderer: Option<Renderer>,
    frame: Option<FrameState>,
}

impl App {
    pub fn new(scene: Scene, batch: MeshBatch) -> Self {
        Self {
            scene,
            batch,
            window: None,
            renderer: None,
            frame: None,
        }
    }

    fn init_window(&mut self, event_loop: &ActiveEventLoop) -> anyhow::Result<()> {
        let attrs = Window::default_attributes()
            .with_title("Boxes")
            .with_inner_size(winit::dpi::LogicalSize::new(800, 600));

        let window = Arc::new(event_loop.create_window(attrs)?);
        self.window = Some(window.clone());

        let rt = tokio::runtime::Runtime::new()?;
        let clear_color = self.scene.config().clear_color;
        let renderer = rt.block_on(Renderer::new(window, &self.batch, clear_color))?;

        let aspect = renderer.size.width as f32 / renderer.size.height.max(1) as f32;
        self.frame = Some(FrameState::new(&self.scene, aspect));
        self.renderer = Some(renderer);

        log::info!(
            "Drawing {} boxes ({} indices) in one call",
            self.batch.len(),
            self.batch.index_count()
        );
        Ok(())
    }

    fn handle_key(&mut self, key: KeyCode, state: ElementState, event_loop: &ActiveEventLoop) {
        let Some(frame) = &mut self.frame else { return };
        let pressed = state == ElementState::Pressed;

        match key {
            KeyCode::Escape if pressed => event_loop.exit(),
            KeyCode::KeyR if pressed => frame.camera.reset(),
            _ => frame.input.set_key(key, pressed),
        }
    }

    fn handle_resize(&mut self, size: winit::dpi::PhysicalSize<u32>) {
        if let Some(renderer) = &mut self.renderer {
            renderer.resize(size);
        }
        if let Some(frame) = &mut self.frame {
            if size.height > 0 {
                frame.camera.aspect = size.width as f32 / size.height as f32;
            }
        }
    }

    fn handle_redraw(&mut self, event_loop: &ActiveEventLoop) {
        let (Some(renderer), Some(frame)) = (&mut self.renderer, &mut self.frame) else {
            return;
        };

        frame.update();
        renderer.update_uniforms(
            frame.world_matrix(),
            frame.camera.view_matrix(),
            frame.camera.projection_matrix(),
        );

        match renderer.render() {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost) => renderer.resize(renderer.size),
            Err(wgpu::SurfaceError::OutOfMemory) => event_loop.exit(),
            Err(e) => log::error!("Render error: {:?}", e),
        }

        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if let Err(e) = self.init_window(event_loop) {
            log::error!("Failed to start renderer: {e:#}");
            event_loop.exit();
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Resized(size) => self.handle_resize(size),
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(key) = event.physical_key {
                    self.handle_key(key, event.state, event_loop);
                }
            }
            WindowEvent::Focused(false) => {
                if let Some(frame) = &mut self.frame {
                    frame.input.clear();
                }
            }
            WindowEvent::RedrawRequested => self.handle_redraw(event_loop),
            _ => {}
        }
    }
}
