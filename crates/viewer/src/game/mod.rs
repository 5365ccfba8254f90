mod input;

use std::time::{Duration, Instant};

use boxes::{CameraController, Scene, Spin};
use glam::Mat4;

pub use input::Input;

/// Per-window frame state: input, camera and the scene clock.
pub struct FrameState {
    pub input: Input,
    pub camera: CameraController,
    spin: Spin,
    started: Instant,
    last_frame_time: Option<Instant>,
}

impl FrameState {
    pub fn new(scene: &Scene, aspect: f32) -> Self {
        let config = scene.config();
        Self {
            input: Input::default(),
            camera: CameraController::new(config.camera, aspect),
            spin: config.spin,
            started: Instant::now(),
            last_frame_time: None,
        }
    }

    /// Advances the camera by the time since the previous frame.
    pub fn update(&mut self) {
        let now = Instant::now();
        let dt = self
            .last_frame_time
            .map(|t| now.duration_since(t).as_secs_f32())
            .unwrap_or(0.0)
            .min(0.1);
        self.last_frame_time = Some(now);

        self.camera.update(self.input.movements(), dt);
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    pub fn world_matrix(&self) -> Mat4 {
        self.spin.world_matrix(self.elapsed())
    }
}
