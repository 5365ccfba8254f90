use glam::{Mat4, Vec3};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraConfig {
    pub eye: Vec3,
    pub target: Vec3,
    pub fov: f32,
    pub near: f32,
    pub far: f32,
    pub move_speed: f32,
    pub turn_speed: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, -4.0),
            target: Vec3::ZERO,
            fov: 60.0_f32.to_radians(),
            near: 1.0,
            far: 10.0,
            move_speed: 2.0,
            turn_speed: 90.0_f32.to_radians(),
        }
    }
}

/// Movement intents, one per held key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Movement {
    Forward,
    Backward,
    Left,
    Right,
    Up,
    Down,
    TurnLeft,
    TurnRight,
    LookUp,
    LookDown,
}

/// Owns the camera position and orientation between frames.
#[derive(Debug, Clone)]
pub struct CameraController {
    config: CameraConfig,
    pub position: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub aspect: f32,
}

impl CameraController {
    const PITCH_LIMIT: f32 = 89.0_f32.to_radians();

    pub fn new(config: CameraConfig, aspect: f32) -> Self {
        let mut controller = Self {
            config,
            position: config.eye,
            yaw: 0.0,
            pitch: 0.0,
            aspect,
        };
        controller.reset();
        controller
    }

    pub fn config(&self) -> &CameraConfig {
        &self.config
    }

    /// Puts the camera back at the configured eye, facing the target.
    pub fn reset(&mut self) {
        self.position = self.config.eye;
        let dir = (self.config.target - self.config.eye).normalize_or(Vec3::Z);
        self.yaw = dir.x.atan2(dir.z);
        self.pitch = dir.y.asin().clamp(-Self::PITCH_LIMIT, Self::PITCH_LIMIT);
    }

    pub fn forward(&self) -> Vec3 {
        Vec3::new(
            self.yaw.sin() * self.pitch.cos(),
            self.pitch.sin(),
            self.yaw.cos() * self.pitch.cos(),
        )
        .normalize()
    }

    pub fn right(&self) -> Vec3 {
        self.forward().cross(Vec3::Y).normalize()
    }

    pub fn rotate(&mut self, delta_yaw: f32, delta_pitch: f32) {
        self.yaw += delta_yaw;
        self.pitch = (self.pitch + delta_pitch).clamp(-Self::PITCH_LIMIT, Self::PITCH_LIMIT);
    }

    pub fn update<I>(&mut self, held: I, dt: f32)
    where
        I: IntoIterator<Item = Movement>,
    {
        let mut movement = Vec3::ZERO;
        let (mut turn, mut look) = (0.0, 0.0);

        for intent in held {
            match intent {
                Movement::Forward => movement += self.forward(),
                Movement::Backward => movement -= self.forward(),
                Movement::Left => movement -= self.right(),
                Movement::Right => movement += self.right(),
                Movement::Up => movement += Vec3::Y,
                Movement::Down => movement -= Vec3::Y,
                Movement::TurnLeft => turn += 1.0,
                Movement::TurnRight => turn -= 1.0,
                Movement::LookUp => look += 1.0,
                Movement::LookDown => look -= 1.0,
            }
        }

        let step = self.config.turn_speed * dt;
        self.rotate(turn * step, look * step);

        if movement.length_squared() > 0.0 {
            self.position += movement.normalize() * self.config.move_speed * dt;
        }
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.forward(), Vec3::Y)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.config.fov, self.aspect, self.config.near, self.config.far)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera() -> CameraController {
        CameraController::new(CameraConfig::default(), 16.0 / 9.0)
    }

    #[test]
    fn starts_looking_at_origin() {
        let camera = camera();
        assert_eq!(camera.position, Vec3::new(0.0, 0.0, -4.0));
        assert!((camera.forward() - Vec3::Z).length() < 1e-6);

        let origin = camera.view_matrix().transform_point3(Vec3::ZERO);
        assert!((origin - Vec3::new(0.0, 0.0, -4.0)).length() < 1e-5);
    }

    #[test]
    fn forward_moves_toward_target() {
        let mut camera = camera();
        camera.update([Movement::Forward], 0.5);
        assert!((camera.position.z - -3.0).abs() < 1e-5);
    }

    #[test]
    fn opposite_intents_cancel() {
        let mut camera = camera();
        camera.update([Movement::Left, Movement::Right, Movement::TurnLeft, Movement::TurnRight], 1.0);
        assert_eq!(camera.position, Vec3::new(0.0, 0.0, -4.0));
        assert_eq!(camera.yaw, 0.0);
    }

    #[test]
    fn strafe_matches_view_space_x() {
        let mut camera = camera();
        camera.update([Movement::Right], 1.0);
        let view = camera.view_matrix();
        // The old eye lies to the camera's left after strafing right.
        let old_eye = view.transform_point3(Vec3::new(0.0, 0.0, -4.0));
        assert!(old_eye.x < 0.0);
    }

    #[test]
    fn pitch_is_clamped() {
        let mut camera = camera();
        for _ in 0..100 {
            camera.update([Movement::LookUp], 1.0);
        }
        assert!(camera.pitch <= 89.0_f32.to_radians() + 1e-6);
        assert!(camera.forward().y < 1.0);
    }

    #[test]
    fn reset_restores_config() {
        let mut camera = camera();
        camera.update([Movement::Forward, Movement::TurnLeft, Movement::Up], 0.3);
        camera.reset();
        assert_eq!(camera.position, camera.config().eye);
        assert!((camera.forward() - Vec3::Z).length() < 1e-6);
    }
}
