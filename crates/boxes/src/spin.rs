use std::f32::consts::TAU;
use std::time::Duration;

use glam::{Mat4, Vec3};

/// Constant-rate rotation of the whole scene about a fixed axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spin {
    period: f32,
    axis: Vec3,
}

impl Default for Spin {
    fn default() -> Self {
        Self::new(6.0, Vec3::new(1.0, 1.0, -0.5))
    }
}

impl Spin {
    /// `period` is the number of seconds per full turn. A period that is not
    /// a positive finite number leaves the scene unrotated.
    pub fn new(period: f32, axis: Vec3) -> Self {
        Self {
            period,
            axis: axis.normalize_or(Vec3::Y),
        }
    }

    pub fn period(&self) -> f32 {
        self.period
    }

    pub fn axis(&self) -> Vec3 {
        self.axis
    }

    /// Rotation angle in radians, wrapped to one turn.
    pub fn angle(&self, elapsed: Duration) -> f32 {
        if !self.period.is_finite() || self.period <= 0.0 {
            return 0.0;
        }
        let turns = elapsed.as_secs_f64() / self.period as f64;
        turns.fract() as f32 * TAU
    }

    pub fn world_matrix(&self, elapsed: Duration) -> Mat4 {
        Mat4::from_axis_angle(self.axis, self.angle(elapsed))
    }
}
