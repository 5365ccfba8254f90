use glam::Vec3;

use crate::batch::{BatchError, MeshBatch};
use crate::camera::CameraConfig;
use crate::color::{FacePalette, Rgb};
use crate::mesh::generate_box;
use crate::spin::Spin;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum SceneError {
    #[error("box at {position} has invalid half-extent {size}")]
    InvalidSize { position: Vec3, size: f32 },
    #[error("box position {0} is not finite")]
    InvalidPosition(Vec3),
    #[error("spin period must be positive, got {0}")]
    InvalidSpinPeriod(f32),
    #[error(transparent)]
    Batch(#[from] BatchError),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxPlacement {
    pub position: Vec3,
    pub size: f32,
}

impl BoxPlacement {
    pub fn new(position: Vec3, size: f32) -> Self {
        Self { position, size }
    }

    fn validate(&self) -> Result<(), SceneError> {
        if !self.position.is_finite() {
            return Err(SceneError::InvalidPosition(self.position));
        }
        if !self.size.is_finite() || self.size <= 0.0 {
            return Err(SceneError::InvalidSize {
                position: self.position,
                size: self.size,
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct SceneConfig {
    pub clear_color: Rgb,
    pub boxes: Vec<BoxPlacement>,
    pub palette: FacePalette,
    pub spin: Spin,
    pub camera: CameraConfig,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            clear_color: [0.2, 0.5, 0.8],
            boxes: Self::default_boxes(0.5),
            palette: FacePalette::default(),
            spin: Spin::default(),
            camera: CameraConfig::default(),
        }
    }
}

impl SceneConfig {
    pub fn default_boxes(size: f32) -> Vec<BoxPlacement> {
        vec![
            BoxPlacement::new(Vec3::splat(-1.0), size),
            BoxPlacement::new(Vec3::splat(1.0), size),
        ]
    }

    pub fn with_box_size(mut self, size: f32) -> Self {
        for placement in &mut self.boxes {
            placement.size = size;
        }
        self
    }

    pub fn with_spin_period(mut self, period: f32) -> Self {
        self.spin = Spin::new(period, self.spin.axis());
        self
    }
}

/// Validated scene description, ready to be batched for upload.
#[derive(Debug, Clone)]
pub struct Scene {
    config: SceneConfig,
}

impl Scene {
    pub fn new(config: SceneConfig) -> Result<Self, SceneError> {
        for placement in &config.boxes {
            placement.validate()?;
        }
        let period = config.spin.period();
        if !period.is_finite() || period <= 0.0 {
            return Err(SceneError::InvalidSpinPeriod(period));
        }
        Ok(Self { config })
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    /// Generates every box and merges them, colored by the palette.
    pub fn build(&self) -> Result<MeshBatch, SceneError> {
        let colors = self.config.palette.vertex_colors();
        let mut batch = MeshBatch::new();

        for placement in &self.config.boxes {
            let mesh = generate_box(placement.position, placement.size);
            batch.push_colored(&mesh, &colors)?;
        }

        log::debug!(
            "scene batch: {} boxes, {} vertices, {} indices",
            batch.len(),
            batch.vertex_count(),
            batch.index_count()
        );
        Ok(batch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_scene_has_two_boxes() {
        let scene = Scene::new(SceneConfig::default()).unwrap();
        let batch = scene.build().unwrap();

        assert_eq!(batch.len(), 2);
        assert_eq!(batch.vertex_count(), 48);
        assert_eq!(batch.index_count(), 72);
        assert_eq!(batch.colors().len(), 48 * 3);
        assert_eq!(&batch.colors()[..72], &batch.colors()[72..]);
    }

    #[test]
    fn rejects_bad_sizes() {
        for size in [0.0, -1.0, f32::NAN, f32::INFINITY] {
            let config = SceneConfig::default().with_box_size(size);
            assert!(matches!(
                Scene::new(config),
                Err(SceneError::InvalidSize { .. })
            ));
        }
    }

    #[test]
    fn rejects_non_finite_position() {
        let mut config = SceneConfig::default();
        config.boxes.push(BoxPlacement::new(Vec3::new(f32::NAN, 0.0, 0.0), 1.0));
        assert!(matches!(
            Scene::new(config),
            Err(SceneError::InvalidPosition(_))
        ));
    }

    #[test]
    fn rejects_bad_spin_period() {
        let config = SceneConfig::default().with_spin_period(0.0);
        assert_eq!(
            Scene::new(config).unwrap_err(),
            SceneError::InvalidSpinPeriod(0.0)
        );
    }

    #[test]
    fn too_many_boxes_overflow() {
        let mut config = SceneConfig::default();
        config.boxes = vec![BoxPlacement::new(Vec3::ZERO, 1.0); 2731];
        let scene = Scene::new(config).unwrap();
        assert!(matches!(
            scene.build(),
            Err(SceneError::Batch(BatchError::IndexOverflow { .. }))
        ));
    }
}
