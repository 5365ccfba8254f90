pub mod batch;
pub mod camera;
pub mod color;
pub mod layout;
pub mod mesh;
pub mod scene;
pub mod spin;

pub use batch::{BatchError, MeshBatch};
pub use camera::{CameraConfig, CameraController, Movement};
pub use color::FacePalette;
pub use mesh::{Face, Mesh, generate_box};
pub use scene::{BoxPlacement, Scene, SceneConfig, SceneError};
pub use spin::Spin;
