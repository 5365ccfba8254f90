use crate::mesh::{FLOATS_PER_VERTEX, Mesh};

/// Largest vertex count addressable by a `u16` index buffer.
pub const MAX_BATCH_VERTICES: usize = u16::MAX as usize + 1;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum BatchError {
    #[error("batch would hold {requested} vertices, u16 indices address at most 65536")]
    IndexOverflow { requested: usize },
    #[error("color table has {colors} entries for {vertices} vertices")]
    ColorMismatch { colors: usize, vertices: usize },
    #[error("index {index} is outside a mesh of {vertices} vertices")]
    IndexOutOfRange { index: u16, vertices: usize },
}

/// Accumulates meshes into one vertex/index buffer pair for a single draw.
///
/// Indices of each appended mesh are shifted by the number of vertices
/// already in the batch.
#[derive(Debug, Clone, Default)]
pub struct MeshBatch {
    mesh: Mesh,
    colors: Vec<f32>,
    parts: usize,
}

impl MeshBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, mesh: &Mesh) -> Result<u16, BatchError> {
        let base = self.reserve(mesh)?;
        self.append(mesh, base);
        Ok(base)
    }

    /// Appends a mesh together with one RGB triple per vertex.
    pub fn push_colored(&mut self, mesh: &Mesh, colors: &[[f32; 3]]) -> Result<u16, BatchError> {
        if colors.len() != mesh.vertex_count() {
            return Err(BatchError::ColorMismatch {
                colors: colors.len(),
                vertices: mesh.vertex_count(),
            });
        }
        if self.colors.len() != self.mesh.vertices.len() {
            return Err(BatchError::ColorMismatch {
                colors: self.colors.len() / FLOATS_PER_VERTEX,
                vertices: self.vertex_count(),
            });
        }

        let base = self.reserve(mesh)?;
        self.append(mesh, base);
        self.colors.extend(colors.iter().flatten());
        Ok(base)
    }

    fn reserve(&self, mesh: &Mesh) -> Result<u16, BatchError> {
        let requested = self.vertex_count() + mesh.vertex_count();
        if requested > MAX_BATCH_VERTICES {
            return Err(BatchError::IndexOverflow { requested });
        }
        let vertices = mesh.vertex_count();
        if let Some(&index) = mesh.indices.iter().find(|&&i| i as usize >= vertices) {
            return Err(BatchError::IndexOutOfRange { index, vertices });
        }
        Ok(self.vertex_count() as u16)
    }

    fn append(&mut self, mesh: &Mesh, base: u16) {
        self.mesh.vertices.extend_from_slice(&mesh.vertices);
        self.mesh
            .indices
            .extend(mesh.indices.iter().map(|&i| i + base));
        self.parts += 1;
        log::trace!(
            "batched mesh #{} at base {}, {} vertices total",
            self.parts,
            base,
            self.vertex_count()
        );
    }

    pub fn vertex_count(&self) -> usize {
        self.mesh.vertex_count()
    }

    pub fn index_count(&self) -> usize {
        self.mesh.indices.len()
    }

    pub fn len(&self) -> usize {
        self.parts
    }

    pub fn is_empty(&self) -> bool {
        self.parts == 0
    }

    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    pub fn colors(&self) -> &[f32] {
        &self.colors
    }

    pub fn into_parts(self) -> (Mesh, Vec<f32>) {
        (self.mesh, self.colors)
    }
}

/// Concatenates two meshes, re-biasing `b`'s indices by `a`'s vertex count.
pub fn merge(a: &Mesh, b: &Mesh) -> Result<Mesh, BatchError> {
    let mut batch = MeshBatch::new();
    batch.push(a)?;
    batch.push(b)?;
    Ok(batch.mesh)
}
