use glam::Vec3;

pub const FLOATS_PER_VERTEX: usize = 3;
pub const CORNERS_PER_FACE: usize = 4;
pub const BOX_VERTEX_COUNT: usize = Face::ALL.len() * CORNERS_PER_FACE;
pub const BOX_INDEX_COUNT: usize = Face::ALL.len() * 6;

/// One side of an axis-aligned box, in vertex buffer order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Face {
    Top,
    Left,
    Right,
    Front,
    Back,
    Bottom,
}

impl Face {
    pub const ALL: [Face; 6] = [
        Face::Top,
        Face::Left,
        Face::Right,
        Face::Front,
        Face::Back,
        Face::Bottom,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    /// First vertex slot owned by this face inside a single box mesh.
    pub fn base_vertex(self) -> u16 {
        (self.index() * CORNERS_PER_FACE) as u16
    }

    pub fn normal(self) -> Vec3 {
        match self {
            Face::Top => Vec3::Y,
            Face::Left => Vec3::NEG_X,
            Face::Right => Vec3::X,
            Face::Front => Vec3::Z,
            Face::Back => Vec3::NEG_Z,
            Face::Bottom => Vec3::NEG_Y,
        }
    }

    /// Corner offsets from the box center in units of the half-extent.
    #[rustfmt::skip]
    pub fn corners(self) -> [[f32; 3]; CORNERS_PER_FACE] {
        match self {
            Face::Top =>    [[-1.0,  1.0, -1.0], [-1.0,  1.0,  1.0], [ 1.0,  1.0,  1.0], [ 1.0,  1.0, -1.0]],
            Face::Left =>   [[-1.0,  1.0,  1.0], [-1.0, -1.0,  1.0], [-1.0, -1.0, -1.0], [-1.0,  1.0, -1.0]],
            Face::Right =>  [[ 1.0,  1.0,  1.0], [ 1.0, -1.0,  1.0], [ 1.0, -1.0, -1.0], [ 1.0,  1.0, -1.0]],
            Face::Front =>  [[ 1.0,  1.0,  1.0], [ 1.0, -1.0,  1.0], [-1.0, -1.0,  1.0], [-1.0,  1.0,  1.0]],
            Face::Back =>   [[ 1.0,  1.0, -1.0], [ 1.0, -1.0, -1.0], [-1.0, -1.0, -1.0], [-1.0,  1.0, -1.0]],
            Face::Bottom => [[-1.0, -1.0, -1.0], [-1.0, -1.0,  1.0], [ 1.0, -1.0,  1.0], [ 1.0, -1.0, -1.0]],
        }
    }

    /// Two triangles covering the face, relative to `base_vertex`.
    ///
    /// Left, Front and Bottom list their corners the other way round, so
    /// their first triangle swaps the leading pair to keep it facing out.
    pub fn triangles(self) -> [[u16; 3]; 2] {
        match self {
            Face::Top | Face::Right | Face::Back => [[0, 1, 2], [0, 2, 3]],
            Face::Left | Face::Bottom => [[1, 0, 2], [2, 0, 3]],
            Face::Front => [[1, 0, 2], [3, 2, 0]],
        }
    }
}

/// Flat position and index buffers ready for upload.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    pub vertices: Vec<f32>,
    pub indices: Vec<u16>,
}

impl Mesh {
    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / FLOATS_PER_VERTEX
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn vertex(&self, index: usize) -> Option<Vec3> {
        let start = index.checked_mul(FLOATS_PER_VERTEX)?;
        let end = start.checked_add(FLOATS_PER_VERTEX)?;
        self.vertices.get(start..end).map(Vec3::from_slice)
    }

    pub fn triangles(&self) -> impl Iterator<Item = [u16; 3]> + '_ {
        self.indices.chunks_exact(3).map(|t| [t[0], t[1], t[2]])
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

/// Builds a cube centered on `position` whose faces sit `size` away from it.
///
/// Every face owns its four corners so per-face attributes can differ.
pub fn generate_box(position: Vec3, size: f32) -> Mesh {
    let mut vertices = Vec::with_capacity(BOX_VERTEX_COUNT * FLOATS_PER_VERTEX);
    let mut indices = Vec::with_capacity(BOX_INDEX_COUNT);

    for face in Face::ALL {
        for corner in face.corners() {
            let point = position + Vec3::from(corner) * size;
            vertices.extend_from_slice(&point.to_array());
        }

        let base = face.base_vertex();
        for triangle in face.triangles() {
            indices.extend(triangle.iter().map(|i| base + i));
        }
    }

    Mesh { vertices, indices }
}
