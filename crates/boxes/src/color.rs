use crate::mesh::{BOX_VERTEX_COUNT, CORNERS_PER_FACE, Face};

pub type Rgb = [f32; 3];

const RED: Rgb = [1.0, 0.0, 0.0];
const GREEN: Rgb = [0.0, 1.0, 0.0];
const BLUE: Rgb = [0.0, 0.2, 1.0];
const LIME: Rgb = [0.5, 1.0, 0.0];

/// Per-corner colors for every face of a box, in mesh vertex order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FacePalette {
    faces: [[Rgb; CORNERS_PER_FACE]; 6],
}

impl Default for FacePalette {
    fn default() -> Self {
        Self::uniform([RED, GREEN, BLUE, LIME])
            .with_face(Face::Left, [[0.8, 0.0, 0.2], [0.0, 1.0, 1.0], BLUE, LIME])
    }
}

impl FacePalette {
    /// Same four corner colors on every face.
    pub fn uniform(corners: [Rgb; CORNERS_PER_FACE]) -> Self {
        Self { faces: [corners; 6] }
    }

    /// One flat color per face, indexed like `Face::ALL`.
    pub fn flat(colors: [Rgb; 6]) -> Self {
        Self {
            faces: colors.map(|c| [c; CORNERS_PER_FACE]),
        }
    }

    pub fn with_face(mut self, face: Face, corners: [Rgb; CORNERS_PER_FACE]) -> Self {
        self.faces[face.index()] = corners;
        self
    }

    pub fn face(&self, face: Face) -> &[Rgb; CORNERS_PER_FACE] {
        &self.faces[face.index()]
    }

    pub fn vertex_colors(&self) -> [Rgb; BOX_VERTEX_COUNT] {
        let mut colors = [[0.0; 3]; BOX_VERTEX_COUNT];
        for (slot, color) in colors.iter_mut().zip(self.faces.iter().flatten()) {
            *slot = *color;
        }
        colors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_palette_layout() {
        let colors = FacePalette::default().vertex_colors();

        assert_eq!(colors.len(), 24);
        assert_eq!(colors[0], RED);
        assert_eq!(colors[3], LIME);
        assert_eq!(colors[4], [0.8, 0.0, 0.2]);
        assert_eq!(colors[5], [0.0, 1.0, 1.0]);
        assert_eq!(colors[8], RED);
        assert_eq!(colors[23], LIME);
    }

    #[test]
    fn flat_palette_colors_each_face_block() {
        let palette = FacePalette::flat([
            [1.0, 1.0, 1.0],
            [1.0, 0.0, 0.0],
            [0.0, 1.0, 0.0],
            [0.0, 0.0, 1.0],
            [1.0, 1.0, 0.0],
            [0.0, 0.0, 0.0],
        ]);
        let colors = palette.vertex_colors();

        for face in Face::ALL {
            let base = face.base_vertex() as usize;
            let expected = palette.face(face)[0];
            assert!(colors[base..base + 4].iter().all(|c| *c == expected));
        }
        assert_eq!(colors[12], [0.0, 0.0, 1.0]);
    }
}
