//! Byte views handed to the graphics upload boundary.
//!
//! Positions and colors are tightly packed `f32x3` streams bound to separate
//! vertex buffer slots; indices are `u16`.

use crate::mesh::FLOATS_PER_VERTEX;

pub const POSITION_STRIDE: u64 = (FLOATS_PER_VERTEX * std::mem::size_of::<f32>()) as u64;
pub const COLOR_STRIDE: u64 = POSITION_STRIDE;
pub const POSITION_OFFSET: u64 = 0;

pub fn floats_as_bytes(data: &[f32]) -> &[u8] {
    bytemuck::cast_slice(data)
}

pub fn indices_as_bytes(indices: &[u16]) -> &[u8] {
    bytemuck::cast_slice(indices)
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;
    use crate::mesh::generate_box;

    #[test]
    fn byte_lengths_follow_element_sizes() {
        let mesh = generate_box(Vec3::ONE, 0.5);
        assert_eq!(floats_as_bytes(&mesh.vertices).len(), 72 * 4);
        assert_eq!(indices_as_bytes(&mesh.indices).len(), 36 * 2);
        assert_eq!(POSITION_STRIDE, 12);
    }

    #[test]
    fn first_position_is_first_twelve_bytes() {
        let mesh = generate_box(Vec3::ZERO, 1.0);
        let bytes = floats_as_bytes(&mesh.vertices);
        let x = f32::from_ne_bytes(bytes[0..4].try_into().unwrap());
        let y = f32::from_ne_bytes(bytes[4..8].try_into().unwrap());
        let z = f32::from_ne_bytes(bytes[8..12].try_into().unwrap());
        assert_eq!([x, y, z], [-1.0, 1.0, -1.0]);
    }
}
