//! Vertex data for camera-facing point sprites.
//!
//! Every point becomes a quad of four vertices that all carry the point's
//! centre; the UV says which corner a vertex is. The vertex shader pushes the
//! corners apart in view space, so the CPU only ever rewrites centres.

use glam::Vec3;

pub const VERTICES_PER_SPRITE: usize = 4;
pub const INDICES_PER_SPRITE: usize = 6;

/// Counter-clockwise as seen from the camera.
pub const SPRITE_CORNERS: [[f32; 2]; VERTICES_PER_SPRITE] =
    [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]];

#[derive(Debug, Clone, PartialEq)]
pub struct SpriteMeshData {
    pub positions: Vec<[f32; 3]>,
    pub uvs: Vec<[f32; 2]>,
    pub indices: Vec<u32>,
}

impl SpriteMeshData {
    pub fn from_points(points: impl ExactSizeIterator<Item = Vec3>) -> Self {
        let count = points.len();
        let mut positions = Vec::with_capacity(count * VERTICES_PER_SPRITE);
        let mut uvs = Vec::with_capacity(count * VERTICES_PER_SPRITE);
        let mut indices = Vec::with_capacity(count * INDICES_PER_SPRITE);

        for (i, point) in points.enumerate() {
            let first = (i * VERTICES_PER_SPRITE) as u32;
            for corner in SPRITE_CORNERS {
                positions.push(point.to_array());
                uvs.push(corner);
            }
            indices.extend_from_slice(&[first, first + 1, first + 2, first, first + 2, first + 3]);
        }

        Self {
            positions,
            uvs,
            indices,
        }
    }

    /// One sprite at the local origin, moved around through its transform.
    pub fn single() -> Self {
        Self::from_points(std::iter::once(Vec3::ZERO))
    }
}

/// Rewrites sprite centres in place. Extra points beyond the buffer are ignored.
pub fn write_sprite_centers(positions: &mut [[f32; 3]], points: impl Iterator<Item = Vec3>) {
    for (quad, point) in positions.chunks_exact_mut(VERTICES_PER_SPRITE).zip(points) {
        quad.fill(point.to_array());
    }
}
