use voxset_geom::{Aabb, Vec2, Vec3};
use voxset_palette::Rgba;

const QUAD_UVS: [Vec2; 4] = [
    Vec2::new(0.0, 0.0),
    Vec2::new(1.0, 0.0),
    Vec2::new(1.0, 1.0),
    Vec2::new(0.0, 1.0),
];

/// Renderer-agnostic quad list for one face-direction bucket.
#[derive(Default, Clone, Debug, PartialEq)]
pub struct FaceBuffer {
    pub positions: Vec<Vec3>,
    pub normals: Vec<Vec3>,
    pub colors: Vec<Rgba>,
    pub uvs: Vec<Vec2>,
    pub indices: Vec<u32>,
}

impl FaceBuffer {
    /// Room for `n_quads` more quads in every attribute stream.
    #[inline]
    pub fn reserve_quads(&mut self, n_quads: usize) {
        self.positions.reserve(n_quads * 4);
        self.normals.reserve(n_quads * 4);
        self.colors.reserve(n_quads * 4);
        self.uvs.reserve(n_quads * 4);
        self.indices.reserve(n_quads * 6);
    }

    /// Appends a quad as triangles `(0,1,2)` and `(2,3,0)`, flipping the
    /// corner order when it would face away from `n`.
    pub fn add_quad(&mut self, corners: [Vec3; 4], n: Vec3, color: Rgba) {
        let base = self.positions.len() as u32;
        let mut vs = corners;
        let mut uvs = QUAD_UVS;
        if (vs[1] - vs[0]).cross(vs[2] - vs[0]).dot(n) < 0.0 {
            vs.swap(1, 3);
            uvs.swap(1, 3);
        }
        for i in 0..4 {
            self.positions.push(vs[i]);
            self.normals.push(n);
            self.colors.push(color);
            self.uvs.push(uvs[i]);
        }
        self.indices
            .extend_from_slice(&[base, base + 1, base + 2, base + 2, base + 3, base]);
    }

    #[inline]
    pub fn face_count(&self) -> usize {
        self.indices.len() / 6
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn bounds(&self) -> Option<Aabb> {
        Aabb::from_points(self.positions.iter().copied())
    }

    /// Corners of quad `i`, in index order.
    pub fn quad(&self, i: usize) -> Option<[Vec3; 4]> {
        let base = i * 4;
        let q = self.positions.get(base..base + 4)?;
        Some([q[0], q[1], q[2], q[3]])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reversed_quad_is_flipped_to_face_normal() {
        let mut fb = FaceBuffer::default();
        let n = Vec3::new(0.0, 0.0, 1.0);
        let cw = [
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(1.0, 1.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
        ];
        fb.add_quad(cw, n, Rgba::opaque(1, 2, 3));
        let [a, b, c, _] = fb.quad(0).unwrap();
        assert!((b - a).cross(c - a).dot(n) > 0.0);
        assert_eq!(fb.uvs[1], Vec2::new(0.0, 1.0));
        assert_eq!(fb.indices, vec![0, 1, 2, 2, 3, 0]);
        assert_eq!(fb.face_count(), 1);
        let bb = fb.bounds().unwrap();
        assert_eq!(bb.size(), Vec3::new(1.0, 1.0, 0.0));
    }

    #[test]
    fn reserve_covers_vertices_and_indices() {
        let mut fb = FaceBuffer::default();
        fb.reserve_quads(5);
        assert!(fb.positions.capacity() >= 20);
        assert!(fb.uvs.capacity() >= 20);
        assert!(fb.indices.capacity() >= 30);
        assert!(fb.is_empty());
    }

    #[test]
    fn empty_buffer_has_no_bounds() {
        let fb = FaceBuffer::default();
        assert!(fb.is_empty());
        assert!(fb.bounds().is_none());
    }
}
