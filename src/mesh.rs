use crate::math::Vec3;
use serde::{Deserialize, Serialize};

/// Phong material constants handed to the fragment stage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Material {
    pub ambient: [f32; 3],
    pub diffuse: [f32; 3],
    pub specular: [f32; 3],
    pub shininess: f32,
}

/// Indexed triangle mesh as the renderer consumes it: flat position triples,
/// RGBA color quadruples, and CCW-wound index triples.
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    pub positions: Vec<f32>,
    pub indices: Vec<u16>,
    pub colors: Vec<f32>,
    pub material: Material,
}

impl Mesh {
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    pub fn vertex_normals(&self) -> Vec<f32> {
        vertex_normals(&self.positions, &self.indices)
    }

    pub fn wire_indices(&self) -> Vec<u16> {
        wire_indices(&self.indices)
    }
}

/// Accumulates an un-normalized face normal into each vertex of every
/// triangle. Face normals keep their cross-product magnitude (twice the
/// triangle area), so larger triangles weigh more in the sum. The output is
/// deliberately left un-normalized; the fragment stage normalizes per pixel.
///
/// Preconditions: `positions.len()` is a multiple of 3, `indices.len()` is a
/// multiple of 3, and every index addresses a vertex.
pub fn vertex_normals(positions: &[f32], indices: &[u16]) -> Vec<f32> {
    let mut normals = vec![0.0; positions.len()];

    let mut i = 0;
    while i + 2 < indices.len() {
        let p0 = vertex_at(positions, indices[i]);
        let p1 = vertex_at(positions, indices[i + 1]);
        let p2 = vertex_at(positions, indices[i + 2]);

        let n = (p1 - p0).cross(p2 - p0);

        for &index in &indices[i..i + 3] {
            let slot = index as usize * 3;
            normals[slot] += n.x;
            normals[slot + 1] += n.y;
            normals[slot + 2] += n.z;
        }
        i += 3;
    }

    normals
}

/// Turns a triangle list into a line list for the wireframe overlay: each
/// triangle (a, b, c) contributes the edges (a, b), (b, c), (c, a).
pub fn wire_indices(indices: &[u16]) -> Vec<u16> {
    let mut wires = Vec::with_capacity(indices.len() * 2);
    for triangle in indices.chunks_exact(3) {
        wires.extend_from_slice(&[
            triangle[0],
            triangle[1],
            triangle[1],
            triangle[2],
            triangle[2],
            triangle[0],
        ]);
    }
    wires
}

fn vertex_at(positions: &[f32], index: u16) -> Vec3 {
    let i = index as usize * 3;
    Vec3::new(positions[i], positions[i + 1], positions[i + 2])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_triangle_normal() {
        let positions = [0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0];
        let indices = [0, 1, 2];

        let normals = vertex_normals(&positions, &indices);
        // CCW in the xy plane: every vertex accumulates (0, 0, 1).
        assert_eq!(normals, vec![0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_area_weighting_scales_contribution() {
        // Same triangle, doubled in size: the accumulated normal quadruples.
        let positions = [0.0, 0.0, 0.0, 2.0, 0.0, 0.0, 0.0, 2.0, 0.0];
        let normals = vertex_normals(&positions, &[0, 1, 2]);
        assert_eq!(&normals[0..3], &[0.0, 0.0, 4.0]);
    }

    #[test]
    fn test_shared_vertex_accumulates_both_faces() {
        // Two unit triangles in the xy plane sharing the edge (1, 2).
        let positions = [
            0.0, 0.0, 0.0, //
            1.0, 0.0, 0.0, //
            0.0, 1.0, 0.0, //
            1.0, 1.0, 0.0,
        ];
        let indices = [0, 1, 2, 1, 3, 2];

        let normals = vertex_normals(&positions, &indices);
        assert_eq!(&normals[3..6], &[0.0, 0.0, 2.0]);
        assert_eq!(&normals[0..3], &[0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_every_triangle_is_visited() {
        // Three disjoint triangles; a stride bug that skips by nine would
        // leave the later vertices at zero.
        let mut positions = Vec::new();
        for t in 0..3 {
            let x = t as f32 * 10.0;
            positions.extend_from_slice(&[x, 0.0, 0.0, x + 1.0, 0.0, 0.0, x, 1.0, 0.0]);
        }
        let indices: Vec<u16> = (0..9).collect();

        let normals = vertex_normals(&positions, &indices);
        for v in 0..9 {
            assert_eq!(&normals[v * 3..v * 3 + 3], &[0.0, 0.0, 1.0]);
        }
    }

    #[test]
    fn test_wire_indices_per_triangle_edges() {
        assert_eq!(wire_indices(&[0, 1, 2]), vec![0, 1, 1, 2, 2, 0]);
        assert_eq!(
            wire_indices(&[0, 1, 2, 2, 3, 0]),
            vec![0, 1, 1, 2, 2, 0, 2, 3, 3, 0, 0, 2]
        );
    }
}
