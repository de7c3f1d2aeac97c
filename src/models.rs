use crate::mesh::{Material, Mesh};
use serde::{Deserialize, Serialize};

/// The built-in demo shapes, selectable from the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModelKind {
    Triangle,
    Cube,
    Tetrahedron,
}

impl ModelKind {
    pub fn mesh(self) -> Mesh {
        match self {
            ModelKind::Triangle => triangle(),
            ModelKind::Cube => cube(),
            ModelKind::Tetrahedron => tetrahedron(),
        }
    }

    /// Material without the vertex data, for callers that only light.
    pub fn material(self) -> Material {
        match self {
            ModelKind::Triangle => TRIANGLE_MATERIAL,
            ModelKind::Cube => CUBE_MATERIAL,
            ModelKind::Tetrahedron => TETRAHEDRON_MATERIAL,
        }
    }
}

const TRIANGLE_MATERIAL: Material = Material {
    ambient: [0.2, 0.1, 0.1],
    diffuse: [0.8, 0.3, 0.3],
    specular: [1.0, 1.0, 1.0],
    shininess: 40.0,
};

const CUBE_MATERIAL: Material = Material {
    ambient: [0.1, 0.1, 0.2],
    diffuse: [0.3, 0.3, 0.8],
    specular: [1.0, 1.0, 1.0],
    shininess: 80.0,
};

const TETRAHEDRON_MATERIAL: Material = Material {
    ambient: [0.1, 0.2, 0.1],
    diffuse: [0.3, 0.8, 0.3],
    specular: [1.0, 1.0, 1.0],
    shininess: 60.0,
};

/// A single CCW triangle in the xy plane, facing +z.
pub fn triangle() -> Mesh {
    Mesh {
        positions: vec![
            -0.5, -0.5, 0.0, //
            0.5, -0.5, 0.0, //
            0.0, 0.5, 0.0,
        ],
        indices: vec![0, 1, 2],
        colors: vec![
            1.0, 0.0, 0.0, 1.0, //
            0.0, 1.0, 0.0, 1.0, //
            0.0, 0.0, 1.0, 1.0,
        ],
        material: TRIANGLE_MATERIAL,
    }
}

/// Unit cube centered at the origin, 12 CCW triangles over 8 shared corners.
pub fn cube() -> Mesh {
    // 0..3 front (+z), 4..7 back (-z), each ring CCW seen from +z.
    let positions = vec![
        -0.5, -0.5, 0.5, //
        0.5, -0.5, 0.5, //
        0.5, 0.5, 0.5, //
        -0.5, 0.5, 0.5, //
        -0.5, -0.5, -0.5, //
        0.5, -0.5, -0.5, //
        0.5, 0.5, -0.5, //
        -0.5, 0.5, -0.5,
    ];
    let indices = vec![
        0, 1, 2, 2, 3, 0, // front
        1, 5, 6, 6, 2, 1, // right
        5, 4, 7, 7, 6, 5, // back
        4, 0, 3, 3, 7, 4, // left
        3, 2, 6, 6, 7, 3, // top
        4, 5, 1, 1, 0, 4, // bottom
    ];
    let colors = vec![
        1.0, 0.0, 0.0, 1.0, //
        1.0, 0.5, 0.0, 1.0, //
        1.0, 1.0, 0.0, 1.0, //
        0.0, 1.0, 0.0, 1.0, //
        0.0, 1.0, 1.0, 1.0, //
        0.0, 0.0, 1.0, 1.0, //
        0.5, 0.0, 1.0, 1.0, //
        1.0, 0.0, 1.0, 1.0,
    ];

    Mesh {
        positions,
        indices,
        colors,
        material: CUBE_MATERIAL,
    }
}

/// Regular tetrahedron on alternating cube corners, CCW faces outward.
pub fn tetrahedron() -> Mesh {
    let positions = vec![
        0.5, 0.5, 0.5, //
        0.5, -0.5, -0.5, //
        -0.5, 0.5, -0.5, //
        -0.5, -0.5, 0.5,
    ];
    let indices = vec![
        0, 1, 2, //
        0, 3, 1, //
        0, 2, 3, //
        1, 3, 2,
    ];
    let colors = vec![
        1.0, 0.0, 0.0, 1.0, //
        0.0, 1.0, 0.0, 1.0, //
        0.0, 0.0, 1.0, 1.0, //
        1.0, 1.0, 0.0, 1.0,
    ];

    Mesh {
        positions,
        indices,
        colors,
        material: TETRAHEDRON_MATERIAL,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Vec3;

    fn assert_mesh_shape(mesh: &Mesh) {
        assert_eq!(mesh.positions.len() % 3, 0);
        assert_eq!(mesh.indices.len() % 3, 0);
        assert_eq!(mesh.colors.len(), mesh.vertex_count() * 4);
        let max = *mesh.indices.iter().max().unwrap() as usize;
        assert!(max < mesh.vertex_count());
    }

    #[test]
    fn test_model_shapes_are_consistent() {
        for kind in [ModelKind::Triangle, ModelKind::Cube, ModelKind::Tetrahedron] {
            assert_mesh_shape(&kind.mesh());
        }
        assert_eq!(cube().indices.len(), 36);
        assert_eq!(tetrahedron().indices.len(), 12);
    }

    #[test]
    fn test_material_accessor_matches_mesh() {
        for kind in [ModelKind::Triangle, ModelKind::Cube, ModelKind::Tetrahedron] {
            assert_eq!(kind.material(), kind.mesh().material);
        }
    }

    #[test]
    fn test_closed_models_wind_outward() {
        // For origin-centered convex solids, each accumulated vertex normal
        // must point away from the origin.
        for mesh in [cube(), tetrahedron()] {
            let normals = mesh.vertex_normals();
            for v in 0..mesh.vertex_count() {
                let p = Vec3::new(
                    mesh.positions[v * 3],
                    mesh.positions[v * 3 + 1],
                    mesh.positions[v * 3 + 2],
                );
                let n = Vec3::new(normals[v * 3], normals[v * 3 + 1], normals[v * 3 + 2]);
                assert!(p.dot(n) > 0.0, "vertex {v} normal points inward");
            }
        }
    }
}
