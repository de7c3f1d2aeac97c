mod camera;
mod math;
mod mesh;
mod models;
mod scene;
mod transform;
mod uniforms;

// Re-export the public computation surface
pub use camera::{OrbitCamera, OrthoVolume, Projection};
pub use math::{Mat4, MatError, Vec3, radians};
pub use mesh::{Material, Mesh, vertex_normals, wire_indices};
pub use models::{ModelKind, cube, tetrahedron, triangle};
pub use scene::{SceneState, ShadingMode};
pub use transform::TransformState;
pub use uniforms::{LightingUniforms, SceneUniforms};
