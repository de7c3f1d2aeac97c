use crate::camera::{OrbitCamera, Projection};
use crate::mesh::Mesh;
use crate::models::ModelKind;
use crate::transform::TransformState;
use crate::uniforms::{LightingUniforms, SceneUniforms};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShadingMode {
    Off,
    Phong,
}

impl ShadingMode {
    pub fn toggled(self) -> Self {
        match self {
            ShadingMode::Off => ShadingMode::Phong,
            ShadingMode::Phong => ShadingMode::Off,
        }
    }

    /// Shader-side flag: 0 plain colors, 1 Phong.
    pub fn flag(self) -> u32 {
        match self {
            ShadingMode::Off => 0,
            ShadingMode::Phong => 1,
        }
    }
}

/// Full demo parameter state. The host application owns one of these, mutates
/// it from its controls, and pulls freshly computed arrays after each change.
/// Serializable so a session can be persisted and restored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SceneState {
    pub model: ModelKind,
    pub transform: TransformState,
    pub camera: OrbitCamera,
    pub projection: Projection,
    pub shading: ShadingMode,
    pub light_pos: [f32; 3],
}

impl Default for SceneState {
    fn default() -> Self {
        Self {
            model: ModelKind::Triangle,
            transform: TransformState::default(),
            camera: OrbitCamera::default(),
            projection: Projection::default(),
            shading: ShadingMode::Phong,
            light_pos: [0.0, 0.0, 2.0],
        }
    }
}

impl SceneState {
    pub fn mesh(&self) -> Mesh {
        self.model.mesh()
    }

    pub fn scene_uniforms(&self) -> SceneUniforms {
        let mut uniforms = SceneUniforms::new();
        uniforms.update(&self.transform, &self.camera, &self.projection);
        uniforms
    }

    pub fn lighting_uniforms(&self) -> LightingUniforms {
        LightingUniforms::new(&self.model.material(), self.light_pos, self.shading)
    }
}
