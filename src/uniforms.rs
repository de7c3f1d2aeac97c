use crate::camera::{OrbitCamera, Projection};
use crate::math::Mat4;
use crate::mesh::Material;
use crate::scene::ShadingMode;
use crate::transform::TransformState;

/// Per-draw matrices in the layout the render pipeline uploads verbatim.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SceneUniforms {
    pub model: [[f32; 4]; 4],
    pub view_proj: [[f32; 4]; 4],
    pub normal: [[f32; 4]; 4],
}

impl SceneUniforms {
    pub fn new() -> Self {
        Self {
            model: Mat4::identity().into(),
            view_proj: Mat4::identity().into(),
            normal: Mat4::identity().into(),
        }
    }

    pub fn update(
        &mut self,
        transform: &TransformState,
        camera: &OrbitCamera,
        projection: &Projection,
    ) {
        self.model = transform.matrix().into();
        self.view_proj = camera.view_projection(projection).into();
        self.normal = transform.normal_matrix().into();
    }
}

impl Default for SceneUniforms {
    fn default() -> Self {
        Self::new()
    }
}

/// Phong lighting constants, padded to 16-byte rows for uniform buffers.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LightingUniforms {
    pub ambient_color: [f32; 3],
    pub ka: f32,
    pub diffuse_color: [f32; 3],
    pub kd: f32,
    pub specular_color: [f32; 3],
    pub ks: f32,
    pub light_pos: [f32; 3],
    pub shininess: f32,
    pub shading: u32,
    pub _padding: [u32; 3],
}

impl LightingUniforms {
    pub fn new(material: &Material, light_pos: [f32; 3], shading: ShadingMode) -> Self {
        Self {
            ambient_color: material.ambient,
            ka: 1.0,
            diffuse_color: material.diffuse,
            kd: 1.0,
            specular_color: material.specular,
            ks: 1.0,
            light_pos,
            shininess: material.shininess,
            shading: shading.flag(),
            _padding: [0; 3],
        }
    }
}
