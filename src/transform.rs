use crate::math::Mat4;
use serde::{Deserialize, Serialize};

/// Model placement parameters as the sliders hold them. Owned by the host
/// application; the matrices are recomputed from scratch on every change.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TransformState {
    pub scale: [f32; 3],
    pub rotation_deg: [f32; 3],
    pub translation: [f32; 3],
}

impl TransformState {
    /// Model matrix composed as T * (R * S). In this flat row-major layout
    /// the product folds rotation and scale into the translation row.
    pub fn matrix(&self) -> Mat4 {
        let s = Mat4::from_scale(self.scale[0], self.scale[1], self.scale[2]);
        let r = Mat4::from_rotation_deg(
            self.rotation_deg[0],
            self.rotation_deg[1],
            self.rotation_deg[2],
        );
        let t = Mat4::from_translation(
            self.translation[0],
            self.translation[1],
            self.translation[2],
        );

        t * (r * s)
    }

    /// Matrix for transforming normals alongside `matrix()`.
    ///
    /// Precondition: all scale components non-zero, otherwise the unguarded
    /// inverse produces non-finite entries.
    pub fn normal_matrix(&self) -> Mat4 {
        self.matrix().inverse().transpose()
    }
}

impl Default for TransformState {
    fn default() -> Self {
        Self {
            scale: [1.0, 1.0, 1.0],
            rotation_deg: [0.0, 0.0, 0.0],
            translation: [0.0, 0.0, 0.0],
        }
    }
}
