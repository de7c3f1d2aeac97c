mod mat4;
mod vec3;

pub use mat4::{Mat4, MatError};
pub use vec3::Vec3;

pub const PI: f32 = std::f32::consts::PI;

/// Degrees to radians. Sliders and camera state speak degrees end to end.
pub fn radians(deg: f32) -> f32 {
    deg * PI / 180.0
}
