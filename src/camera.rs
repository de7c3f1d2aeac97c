use crate::math::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

/// Orthographic view volume shared by the plain and oblique modes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrthoVolume {
    pub left: f32,
    pub right: f32,
    pub bottom: f32,
    pub top: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for OrthoVolume {
    fn default() -> Self {
        Self {
            left: -2.0,
            right: 2.0,
            bottom: -2.0,
            top: 2.0,
            near: 0.1,
            far: 100.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Projection {
    Perspective {
        fov_y_deg: f32,
        aspect: f32,
        near: f32,
        far: f32,
    },
    Orthographic(OrthoVolume),
    Oblique {
        volume: OrthoVolume,
        alpha_deg: f32,
        phi_deg: f32,
    },
}

impl Default for Projection {
    fn default() -> Self {
        Projection::Perspective {
            fov_y_deg: 60.0,
            aspect: 1.0,
            near: 1.0,
            far: 50.0,
        }
    }
}

/// Arcball camera: two orbit angles and a distance from the origin target.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrbitCamera {
    pub x_rotation_deg: f32,
    pub y_rotation_deg: f32,
    pub distance: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            x_rotation_deg: 0.0,
            y_rotation_deg: 0.0,
            distance: 2.0,
        }
    }
}

impl OrbitCamera {
    const TARGET: Vec3 = Vec3 {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };
    const UP: Vec3 = Vec3 {
        x: 0.0,
        y: 1.0,
        z: 0.0,
    };

    /// Eye position: the base offset (0, 0, distance) swung around the target
    /// by the X orbit angle, then by the Y orbit angle. Stays on the sphere
    /// of radius `distance`.
    pub fn position(&self) -> Vec3 {
        let mut position = Vec3::new(0.0, 0.0, self.distance);

        for rotation in [
            Mat4::from_rotation_deg(self.x_rotation_deg, 0.0, 0.0),
            Mat4::from_rotation_deg(0.0, self.y_rotation_deg, 0.0),
        ] {
            let forward = (position - Self::TARGET).extend(1.0);
            let [x, y, z, _] = rotation.transform(forward);
            position = Vec3::new(x, y, z) + Self::TARGET;
        }

        position
    }

    /// Camera-to-world matrix for the current orbit state.
    pub fn matrix(&self) -> Mat4 {
        Mat4::look_at(self.position(), Self::TARGET, Self::UP)
    }

    /// Combined view-projection matrix, recomputed in full per call.
    pub fn view_projection(&self, projection: &Projection) -> Mat4 {
        let view = self.matrix().inverse();

        let mode = match projection {
            Projection::Perspective { .. } => "perspective",
            Projection::Orthographic(_) => "orthographic",
            Projection::Oblique { .. } => "oblique",
        };
        log::debug!(
            "view-projection rebuilt: orbit=({}, {}) dist={} mode={mode}",
            self.x_rotation_deg,
            self.y_rotation_deg,
            self.distance,
        );

        match *projection {
            Projection::Perspective {
                fov_y_deg,
                aspect,
                near,
                far,
            } => view * Mat4::perspective_deg(fov_y_deg, aspect, near, far),
            Projection::Orthographic(v) => view * ortho_matrix(&v),
            Projection::Oblique {
                volume,
                alpha_deg,
                phi_deg,
            } => Mat4::oblique_deg(alpha_deg, phi_deg) * (view * ortho_matrix(&volume)),
        }
    }
}

fn ortho_matrix(v: &OrthoVolume) -> Mat4 {
    Mat4::orthographic(v.left, v.right, v.bottom, v.top, v.near, v.far)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_camera_sits_on_z_axis() {
        let camera = OrbitCamera::default();
        assert_eq!(camera.position(), Vec3::new(0.0, 0.0, 2.0));
    }

    #[test]
    fn test_position_stays_on_distance_sphere() {
        for (x, y) in [(30.0, 0.0), (0.0, 45.0), (30.0, 45.0), (-80.0, 170.0)] {
            let camera = OrbitCamera {
                x_rotation_deg: x,
                y_rotation_deg: y,
                distance: 3.0,
            };
            assert!((camera.position().length() - 3.0).abs() < 1e-4);
        }
    }

    #[test]
    fn test_orbit_angles_move_the_eye() {
        let base = OrbitCamera::default().position();
        let tilted = OrbitCamera {
            x_rotation_deg: 20.0,
            ..Default::default()
        }
        .position();
        let panned = OrbitCamera {
            y_rotation_deg: 20.0,
            ..Default::default()
        }
        .position();

        assert!((tilted - base).length() > 1e-3);
        assert!((panned - base).length() > 1e-3);
        // X orbit moves the eye vertically, Y orbit horizontally.
        assert!(tilted.y.abs() > 1e-3);
        assert!(panned.x.abs() > 1e-3);
    }

    #[test]
    fn test_view_cancels_camera_matrix() {
        let camera = OrbitCamera {
            x_rotation_deg: 25.0,
            y_rotation_deg: -40.0,
            distance: 4.0,
        };
        let product = (camera.matrix().inverse() * camera.matrix()).to_flat();
        for (value, expected) in product.iter().zip(Mat4::identity().to_flat()) {
            assert!((value - expected).abs() < 1e-4);
        }
    }

    #[test]
    fn test_projection_modes_differ() {
        let camera = OrbitCamera::default();
        let p = camera.view_projection(&Projection::default());
        let o = camera.view_projection(&Projection::Orthographic(OrthoVolume::default()));
        let q = camera.view_projection(&Projection::Oblique {
            volume: OrthoVolume::default(),
            alpha_deg: 45.0,
            phi_deg: 45.0,
        });
        assert_ne!(p, o);
        assert_ne!(o, q);
    }
}
