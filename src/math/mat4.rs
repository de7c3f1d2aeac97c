use crate::math::{Vec3, radians};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum MatError {
    #[error("flat matrix must have 16 elements, got {len}")]
    BadLength { len: usize },
}

/// Row-major 4x4 matrix: `data[row][col]`, flat index `4 * row + col`.
/// Translation occupies row 3, so the flat form matches what
/// `uniformMatrix4fv`-style uploads expect.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Mat4 {
    pub data: [[f32; 4]; 4],
}

impl Mat4 {
    pub fn new(data: [[f32; 4]; 4]) -> Self {
        Self { data }
    }

    pub fn identity() -> Self {
        Self {
            data: [
                [1.0, 0.0, 0.0, 0.0],
                [0.0, 1.0, 0.0, 0.0],
                [0.0, 0.0, 1.0, 0.0],
                [0.0, 0.0, 0.0, 1.0],
            ],
        }
    }

    pub fn zero() -> Self {
        Self {
            data: [[0.0; 4]; 4],
        }
    }

    pub fn from_scale(x: f32, y: f32, z: f32) -> Self {
        Self {
            data: [
                [x, 0.0, 0.0, 0.0],
                [0.0, y, 0.0, 0.0],
                [0.0, 0.0, z, 0.0],
                [0.0, 0.0, 0.0, 1.0],
            ],
        }
    }

    pub fn from_translation(x: f32, y: f32, z: f32) -> Self {
        Self {
            data: [
                [1.0, 0.0, 0.0, 0.0],
                [0.0, 1.0, 0.0, 0.0],
                [0.0, 0.0, 1.0, 0.0],
                [x, y, z, 1.0],
            ],
        }
    }

    /// Euler rotation from degree angles, composed as Rz * (Ry * Rx): a point
    /// is rotated about X first, then Y, then Z. The order is load-bearing.
    pub fn from_rotation_deg(angle_x: f32, angle_y: f32, angle_z: f32) -> Self {
        let (sx, cx) = radians(angle_x).sin_cos();
        let (sy, cy) = radians(angle_y).sin_cos();
        let (sz, cz) = radians(angle_z).sin_cos();

        let rx = Self::new([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, cx, sx, 0.0],
            [0.0, -sx, cx, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ]);
        let ry = Self::new([
            [cy, 0.0, -sy, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [sy, 0.0, cy, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ]);
        let rz = Self::new([
            [cz, sz, 0.0, 0.0],
            [-sz, cz, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ]);

        rz * (ry * rx)
    }

    /// Camera-to-world matrix whose rows are the camera basis (right, up,
    /// back) with the eye position in row 3. Invert it to get a view matrix.
    ///
    /// If `up` is parallel to the eye-target axis the cross product is the
    /// zero vector and the basis degenerates through the zero-normalize
    /// policy. Known limitation, callers pick a non-parallel up.
    pub fn look_at(eye: Vec3, target: Vec3, up: Vec3) -> Self {
        let z = (eye - target).normalize();
        let x = up.cross(z).normalize();
        let y = z.cross(x).normalize();

        Self::new([
            [x.x, x.y, x.z, 0.0],
            [y.x, y.y, y.z, 0.0],
            [z.x, z.y, z.z, 0.0],
            [eye.x, eye.y, eye.z, 1.0],
        ])
    }

    /// Symmetric-frustum perspective projection, OpenGL clip conventions.
    pub fn perspective_deg(fov_y_deg: f32, aspect: f32, near: f32, far: f32) -> Self {
        let f = 1.0 / (radians(fov_y_deg) / 2.0).tan();
        let d = far - near;

        Self::new([
            [f / aspect, 0.0, 0.0, 0.0],
            [0.0, f, 0.0, 0.0],
            [0.0, 0.0, -(far + near) / d, -1.0],
            [0.0, 0.0, -2.0 * far * near / d, 0.0],
        ])
    }

    pub fn orthographic(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Self {
        let w = right - left;
        let h = top - bottom;
        let d = far - near;

        Self::new([
            [2.0 / w, 0.0, 0.0, 0.0],
            [0.0, 2.0 / h, 0.0, 0.0],
            [0.0, 0.0, -2.0 / d, 0.0],
            [-(right + left) / w, -(top + bottom) / h, -(far + near) / d, 1.0],
        ])
    }

    /// Shear matrix for cavalier/cabinet-style oblique projection. Callers
    /// left-multiply it onto a view-orthographic product.
    pub fn oblique_deg(alpha_deg: f32, phi_deg: f32) -> Self {
        let cot_alpha = -1.0 / radians(alpha_deg).tan();
        let cot_phi = -1.0 / radians(phi_deg).tan();

        Self::new([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [cot_alpha, cot_phi, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    pub fn from_flat(flat: &[f32]) -> Result<Self, MatError> {
        if flat.len() != 16 {
            return Err(MatError::BadLength { len: flat.len() });
        }

        let mut data = [[0.0; 4]; 4];
        for i in 0..4 {
            for j in 0..4 {
                data[i][j] = flat[4 * i + j];
            }
        }
        Ok(Self { data })
    }

    pub fn to_flat(self) -> [f32; 16] {
        let mut flat = [0.0; 16];
        for i in 0..4 {
            for j in 0..4 {
                flat[4 * i + j] = self.data[i][j];
            }
        }
        flat
    }

    pub fn row(&self, index: usize) -> [f32; 4] {
        self.data[index]
    }

    pub fn column(&self, index: usize) -> [f32; 4] {
        [
            self.data[0][index],
            self.data[1][index],
            self.data[2][index],
            self.data[3][index],
        ]
    }

    pub fn transpose(self) -> Self {
        let mut result = Self::zero();
        for i in 0..4 {
            for j in 0..4 {
                result.data[i][j] = self.data[j][i];
            }
        }
        result
    }

    /// Closed-form cofactor/adjugate inverse, element-for-element the scheme
    /// common WebGL matrix utilities use.
    ///
    /// Precondition: `self` is non-singular. A zero determinant is not
    /// guarded against and yields infinite or NaN entries.
    pub fn inverse(self) -> Self {
        let a = self.to_flat();

        let b00 = a[0] * a[5] - a[1] * a[4];
        let b01 = a[0] * a[6] - a[2] * a[4];
        let b02 = a[0] * a[7] - a[3] * a[4];
        let b03 = a[1] * a[6] - a[2] * a[5];
        let b04 = a[1] * a[7] - a[3] * a[5];
        let b05 = a[2] * a[7] - a[3] * a[6];
        let b06 = a[8] * a[13] - a[9] * a[12];
        let b07 = a[8] * a[14] - a[10] * a[12];
        let b08 = a[8] * a[15] - a[11] * a[12];
        let b09 = a[9] * a[14] - a[10] * a[13];
        let b10 = a[9] * a[15] - a[11] * a[13];
        let b11 = a[10] * a[15] - a[11] * a[14];

        let det = b00 * b11 - b01 * b10 + b02 * b09 + b03 * b08 - b04 * b07 + b05 * b06;
        let inv_det = 1.0 / det;

        let out = [
            (a[5] * b11 - a[6] * b10 + a[7] * b09) * inv_det,
            (a[2] * b10 - a[1] * b11 - a[3] * b09) * inv_det,
            (a[13] * b05 - a[14] * b04 + a[15] * b03) * inv_det,
            (a[10] * b04 - a[9] * b05 - a[11] * b03) * inv_det,
            (a[6] * b08 - a[4] * b11 - a[7] * b07) * inv_det,
            (a[0] * b11 - a[2] * b08 + a[3] * b07) * inv_det,
            (a[14] * b02 - a[12] * b05 - a[15] * b01) * inv_det,
            (a[8] * b05 - a[10] * b02 + a[11] * b01) * inv_det,
            (a[4] * b10 - a[5] * b08 + a[7] * b06) * inv_det,
            (a[1] * b08 - a[0] * b10 - a[3] * b06) * inv_det,
            (a[12] * b04 - a[13] * b02 + a[15] * b00) * inv_det,
            (a[9] * b02 - a[8] * b04 - a[11] * b00) * inv_det,
            (a[5] * b07 - a[4] * b09 - a[6] * b06) * inv_det,
            (a[0] * b09 - a[1] * b07 + a[2] * b06) * inv_det,
            (a[13] * b01 - a[12] * b03 - a[14] * b00) * inv_det,
            (a[8] * b03 - a[9] * b01 + a[10] * b00) * inv_det,
        ];

        let mut data = [[0.0; 4]; 4];
        for i in 0..4 {
            for j in 0..4 {
                data[i][j] = out[4 * i + j];
            }
        }
        Self { data }
    }

    /// Homogeneous transform: `result[i] = sum_j data[i][j] * v[j]`.
    pub fn transform(&self, v: [f32; 4]) -> [f32; 4] {
        let mut result = [0.0; 4];
        for i in 0..4 {
            for j in 0..4 {
                result[i] += self.data[i][j] * v[j];
            }
        }
        result
    }
}

impl std::ops::Mul for Mat4 {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        let mut result = Self::zero();

        for i in 0..4 {
            for j in 0..4 {
                for k in 0..4 {
                    result.data[i][j] += self.data[i][k] * other.data[k][j];
                }
            }
        }

        result
    }
}

impl From<Mat4> for [[f32; 4]; 4] {
    fn from(mat: Mat4) -> Self {
        mat.data
    }
}

impl From<[[f32; 4]; 4]> for Mat4 {
    fn from(data: [[f32; 4]; 4]) -> Self {
        Self { data }
    }
}

unsafe impl bytemuck::Pod for Mat4 {}
unsafe impl bytemuck::Zeroable for Mat4 {}
