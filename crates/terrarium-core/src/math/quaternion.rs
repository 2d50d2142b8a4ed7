// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Provides a Quaternion type for representing 3D rotations.

use serde::{Deserialize, Serialize};

use super::{Vec3, EPSILON};
use std::ops::Mul;

/// Represents a unit quaternion used for plane orientations.
///
/// Stored as `(x, y, z, w)`, where `[x, y, z]` is the "vector" part and `w` is
/// the "scalar" part. For rotations it should satisfy `x² + y² + z² + w² = 1`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quaternion {
    /// The x component of the vector part.
    pub x: f32,
    /// The y component of the vector part.
    pub y: f32,
    /// The z component of the vector part.
    pub z: f32,
    /// The scalar (real) part.
    pub w: f32,
}

impl Quaternion {
    /// The identity quaternion, representing no rotation.
    pub const IDENTITY: Quaternion = Quaternion {
        x: 0.0,
        y: 0.0,
        z: 0.0,
        w: 1.0,
    };

    /// Creates a new quaternion from its raw components.
    ///
    /// This does not guarantee a unit quaternion. Prefer `from_axis_angle`.
    #[inline]
    pub fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Creates a quaternion representing a rotation around a given axis by a given angle.
    ///
    /// # Arguments
    ///
    /// * `axis`: The axis of rotation. It is normalized internally.
    /// * `angle_radians`: The angle of rotation in radians.
    #[inline]
    pub fn from_axis_angle(axis: Vec3, angle_radians: f32) -> Self {
        let normalized_axis = axis.normalize();
        let half_angle = angle_radians * 0.5;
        let s = half_angle.sin();
        let c = half_angle.cos();
        Self {
            x: normalized_axis.x * s,
            y: normalized_axis.y * s,
            z: normalized_axis.z * s,
            w: c,
        }
    }

    /// Creates a rotation around the X axis (the Euler `x` angle).
    #[inline]
    pub fn from_rotation_x(angle_radians: f32) -> Self {
        Self::from_axis_angle(Vec3::X, angle_radians)
    }

    /// Calculates the squared magnitude of the quaternion.
    #[inline]
    pub fn magnitude_squared(&self) -> f32 {
        self.x * self.x + self.y * self.y + self.z * self.z + self.w * self.w
    }

    /// Returns a normalized version of the quaternion.
    /// Falls back to the identity if the magnitude is near zero.
    #[inline]
    pub fn normalize(&self) -> Self {
        let mag_sq = self.magnitude_squared();
        if mag_sq > EPSILON * EPSILON {
            let inv = 1.0 / mag_sq.sqrt();
            Self {
                x: self.x * inv,
                y: self.y * inv,
                z: self.z * inv,
                w: self.w * inv,
            }
        } else {
            Self::IDENTITY
        }
    }

    /// Rotates a 3D vector by this quaternion.
    pub fn rotate_vec3(&self, v: Vec3) -> Vec3 {
        let u = Vec3::new(self.x, self.y, self.z);
        let s: f32 = self.w;
        2.0 * u.dot(v) * u + (s * s - u.dot(u)) * v + 2.0 * s * u.cross(v)
    }
}

// --- Operator Overloads ---

impl Default for Quaternion {
    /// Returns the identity quaternion, representing no rotation.
    #[inline]
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul<Vec3> for Quaternion {
    type Output = Vec3;
    /// Rotates a `Vec3` by this quaternion.
    #[inline]
    fn mul(self, rhs: Vec3) -> Self::Output {
        self.normalize().rotate_vec3(rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::FRAC_PI_2;
    use approx::assert_relative_eq;

    fn vec3_approx_eq(a: Vec3, b: Vec3) {
        assert_relative_eq!(a.x, b.x, epsilon = EPSILON);
        assert_relative_eq!(a.y, b.y, epsilon = EPSILON);
        assert_relative_eq!(a.z, b.z, epsilon = EPSILON);
    }

    #[test]
    fn test_identity_and_default() {
        let q = Quaternion::default();
        assert_eq!(q, Quaternion::IDENTITY);
        assert_relative_eq!(q.magnitude_squared(), 1.0, epsilon = EPSILON);
        assert_eq!(q.rotate_vec3(Vec3::new(1.0, 2.0, 3.0)), Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_from_axis_angle_normalizes_axis() {
        let q = Quaternion::from_axis_angle(Vec3::new(0.0, 5.0, 0.0), FRAC_PI_2);
        let half = FRAC_PI_2 * 0.5;
        assert_relative_eq!(q.x, 0.0, epsilon = EPSILON);
        assert_relative_eq!(q.y, half.sin(), epsilon = EPSILON);
        assert_relative_eq!(q.z, 0.0, epsilon = EPSILON);
        assert_relative_eq!(q.w, half.cos(), epsilon = EPSILON);
        assert_relative_eq!(q.magnitude_squared(), 1.0, epsilon = EPSILON);
    }

    #[test]
    fn test_negative_quarter_turn_about_x_lays_plane_flat() {
        // A vertically authored plane has its "up" along +Y and faces +Z.
        let q = Quaternion::from_rotation_x(-FRAC_PI_2);
        vec3_approx_eq(q * Vec3::Y, Vec3::new(0.0, 0.0, -1.0));
        vec3_approx_eq(q * Vec3::Z, Vec3::Y);
        vec3_approx_eq(q * Vec3::X, Vec3::X);
    }

    #[test]
    fn test_normalize_zero_falls_back_to_identity() {
        assert_eq!(Quaternion::new(0.0, 0.0, 0.0, 0.0).normalize(), Quaternion::IDENTITY);
    }
}
