//! Rigid transforms: a translation plus a rotation quaternion, with the
//! hand-rolled array math the rest of the workspace builds on. All numeric
//! types are f32.

use serde::{Deserialize, Serialize};

/// A joint's position and orientation relative to a reference frame.
///
/// Which frame that is (world or parent-relative) is a property of how the
/// containing tree was produced, not of the value itself.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub translation: [f32; 3],
    /// Rotation quaternion (x, y, z, w).
    pub rotation: [f32; 4],
}

impl Transform {
    pub const IDENTITY: Transform = Transform {
        translation: [0.0, 0.0, 0.0],
        rotation: [0.0, 0.0, 0.0, 1.0],
    };

    #[inline]
    pub fn from_translation(translation: [f32; 3]) -> Self {
        Transform {
            translation,
            rotation: Transform::IDENTITY.rotation,
        }
    }

    #[inline]
    pub fn position(&self) -> [f32; 3] {
        self.translation
    }

    /// Composition `self ∘ other`: apply `other` in `self`'s frame.
    ///
    /// With identity rotations this is exact translation addition, which the
    /// generator relies on.
    pub fn then(&self, other: &Transform) -> Transform {
        Transform {
            translation: add3(self.translation, rotate(self.rotation, other.translation)),
            rotation: normalize4(mul_quat(self.rotation, other.rotation)),
        }
    }

    /// Inverse transform, assuming a unit rotation quaternion.
    pub fn inverse(&self) -> Transform {
        let rotation = conjugate(self.rotation);
        Transform {
            translation: neg3(rotate(rotation, self.translation)),
            rotation,
        }
    }

    /// Reflection across the sagittal (X = 0) plane: negate the translation's
    /// X coordinate, keep Y and Z.
    #[inline]
    pub fn mirrored_x(&self) -> Transform {
        Transform {
            translation: [
                -self.translation[0],
                self.translation[1],
                self.translation[2],
            ],
            rotation: self.rotation,
        }
    }
}

impl Default for Transform {
    fn default() -> Self {
        Transform::IDENTITY
    }
}

#[inline]
fn add3(a: [f32; 3], b: [f32; 3]) -> [f32; 3] {
    [a[0] + b[0], a[1] + b[1], a[2] + b[2]]
}

#[inline]
fn neg3(v: [f32; 3]) -> [f32; 3] {
    [-v[0], -v[1], -v[2]]
}

#[inline]
fn cross3(a: [f32; 3], b: [f32; 3]) -> [f32; 3] {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

#[inline]
fn conjugate(q: [f32; 4]) -> [f32; 4] {
    [-q[0], -q[1], -q[2], q[3]]
}

#[inline]
fn normalize4(mut q: [f32; 4]) -> [f32; 4] {
    let len2 = q[0] * q[0] + q[1] * q[1] + q[2] * q[2] + q[3] * q[3];
    if len2 > 0.0 {
        let inv_len = len2.sqrt().recip();
        q[0] *= inv_len;
        q[1] *= inv_len;
        q[2] *= inv_len;
        q[3] *= inv_len;
    }
    q
}

/// Hamilton product `a * b` (x, y, z, w).
#[inline]
fn mul_quat(a: [f32; 4], b: [f32; 4]) -> [f32; 4] {
    [
        a[3] * b[0] + a[0] * b[3] + a[1] * b[2] - a[2] * b[1],
        a[3] * b[1] - a[0] * b[2] + a[1] * b[3] + a[2] * b[0],
        a[3] * b[2] + a[0] * b[1] - a[1] * b[0] + a[2] * b[3],
        a[3] * b[3] - a[0] * b[0] - a[1] * b[1] - a[2] * b[2],
    ]
}

/// Rotate `v` by the unit quaternion `q` via `v + w*t + q.xyz × t` with
/// `t = 2 * (q.xyz × v)`.
#[inline]
fn rotate(q: [f32; 4], v: [f32; 3]) -> [f32; 3] {
    let xyz = [q[0], q[1], q[2]];
    let t = cross3(xyz, v);
    let t = [2.0 * t[0], 2.0 * t[1], 2.0 * t[2]];
    let c = cross3(xyz, t);
    [
        v[0] + q[3] * t[0] + c[0],
        v[1] + q[3] * t[1] + c[1],
        v[2] + q[3] * t[2] + c[2],
    ]
}
