use core::ops::{Add, Mul, Neg, Sub};

use num_traits::Float;

use super::NativeFloat;

/// Three component position or direction.
///
/// Only x and y take part in the planar bend math; z is carried through all
/// arithmetic unchanged so positions interpolate linearly in height.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Vector3 {
    pub x: NativeFloat,
    pub y: NativeFloat,
    pub z: NativeFloat,
}

impl Vector3 {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    pub const fn new(x: NativeFloat, y: NativeFloat, z: NativeFloat) -> Self {
        Vector3 { x, y, z }
    }

    /// Length of the projection onto the xy plane.
    pub fn magnitude_2d(self) -> NativeFloat {
        self.squared_magnitude_2d().sqrt()
    }

    pub fn squared_magnitude_2d(self) -> NativeFloat {
        self.x * self.x + self.y * self.y
    }

    /// Planar distance between two positions, z ignored.
    pub fn distance_2d(self, other: Self) -> NativeFloat {
        (self - other).magnitude_2d()
    }

    pub fn dot_2d(self, other: Self) -> NativeFloat {
        self.x * other.x + self.y * other.y
    }

    /// z component of the 3d cross product of the two planar projections
    pub fn perp_dot(self, other: Self) -> NativeFloat {
        self.x * other.y - self.y * other.x
    }

    /// Returns a copy with z replaced.
    pub fn with_z(self, z: NativeFloat) -> Self {
        Vector3 { z, ..self }
    }

    /// Lerp towards `other`; `t` is not clamped.
    pub fn lerp(self, other: Self, t: NativeFloat) -> Self {
        self * (1.0 - t) + other * t
    }
}

impl From<(NativeFloat, NativeFloat, NativeFloat)> for Vector3 {
    fn from((x, y, z): (NativeFloat, NativeFloat, NativeFloat)) -> Self {
        Vector3::new(x, y, z)
    }
}

impl From<[NativeFloat; 3]> for Vector3 {
    fn from([x, y, z]: [NativeFloat; 3]) -> Self {
        Vector3::new(x, y, z)
    }
}

impl From<Vector3> for [NativeFloat; 3] {
    fn from(v: Vector3) -> Self {
        [v.x, v.y, v.z]
    }
}

impl Add for Vector3 {
    type Output = Self;

    fn add(self, other: Vector3) -> Vector3 {
        Vector3 {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }
}

impl Sub for Vector3 {
    type Output = Self;

    fn sub(self, other: Self) -> Self::Output {
        Vector3 {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }
}

impl Mul<NativeFloat> for Vector3 {
    type Output = Vector3;

    fn mul(self, rhs: NativeFloat) -> Vector3 {
        Vector3 {
            x: self.x * rhs,
            y: self.y * rhs,
            z: self.z * rhs,
        }
    }
}

impl Neg for Vector3 {
    type Output = Self;

    fn neg(self) -> Self {
        Vector3::new(-self.x, -self.y, -self.z)
    }
}
