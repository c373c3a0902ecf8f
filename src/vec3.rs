use std::ops::{Add, AddAssign, Mul, Neg, Sub};

use serde::{Deserialize, Deserializer};

use crate::error::{Error, Result};

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vec3<T> {
    pub x: T,
    pub y: T,
    pub z: T,
}

/// RGB triple, channels nominally in `[0, 1]`.
pub type Color = Vec3<f64>;

impl<T> Vec3<T> {
    #[inline]
    pub const fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }
}

impl<T: Copy + Mul<Output = T>> Vec3<T> {
    #[inline]
    pub fn scale(&self, factor: T) -> Vec3<T> {
        Vec3 {
            x: self.x * factor,
            y: self.y * factor,
            z: self.z * factor,
        }
    }

    /// Element-wise (Hadamard) product.
    #[inline]
    pub fn hadamard(&self, other: &Vec3<T>) -> Vec3<T> {
        Vec3 {
            x: self.x * other.x,
            y: self.y * other.y,
            z: self.z * other.z,
        }
    }
}

impl<T: Copy + Add<Output = T> + Mul<Output = T>> Vec3<T> {
    #[inline]
    pub fn dot(&self, other: &Vec3<T>) -> T {
        self.x * other.x + self.y * other.y + self.z * other.z
    }
}

impl<T: Copy + Sub<Output = T> + Mul<Output = T>> Vec3<T> {
    #[inline]
    pub fn cross(&self, other: &Vec3<T>) -> Vec3<T> {
        Vec3 {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }
}

impl Vec3<f64> {
    pub const ZERO: Vec3<f64> = Vec3::new(0.0, 0.0, 0.0);

    #[inline]
    pub fn len2(&self) -> f64 {
        self.dot(self)
    }

    #[inline]
    pub fn len(&self) -> f64 {
        self.len2().sqrt()
    }

    /// Returns the unit vector pointing the same way.
    ///
    /// Zero-length input is a malformed scene rather than a runtime condition,
    /// so it is reported instead of producing NaNs.
    #[inline]
    pub fn unit(&self) -> Result<Vec3<f64>> {
        let len = self.len();

        if len == 0.0 || !len.is_finite() {
            return Err(Error::ZeroLengthVector(*self));
        }

        Ok(Vec3 {
            x: self.x / len,
            y: self.y / len,
            z: self.z / len,
        })
    }

    #[inline]
    pub fn clamp(&self, lo: f64, hi: f64) -> Vec3<f64> {
        Vec3 {
            x: self.x.max(lo).min(hi),
            y: self.y.max(lo).min(hi),
            z: self.z.max(lo).min(hi),
        }
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// Component-wise minimum.
    #[inline]
    pub fn min(&self, other: &Vec3<f64>) -> Vec3<f64> {
        Vec3::new(self.x.min(other.x), self.y.min(other.y), self.z.min(other.z))
    }

    /// Component-wise maximum.
    #[inline]
    pub fn max(&self, other: &Vec3<f64>) -> Vec3<f64> {
        Vec3::new(self.x.max(other.x), self.y.max(other.y), self.z.max(other.z))
    }
}

impl<T: Add<Output = T>> Add for Vec3<T> {
    type Output = Vec3<T>;

    #[inline]
    fn add(self, other: Vec3<T>) -> Self::Output {
        Vec3 {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }
}

impl<T: Copy + Add<Output = T>> AddAssign for Vec3<T> {
    #[inline]
    fn add_assign(&mut self, other: Vec3<T>) {
        *self = *self + other;
    }
}

impl<T: Sub<Output = T>> Sub for Vec3<T> {
    type Output = Vec3<T>;

    #[inline]
    fn sub(self, other: Vec3<T>) -> Self::Output {
        Vec3 {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }
}

impl<T: Neg<Output = T>> Neg for Vec3<T> {
    type Output = Vec3<T>;

    #[inline]
    fn neg(self) -> Self::Output {
        Vec3 {
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }
}

impl<T: Copy> From<[T; 3]> for Vec3<T> {
    #[inline]
    fn from(v: [T; 3]) -> Self {
        Vec3::new(v[0], v[1], v[2])
    }
}

/// Scene files spell vectors as `[x, y, z]`.
impl<'de, T: Deserialize<'de>> Deserialize<'de> for Vec3<T> {
    fn deserialize<D>(de: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let (x, y, z) = Deserialize::deserialize(de)?;
        Ok(Vec3::new(x, y, z))
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn cross_of_basis_vectors() {
        let x = Vec3::new(1.0, 0.0, 0.0);
        let y = Vec3::new(0.0, 1.0, 0.0);

        assert_eq!(Vec3::new(0.0, 0.0, 1.0), x.cross(&y));
        assert_eq!(Vec3::new(0.0, 0.0, -1.0), y.cross(&x));
    }

    #[test]
    fn unit_has_length_one() {
        let v = Vec3::new(3.0, 0.0, 4.0).unit().unwrap();

        assert_eq!(Vec3::new(0.6, 0.0, 0.8), v);
        assert_relative_eq!(1.0, v.len());
    }

    #[test]
    fn unit_rejects_zero_vector() {
        match Vec3::ZERO.unit() {
            Err(Error::ZeroLengthVector(..)) => {}
            other => panic!("expected zero-length error, got {:?}", other),
        }
    }

    #[test]
    fn hadamard_and_clamp() {
        let a = Vec3::new(0.5, 2.0, -1.0);
        let b = Vec3::new(2.0, 0.25, 3.0);

        assert_eq!(Vec3::new(1.0, 0.5, -3.0), a.hadamard(&b));
        assert_eq!(Vec3::new(1.0, 0.5, 0.0), a.hadamard(&b).clamp(0.0, 1.0));
    }

    #[test]
    fn deserialize_from_array() {
        let v: Vec3<f64> = serde_json::from_str("[1.5, -2, 3]").unwrap();

        assert_eq!(Vec3::new(1.5, -2.0, 3.0), v);
    }
}
