//! Vector types used by scripts
//!
//! Both vectors are plain `f64` values, matching the precision the host
//! passes across the binding boundary. The in-place forms (`+=`, `*=`, ...)
//! cover the mutate-and-chain style scripts use inside update loops.

use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use rand::Rng;

/// 2D vector, used for panel-space coordinates
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Self = Self::new(0.0, 0.0);
    pub const ONE: Self = Self::new(1.0, 1.0);

    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn splat(v: f64) -> Self {
        Self::new(v, v)
    }

    /// Vector with each component drawn uniformly from `[0, 1)`
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::new(rng.gen(), rng.gen())
    }

    #[inline]
    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y
    }

    #[inline]
    pub fn squared_length(self) -> f64 {
        self.dot(self)
    }

    #[inline]
    pub fn length(self) -> f64 {
        self.squared_length().sqrt()
    }

    /// Scale by the reciprocal length.
    ///
    /// A zero vector yields non-finite components; use
    /// [`Vec2::normalize_or_zero`] when the input may be degenerate.
    #[inline]
    pub fn normalize(self) -> Self {
        self.scale(1.0 / self.length())
    }

    #[inline]
    pub fn normalize_or_zero(self) -> Self {
        let len_sq = self.squared_length();
        if len_sq > 1e-20 {
            self.scale(1.0 / len_sq.sqrt())
        } else {
            Self::ZERO
        }
    }

    #[inline]
    pub fn scale(self, s: f64) -> Self {
        Self::new(self.x * s, self.y * s)
    }

    #[inline]
    pub fn squared_distance(self, other: Self) -> f64 {
        let x = self.x - other.x;
        let y = self.y - other.y;
        x * x + y * y
    }

    #[inline]
    pub fn distance(self, other: Self) -> f64 {
        self.squared_distance(other).sqrt()
    }

    #[inline]
    pub fn lerp(self, other: Self, t: f64) -> Self {
        self + (other - self) * t
    }

    #[inline]
    pub fn to_array(self) -> [f64; 2] {
        [self.x, self.y]
    }
}

/// 3D vector
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0);
    pub const FORWARD: Self = Self::new(0.0, 0.0, 1.0);
    pub const UP: Self = Self::new(0.0, 1.0, 0.0);

    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub const fn splat(v: f64) -> Self {
        Self::new(v, v, v)
    }

    /// Vector with each component drawn uniformly from `[0, 1)`
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::new(rng.gen(), rng.gen(), rng.gen())
    }

    #[inline]
    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    #[inline]
    pub fn cross(self, other: Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    #[inline]
    pub fn squared_length(self) -> f64 {
        self.dot(self)
    }

    #[inline]
    pub fn length(self) -> f64 {
        self.squared_length().sqrt()
    }

    /// Scale by the reciprocal length.
    ///
    /// A zero vector yields non-finite components; use
    /// [`Vec3::normalize_or_zero`] when the input may be degenerate.
    #[inline]
    pub fn normalize(self) -> Self {
        self.scale(1.0 / self.length())
    }

    #[inline]
    pub fn normalize_or_zero(self) -> Self {
        let len_sq = self.squared_length();
        if len_sq > 1e-20 {
            self.scale(1.0 / len_sq.sqrt())
        } else {
            Self::ZERO
        }
    }

    #[inline]
    pub fn scale(self, s: f64) -> Self {
        Self::new(self.x * s, self.y * s, self.z * s)
    }

    #[inline]
    pub fn squared_distance(self, other: Self) -> f64 {
        let x = self.x - other.x;
        let y = self.y - other.y;
        let z = self.z - other.z;
        x * x + y * y + z * z
    }

    #[inline]
    pub fn distance(self, other: Self) -> f64 {
        self.squared_distance(other).sqrt()
    }

    #[inline]
    pub fn lerp(self, other: Self, t: f64) -> Self {
        self + (other - self) * t
    }

    /// Component-wise sine
    #[inline]
    pub fn sin(self) -> Self {
        Self::new(self.x.sin(), self.y.sin(), self.z.sin())
    }

    #[inline]
    pub fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }
}

macro_rules! impl_vector_ops {
    ($ty:ident { $($field:ident),+ }) => {
        impl Add for $ty {
            type Output = Self;
            #[inline] fn add(self, rhs: Self) -> Self { Self { $($field: self.$field + rhs.$field),+ } }
        }
        impl Sub for $ty {
            type Output = Self;
            #[inline] fn sub(self, rhs: Self) -> Self { Self { $($field: self.$field - rhs.$field),+ } }
        }
        impl Mul for $ty {
            type Output = Self;
            #[inline] fn mul(self, rhs: Self) -> Self { Self { $($field: self.$field * rhs.$field),+ } }
        }
        impl Div for $ty {
            type Output = Self;
            #[inline] fn div(self, rhs: Self) -> Self { Self { $($field: self.$field / rhs.$field),+ } }
        }
        impl Mul<f64> for $ty {
            type Output = Self;
            #[inline] fn mul(self, rhs: f64) -> Self { self.scale(rhs) }
        }
        impl Mul<$ty> for f64 {
            type Output = $ty;
            #[inline] fn mul(self, rhs: $ty) -> $ty { rhs.scale(self) }
        }
        impl Div<f64> for $ty {
            type Output = Self;
            #[inline] fn div(self, rhs: f64) -> Self { Self { $($field: self.$field / rhs),+ } }
        }
        impl Neg for $ty {
            type Output = Self;
            #[inline] fn neg(self) -> Self { Self { $($field: -self.$field),+ } }
        }
        impl AddAssign for $ty {
            #[inline] fn add_assign(&mut self, rhs: Self) { *self = *self + rhs; }
        }
        impl SubAssign for $ty {
            #[inline] fn sub_assign(&mut self, rhs: Self) { *self = *self - rhs; }
        }
        impl MulAssign for $ty {
            #[inline] fn mul_assign(&mut self, rhs: Self) { *self = *self * rhs; }
        }
        impl DivAssign for $ty {
            #[inline] fn div_assign(&mut self, rhs: Self) { *self = *self / rhs; }
        }
        impl MulAssign<f64> for $ty {
            #[inline] fn mul_assign(&mut self, rhs: f64) { *self = self.scale(rhs); }
        }
    };
}

impl_vector_ops!(Vec2 { x, y });
impl_vector_ops!(Vec3 { x, y, z });

impl From<[f64; 2]> for Vec2 {
    fn from(v: [f64; 2]) -> Self {
        Self::new(v[0], v[1])
    }
}

impl From<[f64; 3]> for Vec3 {
    fn from(v: [f64; 3]) -> Self {
        Self::new(v[0], v[1], v[2])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::SmallRng, SeedableRng};

    #[test]
    fn test_vec3_dot() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);
        assert_eq!(a.dot(b), 32.0);
    }

    #[test]
    fn test_vec3_cross() {
        let x = Vec3::new(1.0, 0.0, 0.0);
        let z = x.cross(Vec3::UP);
        assert!((z - Vec3::FORWARD).length() < 1e-12);
    }

    #[test]
    fn test_vec3_normalize() {
        let v = Vec3::new(3.0, 0.0, 4.0);
        let n = v.normalize();
        assert!((n.length() - 1.0).abs() < 1e-12);
        assert!((n.x - 0.6).abs() < 1e-12);
    }

    #[test]
    fn test_normalize_zero_is_not_finite() {
        let n = Vec3::ZERO.normalize();
        assert!(!n.x.is_finite());
        assert_eq!(Vec3::ZERO.normalize_or_zero(), Vec3::ZERO);
        assert_eq!(Vec2::ZERO.normalize_or_zero(), Vec2::ZERO);
    }

    #[test]
    fn test_component_wise_ops() {
        let mut v = Vec3::new(1.0, 2.0, 3.0);
        v *= Vec3::new(2.0, 2.0, 2.0);
        v += Vec3::ONE;
        assert_eq!(v, Vec3::new(3.0, 5.0, 7.0));
        v /= Vec3::new(3.0, 5.0, 7.0);
        assert_eq!(v, Vec3::ONE);
        assert_eq!(-v, Vec3::splat(-1.0));
    }

    #[test]
    fn test_vec2_distance() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(3.0, 4.0);
        assert_eq!(a.squared_distance(b), 25.0);
        assert_eq!(a.distance(b), 5.0);
        assert_eq!(b.length(), 5.0);
    }

    #[test]
    fn test_random_in_unit_range() {
        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..64 {
            let v = Vec3::random(&mut rng);
            for c in v.to_array() {
                assert!((0.0..1.0).contains(&c));
            }
        }
    }
}
