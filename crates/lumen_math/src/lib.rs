//! # lumen_math - Script-side math
//!
//! Small value types scripts use to talk about positions, colors and
//! rotations. Everything is `f64` because that is what crosses the binding
//! boundary; nothing here touches the host.

pub mod color;
pub mod quaternion;
pub mod vector;

pub use color::*;
pub use quaternion::*;
pub use vector::*;

/// Common math constants
pub mod consts {
    pub const PI: f64 = core::f64::consts::PI;
    pub const TAU: f64 = core::f64::consts::TAU;
    pub const EPSILON: f64 = 1e-9;
}

/// Linear interpolation
#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Clamp value between min and max
#[inline]
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    if value < min { min }
    else if value > max { max }
    else { value }
}

/// Smooth step over the unit interval; `x` is clamped to `[0, 1]` first
#[inline]
pub fn smoothstep(x: f64) -> f64 {
    let t = clamp(x, 0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Smooth step between two edges
#[inline]
pub fn smoothstep_between(edge0: f64, edge1: f64, x: f64) -> f64 {
    smoothstep((x - edge0) / (edge1 - edge0))
}

pub mod prelude {
    pub use crate::color::{hsv_to_rgb, Color};
    pub use crate::quaternion::Quat;
    pub use crate::vector::{Vec2, Vec3};
    pub use crate::{clamp, lerp, smoothstep, smoothstep_between};
}
