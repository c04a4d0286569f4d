mod vector;
mod matrix;
pub mod transform;

pub use vector::{Vector2, Vector3, Vector4};
pub use matrix::{Matrix2, Matrix3, Matrix4};
pub use transform::{orthographic, perspective, rotate_x, rotate_y, rotate_z, scale, translate, view};

use std::ops::{Add, Mul, Sub};

use num_traits::{Float, Zero};

/// Ratio of a circle's circumference to its diameter
pub const PI: f32 = std::f32::consts::PI;

/// Golden ratio
pub const PHI: f32 = 1.618_034;

/// Ratio of a circle's circumference to its radius
pub const TAU: f32 = std::f32::consts::TAU;

/// Euler's number
pub const E: f32 = std::f32::consts::E;

/// Constant for a very small number, used for comparisons
pub const EPSILON: f32 = 1.0e-5;

/// Returns true if the two floating point values are approximately equal
#[inline]
pub fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

/// Returns true if the value is approximately zero
#[inline]
pub fn approx_zero(a: f32) -> bool {
    a.abs() < EPSILON
}

/// Converts degrees to radians
#[inline]
pub fn radians(degrees: f32) -> f32 {
    degrees * (PI / 180.0)
}

/// Converts radians to degrees
#[inline]
pub fn degrees(radians: f32) -> f32 {
    radians * (180.0 / PI)
}

/// Cotangent, `1 / tan(x)`
#[inline]
pub fn cotan<T: Float>(x: T) -> T {
    x.tan().recip()
}

/// Returns -1, 0 or 1 depending on the sign of `value`
#[inline]
pub fn sign<T: PartialOrd + Zero>(value: T) -> i32 {
    let zero = T::zero();
    (zero < value) as i32 - (value < zero) as i32
}

/// Clamps a value between a minimum and maximum value
#[inline]
pub fn clamp<T: PartialOrd>(value: T, min: T, max: T) -> T {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// Linearly interpolates between two values.
///
/// `t` is clamped to `[0, 1]`, so the result never leaves the segment `a..b`.
/// Works for plain floats as well as `f32` vectors.
#[inline]
pub fn lerp<T>(a: T, b: T, t: f32) -> T
where
    T: Copy + Add<Output = T> + Sub<Output = T> + Mul<f32, Output = T>,
{
    a + (b - a) * clamp(t, 0.0, 1.0)
}

/// Returns a random value in `[min, max]` drawn from the thread-local generator
#[cfg(feature = "random")]
#[inline]
pub fn random<T>(min: T, max: T) -> T
where
    T: rand::distributions::uniform::SampleUniform + PartialOrd,
{
    random_with(&mut rand::thread_rng(), min, max)
}

/// Returns a random value in `[min, max]` drawn from `rng`.
///
/// Panics if `min > max`.
#[cfg(feature = "random")]
#[inline]
pub fn random_with<R, T>(rng: &mut R, min: T, max: T) -> T
where
    R: rand::Rng + ?Sized,
    T: rand::distributions::uniform::SampleUniform + PartialOrd,
{
    rng.gen_range(min..=max)
}
