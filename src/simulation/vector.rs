//! 3D vector algebra used by the kernel
//!
//! `Vec3` is nalgebra's `Vector3<f64>`, so the usual operators (`+`, `-`,
//! unary `-`, `f64 * Vec3`) already work on it. The free functions below name
//! the operations the rest of the crate relies on, and give callers that do
//! not want to reach into nalgebra a small, stable surface

use nalgebra::Vector3;

pub type Vec3 = Vector3<f64>;

/// Component-wise sum
#[inline]
pub fn add(a: &Vec3, b: &Vec3) -> Vec3 {
    a + b
}

/// Component-wise sign flip
#[inline]
pub fn negate(a: &Vec3) -> Vec3 {
    -a
}

/// `a - b`, i.e. `add(a, negate(b))`
#[inline]
pub fn subtract(a: &Vec3, b: &Vec3) -> Vec3 {
    add(a, &negate(b))
}

/// Multiply every component (z included) by `c`
#[inline]
pub fn scale(c: f64, v: &Vec3) -> Vec3 {
    Vec3::new(c * v.x, c * v.y, c * v.z)
}

/// Euclidean norm, never negative
#[inline]
pub fn length(v: &Vec3) -> f64 {
    v.norm()
}

#[inline]
pub fn dot(a: &Vec3, b: &Vec3) -> f64 {
    a.dot(b)
}

/// Right-handed cross product
#[inline]
pub fn cross(a: &Vec3, b: &Vec3) -> Vec3 {
    a.cross(b)
}

/// `length(a - b)`
#[inline]
pub fn distance(a: &Vec3, b: &Vec3) -> f64 {
    length(&subtract(a, b))
}

/// Squared distance, skips the sqrt when only comparisons are needed
#[inline]
pub fn distance_squared(a: &Vec3, b: &Vec3) -> f64 {
    let diff = subtract(a, b);
    dot(&diff, &diff)
}
