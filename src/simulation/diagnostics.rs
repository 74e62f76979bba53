//! Conserved-quantity diagnostics
//!
//! Handy for watching how far the first-order step drifts over a run.

use super::states::Body;
use super::vector::Vec3;

pub fn total_momentum(bodies: &[Body]) -> Vec3 {
    bodies.iter().fold(Vec3::zeros(), |p, b| p + b.m * b.v)
}

pub fn kinetic_energy(bodies: &[Body]) -> f64 {
    bodies.iter().map(|b| 0.5 * b.m * b.v.norm_squared()).sum()
}

/// Pairwise gravitational potential, -G m_i m_j / d over i < j
///
/// Uses the same softened distance as the force law
#[allow(non_snake_case)]
pub fn potential_energy(bodies: &[Body], G: f64, eps2: f64) -> f64 {
    let mut u = 0.0;
    for (i, bi) in bodies.iter().enumerate() {
        for bj in &bodies[i + 1..] {
            let r = bj.x - bi.x;
            let d = (r.dot(&r) + eps2).sqrt();
            u -= G * bi.m * bj.m / d;
        }
    }
    u
}

#[allow(non_snake_case)]
pub fn total_energy(bodies: &[Body], G: f64, eps2: f64) -> f64 {
    kinetic_energy(bodies) + potential_energy(bodies, G, eps2)
}
