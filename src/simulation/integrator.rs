//! Fixed-step time integrator for the orbital system
//!
//! Only the first-order step is provided: each body drifts with its old
//! velocity, then kicks with the buffered acceleration

use super::states::Body;
use super::vector::Vec3;

/// Apply `accels[i]` to `bodies[i]` over `dt`
///
/// `accels` must have been computed before any body moved; the two slices are
/// walked in lockstep
pub fn euler_step(bodies: &mut [Body], accels: &[Vec3], dt: f64) {
    debug_assert_eq!(bodies.len(), accels.len());

    for (b, a) in bodies.iter_mut().zip(accels.iter()) {
        b.integrate_step(*a, dt);
    }
}
