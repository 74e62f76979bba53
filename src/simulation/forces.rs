//! Acceleration contributors for the orbital kernel
//!
//! An [`Acceleration`] term reads a body slice and *adds* its contribution
//! into one acceleration per body. Callers zero the buffer first; nothing in
//! here touches the bodies themselves, which is what keeps a step's forces
//! computed from a single consistent snapshot

use crate::simulation::states::Body;
use crate::simulation::vector::Vec3;

/// Trait for acceleration sources operating on a slice of bodies
/// Implementations add their contribution into `out[i]` for body `bodies[i]`
pub trait Acceleration {
    fn acceleration(&self, bodies: &[Body], out: &mut [Vec3]);
}

/// Zero `out` then let `term` accumulate into it
pub fn accumulate_accels<A: Acceleration + ?Sized>(term: &A, bodies: &[Body], out: &mut [Vec3]) {
    for a in out.iter_mut() {
        *a = Vec3::zeros();
    }
    term.acceleration(bodies, out);
}

/// Newtonian gravity, direct n^2 sum
///
/// With `eps2 == 0` this is the bare inverse-square law and two bodies at the
/// same position divide by zero (non-finite acceleration). `eps2 > 0` softens
/// the separation to `sqrt(|r|^2 + eps2)`
#[allow(non_snake_case)]
#[derive(Debug, Clone, Copy)]
pub struct NewtonianGravity {
    pub G: f64, // gravitational constant
    pub eps2: f64, // softening
}

impl Acceleration for NewtonianGravity {
    fn acceleration(&self, bodies: &[Body], out: &mut [Vec3]) {
        let n = bodies.len();
        if n < 2 { // nothing to attract
            return;
        }

        // Loop over each unordered pair (i, j) with i < j
        for i in 0..n {
            let bi = &bodies[i];
            let xi = bi.x;
            let mi = bi.m;

            for j in (i + 1)..n {
                let bj = &bodies[j];
                let xj = bj.x;
                let mj = bj.m;

                // r points from i to j: i is pulled along +r, j along -r
                let r = xj - xi;

                // softened separation, d = |r| when eps2 == 0
                let d = (r.dot(&r) + self.eps2).sqrt();

                // G / d^3
                let coef = self.G / (d * d * d);

                // a_i +=  G * m_j * r / d^3
                out[i] += coef * mj * r;

                // a_j += -G * m_i * r / d^3
                out[j] -= coef * mi * r;
            }
        }
    }
}
