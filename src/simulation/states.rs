//! Core state types for the orbital simulation
//!
//! - `Body`       a point mass (position, velocity, mass + passive metadata)
//! - `BodyHandle` the stable id an `OrbitalSystem` hands out for each body

use std::fmt;

use super::vector::Vec3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    pub x: Vec3, // position
    pub v: Vec3, // velocity
    pub m: f64, // mass, only ever used as a multiplier of the pull this body exerts
    pub radius: f64, // passive, not used by the physics
    pub tag: i32, // opaque display tag (colour etc)
}

impl Body {
    pub fn new(x: Vec3, v: Vec3, m: f64, radius: f64, tag: i32) -> Self {
        Self { x, v, m, radius, tag }
    }

    /// Advance this body by `dt` under a constant acceleration `a`
    ///
    /// Position moves with the velocity from *before* the update, then the
    /// velocity picks up `dt * a`. First order, so long runs drift in energy;
    /// shrink `dt` if that matters
    pub fn integrate_step(&mut self, a: Vec3, dt: f64) {
        self.x += dt * self.v;
        self.v += dt * a;
    }
}

impl Default for Body {
    /// All-zero body: at rest at the origin, massless
    fn default() -> Self {
        Self::new(Vec3::zeros(), Vec3::zeros(), 0.0, 0.0, 0)
    }
}

/// Id of a body inside an `OrbitalSystem`
///
/// Handed out from a counter starting at 0 and never reused, even once the
/// body it named has been removed
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BodyHandle(pub u64);

impl BodyHandle {
    pub fn id(self) -> u64 {
        self.0
    }
}

impl fmt::Display for BodyHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
