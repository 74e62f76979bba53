//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds the settings shared by every body:
//! - fixed step size `time_step`,
//! - gravitational constant `G`,
//! - softening `eps2` (0 = plain inverse-square law)
//!
//! Nothing here is validated; negative or non-finite values simply produce
//! degenerate motion

#[allow(non_snake_case)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parameters {
    pub time_step: f64, // step size
    pub G: f64, // gravitational constant
    pub eps2: f64, // softening, added to the squared separation
}

impl Parameters {
    pub fn new(time_step: f64, g: f64) -> Self {
        Self {
            time_step,
            G: g,
            eps2: 0.0,
        }
    }
}

impl Default for Parameters {
    fn default() -> Self {
        Self::new(1.0, 1.0)
    }
}
