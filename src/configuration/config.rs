//! Configuration types for loading orbital scenarios from YAML.
//!
//! A scenario consists of:
//!
//! - [`ParametersConfig`] – step size, gravitational constant and softening
//! - [`RunConfig`]        – how long the driver runs and how often it reports
//! - [`BodyConfig`]       – initial state for each body
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//!
//! ```yaml
//! parameters:
//!   time_step: 0.01         # fixed step size
//!   G: 1.0                  # gravitational constant
//!   eps2: 0.0               # optional softening, default 0
//!
//! run:                      # optional
//!   steps: 1000             # default 100
//!   report_every: 100       # default 10, 0 = only start and end
//!
//! bodies:
//!   - x: [ -0.5, 0.0, 0.0 ]
//!     v: [  0.0, 0.5, 0.0 ]
//!     m: 1.0
//!     radius: 0.02          # optional, default 0
//!     tag: 1                # optional, default 0
//!   - x: [  0.5, 0.0, 0.0 ]
//!     v: [  0.0, -0.5, 0.0 ]
//!     m: 1.0
//! ```
//!
//! The kernel itself accepts any numbers. [`ScenarioConfig::validate`] is the
//! place where obviously broken input is turned into an error before it gets
//! that far.

use std::io::Read;

use anyhow::{bail, ensure, Context, Result};
use serde::Deserialize;

/// Global numerical and physical parameters for a scenario
#[allow(non_snake_case)]
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub time_step: f64, // time step size
    pub G: f64, // gravitational constant
    #[serde(default)]
    pub eps2: f64, // softening, 0 keeps the bare inverse-square law
}

/// Driver settings, ignored by the kernel
#[derive(Deserialize, Debug, Clone)]
pub struct RunConfig {
    #[serde(default = "default_steps")]
    pub steps: u64, // number of steps to run
    #[serde(default = "default_report_every")]
    pub report_every: u64, // log a snapshot every n steps, 0 disables
}

fn default_steps() -> u64 {
    100
}

fn default_report_every() -> u64 {
    10
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            steps: default_steps(),
            report_every: default_report_every(),
        }
    }
}

/// Configuration for a single body's initial state
#[derive(Deserialize, Debug, Clone)]
pub struct BodyConfig {
    pub x: [f64; 3], // initial position
    pub v: [f64; 3], // initial velocity
    pub m: f64, // mass
    #[serde(default)]
    pub radius: f64, // passive, carried through for the caller
    #[serde(default)]
    pub tag: i32, // opaque display tag
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    pub parameters: ParametersConfig,
    #[serde(default)]
    pub run: RunConfig,
    pub bodies: Vec<BodyConfig>,
}

impl ScenarioConfig {
    pub fn from_yaml_str(s: &str) -> Result<Self> {
        serde_yaml::from_str(s).context("invalid scenario YAML")
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        serde_yaml::from_reader(reader).context("invalid scenario YAML")
    }

    /// Reject input that would only ever produce garbage trajectories
    pub fn validate(&self) -> Result<()> {
        let p = &self.parameters;
        ensure!(p.time_step.is_finite() && p.time_step > 0.0, "time_step must be finite and positive, got {}", p.time_step);
        ensure!(p.G.is_finite(), "G must be finite, got {}", p.G);
        ensure!(p.eps2.is_finite() && p.eps2 >= 0.0, "eps2 must be finite and non-negative, got {}", p.eps2);

        for (i, b) in self.bodies.iter().enumerate() {
            let finite = b.x.iter().chain(b.v.iter()).all(|c| c.is_finite()) && b.m.is_finite() && b.radius.is_finite();
            ensure!(finite, "body {i}: non-finite value");
            ensure!(b.m >= 0.0, "body {i}: negative mass {}", b.m);
        }

        // coincident bodies divide by zero unless softened
        if p.eps2 == 0.0 {
            for (i, bi) in self.bodies.iter().enumerate() {
                for (j, bj) in self.bodies.iter().enumerate().skip(i + 1) {
                    if bi.x == bj.x {
                        bail!("bodies {i} and {j} share position {:?} and eps2 is 0", bi.x);
                    }
                }
            }
        }

        Ok(())
    }
}
