//! Build a ready-to-run orbital system from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces a `Scenario` bundling:
//! - the `OrbitalSystem` with every configured body inserted,
//! - the handles of those bodies, in file order,
//! - the driver's `RunConfig`

use crate::configuration::config::{BodyConfig, RunConfig, ScenarioConfig};
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, BodyHandle};
use crate::simulation::system::OrbitalSystem;
use crate::simulation::vector::Vec3;

#[derive(Debug, Clone)]
pub struct Scenario {
    pub system: OrbitalSystem,
    pub handles: Vec<BodyHandle>, // handles[i] is the i-th body of the file
    pub run: RunConfig,
}

impl Scenario {
    /// Bodies are inserted in file order, so on a fresh system handle `i`
    /// belongs to the i-th configured body
    pub fn build_scenario(cfg: ScenarioConfig) -> Self {
        let parameters = Parameters {
            time_step: cfg.parameters.time_step,
            G: cfg.parameters.G,
            eps2: cfg.parameters.eps2,
        };

        let mut system = OrbitalSystem::from_parameters(parameters);

        let handles = cfg
            .bodies
            .iter()
            .map(|bc: &BodyConfig| {
                system.add_body(Body::new(Vec3::from(bc.x), Vec3::from(bc.v), bc.m, bc.radius, bc.tag))
            })
            .collect();

        Self {
            system,
            handles,
            run: cfg.run,
        }
    }
}
