pub mod simulation;
pub mod configuration;
pub mod benchmark;

pub use simulation::vector::{add, cross, distance, distance_squared, dot, length, negate, scale, subtract, Vec3};
pub use simulation::states::{Body, BodyHandle};
pub use simulation::params::Parameters;
pub use simulation::forces::{accumulate_accels, Acceleration, NewtonianGravity};
pub use simulation::integrator::euler_step;
pub use simulation::system::OrbitalSystem;
pub use simulation::scenario::Scenario;

pub use configuration::config::{BodyConfig, ParametersConfig, RunConfig, ScenarioConfig};

pub use benchmark::benchmark::bench_step;
