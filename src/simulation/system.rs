//! The orbital system: owns the bodies and advances them together
//!
//! Bodies live in a dense `Vec` with a parallel, ascending `Vec` of handles.
//! Handles come from a counter that only ever grows, so appending keeps the
//! handle list sorted and lookups are a binary search.
//!
//! Bodies go in and come out by value. Nothing outside the system ever holds a
//! reference into its storage.

use log::{debug, trace};

use super::diagnostics;
use super::forces::{accumulate_accels, NewtonianGravity};
use super::integrator::euler_step;
use super::params::Parameters;
use super::states::{Body, BodyHandle};
use super::vector::Vec3;

#[derive(Debug, Clone)]
pub struct OrbitalSystem {
    handles: Vec<BodyHandle>, // ascending, handles[i] names bodies[i]
    bodies: Vec<Body>,
    next_handle: u64,
    params: Parameters,
    t: f64, // elapsed simulated time
    steps: u64,
}

impl OrbitalSystem {
    /// Empty system with `time_step = 1` and `G = 1`
    pub fn new() -> Self {
        Self::from_parameters(Parameters::default())
    }

    pub fn with_params(time_step: f64, g: f64) -> Self {
        Self::from_parameters(Parameters::new(time_step, g))
    }

    pub fn from_parameters(params: Parameters) -> Self {
        Self {
            handles: Vec::new(),
            bodies: Vec::new(),
            next_handle: 0,
            params,
            t: 0.0,
            steps: 0,
        }
    }

    /// Store a copy of `body` under a fresh handle
    pub fn add_body(&mut self, body: Body) -> BodyHandle {
        let handle = BodyHandle(self.next_handle);
        self.next_handle += 1;

        self.handles.push(handle);
        self.bodies.push(body);
        debug!("added body {handle} (m = {}, {} bodies)", body.m, self.bodies.len());

        handle
    }

    /// Drop the body behind `handle`; unknown or already removed handles are ignored
    pub fn remove_body(&mut self, handle: BodyHandle) {
        if let Some(i) = self.index_of(handle) {
            self.handles.remove(i);
            self.bodies.remove(i);
            debug!("removed body {handle} ({} bodies left)", self.bodies.len());
        } else {
            trace!("remove_body: {handle} not present");
        }
    }

    pub fn get(&self, handle: BodyHandle) -> Option<Body> {
        self.index_of(handle).map(|i| self.bodies[i])
    }

    pub fn contains(&self, handle: BodyHandle) -> bool {
        self.index_of(handle).is_some()
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn time_step(&self) -> f64 {
        self.params.time_step
    }

    pub fn set_time_step(&mut self, time_step: f64) {
        self.params.time_step = time_step;
    }

    pub fn gravitational_constant(&self) -> f64 {
        self.params.G
    }

    pub fn set_gravitational_constant(&mut self, g: f64) {
        self.params.G = g;
    }

    pub fn softening(&self) -> f64 {
        self.params.eps2
    }

    pub fn set_softening(&mut self, eps2: f64) {
        self.params.eps2 = eps2;
    }

    pub fn parameters(&self) -> Parameters {
        self.params
    }

    /// Simulated time elapsed over all completed steps
    pub fn time(&self) -> f64 {
        self.t
    }

    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Copies of every stored body, ascending by handle
    pub fn snapshot(&self) -> Vec<(BodyHandle, Body)> {
        self.handles.iter().copied().zip(self.bodies.iter().copied()).collect()
    }

    /// Gravitational acceleration on every body from the current state,
    /// ascending by handle. This is exactly what the next `step` applies
    pub fn accelerations(&self) -> Vec<(BodyHandle, Vec3)> {
        self.handles.iter().copied().zip(self.compute_accels()).collect()
    }

    /// Advance every body by one `time_step`
    ///
    /// All accelerations are computed from the start-of-step state into a
    /// separate buffer before any body moves
    pub fn step(&mut self) {
        let accels = self.compute_accels();
        euler_step(&mut self.bodies, &accels, self.params.time_step);

        self.t += self.params.time_step;
        self.steps += 1;
        trace!("step {} done, t = {}", self.steps, self.t);
    }

    /// Call `step` `n` times
    pub fn run(&mut self, n: u64) {
        for _ in 0..n {
            self.step();
        }
    }

    /// Total linear momentum, sum of m * v
    pub fn momentum(&self) -> Vec3 {
        diagnostics::total_momentum(&self.bodies)
    }

    /// Kinetic plus gravitational potential energy under the current parameters
    pub fn energy(&self) -> f64 {
        diagnostics::total_energy(&self.bodies, self.params.G, self.params.eps2)
    }

    fn compute_accels(&self) -> Vec<Vec3> {
        let gravity = NewtonianGravity {
            G: self.params.G,
            eps2: self.params.eps2,
        };

        let mut accels = vec![Vec3::zeros(); self.bodies.len()];
        accumulate_accels(&gravity, &self.bodies, &mut accels);
        accels
    }

    fn index_of(&self, handle: BodyHandle) -> Option<usize> {
        self.handles.binary_search(&handle).ok()
    }
}

impl Default for OrbitalSystem {
    fn default() -> Self {
        Self::new()
    }
}
