use std::time::Instant;

use crate::simulation::states::Body;
use crate::simulation::system::OrbitalSystem;
use crate::simulation::vector::Vec3;

/// Helper to build a system of size `n`
/// Deterministic positions, no rand needed
fn make_system(n: usize) -> OrbitalSystem {
    let mut sys = OrbitalSystem::with_params(0.001, 0.1);
    sys.set_softening(1e-4);

    for i in 0..n {
        let i_f = i as f64;
        let x = Vec3::new(
            (i_f * 0.37).sin() * 5.0,
            (i_f * 0.13).cos() * 5.0,
            (i_f * 0.07).sin() * 5.0,
        );

        sys.add_body(Body::new(x, Vec3::zeros(), 1.0, 0.01, 0));
    }

    sys
}

/// Time `OrbitalSystem::step` for each body count in `ns`
/// Prints csv (n, ms per step), paste straight into a spreadsheet to graph
pub fn bench_step(ns: &[usize], steps: u32) {
    let steps = steps.max(1);

    println!("N,step_ms");

    for &n in ns {
        let mut sys = make_system(n);

        // Warm up
        sys.step();

        let t0 = Instant::now();
        for _ in 0..steps {
            sys.step();
        }
        let ms = t0.elapsed().as_secs_f64() * 1000.0 / steps as f64;

        println!("{},{:.6}", n, ms);
    }
}
