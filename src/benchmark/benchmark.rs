use std::time::Instant;

use crate::math::vector::Vector3;
use crate::simulation::engine::Engine;
use crate::simulation::particle::Particle;

/// Helper to build an engine of size `n` with deterministic initial state
pub fn make_engine(n: usize) -> Engine {
    let mut engine = Engine::with_capacity(n);

    for i in 0..n {
        let i_f = i as f64;
        // deterministic positions, no rand needed
        let x = Vector3::new(
            (i_f * 0.37).sin() * 5.0,
            (i_f * 0.13).cos() * 5.0,
            (i_f * 0.07).sin() * 5.0,
        );
        let v = Vector3::new((i_f * 0.11).cos(), 0.0, (i_f * 0.05).sin());

        engine.add_particle(
            Particle::new(1.0)
                .with_position(x)
                .with_velocity(v)
                .with_acceleration(Vector3::new(0.0, -9.81, 0.0)),
        );
    }

    engine
}

/// Time full-engine updates for increasing particle counts
pub fn bench_update() {
    let ns = [1_000, 10_000, 100_000, 1_000_000];
    let steps = 20; // updates per size
    let dt = 0.001;

    for n in ns {
        let mut engine = make_engine(n);

        // Warm up
        engine.update_all(dt);

        let t0 = Instant::now();
        for _ in 0..steps {
            engine.update_all(dt);
        }
        let per_step = t0.elapsed().as_secs_f64() / steps as f64;
        let per_particle_ns = per_step * 1.0e9 / n as f64;

        println!("N = {n:8}, update = {per_step:10.6} s, {per_particle_ns:6.2} ns/particle");
    }
}
