//! Build a fully-initialized run from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces a `Scenario`:
//! an `Engine` holding every configured particle in file order, plus the
//! stepping settings used by the driver loop.

use log::info;

use crate::configuration::config::{ParticleConfig, ScenarioConfig};
use crate::math::vector::Vector3;
use super::engine::Engine;
use super::particle::Particle;

#[derive(Debug, Clone)]
pub struct Scenario {
    pub engine: Engine,
    pub dt: f64,
    pub steps: usize,
    pub update_count: usize,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Self {
        let mut engine = Engine::with_capacity(cfg.particles.len());
        for pc in &cfg.particles {
            engine.add_particle(particle_from_config(pc));
        }

        // default to updating everything that was loaded
        let update_count = cfg.run.update_count.unwrap_or(engine.particle_count());

        info!(
            "scenario built: {} particles, dt = {}, {} steps, {} updated per step",
            engine.particle_count(),
            cfg.run.dt,
            cfg.run.steps,
            update_count
        );

        Self {
            engine,
            dt: cfg.run.dt,
            steps: cfg.run.steps,
            update_count,
        }
    }

    /// Advance one tick
    pub fn step(&mut self) {
        self.engine.update_particles(self.dt, self.update_count);
    }

    /// Five particles of increasing mass fanned out along x, all moving
    pub fn demo() -> Self {
        let mut engine = Engine::with_capacity(5);
        for i in 0..5 {
            let i_f = i as f64;
            let p = Particle::new(1.0 + i_f * 0.5)
                .with_position(Vector3::new(2.0 * i_f, 5.0, i_f))
                .with_velocity(Vector3::new(1.0 + i_f, 5.0, 1.0 + i_f));
            engine.add_particle(p);
        }
        let update_count = engine.particle_count();
        Self { engine, dt: 0.1, steps: 3, update_count }
    }
}

fn particle_from_config(pc: &ParticleConfig) -> Particle {
    let mut p = Particle::new(pc.mass)
        .with_position(pc.position.into())
        .with_velocity(pc.velocity.into())
        .with_acceleration(pc.acceleration.into());
    p.set_angle(pc.angle.into());
    p.set_angular_velocity(pc.angular_velocity.into());
    p.set_angular_acceleration(pc.angular_acceleration.into());
    p
}

#[cfg(test)]
mod tests {
    use super::*;

    const YAML: &str = "\
run:
  dt: 0.5
  steps: 4
  update_count: 1
particles:
  - mass: 2.0
    position: [0.0, 0.0, 0.0]
    velocity: [1.0, 0.0, 0.0]
    angular_velocity: [0.0, 0.0, 2.0]
  - position: [10.0, 0.0, 0.0]
    velocity: [1.0, 0.0, 0.0]
";

    #[test]
    fn builds_engine_in_file_order() {
        let s = Scenario::build_scenario(ScenarioConfig::from_yaml_str(YAML).unwrap());
        assert_eq!(s.engine.particle_count(), 2);
        assert_eq!(s.engine.particles()[0].mass(), 2.0);
        assert_eq!(s.engine.particles()[1].mass(), 1.0);
        assert_eq!(s.engine.particles()[0].angular_velocity(), Vector3::new(0.0, 0.0, 2.0));
        assert_eq!((s.dt, s.steps, s.update_count), (0.5, 4, 1));
    }

    #[test]
    fn step_respects_update_count() {
        let mut s = Scenario::build_scenario(ScenarioConfig::from_yaml_str(YAML).unwrap());
        s.step();
        assert_eq!(s.engine.particles()[0].position().x(), 0.5);
        assert_eq!(s.engine.particles()[0].angle().z(), 1.0);
        assert_eq!(s.engine.particles()[1].position().x(), 10.0);
    }

    #[test]
    fn update_count_defaults_to_all() {
        let yaml = YAML.replace("  update_count: 1\n", "");
        let s = Scenario::build_scenario(ScenarioConfig::from_yaml_str(&yaml).unwrap());
        assert_eq!(s.update_count, 2);
    }

    #[test]
    fn demo_has_five_particles() {
        let s = Scenario::demo();
        assert_eq!(s.engine.particle_count(), 5);
        assert_eq!(s.engine.particles()[4].mass(), 3.0);
        assert_eq!(s.engine.particles()[2].position(), Vector3::new(4.0, 5.0, 2.0));
    }
}
