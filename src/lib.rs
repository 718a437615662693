pub mod error;
pub mod math;
pub mod simulation;
pub mod configuration;
pub mod benchmark;

pub use error::{Error, Result};

pub use math::vector::Vector3;
pub use math::matrix::{Matrix3, Matrix4};
pub use simulation::particle::Particle;
pub use simulation::engine::Engine;
pub use simulation::integrator::semi_implicit_euler;
pub use simulation::scenario::Scenario;

pub use configuration::config::{load_scenario, ParticleConfig, RunConfig, ScenarioConfig};

pub use benchmark::benchmark::bench_update;
