pub mod particle;
pub mod integrator;
pub mod engine;
pub mod scenario;
