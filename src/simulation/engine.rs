//! Flat particle registry
//!
//! The `Engine` exclusively owns an ordered list of particles. Insertion
//! order is the index used by [`Engine::update_particles`]; particles are
//! only ever appended here; callers may reshape the list through
//! [`Engine::particles_mut`].

use log::debug;

use super::particle::Particle;

#[derive(Debug, Clone, Default)]
pub struct Engine {
    particles: Vec<Particle>,
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(n: usize) -> Self {
        Self { particles: Vec::with_capacity(n) }
    }

    /// Append a particle; its index is the previous particle count
    pub fn add_particle(&mut self, particle: Particle) {
        self.particles.push(particle);
    }

    /// Integrate the first `min(count, len)` particles by `dt`, in index order.
    /// Particles past that bound are untouched; an oversized `count` is clamped.
    pub fn update_particles(&mut self, dt: f64, count: usize) {
        let n = count.min(self.particles.len());
        if n < count {
            debug!("update count {count} clamped to {n} particles");
        }

        for p in self.particles[..n].iter_mut() {
            p.integrate(dt);
        }

        debug!("integrated {n} particles by dt = {dt}");
    }

    /// Integrate every particle by `dt`
    pub fn update_all(&mut self, dt: f64) {
        self.update_particles(dt, self.particles.len());
    }

    pub fn particle_count(&self) -> usize {
        self.particles.len()
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Direct access to the underlying collection (no copy)
    pub fn particles_mut(&mut self) -> &mut Vec<Particle> {
        &mut self.particles
    }
}
