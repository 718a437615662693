//! Point-mass particle state
//!
//! A `Particle` owns one point's mass plus its linear (position, velocity,
//! acceleration) and angular (angle, angular velocity, angular acceleration)
//! kinematic state. Nothing is validated: mass may be zero or negative and
//! any `dt` is accepted by [`Particle::integrate`].

use crate::math::vector::Vector3;
use super::integrator::semi_implicit_euler;

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    mass: f64,

    // linear
    position: Vector3,
    velocity: Vector3,
    acceleration: Vector3,

    // angular
    angle: Vector3,
    angular_velocity: Vector3,
    angular_acceleration: Vector3,
}

impl Default for Particle {
    fn default() -> Self {
        Self::new(1.0)
    }
}

impl Particle {
    /// Particle at rest at the origin
    pub fn new(mass: f64) -> Self {
        Self {
            mass,
            position: Vector3::zeros(),
            velocity: Vector3::zeros(),
            acceleration: Vector3::zeros(),
            angle: Vector3::zeros(),
            angular_velocity: Vector3::zeros(),
            angular_acceleration: Vector3::zeros(),
        }
    }

    pub fn with_position(mut self, position: Vector3) -> Self {
        self.position = position;
        self
    }

    pub fn with_velocity(mut self, velocity: Vector3) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn with_acceleration(mut self, acceleration: Vector3) -> Self {
        self.acceleration = acceleration;
        self
    }

    pub fn mass(&self) -> f64 { self.mass }
    pub fn position(&self) -> Vector3 { self.position }
    pub fn velocity(&self) -> Vector3 { self.velocity }
    pub fn acceleration(&self) -> Vector3 { self.acceleration }
    pub fn angle(&self) -> Vector3 { self.angle }
    pub fn angular_velocity(&self) -> Vector3 { self.angular_velocity }
    pub fn angular_acceleration(&self) -> Vector3 { self.angular_acceleration }

    pub fn set_mass(&mut self, mass: f64) { self.mass = mass; }
    pub fn set_position(&mut self, position: Vector3) { self.position = position; }
    pub fn set_velocity(&mut self, velocity: Vector3) { self.velocity = velocity; }
    pub fn set_acceleration(&mut self, acceleration: Vector3) { self.acceleration = acceleration; }
    pub fn set_angle(&mut self, angle: Vector3) { self.angle = angle; }
    pub fn set_angular_velocity(&mut self, angular_velocity: Vector3) { self.angular_velocity = angular_velocity; }
    pub fn set_angular_acceleration(&mut self, angular_acceleration: Vector3) {
        self.angular_acceleration = angular_acceleration;
    }

    /// Advance linear then angular state by one semi-implicit Euler step
    pub fn integrate(&mut self, dt: f64) {
        semi_implicit_euler(&mut self.position, &mut self.velocity, self.acceleration, dt);
        semi_implicit_euler(&mut self.angle, &mut self.angular_velocity, self.angular_acceleration, dt);
    }

    /// 1/2 m |v|^2
    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass * self.velocity.dot(&self.velocity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_particle_is_at_rest() {
        let p = Particle::new(2.5);
        assert_eq!(p.mass(), 2.5);
        assert_eq!(p.position(), Vector3::zeros());
        assert_eq!(p.velocity(), Vector3::zeros());
        assert_eq!(p.acceleration(), Vector3::zeros());
        assert_eq!(p.angle(), Vector3::zeros());
        assert_eq!(p.angular_velocity(), Vector3::zeros());
        assert_eq!(p.angular_acceleration(), Vector3::zeros());
        assert_eq!(Particle::default().mass(), 1.0);
    }

    #[test]
    fn setters_do_not_validate() {
        let mut p = Particle::default();
        p.set_mass(-3.0);
        assert_eq!(p.mass(), -3.0);
        p.set_mass(0.0);
        assert_eq!(p.mass(), 0.0);
    }

    #[test]
    fn constant_velocity_translation() {
        let mut p = Particle::new(1.0).with_velocity(Vector3::new(1.0, 0.0, 0.0));
        for _ in 0..3 {
            p.integrate(0.1);
        }
        assert!((p.position().x() - 0.3).abs() < 1e-12);
        assert_eq!(p.position().y(), 0.0);
        assert_eq!(p.position().z(), 0.0);
        assert_eq!(p.velocity(), Vector3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn constant_acceleration_is_semi_implicit() {
        // a = 1, dt = 1: v = 1, 2 and x = 1, 3 (explicit Euler would give 0, 1)
        let mut p = Particle::new(1.0).with_acceleration(Vector3::new(1.0, 0.0, 0.0));
        p.integrate(1.0);
        assert_eq!(p.position().x(), 1.0);
        p.integrate(1.0);
        assert_eq!(p.velocity().x(), 2.0);
        assert_eq!(p.position().x(), 3.0);
    }

    #[test]
    fn angular_state_integrates_independently() {
        let mut p = Particle::new(1.0);
        p.set_angular_acceleration(Vector3::new(0.0, 0.0, 2.0));
        p.integrate(0.5);
        assert_eq!(p.angular_velocity(), Vector3::new(0.0, 0.0, 1.0));
        assert_eq!(p.angle(), Vector3::new(0.0, 0.0, 0.5));
        assert_eq!(p.position(), Vector3::zeros());
    }

    #[test]
    fn zero_dt_is_noop() {
        let mut p = Particle::new(1.0)
            .with_position(Vector3::new(1.0, 2.0, 3.0))
            .with_velocity(Vector3::new(4.0, 5.0, 6.0))
            .with_acceleration(Vector3::new(7.0, 8.0, 9.0));
        let before = p.clone();
        p.integrate(0.0);
        assert_eq!(p, before);
    }

    #[test]
    fn kinetic_energy_computed() {
        // v = (3,4,0), |v|^2 = 25
        let p = Particle::new(2.0).with_velocity(Vector3::new(3.0, 4.0, 0.0));
        assert!((p.kinetic_energy() - 25.0).abs() < 1e-12);
    }
}
