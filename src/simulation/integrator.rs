//! Fixed-step time integration for point-mass state
//!
//! A single semi-implicit (symplectic) Euler kick-drift, applied by
//! `Particle::integrate` once to the linear triple and once to the
//! angular triple.

use crate::math::vector::Vector3;

/// Advance one (position, velocity) pair by `dt` under constant `acceleration`.
///
/// Kick then drift: the position update uses the velocity *after* the kick.
/// `dt` is taken as given; negative steps integrate backward and a zero step
/// leaves both vectors unchanged.
pub fn semi_implicit_euler(position: &mut Vector3, velocity: &mut Vector3, acceleration: Vector3, dt: f64) {
    // Kick: v_n+1 = v_n + dt * a_n
    *velocity += acceleration * dt;

    // Drift: x_n+1 = x_n + dt * v_n+1
    *position += *velocity * dt;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drift_uses_updated_velocity() {
        let mut x = Vector3::zeros();
        let mut v = Vector3::zeros();
        semi_implicit_euler(&mut x, &mut v, Vector3::new(1.0, 0.0, 0.0), 1.0);
        assert_eq!(v, Vector3::new(1.0, 0.0, 0.0));
        // explicit Euler would leave x at zero here
        assert_eq!(x, Vector3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn zero_step_is_noop() {
        let mut x = Vector3::new(1.0, 2.0, 3.0);
        let mut v = Vector3::new(-1.0, 0.5, 4.0);
        semi_implicit_euler(&mut x, &mut v, Vector3::new(9.0, 9.0, 9.0), 0.0);
        assert_eq!(x, Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(v, Vector3::new(-1.0, 0.5, 4.0));
    }

    #[test]
    fn negative_step_reverses_a_forward_step() {
        let mut x = Vector3::new(0.0, 1.0, 0.0);
        let mut v = Vector3::new(0.5, 0.0, 0.0);
        let a = Vector3::zeros();
        semi_implicit_euler(&mut x, &mut v, a, 0.25);
        semi_implicit_euler(&mut x, &mut v, a, -0.25);
        assert_eq!(x, Vector3::new(0.0, 1.0, 0.0));
    }
}
