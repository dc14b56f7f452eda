use crate::engine::Particle;
use glam::DVec2;

/// Fixed internal sub-step, in the same time units as `Particle::ang_vel`.
pub const TIMESTEP: f64 = 1e-5;

/// Number of sub-steps `evolve(duration)` performs.
///
/// Truncates toward zero: any remainder shorter than one sub-step is dropped.
/// Negative and NaN durations give zero steps; an infinite duration saturates
/// to `u64::MAX`, which `evolve` will not finish in practice.
pub fn step_count(duration: f64) -> u64 {
    (duration / TIMESTEP) as u64
}

/// Advance one particle by a single forward-Euler sub-step of length `dt`.
///
/// The particle moves along the counter-clockwise tangent of the circle
/// through its position, scaled by `ang_vel`. At the origin the tangent is
/// 0/0 and the position becomes NaN.
pub fn substep(particle: &mut Particle, dt: f64) {
    let norm = particle.pos.length();
    let dir = DVec2::new(-particle.pos.y / norm, particle.pos.x / norm);

    particle.pos += dir * (dt * particle.ang_vel);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substep_moves_along_tangent() {
        let mut p = Particle::new(1.0, 0.0, 1.0);
        substep(&mut p, TIMESTEP);
        assert_eq!(p.x(), 1.0);
        assert_eq!(p.y(), TIMESTEP);
    }

    #[test]
    fn substep_at_origin_is_nan() {
        let mut p = Particle::new(0.0, 0.0, 1.0);
        substep(&mut p, TIMESTEP);
        assert!(p.x().is_nan());
        assert!(p.y().is_nan());
    }
}
