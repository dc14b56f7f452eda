//! Throughput benchmark over randomly placed particles.

use crate::engine::{Particle, Simulator};
use crate::error::{Error, Result};
use crate::integrator::step_count;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct BenchmarkConfig {
    pub particles: usize,
    pub duration: f64,
    pub seed: u64,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            particles: 1000,
            duration: 0.1,
            seed: 42,
        }
    }
}

#[derive(Debug, Clone)]
pub struct BenchmarkReport {
    pub particles: usize,
    pub steps: u64,
    pub elapsed: Duration,
}

impl BenchmarkReport {
    /// Single-particle sub-steps per wall-clock second
    pub fn particle_steps_per_sec(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs > 0.0 {
            (self.particles as u64 * self.steps) as f64 / secs
        } else {
            f64::INFINITY
        }
    }
}

/// `n` particles with position and angular velocity drawn uniformly from [-1, 1)
pub fn random_particles(n: usize, seed: u64) -> Vec<Particle> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            Particle::new(
                rng.random_range(-1.0..1.0),
                rng.random_range(-1.0..1.0),
                rng.random_range(-1.0..1.0),
            )
        })
        .collect()
}

/// Time one `evolve(duration)` over `config.particles` random particles
pub fn run_benchmark(config: &BenchmarkConfig) -> Result<BenchmarkReport> {
    if !config.duration.is_finite() || config.duration < 0.0 {
        return Err(Error::InvalidParam(
            "benchmark duration must be finite and >= 0".into(),
        ));
    }

    let mut simulator = Simulator::from_particles(random_particles(config.particles, config.seed));
    let steps = step_count(config.duration);

    let t0 = Instant::now();
    simulator.evolve(config.duration);
    let elapsed = t0.elapsed();

    log::info!(
        "benchmark: N = {}, steps = {}, elapsed = {:.6} s",
        config.particles,
        steps,
        elapsed.as_secs_f64()
    );

    Ok(BenchmarkReport {
        particles: config.particles,
        steps,
        elapsed,
    })
}
