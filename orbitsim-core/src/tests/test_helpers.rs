//! Test helper utilities for orbitsim tests

use crate::engine::{Particle, ParticleHandle, Simulator};
use glam::DVec2;
use std::fs;
use std::path::Path;

/// Check if two floating point values are approximately equal within tolerance
pub fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
    (a - b).abs() <= tol
}

/// Check if two positions are approximately equal component-wise
pub fn approx_eq_vec(a: DVec2, b: DVec2, tol: f64) -> bool {
    approx_eq(a.x, b.x, tol) && approx_eq(a.y, b.y, tol)
}

/// The three-particle reference scenario: (0.3, 0.5, +1), (0.0, -0.5, -1), (-0.1, -0.4, +3)
pub fn reference_particles() -> Vec<Particle> {
    vec![
        Particle::new(0.3, 0.5, 1.0),
        Particle::new(0.0, -0.5, -1.0),
        Particle::new(-0.1, -0.4, 3.0),
    ]
}

/// Reference particles wrapped in handles, returned alongside a simulator sharing them
pub fn reference_simulator() -> (Simulator, Vec<ParticleHandle>) {
    let handles: Vec<ParticleHandle> = reference_particles()
        .into_iter()
        .map(Particle::into_handle)
        .collect();
    (Simulator::new(handles.clone()), handles)
}

/// Closed-form motion of `p` after time `t`: the particle travels along its
/// circle at linear speed `ang_vel`, sweeping an angle of `ang_vel * t / radius`
pub fn exact_rotation(p: &Particle, t: f64) -> DVec2 {
    DVec2::from_angle(p.ang_vel * t / p.radius()).rotate(p.pos)
}

/// Load expected output from a file
pub fn load_expected(path: &str) -> Result<String, Box<dyn std::error::Error>> {
    Ok(fs::read_to_string(path)?)
}

/// Write expected output to a file (for initial generation)
pub fn write_expected(path: &str, content: &str) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(parent) = Path::new(path).parent() {
        fs::create_dir_all(parent)?;
    }
    Ok(fs::write(path, content)?)
}

/// One `x y` line per particle, for golden tests
pub fn positions_to_text(positions: &[DVec2]) -> String {
    let mut text = String::new();
    for pos in positions {
        text.push_str(&format!("{:.15e} {:.15e}\n", pos.x, pos.y));
    }
    text
}

/// Parse the output of [`positions_to_text`], skipping blank and `#` lines
pub fn parse_positions(text: &str) -> Result<Vec<DVec2>, Box<dyn std::error::Error>> {
    let mut positions = Vec::new();
    for line in text.lines().map(str::trim) {
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let mut fields = line.split_whitespace();
        let x: f64 = fields.next().ok_or("missing x")?.parse()?;
        let y: f64 = fields.next().ok_or("missing y")?.parse()?;
        positions.push(DVec2::new(x, y));
    }
    Ok(positions)
}
