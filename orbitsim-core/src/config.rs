//! Scenario files.
//!
//! A scenario lists the initial particles and, optionally, the animation
//! settings used by the viewer:
//!
//! ```yaml
//! particles:
//!   - { x: 0.3, y: 0.5, ang_vel: 1.0 }
//!   - { x: 0.0, y: -0.5, ang_vel: -1.0 }
//!   - { x: -0.1, y: -0.4, ang_vel: 3.0 }
//!
//! animation:
//!   frame_duration: 0.01   # time units advanced per tick
//!   interval_ms: 10        # wall-clock time between ticks
//!   extent: 1.0            # plot limits are [-extent, extent]
//! ```
//!
//! Particle values are taken as-is. Only the animation settings are validated.

use crate::engine::Particle;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_FRAME_DURATION: f64 = 0.01;
pub const DEFAULT_INTERVAL_MS: u64 = 10;
pub const DEFAULT_EXTENT: f64 = 1.0;

/// Initial state of one particle
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ParticleConfig {
    pub x: f64,
    pub y: f64,
    pub ang_vel: f64,
}

impl From<&ParticleConfig> for Particle {
    fn from(cfg: &ParticleConfig) -> Self {
        Particle::new(cfg.x, cfg.y, cfg.ang_vel)
    }
}

/// Viewer cadence and plot limits
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AnimationConfig {
    pub frame_duration: f64,
    pub interval_ms: u64,
    pub extent: f64,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            frame_duration: DEFAULT_FRAME_DURATION,
            interval_ms: DEFAULT_INTERVAL_MS,
            extent: DEFAULT_EXTENT,
        }
    }
}

impl AnimationConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.frame_duration.is_finite() || self.frame_duration <= 0.0 {
            return Err(Error::InvalidParam(
                "animation.frame_duration must be finite and > 0".into(),
            ));
        }
        if self.interval_ms == 0 {
            return Err(Error::InvalidParam(
                "animation.interval_ms must be > 0".into(),
            ));
        }
        if !self.extent.is_finite() || self.extent <= 0.0 {
            return Err(Error::InvalidParam(
                "animation.extent must be finite and > 0".into(),
            ));
        }
        Ok(())
    }
}

/// Top-level scenario loaded from YAML
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub particles: Vec<ParticleConfig>,
    #[serde(default)]
    pub animation: AnimationConfig,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self::reference()
    }
}

impl ScenarioConfig {
    /// Three particles with mixed directions and speeds
    pub fn reference() -> Self {
        let particles = [(0.3, 0.5, 1.0), (0.0, -0.5, -1.0), (-0.1, -0.4, 3.0)]
            .into_iter()
            .map(|(x, y, ang_vel)| ParticleConfig { x, y, ang_vel })
            .collect();
        Self {
            particles,
            animation: AnimationConfig::default(),
        }
    }

    /// Parse and validate a scenario from YAML text.
    pub fn from_yaml_str(source: &str) -> Result<Self> {
        let scenario: ScenarioConfig = serde_yaml::from_str(source)?;
        scenario.validate()?;
        Ok(scenario)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&source)
    }

    pub fn to_yaml_string(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn validate(&self) -> Result<()> {
        self.animation.validate()
    }

    pub fn build_particles(&self) -> Vec<Particle> {
        self.particles.iter().map(Particle::from).collect()
    }
}
