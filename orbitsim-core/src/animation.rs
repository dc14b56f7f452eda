//! Rendering-side driver for the simulator.
//!
//! An [`Animation`] owns the frame buffer the viewer draws from and the
//! cadence it ticks at. Each tick advances the simulator by a fixed
//! `frame_duration` and copies the new positions into the buffer; the
//! simulator knows nothing about frames or timers.

use crate::config::AnimationConfig;
use crate::engine::Simulator;
use glam::DVec2;
use std::time::Duration;

/// Particle positions captured after a tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frame {
    pub index: u64,
    pub positions: Vec<DVec2>,
}

#[derive(Debug, Clone)]
pub struct Animation {
    frame_duration: f64,
    interval: Duration,
    extent: f64,
    frame: Frame,
}

impl Default for Animation {
    fn default() -> Self {
        Self::new(&AnimationConfig::default())
    }
}

impl Animation {
    pub fn new(config: &AnimationConfig) -> Self {
        Self {
            frame_duration: config.frame_duration,
            interval: config.interval(),
            extent: config.extent,
            frame: Frame::default(),
        }
    }

    /// Clear the frame buffer before the first tick
    pub fn init(&mut self) -> &Frame {
        self.frame.index = 0;
        self.frame.positions.clear();
        &self.frame
    }

    /// Advance the simulator by one frame and redraw the buffer.
    ///
    /// Sub-step truncation applies per tick: time left over from one tick is
    /// not carried into the next.
    pub fn tick(&mut self, simulator: &mut Simulator) -> &Frame {
        simulator.evolve(self.frame_duration);
        self.frame.index += 1;
        self.capture(simulator);
        &self.frame
    }

    /// Refresh the buffer from the simulator without advancing it
    pub fn snapshot(&mut self, simulator: &Simulator) -> &Frame {
        self.capture(simulator);
        &self.frame
    }

    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    pub fn frame_duration(&self) -> f64 {
        self.frame_duration
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn extent(&self) -> f64 {
        self.extent
    }

    fn capture(&mut self, simulator: &Simulator) {
        self.frame.positions.clear();
        self.frame
            .positions
            .extend(simulator.particles().iter().map(|p| p.borrow().pos));
    }
}
