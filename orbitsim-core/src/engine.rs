use crate::error::{Error, Result};
use crate::integrator::{step_count, substep, TIMESTEP};
use glam::DVec2;
use std::cell::RefCell;
use std::rc::Rc;

/// A point particle rotating around the origin at constant angular speed
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub pos: DVec2,
    pub ang_vel: f64, // signed, positive is counter-clockwise
}

/// Shared handle to a particle.
///
/// The simulator and any outside reader hold clones of the same handle, so
/// positions written by `evolve` are visible everywhere without copying.
pub type ParticleHandle = Rc<RefCell<Particle>>;

impl Particle {
    /// Create a particle. No validation is performed.
    pub fn new(x: f64, y: f64, ang_vel: f64) -> Self {
        Self {
            pos: DVec2::new(x, y),
            ang_vel,
        }
    }

    pub fn x(&self) -> f64 {
        self.pos.x
    }

    pub fn y(&self) -> f64 {
        self.pos.y
    }

    /// Distance from the origin
    pub fn radius(&self) -> f64 {
        self.pos.length()
    }

    pub fn is_finite(&self) -> bool {
        self.pos.is_finite() && self.ang_vel.is_finite()
    }

    pub fn into_handle(self) -> ParticleHandle {
        Rc::new(RefCell::new(self))
    }
}

/// Advances a collection of particles in lockstep
#[derive(Debug, Default)]
pub struct Simulator {
    particles: Vec<ParticleHandle>,
}

impl Simulator {
    pub fn new(particles: Vec<ParticleHandle>) -> Self {
        Self { particles }
    }

    /// Build a simulator over fresh handles wrapping `particles`.
    pub fn from_particles(particles: impl IntoIterator<Item = Particle>) -> Self {
        Self::new(particles.into_iter().map(Particle::into_handle).collect())
    }

    pub fn add(&mut self, particle: ParticleHandle) {
        self.particles.push(particle);
    }

    pub fn particles(&self) -> &[ParticleHandle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Current position of every particle, in collection order
    pub fn positions(&self) -> Vec<DVec2> {
        self.particles.iter().map(|p| p.borrow().pos).collect()
    }

    /// Advance every particle by `duration` using fixed `TIMESTEP` Euler sub-steps.
    ///
    /// Performs `step_count(duration)` sub-steps; leftover time is discarded.
    /// Sub-steps run strictly in sequence, each over the whole collection.
    ///
    /// A particle at the origin is not guarded against: its position becomes
    /// NaN and stays NaN. Use [`Simulator::evolve_checked`] to reject such
    /// particles up front.
    pub fn evolve(&mut self, duration: f64) {
        let steps = step_count(duration);
        log::trace!(
            "evolve: {} sub-steps over {} particles",
            steps,
            self.particles.len()
        );

        for _ in 0..steps {
            for handle in &self.particles {
                substep(&mut handle.borrow_mut(), TIMESTEP);
            }
        }
    }

    /// Like [`Simulator::evolve`], but fails before touching any particle if one
    /// sits at the origin or carries non-finite state.
    ///
    /// Checking once is enough: a particle with a nonzero computed radius is
    /// displaced by at most `TIMESTEP * |ang_vel|` along the tangent, which never
    /// brings its radius back to zero.
    pub fn evolve_checked(&mut self, duration: f64) -> Result<()> {
        self.check_particles()?;
        self.evolve(duration);
        Ok(())
    }

    /// Report the first particle the integrator cannot advance meaningfully
    pub fn check_particles(&self) -> Result<()> {
        for (index, handle) in self.particles.iter().enumerate() {
            let p = handle.borrow();
            if !p.is_finite() {
                return Err(Error::NonFinite {
                    index,
                    x: p.pos.x,
                    y: p.pos.y,
                    ang_vel: p.ang_vel,
                });
            }
            // Also catches coordinates so small that x*x + y*y underflows to 0
            if p.radius() == 0.0 {
                return Err(Error::DegenerateOrigin { index });
            }
        }
        Ok(())
    }
}
