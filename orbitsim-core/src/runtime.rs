use crate::animation::{Animation, Frame};
use crate::config::ScenarioConfig;
use crate::diagnostics::{inspect_particles, Diagnostics};
use crate::engine::Simulator;
use crate::error::{Error, Result};
use crate::integrator::step_count;
use glam::DVec2;

/// Read-only view of one particle
#[derive(Debug, Clone, PartialEq)]
pub struct ParticleState {
    pub index: usize,
    pub pos: DVec2,
    pub ang_vel: f64,
    pub radius: f64,
}

/// Final result of a headless run
#[derive(Debug)]
pub struct SimulationResult {
    pub steps: u64,
    pub particles: Vec<ParticleState>,
    pub diagnostics: Diagnostics,
}

/// Everything the viewer needs to drive a scenario
#[derive(Debug)]
pub struct SimulationContext {
    pub scenario: ScenarioConfig,
    pub simulator: Simulator,
    pub animation: Animation,
}

/// Build a simulator over the scenario's initial particles
pub fn build_simulator(scenario: &ScenarioConfig) -> Simulator {
    Simulator::from_particles(scenario.build_particles())
}

pub fn build_simulation_context(scenario: ScenarioConfig) -> Result<SimulationContext> {
    scenario.validate()?;

    let simulator = build_simulator(&scenario);
    let mut animation = Animation::new(&scenario.animation);
    animation.init();
    animation.snapshot(&simulator);

    log::debug!(
        "built simulation context: {} particles, {} per frame every {:?}",
        simulator.len(),
        animation.frame_duration(),
        animation.interval()
    );

    Ok(SimulationContext {
        scenario,
        simulator,
        animation,
    })
}

/// Parse a YAML scenario and build a context for it, with pre-flight diagnostics
pub fn build_simulation_context_from_source(
    source: &str,
) -> Result<(SimulationContext, Diagnostics)> {
    let scenario = ScenarioConfig::from_yaml_str(source)?;
    let ctx = build_simulation_context(scenario)?;
    let diagnostics = inspect_particles(ctx.simulator.particles());
    Ok((ctx, diagnostics))
}

/// Advance the context by one animation frame
pub fn step_simulation(ctx: &mut SimulationContext) -> &Frame {
    ctx.animation.tick(&mut ctx.simulator)
}

/// Restore the scenario's initial particles and clear the frame buffer
pub fn reset(ctx: &mut SimulationContext) {
    ctx.simulator = build_simulator(&ctx.scenario);
    ctx.animation.init();
    ctx.animation.snapshot(&ctx.simulator);
}

pub fn get_particle_states(simulator: &Simulator) -> Vec<ParticleState> {
    simulator
        .particles()
        .iter()
        .enumerate()
        .map(|(index, handle)| {
            let p = handle.borrow();
            ParticleState {
                index,
                pos: p.pos,
                ang_vel: p.ang_vel,
                radius: p.radius(),
            }
        })
        .collect()
}

/// Run a scenario headless for `duration` time units.
///
/// With `strict`, particles the integrator cannot advance are rejected
/// before any sub-step runs; otherwise they propagate NaN. Non-finite
/// durations are rejected; negative ones run zero sub-steps.
pub fn run_scenario(
    scenario: &ScenarioConfig,
    duration: f64,
    strict: bool,
) -> Result<SimulationResult> {
    if !duration.is_finite() {
        return Err(Error::InvalidParam(format!(
            "run duration must be finite, got {duration}"
        )));
    }

    let mut simulator = build_simulator(scenario);
    let diagnostics = inspect_particles(simulator.particles());

    if strict {
        simulator.evolve_checked(duration)?;
    } else {
        simulator.evolve(duration);
    }

    Ok(SimulationResult {
        steps: step_count(duration),
        particles: get_particle_states(&simulator),
        diagnostics,
    })
}
