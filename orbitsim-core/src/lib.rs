pub mod animation;
pub mod benchmark;
pub mod config;
pub mod diagnostics;
pub mod engine;
pub mod error;
pub mod integrator;
pub mod runtime;

pub use animation::{Animation, Frame};
pub use benchmark::{random_particles, run_benchmark, BenchmarkConfig, BenchmarkReport};
pub use config::{AnimationConfig, ParticleConfig, ScenarioConfig};
pub use diagnostics::{
    format_config_error, format_runtime_error, inspect_particles, Diagnostic,
    DiagnosticSeverity, Diagnostics,
};
pub use engine::{Particle, ParticleHandle, Simulator};
pub use error::{Error, Result};
pub use integrator::{step_count, TIMESTEP};
pub use runtime::{
    build_simulation_context, build_simulation_context_from_source, build_simulator,
    get_particle_states, reset, run_scenario, step_simulation, ParticleState,
    SimulationContext, SimulationResult,
};

// Test helpers module (public for integration tests)
// Always compiled - integration tests are separate crates and need access
pub mod tests;
