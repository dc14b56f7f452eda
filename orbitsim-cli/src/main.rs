use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use orbitsim_core::{
    format_config_error, format_runtime_error, run_benchmark, run_scenario, BenchmarkConfig,
    ScenarioConfig,
};
use std::fs;
use std::path::{Path, PathBuf};

mod viewer;

#[derive(Parser)]
#[command(name = "orbitsim")]
#[command(about = "orbitsim - particles rotating around the origin", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evolve a scenario once and print the final positions
    Run {
        /// Scenario YAML file (defaults to the built-in three-particle scenario)
        #[arg(short, long)]
        scenario: Option<PathBuf>,
        /// Time units to evolve
        #[arg(short, long, default_value_t = 0.1)]
        duration: f64,
        /// Refuse to run if a particle sits at the origin or has non-finite state
        #[arg(long)]
        strict: bool,
    },
    /// Animate a scenario in a window
    Animate {
        /// Scenario YAML file, reloaded whenever it changes
        #[arg(short, long)]
        scenario: Option<PathBuf>,
    },
    /// Time evolve() over randomly placed particles
    Bench {
        #[arg(short = 'n', long, default_value_t = 1000)]
        particles: usize,
        #[arg(short, long, default_value_t = 0.1)]
        duration: f64,
        #[arg(long, default_value_t = 42)]
        seed: u64,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            scenario,
            duration,
            strict,
        } => run(scenario.as_deref(), duration, strict),
        Commands::Animate { scenario } => viewer::run_viewer(scenario),
        Commands::Bench {
            particles,
            duration,
            seed,
        } => bench(particles, duration, seed),
    }
}

fn load_scenario(path: Option<&Path>) -> Result<ScenarioConfig> {
    let Some(path) = path else {
        return Ok(ScenarioConfig::reference());
    };

    let source = fs::read_to_string(path)
        .with_context(|| format!("failed to read scenario {}", path.display()))?;
    ScenarioConfig::from_yaml_str(&source)
        .map_err(|e| anyhow::anyhow!(format_config_error(&e, &source)))
}

fn run(scenario: Option<&Path>, duration: f64, strict: bool) -> Result<()> {
    let scenario = load_scenario(scenario)?;
    let result = run_scenario(&scenario, duration, strict)
        .map_err(|e| anyhow::anyhow!(format_runtime_error(&e)))?;

    // Diagnostics are reported through the logger by run_scenario

    println!("steps = {}", result.steps);
    for p in result.particles {
        println!("p{} = ({}, {})", p.index, p.pos.x, p.pos.y);
    }

    Ok(())
}

fn bench(particles: usize, duration: f64, seed: u64) -> Result<()> {
    let report = run_benchmark(&BenchmarkConfig {
        particles,
        duration,
        seed,
    })?;

    println!(
        "N = {:6}, steps = {:7}, elapsed = {:9.6} s, {:.3e} particle-steps/s",
        report.particles,
        report.steps,
        report.elapsed.as_secs_f64(),
        report.particle_steps_per_sec()
    );

    Ok(())
}
