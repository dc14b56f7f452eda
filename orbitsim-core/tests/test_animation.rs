//! Animation ticks and the frame buffer

use glam::DVec2;
use orbitsim_core::integrator::substep;
use orbitsim_core::tests::test_helpers::{approx_eq_vec, reference_particles};
use orbitsim_core::{
    build_simulation_context, reset, step_count, step_simulation, Animation, AnimationConfig,
    ScenarioConfig, Simulator, TIMESTEP,
};
use std::time::Duration;

#[test]
fn test_default_cadence() {
    let animation = Animation::default();
    assert_eq!(animation.frame_duration(), 0.01);
    assert_eq!(animation.interval(), Duration::from_millis(10));
    assert_eq!(animation.extent(), 1.0);
    assert_eq!(animation.frame().index, 0);
    assert!(animation.frame().positions.is_empty());
}

#[test]
fn test_tick_advances_one_frame() {
    let mut sim = Simulator::from_particles(reference_particles());
    let mut animation = Animation::default();
    animation.init();

    let frame = animation.tick(&mut sim).clone();
    assert_eq!(frame.index, 1);
    assert_eq!(frame.positions, sim.positions());

    let mut manual = reference_particles();
    for _ in 0..step_count(0.01) {
        for p in manual.iter_mut() {
            substep(p, TIMESTEP);
        }
    }
    let manual: Vec<DVec2> = manual.iter().map(|p| p.pos).collect();
    assert_eq!(frame.positions, manual);
}

#[test]
fn test_ticks_do_not_carry_leftover_time() {
    let mut ticked = Simulator::from_particles(reference_particles());
    let mut animation = Animation::default();
    for _ in 0..10 {
        animation.tick(&mut ticked);
    }
    assert_eq!(animation.frame().index, 10);

    // 10 x 999 sub-steps, not the 10000 of a single evolve(0.1)
    let expected = [
        DVec2::new(0.210363113330839, 0.5438275090042456),
        DVec2::new(-0.09923675721037671, -0.49005414498641836),
        DVec2::new(0.19109271333323505, -0.3653663447978489),
    ];
    for (actual, expected) in ticked.positions().into_iter().zip(expected) {
        assert!(approx_eq_vec(actual, expected, 1e-12), "got {actual:?}");
    }

    let mut single = Simulator::from_particles(reference_particles());
    single.evolve(0.1);
    assert_ne!(single.positions(), ticked.positions());
}

#[test]
fn test_init_clears_the_buffer() {
    let mut sim = Simulator::from_particles(reference_particles());
    let mut animation = Animation::default();
    animation.tick(&mut sim);
    assert_eq!(animation.frame().positions.len(), 3);

    let frame = animation.init();
    assert_eq!(frame.index, 0);
    assert!(frame.positions.is_empty());
}

#[test]
fn test_snapshot_does_not_evolve() {
    let mut sim = Simulator::from_particles(reference_particles());
    let mut animation = Animation::new(&AnimationConfig {
        frame_duration: 0.05,
        interval_ms: 20,
        extent: 2.0,
    });

    let frame = animation.snapshot(&sim).clone();
    assert_eq!(frame.index, 0);
    assert_eq!(frame.positions[0], DVec2::new(0.3, 0.5));

    animation.tick(&mut sim);
    let snap = animation.snapshot(&sim).clone();
    assert_eq!(snap.index, 1);
    assert_eq!(snap.positions, sim.positions());
    assert_eq!(animation.interval(), Duration::from_millis(20));
}

#[test]
fn test_context_step_and_reset() {
    let mut ctx = build_simulation_context(ScenarioConfig::reference()).expect("valid scenario");
    let initial = ctx.animation.frame().positions.clone();
    assert_eq!(initial.len(), 3);

    step_simulation(&mut ctx);
    step_simulation(&mut ctx);
    assert_eq!(ctx.animation.frame().index, 2);
    assert_ne!(ctx.simulator.positions(), initial);

    reset(&mut ctx);
    assert_eq!(ctx.animation.frame().index, 0);
    assert_eq!(ctx.simulator.positions(), initial);
    assert_eq!(ctx.animation.frame().positions, initial);
}

#[test]
fn test_context_rejects_bad_animation_settings() {
    let mut scenario = ScenarioConfig::reference();
    scenario.animation.frame_duration = 0.0;
    assert!(build_simulation_context(scenario).is_err());
}
