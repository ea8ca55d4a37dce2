//! End-to-end properties of the simulation controller.
//!
//! These drive `Simulation` the way a front end would and check the
//! invariants that must hold regardless of scenario.

use std::path::PathBuf;

use approx::assert_relative_eq;
use nbody::body::BodyKind;
use nbody::collisions::CollisionKind;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use spacelab::{BodySpec, IntegrationMethod, Scenario, Simulation, SimulationConfig};

fn scenario_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios")
}

fn run(sim: &mut Simulation, frames: usize) {
    for _ in 0..frames {
        sim.step();
    }
}

fn random_cluster(seed: u64, n: usize) -> Scenario {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let bodies = (0..n)
        .map(|i| {
            // Spread on a coarse grid so nothing starts in contact
            let cell = [(i % 5) as f64, (i / 5) as f64];
            BodySpec::new(
                BodyKind::Custom,
                format!("body-{i}"),
                rng.gen_range(1.0e20..1.0e24),
                rng.gen_range(1.0..100.0),
                [
                    cell[0] * 1.0e6 + rng.gen_range(-1.0e5..1.0e5),
                    cell[1] * 1.0e6 + rng.gen_range(-1.0e5..1.0e5),
                ],
                [rng.gen_range(-0.5..0.5), rng.gen_range(-0.5..0.5)],
            )
        })
        .collect();
    Scenario::new("cluster", bodies)
}

#[test]
fn body_order_does_not_change_forces() {
    let forward = random_cluster(7, 12);
    let mut reversed = forward.clone();
    reversed.bodies.reverse();

    let mut a = Simulation::new(SimulationConfig::default(), forward).unwrap();
    let mut b = Simulation::new(SimulationConfig::default(), reversed).unwrap();
    a.step();
    b.step();

    for body in a.snapshot().bodies {
        let twin = b.snapshot().find(&body.name).unwrap();
        assert_relative_eq!(body.velocity.x, twin.velocity.x, max_relative = 1e-9, epsilon = 1e-15);
        assert_relative_eq!(body.velocity.y, twin.velocity.y, max_relative = 1e-9, epsilon = 1e-15);
    }
}

#[test]
fn equal_mass_free_fall_conserves_momentum() {
    let scenario = Scenario::new(
        "free_fall",
        vec![
            BodySpec::new(BodyKind::Planet, "a", 1.0e24, 1000.0, [-5.0e5, 0.0], [0.0, 0.0]),
            BodySpec::new(BodyKind::Planet, "b", 1.0e24, 1000.0, [5.0e5, 0.0], [0.0, 0.0]),
        ],
    );
    let mut sim = Simulation::new(SimulationConfig::default(), scenario).unwrap();
    sim.set_time_scale(32.0);

    let bodies = sim.snapshot().bodies;
    let centre = bodies[0].position.coords + bodies[1].position.coords;

    for _ in 0..200 {
        let report = sim.step();
        assert!(report.collisions.is_empty());

        let bodies = sim.snapshot().bodies;
        let p = bodies[0].momentum() + bodies[1].momentum();
        let scale = bodies[0].momentum().magnitude().max(1.0);
        assert!(p.magnitude() <= 1e-9 * scale, "momentum drift {p:?}");

        // Symmetric fall: the position sum never moves
        let sum = bodies[0].position.coords + bodies[1].position.coords;
        assert!((sum - centre).magnitude() <= 1e-6, "position sum drifted to {sum:?}");
    }

    // They did fall towards each other
    let bodies = sim.snapshot().bodies;
    assert!(bodies[0].distance_to(&bodies[1]) < 1.0e6);
}

#[test]
fn isolated_cluster_momentum_stays_bounded() {
    let config = SimulationConfig {
        collision_detection: false,
        ..SimulationConfig::default()
    };
    let mut sim = Simulation::new(config, random_cluster(42, 20)).unwrap();
    sim.set_time_scale(512.0);

    let p0 = sim.diagnostics().momentum;
    let reference: f64 = sim
        .snapshot()
        .bodies
        .iter()
        .map(|b| b.momentum().magnitude())
        .sum();

    run(&mut sim, 200);

    let p1 = sim.diagnostics().momentum;
    assert!((p1 - p0).magnitude() < 1e-9 * reference);
}

#[test]
fn reset_restores_initial_conditions() {
    let mut sim = Simulation::new(
        SimulationConfig::default(),
        Scenario::predefined("jupiter_system").unwrap(),
    )
    .unwrap();
    let initial: Vec<_> = sim
        .snapshot()
        .bodies
        .iter()
        .map(|b| (b.name.clone(), b.position, b.velocity))
        .collect();

    sim.set_time_scale(1024.0);
    run(&mut sim, 50);
    sim.create_satellite([1.0e6, 1.0e6], [0.0, 0.0]).unwrap();
    sim.reset().unwrap();

    let snapshot = sim.snapshot();
    let restored: Vec<_> = snapshot
        .bodies
        .iter()
        .map(|b| (b.name.clone(), b.position, b.velocity))
        .collect();

    assert_eq!(restored, initial);
    assert_eq!(snapshot.elapsed, 0.0);
    assert!(snapshot.bodies.iter().all(|b| b.trail.is_empty()));
    assert!(snapshot.impact_markers.is_empty());
}

#[test]
fn pause_freezes_and_resume_continues_seamlessly() {
    let scenario = Scenario::predefined("earth_moon").unwrap();
    let mut paused = Simulation::new(SimulationConfig::default(), scenario.clone()).unwrap();
    let mut straight = Simulation::new(SimulationConfig::default(), scenario).unwrap();
    paused.set_time_scale(8.0);
    straight.set_time_scale(8.0);

    run(&mut paused, 10);
    paused.pause();
    let frozen: Vec<_> = paused
        .snapshot()
        .bodies
        .iter()
        .map(|b| (b.position, b.velocity))
        .collect();
    let frozen_elapsed = paused.elapsed();

    run(&mut paused, 25);
    let still: Vec<_> = paused
        .snapshot()
        .bodies
        .iter()
        .map(|b| (b.position, b.velocity))
        .collect();
    assert_eq!(still, frozen);
    assert_eq!(paused.elapsed(), frozen_elapsed);

    paused.resume();
    run(&mut paused, 10);
    run(&mut straight, 20);

    assert_eq!(paused.elapsed(), straight.elapsed());
    for (a, b) in paused.snapshot().bodies.iter().zip(straight.snapshot().bodies) {
        assert_eq!(a.position, b.position);
        assert_eq!(a.velocity, b.velocity);
    }
}

#[test]
fn dominant_mass_survives_collision_unchanged() {
    let scenario = Scenario::new(
        "impact",
        vec![
            BodySpec::new(BodyKind::Planet, "big", 1.0e24, 5000.0, [0.0, 0.0], [0.0, 0.0]),
            BodySpec::new(BodyKind::Moon, "small", 1.0e22, 1000.0, [5500.0, 0.0], [0.0, 0.0]),
        ],
    );
    let config = SimulationConfig {
        gravitational_constant: 1.0e-40,
        ..SimulationConfig::default()
    };
    let mut sim = Simulation::new(config, scenario).unwrap();

    let report = sim.step();

    assert_eq!(report.collisions.len(), 1);
    let snapshot = sim.snapshot();
    assert_eq!(snapshot.body_count(), 1);
    let big = snapshot.find("big").unwrap();
    assert_eq!(big.mass, 1.0e24);
    assert_eq!(big.radius, 5000.0);
    assert_eq!(snapshot.impact_markers.len(), 1);
    assert_eq!(snapshot.impact_markers[0].kind, CollisionKind::Absorbed);
}

#[test]
fn equal_masses_destroy_each_other() {
    let scenario = Scenario::new(
        "twins",
        vec![
            BodySpec::new(BodyKind::Planet, "castor", 1.0e24, 5000.0, [-2000.0, 1000.0], [0.0, 0.0]),
            BodySpec::new(BodyKind::Planet, "pollux", 1.0e24, 5000.0, [2000.0, 3000.0], [0.0, 0.0]),
        ],
    );
    let config = SimulationConfig {
        gravitational_constant: 1.0e-40,
        ..SimulationConfig::default()
    };
    let mut sim = Simulation::new(config, scenario).unwrap();

    sim.step();

    let snapshot = sim.snapshot();
    assert_eq!(snapshot.body_count(), 0);
    assert_eq!(snapshot.impact_markers.len(), 1);
    assert_relative_eq!(snapshot.impact_markers[0].position.x, 0.0, epsilon = 1e-9);
    assert_relative_eq!(snapshot.impact_markers[0].position.y, 2000.0, epsilon = 1e-9);
}

#[test]
fn time_scale_limits() {
    let mut sim = Simulation::new(
        SimulationConfig::default(),
        Scenario::predefined("empty").unwrap(),
    )
    .unwrap();

    assert_eq!(sim.set_time_scale(10_000.0), 8192.0);
    assert_eq!(sim.set_time_scale(0.001), 0.1);
}

#[test]
fn trails_never_exceed_their_capacity() {
    let config = SimulationConfig {
        trail_length: 25,
        ..SimulationConfig::default()
    };
    let mut sim =
        Simulation::new(config, Scenario::predefined("solar_system").unwrap()).unwrap();
    sim.set_time_scale(8192.0);

    for frame in 1..=60 {
        sim.step();
        let expected = frame.min(25);
        assert!(sim.snapshot().bodies.iter().all(|b| b.trail.len() == expected));
    }
}

#[test]
fn extreme_time_scale_stays_finite() {
    let config = SimulationConfig {
        integration: IntegrationMethod::SingleStep,
        ..SimulationConfig::default()
    };
    let mut sim = Simulation::new(config, Scenario::predefined("earth_moon").unwrap()).unwrap();
    sim.set_time_scale(8192.0);

    run(&mut sim, 500);

    assert!(sim.snapshot().bodies.iter().all(|b| {
        b.position.x.is_finite()
            && b.position.y.is_finite()
            && b.velocity.x.is_finite()
            && b.velocity.y.is_finite()
    }));
}

#[test]
fn head_on_scenario_file() {
    let scenario = Scenario::load(scenario_dir().join("head_on.yaml")).unwrap();
    assert_eq!(scenario.bodies.len(), 3);

    let mut sim = Simulation::new(SimulationConfig::default(), scenario).unwrap();
    sim.set_time_scale(64.0);

    let mut destroyed = false;
    for _ in 0..2000 {
        let report = sim.step();
        destroyed |= report
            .collisions
            .iter()
            .any(|c| c.kind == CollisionKind::Destroyed);
        if destroyed {
            break;
        }
    }

    assert!(destroyed);
    assert!(sim.snapshot().find("Tellus").is_none());
    assert!(sim.snapshot().find("Terra").is_none());
}

#[test]
fn fast_forward_config_file() {
    let config = SimulationConfig::load(scenario_dir().join("fast_forward.yaml")).unwrap();

    assert_eq!(config.initial_time_scale, 256.0);
    assert_eq!(
        config.integration,
        IntegrationMethod::MultiStep { max_substeps: 50 }
    );

    let mut sim = Simulation::new(config, Scenario::predefined("earth_moon").unwrap()).unwrap();
    let report = sim.step();

    assert_eq!(report.substeps, 50);
    assert_eq!(sim.elapsed(), 256.0);
}
