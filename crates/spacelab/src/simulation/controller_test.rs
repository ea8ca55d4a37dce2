use nbody::body::{BodyId, BodyKind};
use nbody::collisions::CollisionKind;

use crate::config::SimulationConfig;
use crate::error::SimulationError;
use crate::scenario::{BodySpec, Scenario};
use crate::simulation::{Command, CommandOutcome, RunState, Simulation};

fn earth_moon() -> Simulation {
    Simulation::new(
        SimulationConfig::default(),
        Scenario::predefined("earth_moon").unwrap(),
    )
    .unwrap()
}

fn empty() -> Simulation {
    Simulation::new(
        SimulationConfig::default(),
        Scenario::predefined("empty").unwrap(),
    )
    .unwrap()
}

fn rock(name: &str, mass: f64, radius: f64, x: f64) -> BodySpec {
    BodySpec::new(BodyKind::Custom, name, mass, radius, [x, 0.0], [0.0, 0.0])
}

#[test]
fn test_new_simulation_is_running() {
    let sim = earth_moon();

    assert_eq!(sim.run_state(), RunState::Running);
    assert_eq!(sim.time_scale(), 1.0);
    assert_eq!(sim.elapsed(), 0.0);
    assert_eq!(sim.frame(), 0);
    assert_eq!(sim.body_count(), 3);
}

#[test]
fn test_new_rejects_invalid_config() {
    let config = SimulationConfig {
        base_dt: 0.0,
        ..SimulationConfig::default()
    };
    let result = Simulation::new(config, Scenario::predefined("empty").unwrap());

    assert!(matches!(result, Err(SimulationError::InvalidConfig(_))));
}

#[test]
fn test_new_rejects_invalid_scenario() {
    let scenario = Scenario::new("bad", vec![rock("ghost", -1.0, 1.0, 0.0)]);
    let result = Simulation::new(SimulationConfig::default(), scenario);

    assert!(matches!(
        result,
        Err(SimulationError::InvalidBodyParameters { .. })
    ));
}

#[test]
fn test_pause_resume_transitions() {
    let mut sim = earth_moon();

    assert_eq!(sim.pause(), RunState::Paused);
    assert_eq!(sim.pause(), RunState::Paused);
    assert!(sim.is_paused());

    assert_eq!(sim.resume(), RunState::Running);
    assert_eq!(sim.resume(), RunState::Running);

    assert_eq!(sim.toggle_pause(), RunState::Paused);
    assert_eq!(sim.toggle_pause(), RunState::Running);
}

#[test]
fn test_step_while_paused_changes_nothing() {
    let mut sim = earth_moon();
    sim.step();
    sim.pause();

    let positions: Vec<_> = sim.state().bodies.iter().map(|b| b.position).collect();
    let elapsed = sim.elapsed();

    let report = sim.step();

    assert!(!report.advanced);
    assert_eq!(sim.elapsed(), elapsed);
    assert_eq!(sim.frame(), 1);
    let after: Vec<_> = sim.state().bodies.iter().map(|b| b.position).collect();
    assert_eq!(positions, after);
}

#[test]
fn test_step_advances_by_scaled_dt() {
    let mut sim = earth_moon();
    sim.set_time_scale(16.0);

    let report = sim.step();

    assert!(report.advanced);
    assert_eq!(report.dt, 16.0);
    assert_eq!(report.substeps, 10);
    assert_eq!(sim.elapsed(), 16.0);
    assert_eq!(sim.frame(), 1);
}

#[test]
fn test_time_scale_clamped() {
    let mut sim = earth_moon();

    assert_eq!(sim.set_time_scale(10_000.0), 8192.0);
    assert_eq!(sim.set_time_scale(0.001), 0.1);
    assert_eq!(sim.set_time_scale(3.0), 3.0);
}

#[test]
fn test_non_finite_time_scale_ignored() {
    let mut sim = earth_moon();
    sim.set_time_scale(4.0);

    assert_eq!(sim.set_time_scale(f64::NAN), 4.0);
    assert_eq!(sim.set_time_scale(f64::INFINITY), 4.0);
}

#[test]
fn test_faster_and_slower() {
    let mut sim = earth_moon();

    assert_eq!(sim.faster(), 2.0);
    assert_eq!(sim.faster(), 4.0);
    assert_eq!(sim.slower(), 2.0);

    sim.set_time_scale(8192.0);
    assert_eq!(sim.faster(), 8192.0);

    sim.set_time_scale(0.1);
    assert_eq!(sim.slower(), 0.1);
}

#[test]
fn test_create_body_while_paused() {
    let mut sim = empty();
    sim.pause();

    let id = sim.create_body(rock("Rogue", 1.0e22, 1000.0, 5.0e4)).unwrap();

    assert_eq!(sim.body_count(), 1);
    assert_eq!(sim.state().get_body(id).unwrap().name, "Rogue");
    assert!(sim.is_paused());
}

#[test]
fn test_create_body_rejects_bad_parameters() {
    let mut sim = empty();

    let bad = [
        rock("zero", 0.0, 1.0, 0.0),
        rock("negative", -1.0, 1.0, 0.0),
        rock("nan radius", 1.0, f64::NAN, 0.0),
        rock("far", 1.0, 1.0, f64::INFINITY),
    ];
    for spec in bad {
        let name = spec.name.clone();
        match sim.create_body(spec) {
            Err(SimulationError::InvalidBodyParameters { name: rejected, .. }) => {
                assert_eq!(rejected, name)
            }
            other => panic!("expected rejection for {name}, got {other:?}"),
        }
    }
    assert_eq!(sim.body_count(), 0);
}

#[test]
fn test_ids_are_never_reused() {
    let mut sim = empty();
    let a = sim.create_body(rock("a", 1.0, 1.0, 0.0)).unwrap();
    sim.remove_body(a).unwrap();
    let b = sim.create_body(rock("b", 1.0, 1.0, 0.0)).unwrap();

    assert_ne!(a, b);
}

#[test]
fn test_satellite_naming_counts_scenario_satellites() {
    let mut sim = earth_moon();

    let first = sim.create_satellite([7000.0, 0.0], [0.0, 7.5]).unwrap();
    let second = sim.create_satellite([0.0, 7000.0], [-7.5, 0.0]).unwrap();

    let first = sim.state().get_body(first).unwrap();
    assert_eq!(first.name, "Satellite-2");
    assert_eq!(first.kind, BodyKind::Satellite);
    assert_eq!(first.mass, 1000.0);
    assert_eq!(first.radius, 0.1);
    assert_eq!(sim.state().get_body(second).unwrap().name, "Satellite-3");
}

#[test]
fn test_satellite_counter_restored_on_reset() {
    let mut sim = earth_moon();
    sim.create_satellite([7000.0, 0.0], [0.0, 7.5]).unwrap();
    sim.create_satellite([8000.0, 0.0], [0.0, 7.0]).unwrap();

    sim.reset().unwrap();
    let id = sim.create_satellite([7000.0, 0.0], [0.0, 7.5]).unwrap();

    assert_eq!(sim.state().get_body(id).unwrap().name, "Satellite-2");
}

#[test]
fn test_rejected_satellite_does_not_consume_a_number() {
    let mut sim = empty();

    assert!(sim.create_satellite([f64::NAN, 0.0], [0.0, 0.0]).is_err());
    let id = sim.create_satellite([1.0, 0.0], [0.0, 0.0]).unwrap();

    assert_eq!(sim.state().get_body(id).unwrap().name, "Satellite-1");
}

#[test]
fn test_create_from_template() {
    let mut sim = empty();

    let id = sim
        .create_from_template("moon", [1.0e5, 0.0], [0.0, 1.0])
        .unwrap();

    let moon = sim.state().get_body(id).unwrap();
    assert_eq!(moon.name, "Moon");
    assert_eq!(moon.kind, BodyKind::Moon);
    assert_eq!(moon.mass, 7.34767309e22);
    assert_eq!(moon.position.x, 1.0e5);
    assert_eq!(moon.velocity.y, 1.0);
}

#[test]
fn test_unknown_template() {
    let mut sim = empty();

    let result = sim.create_from_template("Death Star", [0.0, 0.0], [0.0, 0.0]);

    assert!(matches!(result, Err(SimulationError::UnknownTemplate(_))));
    assert_eq!(sim.body_count(), 0);
}

#[test]
fn test_remove_unknown_body() {
    let mut sim = empty();
    assert!(matches!(
        sim.remove_body(BodyId(42)),
        Err(SimulationError::UnknownBody(BodyId(42)))
    ));
}

#[test]
fn test_reset_restores_scenario() {
    let mut sim = earth_moon();
    let initial: Vec<_> = sim
        .state()
        .bodies
        .iter()
        .map(|b| (b.id, b.position, b.velocity))
        .collect();

    sim.set_time_scale(128.0);
    for _ in 0..20 {
        sim.step();
    }
    sim.create_body(rock("extra", 1.0, 1.0, 1.0e6)).unwrap();
    sim.pause();

    sim.reset().unwrap();

    let restored: Vec<_> = sim
        .state()
        .bodies
        .iter()
        .map(|b| (b.id, b.position, b.velocity))
        .collect();
    assert_eq!(restored, initial);
    assert_eq!(sim.elapsed(), 0.0);
    assert_eq!(sim.frame(), 0);
    assert_eq!(sim.run_state(), RunState::Running);
    assert_eq!(sim.time_scale(), 128.0);
    assert!(sim.state().bodies.iter().all(|b| b.trail.is_empty()));
    assert!(sim.state().impact_markers.is_empty());
}

#[test]
fn test_trails_recorded_and_cleared() {
    let config = SimulationConfig {
        trail_length: 3,
        ..SimulationConfig::default()
    };
    let mut sim = Simulation::new(config, Scenario::predefined("earth_moon").unwrap()).unwrap();

    for _ in 0..5 {
        sim.step();
    }
    assert!(sim.state().bodies.iter().all(|b| b.trail.len() == 3));

    sim.clear_trails();
    assert!(sim.state().bodies.iter().all(|b| b.trail.is_empty()));
}

#[test]
fn test_collision_through_step() {
    let mut sim = empty();
    let heavy = sim.create_body(rock("heavy", 1.0e6, 10.0, 0.0)).unwrap();
    sim.create_body(rock("light", 1.0e3, 1.0, 10.5)).unwrap();

    let report = sim.step();

    assert_eq!(report.collisions.len(), 1);
    assert_eq!(report.collisions[0].kind, CollisionKind::Absorbed);
    assert_eq!(sim.body_count(), 1);
    assert!(sim.state().get_body(heavy).is_some());
    assert_eq!(sim.snapshot().impact_markers.len(), 1);
}

#[test]
fn test_short_lived_marker_visible_after_collision() {
    let config = SimulationConfig {
        impact_marker_lifetime: Some(1),
        ..SimulationConfig::default()
    };
    let mut sim = Simulation::new(config, Scenario::predefined("empty").unwrap()).unwrap();
    sim.create_body(rock("earth", 5.972e24, 6371.0, 0.0)).unwrap();
    sim.create_body(rock("rock", 5.972e22, 100.0, 6400.0)).unwrap();

    let report = sim.step();

    assert_eq!(report.collisions.len(), 1);
    assert_eq!(report.expired_markers, 0);
    assert_eq!(sim.snapshot().impact_markers.len(), 1);
    assert_eq!(sim.snapshot().impact_markers[0].kind, CollisionKind::Absorbed);

    sim.step();
    assert!(sim.snapshot().impact_markers.is_empty());
}

#[test]
fn test_apply_commands() {
    let mut sim = earth_moon();

    assert_eq!(
        sim.apply(Command::Pause).unwrap(),
        CommandOutcome::RunState(RunState::Paused)
    );
    assert_eq!(
        sim.apply(Command::SetTimeScale { value: 1.0e9 }).unwrap(),
        CommandOutcome::TimeScale(8192.0)
    );
    assert_eq!(
        sim.apply(Command::Slower).unwrap(),
        CommandOutcome::TimeScale(4096.0)
    );

    let created = sim
        .apply(Command::CreateSatellite {
            position: [7000.0, 0.0],
            velocity: [0.0, 7.5],
        })
        .unwrap();
    let CommandOutcome::BodyCreated(id) = created else {
        panic!("expected a body, got {created:?}");
    };

    assert_eq!(
        sim.apply(Command::RemoveBody { id }).unwrap(),
        CommandOutcome::BodyRemoved(id)
    );
    assert_eq!(
        sim.apply(Command::ClearTrails).unwrap(),
        CommandOutcome::TrailsCleared
    );
    assert_eq!(sim.apply(Command::Reset).unwrap(), CommandOutcome::Reset);
    assert_eq!(sim.run_state(), RunState::Running);
}

#[test]
fn test_failed_command_leaves_state_untouched() {
    let mut sim = earth_moon();

    let result = sim.apply(Command::CreateBody(rock("bad", 0.0, 1.0, 0.0)));

    assert!(result.is_err());
    assert_eq!(sim.body_count(), 3);
}

#[test]
fn test_commands_from_yaml() {
    let yaml = r#"
- command: toggle_pause
- command: set_time_scale
  value: 64.0
- command: create_body
  name: Rogue
  mass: 1.0e22
  radius: 1000.0
  position: [-50000.0, 0.0]
- command: create_from_template
  template: io
  position: [0.0, 90000.0]
- command: remove_body
  id: 0
- command: faster
"#;
    let commands: Vec<Command> = serde_yaml::from_str(yaml).unwrap();
    assert_eq!(commands.len(), 6);

    let mut sim = earth_moon();
    for command in commands {
        sim.apply(command).unwrap();
    }

    assert!(sim.is_paused());
    assert_eq!(sim.time_scale(), 128.0);
    assert!(sim.snapshot().find("Rogue").is_some());
    assert!(sim.snapshot().find("Io").is_some());
    assert!(sim.snapshot().find("Earth").is_none());
}

#[test]
fn test_snapshot_reflects_state() {
    let mut sim = earth_moon();
    sim.set_time_scale(2.0);
    sim.step();
    sim.pause();

    let snapshot = sim.snapshot();

    assert_eq!(snapshot.body_count(), 3);
    assert_eq!(snapshot.elapsed, 2.0);
    assert_eq!(snapshot.time_scale, 2.0);
    assert!(snapshot.paused);
    assert_eq!(snapshot.frame, 1);
    assert_eq!(snapshot.find("Moon").unwrap().kind, BodyKind::Moon);
}

#[test]
fn test_snapshot_serializes() {
    let sim = earth_moon();
    let yaml = serde_yaml::to_string(&sim.snapshot()).unwrap();

    assert!(yaml.contains("Earth"));
    assert!(yaml.contains("elapsed"));
    assert!(!yaml.contains("force"));
}

#[test]
fn test_diagnostics() {
    let sim = earth_moon();
    let diagnostics = sim.diagnostics();

    assert_eq!(diagnostics.body_count, 3);
    assert!(diagnostics.kinetic_energy > 0.0);
    assert!(diagnostics.potential_energy < 0.0);
    assert!(diagnostics.total_energy < 0.0);
    assert_eq!(
        diagnostics.total_energy,
        diagnostics.kinetic_energy + diagnostics.potential_energy
    );
}
