//! Collision detection and resolution example
//!
//! Drops a handful of rocks onto a planet and lets two equal boulders
//! meet head on. Rocks are absorbed; the boulders destroy each other.
//!
//! Run with: cargo run --package nbody --example collision_demo

use nalgebra::{Point2, Vector2};
use nbody::body::BodyKind;
use nbody::collisions::{CollisionDetector, CollisionPolicy, DirectDetector, resolve_collisions};
use nbody::forces::{DirectGravity, ForceModel};
use nbody::integrator::{Integrator, SemiImplicitEuler};
use nbody::state::SystemState;

fn main() {
    println!("N-body Collision Demo\n");
    println!("{}", "=".repeat(60));

    let mut system = SystemState::new(50);

    system.add_body(
        BodyKind::Planet,
        "Earth",
        5.972e24,
        6371.0,
        Point2::origin(),
        Vector2::zeros(),
    );

    for i in 0..4 {
        let angle = i as f64 * std::f64::consts::FRAC_PI_2;
        let distance = 8000.0 + 500.0 * i as f64;
        system.add_body(
            BodyKind::Custom,
            format!("Rock-{}", i + 1),
            1.0e12,
            0.5,
            Point2::new(distance * angle.cos(), distance * angle.sin()),
            Vector2::zeros(),
        );
    }

    system.add_body(
        BodyKind::Custom,
        "Boulder-A",
        1.0e15,
        5.0,
        Point2::new(-40_000.0, 40_000.0),
        Vector2::new(2.0, 0.0),
    );
    system.add_body(
        BodyKind::Custom,
        "Boulder-B",
        1.0e15,
        5.0,
        Point2::new(40_000.0, 40_000.0),
        Vector2::new(-2.0, 0.0),
    );

    println!("\nInitial bodies: {}", system.body_count());

    let integrator = SemiImplicitEuler;
    let force = DirectGravity::new();
    let detector = DirectDetector;
    let policy = CollisionPolicy::default();

    let dt = 1.0;
    let n_steps = 30_000;
    let mut total_collisions = 0;

    for _ in 0..n_steps {
        force.accumulate(&mut system);
        integrator.step(&mut system, dt);

        let events = detector.detect(&system);
        if !events.is_empty() {
            for report in resolve_collisions(&mut system, events, &policy, Some(600)) {
                total_collisions += 1;
                println!(
                    "  t={:>7.0} s  {:?}: {} / {} at ({:.0}, {:.0}) km",
                    system.time,
                    report.kind,
                    report.impactor,
                    report.target,
                    report.position.x,
                    report.position.y
                );
            }
        }

        system.record_trails();
        system.expire_markers();
    }

    println!("\n{}", "=".repeat(60));
    println!("Collisions resolved: {}", total_collisions);
    println!("Remaining bodies: {}", system.body_count());
    for body in &system.bodies {
        println!("  {} {}: {:.3e} kg", body.id, body.name, body.mass);
    }
    println!("Active impact markers: {}", system.impact_markers.len());
}
