//! Simple orbital integration example
//!
//! Demonstrates the semi-implicit Euler integrator with the Moon orbiting
//! the Earth, reporting energy and angular momentum drift once per orbit.
//!
//! Run with: cargo run --package nbody --example simple_orbit

use nalgebra::{Point2, Vector2};
use nbody::body::BodyKind;
use nbody::forces::{DirectGravity, ForceModel, G_KM, circular_velocity};
use nbody::integrator::{Integrator, SemiImplicitEuler};
use nbody::state::SystemState;

fn main() {
    println!("N-body Integrator Test: Earth-Moon Orbit\n");
    println!("{}", "=".repeat(60));

    let earth_mass = 5.972e24; // kg
    let moon_mass = 7.34767309e22; // kg
    let r = 384_400.0; // km

    let mut system = SystemState::new(0);
    system.add_body(
        BodyKind::Planet,
        "Earth",
        earth_mass,
        6371.0,
        Point2::origin(),
        Vector2::zeros(),
    );

    let v_circular = circular_velocity(G_KM, earth_mass, r);
    system.add_body(
        BodyKind::Moon,
        "Moon",
        moon_mass,
        1737.4,
        Point2::new(r, 0.0),
        Vector2::new(0.0, v_circular),
    );

    println!("\nInitial conditions:");
    println!("  Moon mass: {:.3e} kg", moon_mass);
    println!("  Orbital radius: {:.0} km", r);
    println!("  Circular velocity: {:.4} km/s", v_circular);

    let integrator = SemiImplicitEuler;
    let force = DirectGravity::new();

    let initial_energy = system.kinetic_energy() + force.potential_energy(&system);
    let initial_l = system.total_angular_momentum();

    println!("\nInitial energy: {:.6e} kg km² s⁻²", initial_energy);
    println!("Angular momentum: {:.6e} kg km² s⁻¹", initial_l);

    let orbital_period = 2.0 * std::f64::consts::PI * (r.powi(3) / (G_KM * earth_mass)).sqrt();
    let steps_per_orbit = 5000;
    let dt = orbital_period / steps_per_orbit as f64;
    let n_orbits = 5;

    println!("\nIntegration parameters:");
    println!("  Timestep: {:.1} s ({} steps/orbit)", dt, steps_per_orbit);
    println!(
        "  Total time: {} orbits ({:.1} days)",
        n_orbits,
        n_orbits as f64 * orbital_period / 86_400.0
    );

    println!("\nIntegrating...");

    for orbit in 1..=n_orbits {
        integrator.integrate(&mut system, dt, steps_per_orbit, &force);

        let separation = system.bodies[0].distance_to(&system.bodies[1]);
        let energy = system.kinetic_energy() + force.potential_energy(&system);
        let l = system.total_angular_momentum();

        let energy_error = ((energy - initial_energy) / initial_energy).abs();
        let l_error = ((l - initial_l) / initial_l).abs();
        let r_error = ((separation - r) / r).abs();

        println!(
            "Orbit {}: d={:.1} km, ΔE={:.2e}, ΔL={:.2e}, Δr={:.2e}",
            orbit, separation, energy_error, l_error, r_error
        );
    }

    let final_energy = system.kinetic_energy() + force.potential_energy(&system);
    let energy_error = ((final_energy - initial_energy) / initial_energy).abs();
    let separation = system.bodies[0].distance_to(&system.bodies[1]);
    let r_error = ((separation - r) / r).abs();

    println!("\n{}", "=".repeat(60));
    if energy_error < 1e-2 {
        println!("✓ Energy bounded to within 1%");
    } else {
        println!("✗ Energy error too large: {:.2e}", energy_error);
    }

    if r_error < 0.02 {
        println!("✓ Orbit remains near circular (Δr < 2%)");
    } else {
        println!("✗ Orbit drift: {:.2e}", r_error);
    }

    println!("\nTest complete!");
}
