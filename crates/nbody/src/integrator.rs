//! Time integration for N-body systems
//!
//! Integrators consume the force accumulated on each body, advance
//! velocities and positions, and clear the accumulator for the next step.
//! The primary integrator is semi-implicit (symplectic) Euler, which keeps
//! orbital energy bounded over long runs where explicit Euler spirals
//! outward.

use crate::forces::ForceModel;
use crate::state::SystemState;

/// A time integrator for N-body systems
pub trait Integrator: Send + Sync {
    /// Advance the system by one timestep using the forces already accumulated
    ///
    /// # Arguments
    ///
    /// * `state` - Current system state (modified in place)
    /// * `dt` - Timestep in seconds
    fn step(&self, state: &mut SystemState, dt: f64);

    /// Advance the system by multiple timesteps
    ///
    /// Forces are recomputed from `force` before every step.
    ///
    /// # Arguments
    ///
    /// * `state` - Current system state (modified in place)
    /// * `dt` - Timestep in seconds
    /// * `n_steps` - Number of steps to take
    /// * `force` - Force model to accumulate before each step
    ///
    /// # Returns
    ///
    /// Final time after integration
    fn integrate(
        &self,
        state: &mut SystemState,
        dt: f64,
        n_steps: usize,
        force: &dyn ForceModel,
    ) -> f64 {
        for _ in 0..n_steps {
            force.accumulate(state);
            self.step(state, dt);
        }
        state.time
    }
}

/// Semi-implicit (symplectic) Euler integrator
///
/// Velocity is updated first and the new velocity moves the body:
///
/// 1. Kick: v(t + dt) = v(t) + F(t)/m * dt
/// 2. Drift: x(t + dt) = x(t) + v(t + dt) * dt
///
/// # Examples
///
/// ```
/// use nbody::body::BodyKind;
/// use nbody::integrator::{Integrator, SemiImplicitEuler};
/// use nbody::forces::DirectGravity;
/// use nbody::state::SystemState;
/// use nalgebra::{Point2, Vector2};
///
/// let mut system = SystemState::new(0);
/// system.add_body(BodyKind::Planet, "Earth", 5.972e24, 6371.0, Point2::origin(), Vector2::zeros());
/// system.add_body(BodyKind::Satellite, "ISS", 1000.0, 0.1, Point2::new(6771.0, 0.0), Vector2::new(0.0, 7.66));
///
/// let integrator = SemiImplicitEuler;
/// let force = DirectGravity::new();
///
/// // Advance one minute in one-second steps
/// integrator.integrate(&mut system, 1.0, 60, &force);
/// assert_eq!(system.time, 60.0);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SemiImplicitEuler;

impl Integrator for SemiImplicitEuler {
    fn step(&self, state: &mut SystemState, dt: f64) {
        state.bodies.iter_mut().for_each(|body| {
            body.velocity += body.acceleration() * dt;
            body.position += body.velocity * dt;
            body.force.fill(0.0);
        });

        state.time += dt;
    }
}

/// Simple explicit Euler integrator (1st order, for testing/comparison only)
///
/// Positions move with the old velocity before the velocity is updated.
/// It does not keep orbital energy bounded.
///
/// **Do not use for long runs!** Use `SemiImplicitEuler` instead.
#[derive(Debug, Clone, Copy, Default)]
pub struct Euler;

impl Integrator for Euler {
    fn step(&self, state: &mut SystemState, dt: f64) {
        state.bodies.iter_mut().for_each(|body| {
            let accel = body.acceleration();
            body.position += body.velocity * dt;
            body.velocity += accel * dt;
            body.force.fill(0.0);
        });

        state.time += dt;
    }
}
