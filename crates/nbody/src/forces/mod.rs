//! Force models for N-body simulations
//!
//! This module provides the `ForceModel` trait and the direct-summation
//! gravity implementation. Force models write into each body's force
//! accumulator; the integrator consumes and clears it.

use crate::state::SystemState;

pub mod gravity;


pub use gravity::{DirectGravity, circular_velocity};

/// Gravitational constant in km³ kg⁻¹ s⁻²
/// G = 6.67430e-11 m³ kg⁻¹ s⁻² = 6.67430e-20 km³ kg⁻¹ s⁻²
pub const G_KM: f64 = 6.67430e-20;

/// A source of force on bodies in an N-body system
///
/// # Examples
///
/// ```
/// use nbody::body::BodyKind;
/// use nbody::forces::{DirectGravity, ForceModel};
/// use nbody::state::SystemState;
/// use nalgebra::{Point2, Vector2};
///
/// let mut system = SystemState::new(0);
/// system.add_body(BodyKind::Planet, "Earth", 5.972e24, 6371.0, Point2::origin(), Vector2::zeros());
/// system.add_body(BodyKind::Moon, "Moon", 7.342e22, 1737.4, Point2::new(384_400.0, 0.0), Vector2::zeros());
///
/// let gravity = DirectGravity::new();
/// gravity.accumulate(&mut system);
///
/// // The Moon is pulled back toward Earth
/// assert!(system.bodies[1].force.x < 0.0);
/// ```
pub trait ForceModel: Send + Sync {
    /// Add this model's force on every body to its accumulator
    ///
    /// Must read positions only, so that evaluation order does not matter.
    fn accumulate(&self, state: &mut SystemState);

    /// Compute potential energy contribution (optional)
    ///
    /// Default implementation returns 0.0. Override for force models
    /// that contribute to potential energy (e.g., gravity).
    ///
    /// # Returns
    ///
    /// Potential energy in kg km² s⁻²
    fn potential_energy(&self, _state: &SystemState) -> f64 {
        0.0
    }
}
