//! Direct N-body gravity (O(N²) implementation)

use crate::body::Body;
use crate::forces::{ForceModel, G_KM};
use crate::state::SystemState;
use crate::vector::normalize_or_zero;
use nalgebra::Vector2;

/// Default separation floor in km
///
/// Well below any physical radius in the predefined systems, so it only
/// matters for bodies that pass through each other.
pub const DEFAULT_MIN_DISTANCE: f64 = 1.0;

/// Direct O(N²) gravitational force computation
///
/// Every unordered pair of massive bodies is evaluated once per step and the
/// result applied with opposite signs to both bodies, so the accumulated
/// forces obey Newton's third law exactly.
///
/// Separations below `min_distance` are treated as `min_distance` when
/// computing the magnitude. Bodies at exactly the same position have no
/// defined direction between them and exert no force on each other.
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
/// system.add_body(BodyKind::Custom, "a", 1.0e24, 1.0, Point2::new(-500.0, 0.0), Vector2::zeros());
/// system.add_body(BodyKind::Custom, "b", 1.0e24, 1.0, Point2::new(500.0, 0.0), Vector2::zeros());
///
/// DirectGravity::new().accumulate(&mut system);
///
/// let total = system.bodies[0].force + system.bodies[1].force;
/// assert!(total.magnitude() < 1e-9 * system.bodies[0].force.magnitude());
/// ```
#[derive(Debug, Clone)]
pub struct DirectGravity {
    /// Gravitational constant in km³ kg⁻¹ s⁻²
    pub g: f64,
    /// Separation floor in km
    pub min_distance: f64,
}

impl DirectGravity {
    /// Creates direct gravity with the physical constant and default floor
    pub fn new() -> Self {
        Self {
            g: G_KM,
            min_distance: DEFAULT_MIN_DISTANCE,
        }
    }

    /// Creates direct gravity with an explicit constant and separation floor
    ///
    /// # Arguments
    ///
    /// * `g` - Gravitational constant in km³ kg⁻¹ s⁻²
    /// * `min_distance` - Separation floor in km
    pub fn with_params(g: f64, min_distance: f64) -> Self {
        Self {
            g,
            min_distance: min_distance.max(0.0),
        }
    }

    /// Force on `a` due to `b`
    ///
    /// Zero when either body is massless or when they coincide exactly.
    pub fn pair_force(&self, a: &Body, b: &Body) -> Vector2<f64> {
        if !a.is_massive() || !b.is_massive() {
            return Vector2::zeros();
        }
        let dr = b.position - a.position;
        let direction = normalize_or_zero(&dr);
        let r = dr.magnitude().max(self.min_distance);
        if r == 0.0 {
            return Vector2::zeros();
        }
        direction * (self.g * a.mass * b.mass / (r * r))
    }
}

impl Default for DirectGravity {
    fn default() -> Self {
        Self::new()
    }
}

impl ForceModel for DirectGravity {
    fn accumulate(&self, state: &mut SystemState) {
        let n = state.bodies.len();
        let mut forces = vec![Vector2::zeros(); n];

        for i in 0..n {
            for j in (i + 1)..n {
                let f = self.pair_force(&state.bodies[i], &state.bodies[j]);
                forces[i] += f;
                forces[j] -= f;
            }
        }

        // Written back only after every pair is evaluated
        state
            .bodies
            .iter_mut()
            .zip(forces)
            .for_each(|(body, f)| body.force += f);
    }

    fn potential_energy(&self, state: &SystemState) -> f64 {
        // Body-body potential (each pair counted once)
        state
            .bodies
            .iter()
            .enumerate()
            .filter(|(_, a)| a.is_massive())
            .flat_map(|(i, a)| {
                state.bodies[i + 1..]
                    .iter()
                    .filter(|b| b.is_massive())
                    .map(move |b| {
                        let r = a.distance_to(b).max(self.min_distance);
                        if r > 0.0 {
                            -self.g * a.mass * b.mass / r
                        } else {
                            0.0
                        }
                    })
            })
            .sum()
    }
}

/// Speed of a circular orbit around a central mass
///
/// # Arguments
///
/// * `g` - Gravitational constant in km³ kg⁻¹ s⁻²
/// * `central_mass` - Mass being orbited in kg
/// * `radius` - Orbital radius in km
///
/// # Returns
///
/// Circular velocity in km/s
///
/// # Examples
///
/// ```
/// use nbody::forces::{G_KM, circular_velocity};
///
/// // ISS at 6771 km from Earth's centre: about 7.67 km/s
/// let v = circular_velocity(G_KM, 5.972e24, 6771.0);
/// assert!((v - 7.67).abs() < 0.01);
/// ```
pub fn circular_velocity(g: f64, central_mass: f64, radius: f64) -> f64 {
    (g * central_mass / radius).sqrt()
}
