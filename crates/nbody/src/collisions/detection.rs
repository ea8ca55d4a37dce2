//! Collision detection
//!
//! Two bodies collide when their discs touch or overlap:
//! `distance <= radius_a + radius_b`. Only massive bodies take part.

use crate::body::{Body, BodyId};
use crate::state::SystemState;

/// A detected overlap between two bodies
#[derive(Debug, Clone, PartialEq)]
pub struct CollisionEvent {
    /// First body ID (earlier in the body list)
    pub body_a: BodyId,
    /// Second body ID
    pub body_b: BodyId,
    /// Current centre-to-centre separation (km)
    pub separation: f64,
    /// Sum of the two radii (km)
    pub contact_distance: f64,
}

impl CollisionEvent {
    /// How far the discs interpenetrate (km, never negative)
    pub fn penetration(&self) -> f64 {
        (self.contact_distance - self.separation).max(0.0)
    }
}

/// Check if a pair of bodies overlaps
///
/// # Examples
///
/// ```
/// use nbody::body::Body;
/// use nbody::collisions::detection::check_pair;
///
/// let a = Body::new_at(1.0e24, 100.0, [0.0, 0.0], [0.0, 0.0]);
/// let b = Body::new_at(1.0e22, 50.0, [150.0, 0.0], [0.0, 0.0]);
///
/// // Touching counts as a collision
/// assert!(check_pair(&a, &b).is_some());
/// ```
pub fn check_pair(a: &Body, b: &Body) -> Option<CollisionEvent> {
    if !a.is_massive() || !b.is_massive() {
        return None;
    }

    let separation = a.distance_to(b);
    let contact_distance = a.radius.max(0.0) + b.radius.max(0.0);

    if separation <= contact_distance {
        Some(CollisionEvent {
            body_a: a.id,
            body_b: b.id,
            separation,
            contact_distance,
        })
    } else {
        None
    }
}

/// Collision detector trait
pub trait CollisionDetector: Send + Sync {
    /// Detect all collisions in the system
    ///
    /// # Returns
    ///
    /// List of collision events, at most one per unordered pair
    fn detect(&self, state: &SystemState) -> Vec<CollisionEvent>;
}

/// Direct O(N²) collision detector
///
/// Checks every pair of bodies. Simple and exact.
///
/// # Examples
///
/// ```
/// use nbody::body::BodyKind;
/// use nbody::collisions::{CollisionDetector, DirectDetector};
/// use nbody::state::SystemState;
/// use nalgebra::{Point2, Vector2};
///
/// let mut system = SystemState::new(0);
/// system.add_body(BodyKind::Planet, "Earth", 5.972e24, 6371.0, Point2::origin(), Vector2::zeros());
/// system.add_body(BodyKind::Satellite, "Sat", 1000.0, 0.1, Point2::new(6000.0, 0.0), Vector2::zeros());
///
/// let collisions = DirectDetector.detect(&system);
/// assert_eq!(collisions.len(), 1);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectDetector;

impl CollisionDetector for DirectDetector {
    fn detect(&self, state: &SystemState) -> Vec<CollisionEvent> {
        let n = state.bodies.len();

        (0..n)
            .flat_map(|i| {
                ((i + 1)..n).filter_map(move |j| check_pair(&state.bodies[i], &state.bodies[j]))
            })
            .collect()
    }
}
