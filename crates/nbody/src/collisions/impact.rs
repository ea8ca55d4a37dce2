//! Impact markers
//!
//! A marker is a non-physical record of where a collision happened. It is
//! rendered but never attracts, never collides, and never lives in the
//! body list.

use nalgebra::{Point2, Vector2};
use serde::Serialize;

use crate::body::Body;
use crate::collisions::CollisionKind;
use crate::vector::try_normalize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImpactMarker {
    pub position: Point2<f64>,
    pub kind: CollisionKind,
    /// Name of the body that was destroyed (or the first of a destroyed pair)
    pub impactor: String,
    /// Name of the surviving body (or the second of a destroyed pair)
    pub target: String,
    /// Steps since the marker was created
    pub age: u32,
    /// Steps before the marker expires (None = until cleared)
    pub lifetime: Option<u32>,
}

impl ImpactMarker {
    pub fn new(
        position: Point2<f64>,
        kind: CollisionKind,
        impactor: impl Into<String>,
        target: impl Into<String>,
        lifetime: Option<u32>,
    ) -> Self {
        Self {
            position,
            kind,
            impactor: impactor.into(),
            target: target.into(),
            age: 0,
            lifetime,
        }
    }

    /// Ages the marker by one step
    pub fn tick(&mut self) {
        self.age = self.age.saturating_add(1);
    }

    pub fn is_expired(&self) -> bool {
        self.lifetime.is_some_and(|lifetime| self.age >= lifetime)
    }
}

/// Where an absorbed body struck the survivor
///
/// The point lies on the survivor's surface along the line towards the
/// destroyed body's centre. Coincident centres fall back to the +x
/// direction.
///
/// # Examples
///
/// ```
/// use nbody::body::Body;
/// use nbody::collisions::impact_point;
/// use nalgebra::Point2;
///
/// let earth = Body::new_at(5.972e24, 6371.0, [0.0, 0.0], [0.0, 0.0]);
/// let rock = Body::new_at(1.0e15, 1.0, [0.0, 6000.0], [0.0, 0.0]);
///
/// assert_eq!(impact_point(&earth, &rock), Point2::new(0.0, 6371.0));
/// ```
pub fn impact_point(survivor: &Body, destroyed: &Body) -> Point2<f64> {
    let direction =
        try_normalize(&(destroyed.position - survivor.position)).unwrap_or_else(Vector2::x);
    survivor.position + direction * survivor.radius
}

/// Midpoint of two bodies' centres, used when both are destroyed
pub fn midpoint(a: &Body, b: &Body) -> Point2<f64> {
    nalgebra::center(&a.position, &b.position)
}
