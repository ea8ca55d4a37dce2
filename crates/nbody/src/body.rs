use nalgebra::{Point2, Vector2};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::trail::Trail;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BodyId(pub u32);

impl fmt::Display for BodyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// What a body represents
///
/// The physics treats every kind the same way; the tag exists for
/// presentation and for command-layer defaults such as satellite naming.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyKind {
    Star,
    Planet,
    Moon,
    Satellite,
    #[default]
    Custom,
}

#[derive(Debug, Clone, Serialize)]
pub struct Body {
    pub id: BodyId,
    pub kind: BodyKind,
    pub name: String,
    pub mass: f64,              // kg
    pub radius: f64,            // km (physical radius for collisions)
    pub position: Point2<f64>,  // km
    pub velocity: Vector2<f64>, // km/s
    /// Net force accumulated for the current step (kg km/s²)
    #[serde(skip)]
    pub force: Vector2<f64>,
    pub trail: Trail,
}

impl Body {
    pub fn new(
        id: BodyId,
        kind: BodyKind,
        name: impl Into<String>,
        mass: f64,
        radius: f64,
        position: Point2<f64>,
        velocity: Vector2<f64>,
    ) -> Self {
        Body {
            id,
            kind,
            name: name.into(),
            mass,
            radius,
            position,
            velocity,
            force: Vector2::zeros(),
            trail: Trail::default(),
        }
    }

    /// Creates an unnamed custom body (for doctest examples)
    ///
    /// Mass in kg, radius in km, position in km and velocity in km/s.
    pub fn new_at(mass: f64, radius: f64, position: [f64; 2], velocity: [f64; 2]) -> Self {
        Body::new(
            BodyId(0),
            BodyKind::Custom,
            "",
            mass,
            radius,
            Point2::new(position[0], position[1]),
            Vector2::new(velocity[0], velocity[1]),
        )
    }

    /// Whether the body takes part in gravity and collisions
    ///
    /// Bodies without positive, finite mass are carried along and rendered
    /// but neither attract nor collide.
    pub fn is_massive(&self) -> bool {
        self.mass > 0.0 && self.mass.is_finite()
    }

    /// Acceleration from the accumulated force (zero for massless bodies)
    pub fn acceleration(&self) -> Vector2<f64> {
        if self.is_massive() {
            self.force / self.mass
        } else {
            Vector2::zeros()
        }
    }

    pub fn momentum(&self) -> Vector2<f64> {
        self.velocity * self.mass
    }

    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass * self.velocity.magnitude_squared()
    }

    pub fn distance_to(&self, other: &Body) -> f64 {
        (self.position - other.position).magnitude()
    }

    pub fn speed(&self) -> f64 {
        self.velocity.magnitude()
    }

    /// Angular momentum scalar about the origin (r × v, not multiplied by mass)
    /// In 2D, this returns the z-component of the angular momentum vector
    pub fn specific_angular_momentum(&self) -> f64 {
        self.position.x * self.velocity.y - self.position.y * self.velocity.x
    }
}
