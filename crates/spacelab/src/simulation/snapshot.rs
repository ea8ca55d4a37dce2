//! Read-only views handed to renderers and reporters.

use nalgebra::Vector2;
use nbody::body::Body;
use nbody::collisions::ImpactMarker;
use serde::Serialize;

/// Borrowed view of everything a renderer draws
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Snapshot<'a> {
    pub bodies: &'a [Body],
    pub impact_markers: &'a [ImpactMarker],
    /// Simulated seconds since the last reset
    pub elapsed: f64,
    pub time_scale: f64,
    pub paused: bool,
    /// Frames advanced since the last reset
    pub frame: u64,
}

impl<'a> Snapshot<'a> {
    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    pub fn find(&self, name: &str) -> Option<&'a Body> {
        self.bodies.iter().find(|b| b.name == name)
    }
}

/// Conservation quantities of the live system
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Diagnostics {
    pub body_count: usize,
    /// kg
    pub total_mass: f64,
    /// kg km/s
    pub momentum: Vector2<f64>,
    /// kg km²/s²
    pub kinetic_energy: f64,
    pub potential_energy: f64,
    pub total_energy: f64,
}
