use crate::body::{Body, BodyId, BodyKind};
use crate::collisions::ImpactMarker;
use nalgebra::{Point2, Vector2};
use std::collections::HashSet;

/// Complete state of an N-body system at a given time
///
/// Bodies live in a single growable arena and are addressed by stable
/// [`BodyId`] handles. Ids are never reused for the lifetime of a state, so
/// a handle held across a collision step either still resolves to the same
/// body or resolves to nothing.
#[derive(Debug, Clone)]
pub struct SystemState {
    /// Elapsed simulated time in seconds
    pub time: f64,
    /// Collection of bodies, in insertion order
    pub bodies: Vec<Body>,
    /// Collision sites awaiting expiry
    pub impact_markers: Vec<ImpactMarker>,
    /// Trail capacity given to newly added bodies
    trail_length: usize,
    /// Next available body ID
    next_id: u32,
}

impl SystemState {
    /// Creates an empty system
    ///
    /// # Arguments
    ///
    /// * `trail_length` - Maximum trail points kept per body (0 disables trails)
    ///
    /// # Examples
    ///
    /// ```
    /// use nbody::state::SystemState;
    ///
    /// let system = SystemState::new(100);
    ///
    /// assert_eq!(system.body_count(), 0);
    /// assert_eq!(system.time, 0.0);
    /// ```
    pub fn new(trail_length: usize) -> Self {
        Self {
            time: 0.0,
            bodies: Vec::new(),
            impact_markers: Vec::new(),
            trail_length,
            next_id: 0,
        }
    }

    /// Adds a new body to the system and returns its ID
    ///
    /// No validation happens here; callers at the command boundary are
    /// expected to reject bad parameters before inserting.
    ///
    /// # Arguments
    ///
    /// * `kind` - What the body represents
    /// * `name` - Display name
    /// * `mass` - Body mass in kg
    /// * `radius` - Physical radius in km
    /// * `position` - Position in km
    /// * `velocity` - Velocity in km/s
    ///
    /// # Examples
    ///
    /// ```
    /// use nbody::body::BodyKind;
    /// use nbody::state::SystemState;
    /// use nalgebra::{Point2, Vector2};
    ///
    /// let mut system = SystemState::new(100);
    ///
    /// let moon_id = system.add_body(
    ///     BodyKind::Moon,
    ///     "Moon",
    ///     7.34767309e22,
    ///     1737.4,
    ///     Point2::new(384_400.0, 0.0),
    ///     Vector2::new(0.0, 1.022),
    /// );
    ///
    /// assert_eq!(system.body_count(), 1);
    /// assert_eq!(system.get_body(moon_id).unwrap().name, "Moon");
    /// ```
    pub fn add_body(
        &mut self,
        kind: BodyKind,
        name: impl Into<String>,
        mass: f64,
        radius: f64,
        position: Point2<f64>,
        velocity: Vector2<f64>,
    ) -> BodyId {
        let id = BodyId(self.next_id);
        self.next_id += 1;
        let mut body = Body::new(id, kind, name, mass, radius, position, velocity);
        body.trail.set_max_len(self.trail_length);
        self.bodies.push(body);
        id
    }

    /// Removes a body from the system
    ///
    /// # Returns
    ///
    /// The removed Body if found, None otherwise
    ///
    /// # Examples
    ///
    /// ```
    /// use nbody::body::BodyKind;
    /// use nbody::state::SystemState;
    /// use nalgebra::{Point2, Vector2};
    ///
    /// let mut system = SystemState::new(0);
    ///
    /// let id = system.add_body(BodyKind::Custom, "rock", 1.0e20, 100.0, Point2::origin(), Vector2::zeros());
    /// assert_eq!(system.body_count(), 1);
    ///
    /// let removed = system.remove_body(id);
    /// assert!(removed.is_some());
    /// assert_eq!(system.body_count(), 0);
    /// ```
    pub fn remove_body(&mut self, id: BodyId) -> Option<Body> {
        self.bodies
            .iter()
            .position(|b| b.id == id)
            .map(|idx| self.bodies.remove(idx))
    }

    /// Removes every body whose ID is in `ids` in a single compaction pass
    ///
    /// Survivors keep their relative order.
    ///
    /// # Returns
    ///
    /// Number of bodies removed
    pub fn remove_bodies(&mut self, ids: &HashSet<BodyId>) -> usize {
        let before = self.bodies.len();
        self.bodies.retain(|b| !ids.contains(&b.id));
        before - self.bodies.len()
    }

    /// Gets a reference to a body by ID
    pub fn get_body(&self, id: BodyId) -> Option<&Body> {
        self.bodies.iter().find(|b| b.id == id)
    }

    /// Gets a mutable reference to a body by ID
    pub fn get_body_mut(&mut self, id: BodyId) -> Option<&mut Body> {
        self.bodies.iter_mut().find(|b| b.id == id)
    }

    /// Finds the first body with the given name
    pub fn find_by_name(&self, name: &str) -> Option<&Body> {
        self.bodies.iter().find(|b| b.name == name)
    }

    /// Returns the number of bodies in the system
    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    /// Trail capacity given to bodies added from now on
    pub fn trail_length(&self) -> usize {
        self.trail_length
    }

    /// Zeroes every body's force accumulator
    pub fn clear_forces(&mut self) {
        self.bodies
            .iter_mut()
            .for_each(|b| b.force = Vector2::zeros());
    }

    /// Appends each body's current position to its trail
    pub fn record_trails(&mut self) {
        self.bodies
            .iter_mut()
            .for_each(|b| b.trail.push(b.position));
    }

    /// Drops all trail points and impact markers, keeping the bodies
    pub fn clear_trails_and_markers(&mut self) {
        self.bodies.iter_mut().for_each(|b| b.trail.clear());
        self.impact_markers.clear();
    }

    /// Ages every impact marker by one step and drops expired ones
    ///
    /// # Returns
    ///
    /// Number of markers removed
    pub fn expire_markers(&mut self) -> usize {
        let before = self.impact_markers.len();
        self.impact_markers.iter_mut().for_each(|m| m.tick());
        self.impact_markers.retain(|m| !m.is_expired());
        before - self.impact_markers.len()
    }

    /// Returns the total mass of all bodies
    ///
    /// # Examples
    ///
    /// ```
    /// use nbody::body::BodyKind;
    /// use nbody::state::SystemState;
    /// use nalgebra::{Point2, Vector2};
    ///
    /// let mut system = SystemState::new(0);
    ///
    /// system.add_body(BodyKind::Planet, "a", 1.0e24, 1.0, Point2::new(1.0, 0.0), Vector2::zeros());
    /// system.add_body(BodyKind::Planet, "b", 2.0e24, 1.0, Point2::new(2.0, 0.0), Vector2::zeros());
    ///
    /// assert_eq!(system.total_mass(), 3.0e24);
    /// ```
    pub fn total_mass(&self) -> f64 {
        self.bodies
            .iter()
            .filter(|b| b.is_massive())
            .map(|b| b.mass)
            .sum()
    }

    /// Returns the total momentum of all bodies
    ///
    /// This should stay approximately constant for an isolated system
    /// (useful for checking numerical drift)
    pub fn total_momentum(&self) -> Vector2<f64> {
        self.bodies
            .iter()
            .filter(|b| b.is_massive())
            .map(|b| b.momentum())
            .fold(Vector2::zeros(), |acc, p| acc + p)
    }

    /// Returns the total angular momentum of all bodies about the origin
    pub fn total_angular_momentum(&self) -> f64 {
        self.bodies
            .iter()
            .filter(|b| b.is_massive())
            .map(|b| b.specific_angular_momentum() * b.mass)
            .sum()
    }

    /// Returns the total kinetic energy of all bodies
    pub fn kinetic_energy(&self) -> f64 {
        self.bodies
            .iter()
            .filter(|b| b.is_massive())
            .map(|b| b.kinetic_energy())
            .sum()
    }

    /// Mass-weighted mean position of all massive bodies
    ///
    /// Returns None when the system holds no mass.
    pub fn center_of_mass(&self) -> Option<Point2<f64>> {
        let total = self.total_mass();
        if total <= 0.0 {
            return None;
        }
        let weighted = self
            .bodies
            .iter()
            .filter(|b| b.is_massive())
            .map(|b| b.position.coords * b.mass)
            .fold(Vector2::zeros(), |acc, p| acc + p);
        Some(Point2::from(weighted / total))
    }
}
