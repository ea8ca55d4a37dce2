//! Scenarios: the initial set of bodies a simulation is seeded from.
//!
//! Scenarios are plain data. They come either from the predefined systems
//! in [`presets`] or from YAML files:
//!
//! ```yaml
//! name: binary
//! bodies:
//!   - kind: star
//!     name: Alpha
//!     mass: 2.0e30
//!     radius: 700000.0
//!     position: [-5.0e7, 0.0]
//!     velocity: [0.0, -10.0]
//!   - name: Beta
//!     mass: 2.0e30
//!     radius: 700000.0
//!     position: [5.0e7, 0.0]
//!     velocity: [0.0, 10.0]
//! ```

pub mod presets;


use std::path::Path;

use nalgebra::{Point2, Vector2};
use nbody::body::BodyKind;
use nbody::state::SystemState;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, SimulationError};

pub use presets::template;

/// Initial parameters of one body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BodySpec {
    #[serde(default)]
    pub kind: BodyKind,
    #[serde(default)]
    pub name: String,
    /// kg
    pub mass: f64,
    /// km
    pub radius: f64,
    /// km
    pub position: [f64; 2],
    /// km/s
    #[serde(default)]
    pub velocity: [f64; 2],
}

impl BodySpec {
    pub fn new(
        kind: BodyKind,
        name: impl Into<String>,
        mass: f64,
        radius: f64,
        position: [f64; 2],
        velocity: [f64; 2],
    ) -> Self {
        Self {
            kind,
            name: name.into(),
            mass,
            radius,
            position,
            velocity,
        }
    }

    /// A body on a counter-clockwise circular path about the origin
    ///
    /// `angle_deg` places the body on its orbit; `speed` is tangential.
    pub fn orbiting(
        kind: BodyKind,
        name: impl Into<String>,
        mass: f64,
        radius: f64,
        distance: f64,
        angle_deg: f64,
        speed: f64,
    ) -> Self {
        let angle = nbody::vector::degrees_to_radians(angle_deg);
        let position = nbody::vector::from_polar(distance, angle);
        let velocity = nbody::vector::tangential_velocity(speed, angle);
        Self::new(
            kind,
            name,
            mass,
            radius,
            [position.x, position.y],
            [velocity.x, velocity.y],
        )
    }

    /// Reject bodies the physics cannot carry
    ///
    /// Mass must be positive and finite, radius non-negative and finite,
    /// and position and velocity finite.
    pub fn validate(&self) -> Result<(), SimulationError> {
        let reject = |reason: String| SimulationError::InvalidBodyParameters {
            name: self.name.clone(),
            reason,
        };

        if !(self.mass > 0.0 && self.mass.is_finite()) {
            return Err(reject(format!(
                "mass must be positive and finite, got {}",
                self.mass
            )));
        }
        if !(self.radius >= 0.0 && self.radius.is_finite()) {
            return Err(reject(format!(
                "radius must be non-negative and finite, got {}",
                self.radius
            )));
        }
        if !self.position.iter().all(|v| v.is_finite()) {
            return Err(reject(format!(
                "position must be finite, got {:?}",
                self.position
            )));
        }
        if !self.velocity.iter().all(|v| v.is_finite()) {
            return Err(reject(format!(
                "velocity must be finite, got {:?}",
                self.velocity
            )));
        }
        Ok(())
    }

    pub fn position(&self) -> Point2<f64> {
        Point2::new(self.position[0], self.position[1])
    }

    pub fn velocity(&self) -> Vector2<f64> {
        Vector2::new(self.velocity[0], self.velocity[1])
    }
}

/// A named set of initial bodies
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Scenario {
    pub name: String,
    #[serde(default)]
    pub bodies: Vec<BodySpec>,
}

impl Scenario {
    pub fn new(name: impl Into<String>, bodies: Vec<BodySpec>) -> Self {
        Self {
            name: name.into(),
            bodies,
        }
    }

    /// Look up a predefined scenario by name (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use spacelab::scenario::Scenario;
    ///
    /// let scenario = Scenario::predefined("Earth_Moon").unwrap();
    /// assert_eq!(scenario.bodies.len(), 3);
    ///
    /// assert!(Scenario::predefined("andromeda").is_err());
    /// ```
    pub fn predefined(name: &str) -> Result<Self, SimulationError> {
        let key = name.trim().to_ascii_lowercase();
        let bodies = match key.as_str() {
            "earth_moon" => presets::earth_moon(),
            "solar_system" => presets::solar_system(),
            "jupiter_system" => presets::jupiter_system(),
            "proxima_centauri" => presets::proxima_centauri(),
            "empty" => Vec::new(),
            _ => return Err(SimulationError::UnknownScenario(name.to_string())),
        };
        Ok(Self::new(key, bodies))
    }

    /// Names accepted by [`Scenario::predefined`]
    pub fn available() -> &'static [&'static str] {
        &[
            "earth_moon",
            "solar_system",
            "jupiter_system",
            "proxima_centauri",
            "empty",
        ]
    }

    /// Parse a scenario from YAML text
    ///
    /// Body values are checked later, when the scenario seeds a simulation.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&text)
    }

    /// Validate every body with the same rules as live insertion
    pub fn validate(&self) -> Result<(), SimulationError> {
        self.bodies.iter().try_for_each(BodySpec::validate)
    }

    /// Number of satellites the scenario starts with
    pub fn satellite_count(&self) -> u32 {
        self.bodies
            .iter()
            .filter(|b| b.kind == BodyKind::Satellite)
            .count() as u32
    }

    /// Build a fresh system holding this scenario's bodies
    ///
    /// Ids are assigned from 0 in scenario order.
    pub fn seed(&self, trail_length: usize) -> Result<SystemState, SimulationError> {
        self.validate()?;

        let mut state = SystemState::new(trail_length);
        for spec in &self.bodies {
            state.add_body(
                spec.kind,
                spec.name.clone(),
                spec.mass,
                spec.radius,
                spec.position(),
                spec.velocity(),
            );
        }
        Ok(state)
    }
}
