//! Simulation configuration.
//!
//! A [`SimulationConfig`] is built once, validated, and handed to the
//! controller at construction. Every field has a default, so a YAML file
//! only needs the values it overrides:
//!
//! ```yaml
//! base_dt: 1.0              # seconds per frame at 1x
//! dominance_ratio: 1.2      # heavier body survives at or above this mass ratio
//! trail_length: 2000        # points per body, 0 disables trails
//! initial_time_scale: 64.0
//! integration:
//!   method: multi_step
//!   max_substeps: 10
//! impact_marker_lifetime: 600
//! ```

use std::path::Path;

use nbody::collisions::DEFAULT_DOMINANCE_RATIO;
use nbody::forces::G_KM;
use nbody::forces::gravity::DEFAULT_MIN_DISTANCE;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub const DEFAULT_BASE_DT: f64 = 1.0;
pub const DEFAULT_TRAIL_LENGTH: usize = 10_000;
pub const DEFAULT_MIN_TIME_SCALE: f64 = 0.1;
pub const DEFAULT_MAX_TIME_SCALE: f64 = 8192.0;
pub const DEFAULT_MAX_SUBSTEPS: usize = 10;

/// How a frame's scaled timestep is integrated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "snake_case")]
pub enum IntegrationMethod {
    /// One step of the full scaled `dt`
    SingleStep,
    /// `dt` split into `clamp(floor(dt / base_dt), 1, max_substeps)` equal substeps
    MultiStep { max_substeps: usize },
}

impl Default for IntegrationMethod {
    fn default() -> Self {
        IntegrationMethod::MultiStep {
            max_substeps: DEFAULT_MAX_SUBSTEPS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimulationConfig {
    /// km³ kg⁻¹ s⁻²
    pub gravitational_constant: f64,
    /// Simulated seconds per frame at 1x
    pub base_dt: f64,
    pub dominance_ratio: f64,
    pub trail_length: usize,
    pub min_time_scale: f64,
    pub max_time_scale: f64,
    pub initial_time_scale: f64,
    /// Distance floor for the gravity law (km)
    pub min_distance: f64,
    pub integration: IntegrationMethod,
    /// Frames an impact marker stays visible (None = until cleared or reset)
    pub impact_marker_lifetime: Option<u32>,
    pub collision_detection: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            gravitational_constant: G_KM,
            base_dt: DEFAULT_BASE_DT,
            dominance_ratio: DEFAULT_DOMINANCE_RATIO,
            trail_length: DEFAULT_TRAIL_LENGTH,
            min_time_scale: DEFAULT_MIN_TIME_SCALE,
            max_time_scale: DEFAULT_MAX_TIME_SCALE,
            initial_time_scale: 1.0,
            min_distance: DEFAULT_MIN_DISTANCE,
            integration: IntegrationMethod::default(),
            impact_marker_lifetime: None,
            collision_detection: true,
        }
    }
}

impl SimulationConfig {
    /// Parse and validate a configuration from YAML text
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: SimulationConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a configuration file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&text)
    }

    /// Check every value is usable
    pub fn validate(&self) -> Result<(), ConfigError> {
        fn positive(name: &str, value: f64) -> Result<(), ConfigError> {
            if value > 0.0 && value.is_finite() {
                Ok(())
            } else {
                Err(ConfigError::Invalid(format!(
                    "{} must be positive and finite, got {}",
                    name, value
                )))
            }
        }

        positive("gravitational_constant", self.gravitational_constant)?;
        positive("base_dt", self.base_dt)?;
        positive("min_time_scale", self.min_time_scale)?;
        positive("max_time_scale", self.max_time_scale)?;

        if !(self.dominance_ratio >= 1.0 && self.dominance_ratio.is_finite()) {
            return Err(ConfigError::Invalid(format!(
                "dominance_ratio must be at least 1, got {}",
                self.dominance_ratio
            )));
        }
        if !(self.min_distance >= 0.0 && self.min_distance.is_finite()) {
            return Err(ConfigError::Invalid(format!(
                "min_distance must be non-negative and finite, got {}",
                self.min_distance
            )));
        }
        if self.min_time_scale > self.max_time_scale {
            return Err(ConfigError::Invalid(format!(
                "min_time_scale ({}) exceeds max_time_scale ({})",
                self.min_time_scale, self.max_time_scale
            )));
        }
        if !(self.min_time_scale..=self.max_time_scale).contains(&self.initial_time_scale) {
            return Err(ConfigError::Invalid(format!(
                "initial_time_scale {} is outside [{}, {}]",
                self.initial_time_scale, self.min_time_scale, self.max_time_scale
            )));
        }
        if self.impact_marker_lifetime == Some(0) {
            return Err(ConfigError::Invalid(
                "impact_marker_lifetime must be at least 1 frame".to_string(),
            ));
        }
        if let IntegrationMethod::MultiStep { max_substeps: 0 } = self.integration {
            return Err(ConfigError::Invalid(
                "max_substeps must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}
