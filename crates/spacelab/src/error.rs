//! Error types for the simulation controller.
//!
//! Bad input is rejected at the boundary and reported through these types;
//! nothing here is ever clamped or silently repaired.

use std::fmt;

use nbody::body::BodyId;

/// Errors raised by simulation commands and construction.
#[derive(Debug)]
pub enum SimulationError {
    /// A body was rejected before insertion.
    InvalidBodyParameters { name: String, reason: String },
    /// No predefined scenario has this name.
    UnknownScenario(String),
    /// No predefined body template has this name.
    UnknownTemplate(String),
    /// No live body has this id.
    UnknownBody(BodyId),
    /// The configuration failed validation.
    InvalidConfig(ConfigError),
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimulationError::InvalidBodyParameters { name, reason } => {
                write!(f, "Invalid parameters for body '{}': {}", name, reason)
            }
            SimulationError::UnknownScenario(name) => write!(f, "Unknown scenario: {}", name),
            SimulationError::UnknownTemplate(name) => write!(f, "Unknown body template: {}", name),
            SimulationError::UnknownBody(id) => write!(f, "No body with id {}", id),
            SimulationError::InvalidConfig(e) => write!(f, "Invalid configuration: {}", e),
        }
    }
}

impl std::error::Error for SimulationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SimulationError::InvalidConfig(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ConfigError> for SimulationError {
    fn from(e: ConfigError) -> Self {
        SimulationError::InvalidConfig(e)
    }
}

/// Errors that can occur while loading configuration or scenario files.
#[derive(Debug)]
pub enum ConfigError {
    /// Failed to read the file.
    Io(std::io::Error),
    /// The file is not valid YAML for the expected type.
    Parse(serde_yaml::Error),
    /// The values parsed but are out of range.
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "Failed to read file: {}", e),
            ConfigError::Parse(e) => write!(f, "Failed to parse YAML: {}", e),
            ConfigError::Invalid(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse(e) => Some(e),
            ConfigError::Invalid(_) => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(e: serde_yaml::Error) -> Self {
        ConfigError::Parse(e)
    }
}
