//! Spacelab: an interactive 2D N-body simulator core.
//!
//! The physics lives in the `nbody` crate. This crate adds what a front end
//! needs around it: configuration, predefined scenarios, a pausable
//! controller with time scaling and live commands, and read-only snapshots
//! for rendering.

pub mod config;
pub mod error;
pub mod scenario;
pub mod simulation;


pub use config::{IntegrationMethod, SimulationConfig};
pub use error::{ConfigError, SimulationError};
pub use scenario::{BodySpec, Scenario};
pub use simulation::{Command, CommandOutcome, RunState, Simulation, Snapshot, StepReport};
