//! Commands accepted by the controller between frames.
//!
//! Commands deserialize from an internally tagged form, so a YAML or JSON
//! input layer can feed them straight in:
//!
//! ```yaml
//! - command: set_time_scale
//!   value: 64.0
//! - command: create_satellite
//!   position: [7000.0, 0.0]
//!   velocity: [0.0, 7.5]
//! - command: create_body
//!   name: Rogue
//!   mass: 1.0e22
//!   radius: 1000.0
//!   position: [-50000.0, 0.0]
//! ```

use nbody::body::BodyId;
use serde::{Deserialize, Serialize};

use super::RunState;
use crate::scenario::BodySpec;

/// Parameters of a body created at runtime
pub type NewBody = BodySpec;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum Command {
    Pause,
    Resume,
    TogglePause,
    Reset,
    SetTimeScale {
        value: f64,
    },
    Faster,
    Slower,
    CreateBody(NewBody),
    CreateSatellite {
        position: [f64; 2],
        #[serde(default)]
        velocity: [f64; 2],
    },
    CreateFromTemplate {
        template: String,
        position: [f64; 2],
        #[serde(default)]
        velocity: [f64; 2],
    },
    RemoveBody {
        id: BodyId,
    },
    ClearTrails,
}

/// Result of a successfully applied command
#[derive(Debug, Clone, PartialEq)]
pub enum CommandOutcome {
    /// Run state after a pause, resume or toggle
    RunState(RunState),
    /// The simulation was re-seeded from its scenario
    Reset,
    /// Time scale now in effect
    TimeScale(f64),
    BodyCreated(BodyId),
    BodyRemoved(BodyId),
    TrailsCleared,
}
