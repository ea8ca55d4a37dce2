//! Interactive simulation controller.
//!
//! Wraps the `nbody` physics core in a state machine a front end can
//! drive one frame at a time.
//!
//! # Run States
//!
//! ```text
//!            pause / toggle
//!   Running ───────────────▶ Paused
//!      ▲  ◀─────────────────   │
//!      │    resume / toggle    │
//!      └──────── reset ────────┘
//! ```
//!
//! Commands (body creation, time scale, reset) are accepted in both states.
//! Only `step` depends on the run state.
//!
//! # Frame Sequence
//!
//! Each running frame covers `dt = base_dt × time_scale` seconds:
//! 1. Gravity and integration, split into substeps for large `dt`
//! 2. Ageing and expiry of markers left by earlier frames
//! 3. Collision detection and resolution
//! 4. Trail recording

mod command;
mod controller;
mod driver;
mod snapshot;
mod timestep;

#[cfg(test)]
mod controller_test;

pub use command::{Command, CommandOutcome, NewBody};
pub use controller::{RunState, Simulation};
pub use driver::{PhysicsPipeline, StepReport};
pub use snapshot::{Diagnostics, Snapshot};
pub use timestep::{
    TIME_SCALE_LADDER, clamp_time_scale, next_faster, next_slower, substep_count,
};
