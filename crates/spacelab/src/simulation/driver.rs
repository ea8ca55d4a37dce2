//! Per-frame physics pipeline.
//!
//! Runs the physics in a fixed order each frame:
//! 1. Gravity accumulated for all bodies, then all bodies integrated
//!    (repeated once per substep)
//! 2. Existing impact markers aged and expired
//! 3. Collision detection and resolution
//! 4. Trail points appended for the survivors
//! 5. Elapsed time advanced by the full frame `dt`
//!
//! Markers are aged before resolution so a marker created this frame is
//! always visible in the frame's snapshot.

use nbody::collisions::{
    CollisionDetector, CollisionPolicy, CollisionReport, DirectDetector, resolve_collisions,
};
use nbody::forces::DirectGravity;
use nbody::integrator::{Integrator, SemiImplicitEuler};
use nbody::state::SystemState;

use super::timestep::substep_count;
use crate::config::{IntegrationMethod, SimulationConfig};

/// What happened during one call to `step`
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StepReport {
    /// False when the simulation was paused and nothing changed
    pub advanced: bool,
    /// Simulated seconds covered by the frame
    pub dt: f64,
    pub substeps: usize,
    pub collisions: Vec<CollisionReport>,
    pub expired_markers: usize,
}

impl StepReport {
    /// Report for a frame skipped while paused
    pub fn paused() -> Self {
        Self::default()
    }
}

/// Force model, integrator and collision handling configured for a run
#[derive(Debug, Clone)]
pub struct PhysicsPipeline {
    gravity: DirectGravity,
    integrator: SemiImplicitEuler,
    detector: DirectDetector,
    policy: CollisionPolicy,
    integration: IntegrationMethod,
    base_dt: f64,
    marker_lifetime: Option<u32>,
    collision_detection: bool,
}

impl PhysicsPipeline {
    pub fn from_config(config: &SimulationConfig) -> Self {
        Self {
            gravity: DirectGravity::with_params(config.gravitational_constant, config.min_distance),
            integrator: SemiImplicitEuler,
            detector: DirectDetector,
            policy: CollisionPolicy::new(config.dominance_ratio),
            integration: config.integration,
            base_dt: config.base_dt,
            marker_lifetime: config.impact_marker_lifetime,
            collision_detection: config.collision_detection,
        }
    }

    pub fn gravity(&self) -> &DirectGravity {
        &self.gravity
    }

    /// Substeps used for a frame of length `dt`
    pub fn substeps_for(&self, dt: f64) -> usize {
        match self.integration {
            IntegrationMethod::SingleStep => 1,
            IntegrationMethod::MultiStep { max_substeps } => {
                substep_count(dt, self.base_dt, max_substeps)
            }
        }
    }

    /// Execute one frame of `dt` simulated seconds.
    ///
    /// # Arguments
    /// * `state` - System to advance (modified in place)
    /// * `dt` - Scaled frame timestep in seconds
    ///
    /// # Returns
    /// Summary of the frame, including every collision resolved
    pub fn advance(&self, state: &mut SystemState, dt: f64) -> StepReport {
        let start = state.time;
        let substeps = self.substeps_for(dt);

        self.integrator
            .integrate(state, dt / substeps as f64, substeps, &self.gravity);
        // Substep rounding must not leak into the clock
        state.time = start + dt;

        let expired_markers = state.expire_markers();

        let collisions = if self.collision_detection {
            let events = self.detector.detect(state);
            if events.is_empty() {
                Vec::new()
            } else {
                resolve_collisions(state, events, &self.policy, self.marker_lifetime)
            }
        } else {
            Vec::new()
        };

        state.record_trails();

        StepReport {
            advanced: true,
            dt,
            substeps,
            collisions,
            expired_markers,
        }
    }
}
