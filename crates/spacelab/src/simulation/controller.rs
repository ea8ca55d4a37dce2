//! The simulation controller.
//!
//! [`Simulation`] owns the system state and is the only thing that mutates
//! it. Commands are applied between frames; [`Simulation::step`] advances
//! one frame when running and is a no-op when paused.

use nbody::body::{BodyId, BodyKind};
use nbody::forces::ForceModel;
use nbody::state::SystemState;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::command::{Command, CommandOutcome, NewBody};
use super::driver::{PhysicsPipeline, StepReport};
use super::snapshot::{Diagnostics, Snapshot};
use super::timestep::{clamp_time_scale, next_faster, next_slower};
use crate::config::SimulationConfig;
use crate::error::SimulationError;
use crate::scenario::presets::{SATELLITE_MASS, SATELLITE_RADIUS};
use crate::scenario::{BodySpec, Scenario, template};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunState {
    Running,
    Paused,
}

/// Interactive N-body simulation
///
/// # Example
/// ```rust
/// use spacelab::config::SimulationConfig;
/// use spacelab::scenario::Scenario;
/// use spacelab::simulation::Simulation;
///
/// let scenario = Scenario::predefined("earth_moon").unwrap();
/// let mut sim = Simulation::new(SimulationConfig::default(), scenario).unwrap();
///
/// sim.set_time_scale(64.0);
/// for _ in 0..100 {
///     sim.step();
/// }
///
/// assert_eq!(sim.elapsed(), 6400.0);
/// assert_eq!(sim.snapshot().body_count(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct Simulation {
    config: SimulationConfig,
    pipeline: PhysicsPipeline,
    scenario: Scenario,
    state: SystemState,
    run_state: RunState,
    time_scale: f64,
    frame: u64,
    satellites_created: u32,
}

impl Simulation {
    /// Build a running simulation seeded from `scenario`
    ///
    /// Fails if the configuration or any scenario body is invalid.
    pub fn new(config: SimulationConfig, scenario: Scenario) -> Result<Self, SimulationError> {
        config.validate()?;
        let state = scenario.seed(config.trail_length)?;

        info!(
            scenario = %scenario.name,
            bodies = state.body_count(),
            "Simulation created"
        );

        Ok(Self {
            pipeline: PhysicsPipeline::from_config(&config),
            time_scale: config.initial_time_scale,
            satellites_created: scenario.satellite_count(),
            run_state: RunState::Running,
            frame: 0,
            config,
            scenario,
            state,
        })
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn scenario(&self) -> &Scenario {
        &self.scenario
    }

    pub fn state(&self) -> &SystemState {
        &self.state
    }

    pub fn run_state(&self) -> RunState {
        self.run_state
    }

    pub fn is_paused(&self) -> bool {
        self.run_state == RunState::Paused
    }

    pub fn time_scale(&self) -> f64 {
        self.time_scale
    }

    /// Simulated seconds since the last reset
    pub fn elapsed(&self) -> f64 {
        self.state.time
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn body_count(&self) -> usize {
        self.state.body_count()
    }

    /// Simulated seconds the next frame will cover
    pub fn frame_dt(&self) -> f64 {
        self.config.base_dt * self.time_scale
    }

    pub fn pause(&mut self) -> RunState {
        if self.run_state == RunState::Running {
            self.run_state = RunState::Paused;
            info!(elapsed = self.elapsed(), "Simulation paused");
        }
        self.run_state
    }

    pub fn resume(&mut self) -> RunState {
        if self.run_state == RunState::Paused {
            self.run_state = RunState::Running;
            info!(elapsed = self.elapsed(), "Simulation resumed");
        }
        self.run_state
    }

    pub fn toggle_pause(&mut self) -> RunState {
        match self.run_state {
            RunState::Running => self.pause(),
            RunState::Paused => self.resume(),
        }
    }

    /// Re-seed from the scenario and start running
    ///
    /// Elapsed time, trails, markers and body ids start over; the time
    /// scale is kept.
    pub fn reset(&mut self) -> Result<(), SimulationError> {
        self.state = self.scenario.seed(self.config.trail_length)?;
        self.satellites_created = self.scenario.satellite_count();
        self.frame = 0;
        self.run_state = RunState::Running;

        info!(
            scenario = %self.scenario.name,
            bodies = self.state.body_count(),
            "Simulation reset"
        );
        Ok(())
    }

    /// Set the time scale, clamped into the configured range
    ///
    /// Non-finite requests are ignored.
    ///
    /// # Returns
    /// The time scale now in effect
    pub fn set_time_scale(&mut self, requested: f64) -> f64 {
        let (min, max) = (self.config.min_time_scale, self.config.max_time_scale);

        match clamp_time_scale(requested, min, max) {
            Some(scale) => {
                if scale != requested {
                    warn!(requested, applied = scale, "Time scale clamped to [{}, {}]", min, max);
                }
                self.time_scale = scale;
                debug!(time_scale = scale, "Time scale set");
            }
            None => warn!(requested, "Ignoring non-finite time scale"),
        }
        self.time_scale
    }

    /// Move one rung up the speed ladder
    pub fn faster(&mut self) -> f64 {
        if let Some(scale) = next_faster(
            self.time_scale,
            self.config.min_time_scale,
            self.config.max_time_scale,
        ) {
            self.time_scale = scale;
            info!(time_scale = scale, "Time scale increased");
        }
        self.time_scale
    }

    /// Move one rung down the speed ladder
    pub fn slower(&mut self) -> f64 {
        if let Some(scale) = next_slower(
            self.time_scale,
            self.config.min_time_scale,
            self.config.max_time_scale,
        ) {
            self.time_scale = scale;
            info!(time_scale = scale, "Time scale decreased");
        }
        self.time_scale
    }

    /// Validate and insert a body; works while paused
    pub fn create_body(&mut self, body: NewBody) -> Result<BodyId, SimulationError> {
        body.validate()?;

        let id = self.state.add_body(
            body.kind,
            body.name.clone(),
            body.mass,
            body.radius,
            body.position(),
            body.velocity(),
        );
        info!(
            id = %id,
            name = %body.name,
            kind = ?body.kind,
            mass = body.mass,
            "Body created"
        );
        Ok(id)
    }

    /// Insert a standard satellite named `Satellite-N`
    pub fn create_satellite(
        &mut self,
        position: [f64; 2],
        velocity: [f64; 2],
    ) -> Result<BodyId, SimulationError> {
        let name = format!("Satellite-{}", self.satellites_created + 1);
        let id = self.create_body(BodySpec::new(
            BodyKind::Satellite,
            name,
            SATELLITE_MASS,
            SATELLITE_RADIUS,
            position,
            velocity,
        ))?;
        self.satellites_created += 1;
        Ok(id)
    }

    /// Insert a copy of a predefined body at a new position
    pub fn create_from_template(
        &mut self,
        name: &str,
        position: [f64; 2],
        velocity: [f64; 2],
    ) -> Result<BodyId, SimulationError> {
        let base = template(name).ok_or_else(|| SimulationError::UnknownTemplate(name.to_string()))?;

        self.create_body(BodySpec {
            position,
            velocity,
            ..base
        })
    }

    pub fn remove_body(&mut self, id: BodyId) -> Result<(), SimulationError> {
        let body = self
            .state
            .remove_body(id)
            .ok_or(SimulationError::UnknownBody(id))?;
        info!(id = %id, name = %body.name, "Body removed");
        Ok(())
    }

    /// Drop every trail point and impact marker
    pub fn clear_trails(&mut self) {
        self.state.clear_trails_and_markers();
        debug!("Trails and impact markers cleared");
    }

    /// Apply one command between frames
    ///
    /// A failed command leaves the simulation untouched.
    pub fn apply(&mut self, command: Command) -> Result<CommandOutcome, SimulationError> {
        debug!(?command, "Applying command");

        let outcome = match command {
            Command::Pause => CommandOutcome::RunState(self.pause()),
            Command::Resume => CommandOutcome::RunState(self.resume()),
            Command::TogglePause => CommandOutcome::RunState(self.toggle_pause()),
            Command::Reset => {
                self.reset()?;
                CommandOutcome::Reset
            }
            Command::SetTimeScale { value } => CommandOutcome::TimeScale(self.set_time_scale(value)),
            Command::Faster => CommandOutcome::TimeScale(self.faster()),
            Command::Slower => CommandOutcome::TimeScale(self.slower()),
            Command::CreateBody(body) => CommandOutcome::BodyCreated(self.create_body(body)?),
            Command::CreateSatellite { position, velocity } => {
                CommandOutcome::BodyCreated(self.create_satellite(position, velocity)?)
            }
            Command::CreateFromTemplate {
                template,
                position,
                velocity,
            } => CommandOutcome::BodyCreated(self.create_from_template(
                &template, position, velocity,
            )?),
            Command::RemoveBody { id } => {
                self.remove_body(id)?;
                CommandOutcome::BodyRemoved(id)
            }
            Command::ClearTrails => {
                self.clear_trails();
                CommandOutcome::TrailsCleared
            }
        };

        Ok(outcome)
    }

    /// Advance one frame of `base_dt × time_scale` seconds
    ///
    /// While paused nothing changes and the report has `advanced == false`.
    pub fn step(&mut self) -> StepReport {
        if self.is_paused() {
            return StepReport::paused();
        }

        let dt = self.frame_dt();
        let report = self.pipeline.advance(&mut self.state, dt);
        self.frame += 1;

        for collision in &report.collisions {
            info!(
                kind = ?collision.kind,
                impactor = %collision.impactor,
                target = %collision.target,
                x = collision.position.x,
                y = collision.position.y,
                "Collision"
            );
        }
        debug!(
            frame = self.frame,
            dt = report.dt,
            substeps = report.substeps,
            bodies = self.state.body_count(),
            "Frame advanced"
        );

        report
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            bodies: &self.state.bodies,
            impact_markers: &self.state.impact_markers,
            elapsed: self.elapsed(),
            time_scale: self.time_scale,
            paused: self.is_paused(),
            frame: self.frame,
        }
    }

    pub fn diagnostics(&self) -> Diagnostics {
        let kinetic_energy = self.state.kinetic_energy();
        let potential_energy = self.pipeline.gravity().potential_energy(&self.state);

        Diagnostics {
            body_count: self.state.body_count(),
            total_mass: self.state.total_mass(),
            momentum: self.state.total_momentum(),
            kinetic_energy,
            potential_energy,
            total_energy: kinetic_energy + potential_energy,
        }
    }
}
