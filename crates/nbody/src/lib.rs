//! Two-dimensional N-body physics core
//!
//! Bodies live in a [`state::SystemState`] arena, attract each other through
//! a [`forces::ForceModel`], are advanced by an [`integrator::Integrator`],
//! and collide according to [`collisions::CollisionPolicy`]. Units are
//! kilometres, kilograms and seconds throughout.

pub mod body;
pub mod collisions;
pub mod forces;
pub mod integrator;
pub mod state;
pub mod trail;
pub mod vector;
