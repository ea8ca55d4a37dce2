//! Collision detection and resolution for N-body systems
//!
//! Overlapping discs are found by pairwise checks and resolved by mass
//! dominance: the heavier body absorbs the lighter one, or both are
//! destroyed when their masses are comparable. Each resolved collision
//! leaves an [`ImpactMarker`] behind.

pub mod detection;
pub mod impact;
pub mod resolution;


pub use detection::{CollisionDetector, CollisionEvent, DirectDetector};
pub use impact::{ImpactMarker, impact_point};
pub use resolution::{
    CollisionKind, CollisionOutcome, CollisionPolicy, CollisionReport, DEFAULT_DOMINANCE_RATIO,
    resolve_collisions,
};
