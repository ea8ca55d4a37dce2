//! Collision resolution by mass dominance
//!
//! When two bodies overlap the heavier one either absorbs the lighter one
//! (and continues unchanged) or, when their masses are too close, both are
//! destroyed. Every resolved collision leaves exactly one impact marker.

use nalgebra::Point2;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::body::{Body, BodyId};
use crate::collisions::CollisionEvent;
use crate::collisions::impact::{ImpactMarker, impact_point, midpoint};
use crate::state::SystemState;

/// Default mass ratio at which the heavier body survives
pub const DEFAULT_DOMINANCE_RATIO: f64 = 1.2;

/// How a collision ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollisionKind {
    /// The heavier body survived and the lighter one was removed
    Absorbed,
    /// Both bodies were removed
    Destroyed,
}

/// Outcome of classifying a colliding pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionOutcome {
    Absorbed { survivor: BodyId, destroyed: BodyId },
    Destroyed,
}

impl CollisionOutcome {
    pub fn kind(&self) -> CollisionKind {
        match self {
            CollisionOutcome::Absorbed { .. } => CollisionKind::Absorbed,
            CollisionOutcome::Destroyed => CollisionKind::Destroyed,
        }
    }
}

/// Decides which body survives a collision
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionPolicy {
    /// `max(m) / min(m)` at or above which the heavier body survives
    pub dominance_ratio: f64,
}

impl Default for CollisionPolicy {
    fn default() -> Self {
        Self {
            dominance_ratio: DEFAULT_DOMINANCE_RATIO,
        }
    }
}

impl CollisionPolicy {
    pub fn new(dominance_ratio: f64) -> Self {
        Self { dominance_ratio }
    }

    /// Classify a colliding pair
    ///
    /// On equal masses with a ratio of 1.0, `a` survives.
    ///
    /// # Examples
    ///
    /// ```
    /// use nbody::body::{Body, BodyId};
    /// use nbody::collisions::{CollisionOutcome, CollisionPolicy};
    ///
    /// let mut heavy = Body::new_at(100.0, 1.0, [0.0, 0.0], [0.0, 0.0]);
    /// heavy.id = BodyId(0);
    /// let mut light = Body::new_at(1.0, 1.0, [1.0, 0.0], [0.0, 0.0]);
    /// light.id = BodyId(1);
    ///
    /// let policy = CollisionPolicy::default();
    /// assert_eq!(
    ///     policy.classify(&light, &heavy),
    ///     CollisionOutcome::Absorbed { survivor: BodyId(0), destroyed: BodyId(1) }
    /// );
    /// ```
    pub fn classify(&self, a: &Body, b: &Body) -> CollisionOutcome {
        let (heavy, light) = if a.mass >= b.mass { (a, b) } else { (b, a) };
        let ratio = heavy.mass / light.mass;

        if ratio >= self.dominance_ratio {
            CollisionOutcome::Absorbed {
                survivor: heavy.id,
                destroyed: light.id,
            }
        } else {
            CollisionOutcome::Destroyed
        }
    }
}

/// Summary of one resolved collision
#[derive(Debug, Clone, PartialEq)]
pub struct CollisionReport {
    pub kind: CollisionKind,
    /// Surviving body, if any
    pub survivor: Option<BodyId>,
    /// Bodies removed by this collision
    pub removed: Vec<BodyId>,
    /// Name of the destroyed body (or the first of a destroyed pair)
    pub impactor: String,
    /// Name of the surviving body (or the second of a destroyed pair)
    pub target: String,
    /// Where the impact marker was placed
    pub position: Point2<f64>,
}

/// Process all collision events
///
/// Events are handled closest first (ties broken by body ids), so a
/// cascade resolves deterministically:
/// 1. A body consumed by an earlier event is never re-evaluated
/// 2. Each surviving pair yields one report and one impact marker
/// 3. Removed bodies are compacted out in a single pass at the end
///
/// # Arguments
///
/// * `state` - System state to modify
/// * `events` - Detected collision events
/// * `policy` - Survival rule
/// * `marker_lifetime` - Steps each new marker lives (None = until cleared)
///
/// # Examples
///
/// ```
/// use nbody::body::BodyKind;
/// use nbody::collisions::{CollisionDetector, CollisionPolicy, DirectDetector, resolve_collisions};
/// use nbody::state::SystemState;
/// use nalgebra::{Point2, Vector2};
///
/// let mut system = SystemState::new(0);
/// system.add_body(BodyKind::Planet, "Earth", 5.972e24, 6371.0, Point2::origin(), Vector2::zeros());
/// system.add_body(BodyKind::Satellite, "Sat", 1000.0, 0.1, Point2::new(6000.0, 0.0), Vector2::zeros());
///
/// let events = DirectDetector.detect(&system);
/// let reports = resolve_collisions(&mut system, events, &CollisionPolicy::default(), None);
///
/// assert_eq!(reports.len(), 1);
/// assert_eq!(system.body_count(), 1);
/// assert_eq!(system.impact_markers.len(), 1);
/// ```
pub fn resolve_collisions(
    state: &mut SystemState,
    mut events: Vec<CollisionEvent>,
    policy: &CollisionPolicy,
    marker_lifetime: Option<u32>,
) -> Vec<CollisionReport> {
    events.sort_by(|a, b| {
        a.separation
            .total_cmp(&b.separation)
            .then_with(|| (a.body_a, a.body_b).cmp(&(b.body_a, b.body_b)))
    });

    let mut consumed: HashSet<BodyId> = HashSet::new();
    let mut reports = Vec::new();

    for event in events {
        if event.body_a == event.body_b
            || consumed.contains(&event.body_a)
            || consumed.contains(&event.body_b)
        {
            continue;
        }

        let (Some(a), Some(b)) = (state.get_body(event.body_a), state.get_body(event.body_b))
        else {
            continue;
        };

        let report = match policy.classify(a, b) {
            CollisionOutcome::Absorbed {
                survivor,
                destroyed,
            } => {
                let (kept, lost) = if survivor == a.id { (a, b) } else { (b, a) };
                consumed.insert(destroyed);
                CollisionReport {
                    kind: CollisionKind::Absorbed,
                    survivor: Some(survivor),
                    removed: vec![destroyed],
                    impactor: lost.name.clone(),
                    target: kept.name.clone(),
                    position: impact_point(kept, lost),
                }
            }
            CollisionOutcome::Destroyed => {
                consumed.insert(a.id);
                consumed.insert(b.id);
                CollisionReport {
                    kind: CollisionKind::Destroyed,
                    survivor: None,
                    removed: vec![a.id, b.id],
                    impactor: a.name.clone(),
                    target: b.name.clone(),
                    position: midpoint(a, b),
                }
            }
        };

        state.impact_markers.push(ImpactMarker::new(
            report.position,
            report.kind,
            report.impactor.clone(),
            report.target.clone(),
            marker_lifetime,
        ));
        reports.push(report);
    }

    state.remove_bodies(&consumed);
    reports
}
