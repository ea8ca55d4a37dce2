//! 2D vector helpers
//!
//! Arithmetic (addition, subtraction, scaling) comes straight from
//! `nalgebra`'s operators. This module adds the handful of operations whose
//! edge cases the physics code relies on, most importantly normalization of
//! a zero-length vector, which yields the zero vector instead of NaN.

use nalgebra::{Point2, Vector2};

/// Euclidean distance between two points
///
/// # Examples
///
/// ```
/// use nbody::vector::distance;
/// use nalgebra::Point2;
///
/// let d = distance(&Point2::new(0.0, 0.0), &Point2::new(3.0, 4.0));
/// assert_eq!(d, 5.0);
/// ```
pub fn distance(a: &Point2<f64>, b: &Point2<f64>) -> f64 {
    (b - a).magnitude()
}

/// Length of a vector
pub fn magnitude(v: &Vector2<f64>) -> f64 {
    v.magnitude()
}

/// Unit vector pointing along `v`, or `None` for a zero (or non-finite) vector
///
/// The length is taken with `hypot`, which does not underflow for tiny
/// components.
pub fn try_normalize(v: &Vector2<f64>) -> Option<Vector2<f64>> {
    let mag = v.x.hypot(v.y);
    if mag > 0.0 && mag.is_finite() {
        Some(v / mag)
    } else {
        None
    }
}

/// Unit vector pointing along `v`
///
/// A zero-length or non-finite vector has no direction; the zero vector is
/// returned in that case so callers never divide by zero.
///
/// # Examples
///
/// ```
/// use nbody::vector::normalize_or_zero;
/// use nalgebra::Vector2;
///
/// let unit = normalize_or_zero(&Vector2::new(0.0, 2.0));
/// assert_eq!(unit, Vector2::new(0.0, 1.0));
///
/// let none = normalize_or_zero(&Vector2::zeros());
/// assert_eq!(none, Vector2::zeros());
/// ```
pub fn normalize_or_zero(v: &Vector2<f64>) -> Vector2<f64> {
    try_normalize(v).unwrap_or_else(Vector2::zeros)
}

/// Point at distance `r` from the origin, `angle` radians counter-clockwise from +x
pub fn from_polar(r: f64, angle: f64) -> Point2<f64> {
    Point2::new(r * angle.cos(), r * angle.sin())
}

/// Velocity of magnitude `speed` perpendicular to the radius at `angle`
///
/// This is the counter-clockwise circular-orbit velocity for a body placed
/// with [`from_polar`] at the same angle.
///
/// # Examples
///
/// ```
/// use nbody::vector::tangential_velocity;
///
/// let v = tangential_velocity(10.0, 0.0);
/// assert!(v.x.abs() < 1e-12);
/// assert!((v.y - 10.0).abs() < 1e-12);
/// ```
pub fn tangential_velocity(speed: f64, angle: f64) -> Vector2<f64> {
    Vector2::new(-speed * angle.sin(), speed * angle.cos())
}

pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees.to_radians()
}

pub fn radians_to_degrees(radians: f64) -> f64 {
    radians.to_degrees()
}
