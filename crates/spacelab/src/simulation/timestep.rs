//! Time scaling and substep calculation.
//!
//! The frame timestep is `base_dt × time_scale`. The time scale is clamped
//! into the configured range and can also be stepped along a fixed ladder
//! of speeds.

/// Discrete speeds offered by `faster` / `slower`
pub const TIME_SCALE_LADDER: [f64; 17] = [
    0.1, 0.25, 0.5, 1.0, 2.0, 4.0, 8.0, 16.0, 32.0, 64.0, 128.0, 256.0, 512.0, 1024.0, 2048.0,
    4096.0, 8192.0,
];

/// Tolerance when comparing `dt / base_dt` against whole substeps
const SUBSTEP_EPSILON: f64 = 1e-9;

/// Clamp a requested time scale into `[min, max]`
///
/// # Returns
/// `None` when `requested` is not finite, otherwise the clamped value
///
/// # Example
/// ```rust
/// use spacelab::simulation::clamp_time_scale;
///
/// assert_eq!(clamp_time_scale(10_000.0, 0.1, 8192.0), Some(8192.0));
/// assert_eq!(clamp_time_scale(0.001, 0.1, 8192.0), Some(0.1));
/// assert_eq!(clamp_time_scale(f64::NAN, 0.1, 8192.0), None);
/// ```
pub fn clamp_time_scale(requested: f64, min: f64, max: f64) -> Option<f64> {
    requested.is_finite().then(|| requested.clamp(min, max))
}

/// Next ladder speed strictly above `current` that fits in `[min, max]`
pub fn next_faster(current: f64, min: f64, max: f64) -> Option<f64> {
    TIME_SCALE_LADDER
        .iter()
        .copied()
        .filter(|&s| s >= min && s <= max)
        .find(|&s| s > current)
}

/// Next ladder speed strictly below `current` that fits in `[min, max]`
pub fn next_slower(current: f64, min: f64, max: f64) -> Option<f64> {
    TIME_SCALE_LADDER
        .iter()
        .rev()
        .copied()
        .filter(|&s| s >= min && s <= max)
        .find(|&s| s < current)
}

/// Number of equal substeps a frame of length `dt` is split into
///
/// ```text
/// n = clamp(floor(dt / base_dt), 1, max_substeps)
/// ```
pub fn substep_count(dt: f64, base_dt: f64, max_substeps: usize) -> usize {
    let max_substeps = max_substeps.max(1);
    let ratio = dt / base_dt;
    if !ratio.is_finite() || ratio < 1.0 {
        return 1;
    }

    let whole = (ratio + SUBSTEP_EPSILON).floor();
    if whole >= max_substeps as f64 {
        max_substeps
    } else {
        (whole as usize).max(1)
    }
}
