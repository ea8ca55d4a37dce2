//! Bounded position history for visualization

use nalgebra::Point2;
use serde::Serialize;
use std::collections::VecDeque;

/// Recent positions of a body, oldest first
///
/// The trail never holds more than `max_len` points; pushing onto a full
/// trail evicts the oldest point. A `max_len` of zero disables recording.
///
/// # Examples
///
/// ```
/// use nbody::trail::Trail;
/// use nalgebra::Point2;
///
/// let mut trail = Trail::new(2);
/// trail.push(Point2::new(0.0, 0.0));
/// trail.push(Point2::new(1.0, 0.0));
/// trail.push(Point2::new(2.0, 0.0));
///
/// assert_eq!(trail.len(), 2);
/// assert_eq!(trail.oldest(), Some(&Point2::new(1.0, 0.0)));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trail {
    points: VecDeque<Point2<f64>>,
    max_len: usize,
}

impl Trail {
    pub fn new(max_len: usize) -> Self {
        Self {
            points: VecDeque::with_capacity(max_len.min(1024)),
            max_len,
        }
    }

    /// Appends a point, evicting from the front while over capacity
    pub fn push(&mut self, point: Point2<f64>) {
        if self.max_len == 0 {
            return;
        }
        while self.points.len() >= self.max_len {
            self.points.pop_front();
        }
        self.points.push_back(point);
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// Changes the capacity, dropping the oldest points if needed
    pub fn set_max_len(&mut self, max_len: usize) {
        self.max_len = max_len;
        while self.points.len() > max_len {
            self.points.pop_front();
        }
    }

    pub fn max_len(&self) -> usize {
        self.max_len
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn oldest(&self) -> Option<&Point2<f64>> {
        self.points.front()
    }

    pub fn newest(&self) -> Option<&Point2<f64>> {
        self.points.back()
    }

    /// Iterates from oldest to newest
    pub fn iter(&self) -> impl Iterator<Item = &Point2<f64>> {
        self.points.iter()
    }
}

impl Default for Trail {
    fn default() -> Self {
        Self::new(0)
    }
}
