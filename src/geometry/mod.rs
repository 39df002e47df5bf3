//! Geometry engine for the linear-neuron visualization.
//!
//! Pure functions that turn a weight vector and a bias into drawable plane
//! geometry: the directed weight segment, the perpendicular decision-boundary
//! indicator, and the scalar readouts (weighted sum, prediction, loss).
//!
//! # Usage
//!
//! ```
//! use neurona::geometry::{weight_segment, predict, loss};
//!
//! let seg = weight_segment(1.0, 1.0, 0.0);
//! assert!((seg.end.x - 1.0).abs() < 1e-6);
//! assert!((seg.end.y - 1.0).abs() < 1e-6);
//!
//! let y = predict(3.0, 4.0, 1.0, 1.0, -10.0);
//! assert!((y + 3.0).abs() < 1e-6);
//! assert!((loss(y, 0.0) - 3.0).abs() < 1e-6);
//! ```
//!
//! All functions here are pure and constant-time. Mutable state (weights,
//! bias, selection) lives in the caller; derived geometry is recomputed from
//! scratch on every call so it can never drift from its inputs.

use serde::{Deserialize, Serialize};

use crate::primitives::Point2;

/// A directed segment in the plane, derived from model parameters.
///
/// Always a pure function of the current `(w1, w2, bias)`. Nothing may set
/// these coordinates except [`weight_segment`] and [`perpendicular`], or the
/// drawn arrow and the displayed weight values will disagree.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// Tail of the arrow.
    pub start: Point2,
    /// Head of the arrow.
    pub end: Point2,
}

impl Segment {
    /// Creates a segment from its endpoints.
    #[must_use]
    pub fn new(start: Point2, end: Point2) -> Self {
        Self { start, end }
    }

    /// The degenerate segment collapsed onto the origin.
    #[must_use]
    pub fn degenerate() -> Self {
        Self {
            start: Point2::origin(),
            end: Point2::origin(),
        }
    }

    /// Direction vector `end - start`.
    #[must_use]
    pub fn direction(&self) -> Point2 {
        self.end.sub(self.start)
    }

    /// Euclidean length of the segment.
    #[must_use]
    pub fn length(&self) -> f32 {
        self.direction().norm()
    }

    /// True when both endpoints coincide.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.start == self.end
    }
}

/// Computes the drawable segment for a weight vector offset by its bias.
///
/// The segment points in the direction of `(w1, w2)`, its length equals
/// `sqrt(w1² + w2²)`, and its start point lies exactly on the decision
/// boundary `w1·x1 + w2·x2 + bias = 0`:
///
/// ```text
/// norm   = sqrt(w1² + w2²)
/// unit   = (w1 / norm, w2 / norm)
/// offset = -bias / norm
/// start  = offset · unit
/// end    = (offset + norm) · unit
/// ```
///
/// The offset must be `-bias / norm`, not `+bias / norm`; with the positive
/// sign the start point lands on the wrong side of the origin. The boundary
/// membership of `start` is pinned by a regression test.
///
/// Visually, the arrow's length encodes the weight magnitude and its offset
/// from the origin encodes the bias-to-weight ratio.
///
/// # Degenerate case
///
/// `(w1, w2) = (0, 0)` has no direction; the segment collapses to the origin
/// rather than dividing by zero. This is a legitimate model state a user can
/// reach via sliders, not an error.
#[must_use]
pub fn weight_segment(w1: f32, w2: f32, bias: f32) -> Segment {
    let norm = w1.hypot(w2);
    if norm == 0.0 {
        return Segment::degenerate();
    }

    let unit = Point2::new(w1 / norm, w2 / norm);
    let offset = -bias / norm;

    Segment::new(unit.scale(offset), unit.scale(offset + norm))
}

/// Computes the decision-boundary indicator for a weight segment.
///
/// The result is centered at `segment.start`, perpendicular to the segment's
/// direction, with total length `2 · half_length`. It is purely visual and
/// has no effect on model state.
///
/// Returns `None` when the segment is degenerate: a zero-length direction has
/// no perpendicular, and the caller should skip drawing the boundary.
#[must_use]
pub fn perpendicular(segment: &Segment, half_length: f32) -> Option<Segment> {
    let dir = segment.direction();
    let norm = dir.norm();
    if norm == 0.0 {
        return None;
    }

    // Rotate the unit direction a quarter turn counterclockwise.
    let normal = Point2::new(-dir.y / norm, dir.x / norm);

    Some(Segment::new(
        segment.start.add(normal.scale(half_length)),
        segment.start.sub(normal.scale(half_length)),
    ))
}

/// Dot product of a weight vector with an input vector.
///
/// No bias term; the caller adds the bias when forming a full prediction.
#[must_use]
pub fn weighted_sum(weights: Point2, input: Point2) -> f32 {
    weights.dot(input)
}

/// Evaluates the linear model `w1·x1 + w2·x2 + bias` at a point.
///
/// Pure and total for finite inputs. The sign of the result tells which side
/// of the decision boundary the point falls on.
#[must_use]
pub fn predict(x1: f32, x2: f32, w1: f32, w2: f32, bias: f32) -> f32 {
    w1 * x1 + w2 * x2 + bias
}

/// Absolute difference between a prediction and a ground-truth value.
///
/// Symmetric and non-negative; zero iff the two values are equal.
#[must_use]
pub fn loss(predicted: f32, ground_truth: f32) -> f32 {
    (predicted - ground_truth).abs()
}


#[cfg(test)]
mod proptests;
