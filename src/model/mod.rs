//! The user-adjustable linear model.
//!
//! `LinearModel` is the single source of truth for the visualization: the UI
//! layer owns one, mutates it on drag/slider events, and passes it in fresh
//! on every recompute. Segment endpoints are never stored here; they are
//! derived through [`crate::geometry`] on demand, so the drawn arrow can
//! never disagree with the displayed weight values.

use serde::{Deserialize, Serialize};

use crate::geometry::{self, Segment};
use crate::primitives::Point2;

/// A 2-input linear model: weights `(w1, w2)` and a bias.
///
/// Also doubles as the hidden ground-truth model used to label samples and
/// compute loss.
///
/// # Examples
///
/// ```
/// use neurona::model::LinearModel;
///
/// let model = LinearModel::new(1.0, 1.0, -10.0);
/// assert!((model.predict(3.0, 4.0) + 3.0).abs() < 1e-6);
///
/// let seg = model.weight_segment();
/// assert!((seg.length() - 2.0_f32.sqrt()).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearModel {
    /// First weight.
    pub w1: f32,
    /// Second weight.
    pub w2: f32,
    /// Scalar offset added to the weighted sum.
    pub bias: f32,
}

impl LinearModel {
    /// Creates a model from its parameters.
    ///
    /// # Panics
    ///
    /// Panics if any parameter is NaN or infinite. Non-finite parameters are
    /// a caller defect, not a model state a user can reach.
    #[must_use]
    pub fn new(w1: f32, w2: f32, bias: f32) -> Self {
        assert!(
            w1.is_finite() && w2.is_finite() && bias.is_finite(),
            "Model parameters must be finite, got ({w1}, {w2}, {bias})"
        );
        Self { w1, w2, bias }
    }

    /// Returns the model with a replaced first weight.
    #[must_use]
    pub fn with_w1(mut self, w1: f32) -> Self {
        assert!(w1.is_finite(), "w1 must be finite, got {w1}");
        self.w1 = w1;
        self
    }

    /// Returns the model with a replaced second weight.
    #[must_use]
    pub fn with_w2(mut self, w2: f32) -> Self {
        assert!(w2.is_finite(), "w2 must be finite, got {w2}");
        self.w2 = w2;
        self
    }

    /// Returns the model with a replaced bias.
    #[must_use]
    pub fn with_bias(mut self, bias: f32) -> Self {
        assert!(bias.is_finite(), "bias must be finite, got {bias}");
        self.bias = bias;
        self
    }

    /// The weight vector as a point.
    #[must_use]
    pub fn weights(&self) -> Point2 {
        Point2::new(self.w1, self.w2)
    }

    /// Evaluates `w1·x1 + w2·x2 + bias`.
    #[must_use]
    pub fn predict(&self, x1: f32, x2: f32) -> f32 {
        geometry::predict(x1, x2, self.w1, self.w2, self.bias)
    }

    /// Dot product of the weights with an input, without the bias term.
    #[must_use]
    pub fn weighted_sum(&self, input: Point2) -> f32 {
        geometry::weighted_sum(self.weights(), input)
    }

    /// The drawable weight segment for the current parameters.
    #[must_use]
    pub fn weight_segment(&self) -> Segment {
        geometry::weight_segment(self.w1, self.w2, self.bias)
    }

    /// The decision-boundary indicator, or `None` for a zero weight vector.
    #[must_use]
    pub fn boundary(&self, half_length: f32) -> Option<Segment> {
        geometry::perpendicular(&self.weight_segment(), half_length)
    }
}
