//! Per-recompute snapshot for the rendering layer.
//!
//! The rendering layer owns all mutable state (weights, bias, selection) and
//! calls [`Frame::compute`] on every change. Everything in a `Frame` is
//! derived from the arguments of that one call; the core keeps nothing
//! across calls, so the drawn geometry can never drift from the model the
//! UI displays.

use serde::{Deserialize, Serialize};

use crate::geometry::{self, loss, Segment};
use crate::model::LinearModel;
use crate::synthetic::DataPoint;

/// Readouts for the currently selected sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SelectionReadout {
    /// Dot product of the model weights with the sample, without bias.
    pub weighted_sum: f32,
    /// Full model evaluation at the sample (weighted sum plus bias).
    pub prediction: f32,
    /// Absolute difference between the prediction and the sample's `y_head`.
    pub loss: f32,
}

/// Everything the rendering layer needs to draw one state of the
/// visualization.
///
/// # Examples
///
/// ```
/// use neurona::model::LinearModel;
/// use neurona::view::Frame;
///
/// let model = LinearModel::new(1.0, 1.0, 0.0);
/// let frame = Frame::compute(&model, 5.0, None);
///
/// assert!(frame.boundary.is_some());
/// assert!(frame.selection.is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    /// The directed weight segment.
    pub segment: Segment,
    /// The decision-boundary indicator; `None` for a zero weight vector.
    pub boundary: Option<Segment>,
    /// Readouts for the selected sample; `None` when nothing is selected.
    pub selection: Option<SelectionReadout>,
}

impl Frame {
    /// Derives a frame from the current model and selection.
    ///
    /// `boundary_half_length` sets the half-length of the drawn boundary
    /// indicator. The selection readout computes loss against the sample's
    /// stored ground-truth value.
    #[must_use]
    pub fn compute(
        model: &LinearModel,
        boundary_half_length: f32,
        selected: Option<&DataPoint>,
    ) -> Self {
        let segment = model.weight_segment();
        let boundary = geometry::perpendicular(&segment, boundary_half_length);

        let selection = selected.map(|point| {
            let weighted_sum = model.weighted_sum(point.position());
            let prediction = model.predict(point.x1, point.x2);
            SelectionReadout {
                weighted_sum,
                prediction,
                loss: loss(prediction, point.y_head),
            }
        });

        Self {
            segment,
            boundary,
            selection,
        }
    }
}

#[cfg(test)]
mod tests;
