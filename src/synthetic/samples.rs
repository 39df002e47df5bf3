//! Labeled 2-D sample generation.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::model::LinearModel;
use crate::primitives::Point2;

/// Half-open range both coordinates are drawn from.
pub const SAMPLE_RANGE: std::ops::Range<f32> = 1.0..9.0;

/// Side of the decision boundary a sample falls on.
///
/// Chosen by the sign of the ground-truth evaluation: non-negative maps to
/// [`Cluster::Above`], negative to [`Cluster::Below`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cluster {
    /// Ground truth evaluated to a non-negative value.
    Above,
    /// Ground truth evaluated to a negative value.
    Below,
}

impl Cluster {
    /// Classifies a ground-truth evaluation by its sign.
    #[must_use]
    pub fn from_y_head(y_head: f32) -> Self {
        if y_head >= 0.0 {
            Cluster::Above
        } else {
            Cluster::Below
        }
    }
}

/// One labeled sample on the scatter plot.
///
/// Immutable once generated: `y_head` and `cluster` are fixed at creation
/// from the ground-truth model and never recomputed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    /// First input coordinate.
    pub x1: f32,
    /// Second input coordinate.
    pub x2: f32,
    /// Ground-truth evaluation at `(x1, x2)`.
    pub y_head: f32,
    /// Label derived from the sign of `y_head`.
    pub cluster: Cluster,
}

impl DataPoint {
    /// The sample's coordinates as a point.
    #[must_use]
    pub fn position(&self) -> Point2 {
        Point2::new(self.x1, self.x2)
    }
}

/// Generates `count` labeled samples from a ground-truth model.
///
/// Each coordinate is drawn independently and uniformly from
/// [`SAMPLE_RANGE`]. For every point, `y_head` is the ground-truth
/// evaluation at its coordinates and `cluster` is the sign of `y_head`.
///
/// With `seed = Some(s)` the draw is reproducible; with `None` the RNG is
/// seeded from entropy. A regeneration (seeded differently or unseeded)
/// yields a fresh sample, so callers must not assume point identity is
/// stable across regenerations.
///
/// `count = 0` yields an empty vector.
///
/// # Examples
///
/// ```
/// use neurona::model::LinearModel;
/// use neurona::synthetic::generate_samples;
///
/// let truth = LinearModel::new(1.0, 1.0, -10.0);
/// let samples = generate_samples(30, &truth, Some(42));
/// assert_eq!(samples.len(), 30);
/// ```
#[must_use]
pub fn generate_samples(count: usize, ground_truth: &LinearModel, seed: Option<u64>) -> Vec<DataPoint> {
    let mut rng = match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    };

    (0..count)
        .map(|_| {
            let x1 = rng.gen_range(SAMPLE_RANGE);
            let x2 = rng.gen_range(SAMPLE_RANGE);
            let y_head = ground_truth.predict(x1, x2);
            DataPoint {
                x1,
                x2,
                y_head,
                cluster: Cluster::from_y_head(y_head),
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "samples_tests.rs"]
mod tests;
