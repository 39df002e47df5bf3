//! Neurona: geometry core for an interactive linear-neuron visualization.
//!
//! Neurona provides the pure computational core behind an educational
//! single-page visualization of artificial-neuron mechanics: weighted sums,
//! bias, and decision boundaries. The rendering layer (SVG, sliders, drag
//! handles) owns all mutable state and calls into this crate on every
//! parameter change; everything here is derived afresh per call.
//!
//! # Quick Start
//!
//! ```
//! use neurona::prelude::*;
//!
//! // Hidden ground truth labels the scatter plot.
//! let truth = LinearModel::new(1.0, 1.0, -10.0);
//! let samples = generate_samples(30, &truth, Some(42));
//!
//! // The user-adjustable model drives the drawn geometry.
//! let model = LinearModel::new(0.5, 0.3, -2.0);
//! let frame = Frame::compute(&model, 5.0, samples.first());
//!
//! // The segment's length encodes the weight magnitude.
//! let expected = (0.5_f32 * 0.5 + 0.3 * 0.3).sqrt();
//! assert!((frame.segment.length() - expected).abs() < 1e-6);
//! ```
//!
//! # Modules
//!
//! - [`primitives`]: The `Point2` plane-geometry value type
//! - [`geometry`]: Weight segment, decision boundary, prediction, and loss
//! - [`model`]: The `(w1, w2, bias)` single source of truth
//! - [`synthetic`]: Labeled random sample generation
//! - [`view`]: Per-recompute `Frame` snapshot for the rendering layer
//! - [`store`]: Named-value-with-default store for persisted UI selections

pub mod error;
pub mod geometry;
pub mod model;
pub mod prelude;
pub mod primitives;
pub mod store;
pub mod synthetic;
pub mod view;

pub use error::{NeuronaError, Result};
pub use model::LinearModel;
pub use primitives::Point2;
