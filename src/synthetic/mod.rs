//! Synthetic sample generation for the scatter plot.
//!
//! Produces a fixed-size set of random 2-D points labeled by a hidden
//! ground-truth linear model. The set is generated once per visualization
//! session and is immutable thereafter; a reset regenerates a fresh sample
//! under the same distribution rules.
//!
//! # Quick Start
//!
//! ```
//! use neurona::model::LinearModel;
//! use neurona::synthetic::{generate_samples, Cluster};
//!
//! let truth = LinearModel::new(1.0, 1.0, -10.0);
//! let samples = generate_samples(30, &truth, Some(42));
//!
//! for p in &samples {
//!     assert_eq!(p.cluster == Cluster::Above, p.y_head >= 0.0);
//! }
//! ```

mod samples;

pub use samples::{generate_samples, Cluster, DataPoint, SAMPLE_RANGE};
