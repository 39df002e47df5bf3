//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use neurona::prelude::*;
//! ```

pub use crate::error::{NeuronaError, Result};
pub use crate::geometry::{loss, perpendicular, predict, weight_segment, weighted_sum, Segment};
pub use crate::model::LinearModel;
pub use crate::primitives::Point2;
pub use crate::store::UiStore;
pub use crate::synthetic::{generate_samples, Cluster, DataPoint, SAMPLE_RANGE};
pub use crate::view::{Frame, SelectionReadout};
