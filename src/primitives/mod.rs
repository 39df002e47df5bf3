//! Core plane-geometry primitives.
//!
//! These types provide the foundation for the geometry engine and the
//! sample generator.

mod point;

pub use point::Point2;
