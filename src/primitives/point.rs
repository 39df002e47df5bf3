//! 2-D point type for plane geometry.

use serde::{Deserialize, Serialize};

/// A point (or free vector) in the plane.
///
/// Used both for coordinates on the scatter plot and for directions, so it
/// carries the small set of vector operations the geometry engine needs.
///
/// # Examples
///
/// ```
/// use neurona::primitives::Point2;
///
/// let p = Point2::new(3.0, 4.0);
/// assert!((p.norm() - 5.0).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point2 {
    /// Horizontal coordinate (x1 axis).
    pub x: f32,
    /// Vertical coordinate (x2 axis).
    pub y: f32,
}

impl Point2 {
    /// Creates a point from its coordinates.
    #[must_use]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// The origin (0, 0).
    #[must_use]
    pub fn origin() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// Component-wise sum.
    #[must_use]
    pub fn add(&self, other: Point2) -> Point2 {
        Point2::new(self.x + other.x, self.y + other.y)
    }

    /// Component-wise difference (`self - other`).
    #[must_use]
    pub fn sub(&self, other: Point2) -> Point2 {
        Point2::new(self.x - other.x, self.y - other.y)
    }

    /// Scalar multiple.
    #[must_use]
    pub fn scale(&self, factor: f32) -> Point2 {
        Point2::new(self.x * factor, self.y * factor)
    }

    /// Dot product with another vector.
    #[must_use]
    pub fn dot(&self, other: Point2) -> f32 {
        self.x * other.x + self.y * other.y
    }

    /// Euclidean norm.
    #[must_use]
    pub fn norm(&self) -> f32 {
        self.x.hypot(self.y)
    }

    /// Returns true when both coordinates are finite (not NaN or infinite).
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

#[cfg(test)]
#[path = "point_tests.rs"]
mod tests;
