//! Scalar math helpers for 2D geometry.
//!
//! All angles are in radians, counter-clockwise positive.

use super::Point2D;

/// 2D cross product of two direction vectors.
///
/// Returns `p1.x * p2.y - p1.y * p2.x`. Positive when `p2` is
/// counter-clockwise from `p1`.
///
/// # Example
/// ```
/// use drishti_view::core::{cross_product, Point2D};
///
/// let x_axis = Point2D::new(1.0, 0.0);
/// let y_axis = Point2D::new(0.0, 1.0);
/// assert_eq!(cross_product(x_axis, y_axis), 1.0);
/// assert_eq!(cross_product(y_axis, x_axis), -1.0);
/// ```
#[inline]
pub fn cross_product(p1: Point2D, p2: Point2D) -> f64 {
    p1.cross(&p2)
}

/// Magnitude of the 2D cross product (parallelogram area).
#[inline]
pub fn abs_cross_product(p1: Point2D, p2: Point2D) -> f64 {
    cross_product(p1, p2).abs()
}

/// Evaluate a polynomial at `x` using Horner's rule.
///
/// Coefficients are ordered from the highest degree down to the constant
/// term, so `[c3, c2, c1, c0]` evaluates `c3*x^3 + c2*x^2 + c1*x + c0`.
/// An empty slice evaluates to zero.
///
/// # Example
/// ```
/// use drishti_view::core::polyval;
///
/// // 2x^2 + 3x + 1 at x = 2
/// assert_eq!(polyval(&[2.0, 3.0, 1.0], 2.0), 15.0);
/// ```
#[inline]
pub fn polyval(coefficients: &[f64], x: f64) -> f64 {
    coefficients.iter().fold(0.0, |acc, &c| acc * x + c)
}
