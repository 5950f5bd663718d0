//! Point-in-quadrilateral and side-of-segment tests.

use super::point::Point2D;

/// Signed area term of `p` relative to directed edge `p1 -> p2`.
///
/// Positive when `p` is counter-clockwise (left) of the edge.
#[inline]
fn edge_cross(p1: Point2D, p2: Point2D, p: Point2D) -> f64 {
    (p2.x - p1.x) * (p.y - p1.y) - (p.x - p1.x) * (p2.y - p1.y)
}

/// Test whether `p` lies inside the quadrilateral `[p0, p1, p2, p3]`.
///
/// The corners must be given in winding order. `p` is inside when it is
/// on the same side of the opposite edges `p0->p1` / `p2->p3` and of
/// `p1->p2` / `p3->p0`. Points exactly on an edge count as inside.
///
/// Only meaningful for convex quadrilaterals; concave or self-intersecting
/// input gives an unspecified answer.
///
/// # Example
/// ```
/// use drishti_view::core::{is_point_in_quad, Point2D};
///
/// let square = [
///     Point2D::new(0.0, 0.0),
///     Point2D::new(1.0, 0.0),
///     Point2D::new(1.0, 1.0),
///     Point2D::new(0.0, 1.0),
/// ];
/// assert!(is_point_in_quad(&square, Point2D::new(0.5, 0.5)));
/// assert!(!is_point_in_quad(&square, Point2D::new(2.0, 2.0)));
/// ```
pub fn is_point_in_quad(points: &[Point2D; 4], p: Point2D) -> bool {
    let [p0, p1, p2, p3] = *points;
    edge_cross(p0, p1, p) * edge_cross(p2, p3, p) >= 0.0
        && edge_cross(p1, p2, p) * edge_cross(p3, p0, p) >= 0.0
}

/// Test whether `p` lies strictly to the right of directed segment `p1 -> p2`.
///
/// Computes `(p - p1) x (p2 - p1)`, which is positive on the clockwise
/// side. Points on the supporting line return `false`.
pub fn point_with_direction_vector(p: Point2D, p1: Point2D, p2: Point2D) -> bool {
    (p - p1).cross(&(p2 - p1)) > 0.0
}
