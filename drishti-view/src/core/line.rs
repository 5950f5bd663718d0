//! Infinite lines in general form `a*x + b*y + c = 0`.

use log::trace;
use serde::{Deserialize, Serialize};

use super::point::Point2D;
use crate::error::{Error, Result};

/// An infinite 2D line `a*x + b*y + c = 0`.
///
/// `(a, b)` is the line's normal vector and is never zero. The only ways
/// to build a line are [`Line::new`], [`Line::from_normal`] and
/// deserialization, and all three check the normal.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "LineCoefficients")]
pub struct Line {
    a: f64,
    b: f64,
    c: f64,
}

/// Unchecked `{a, b, c}` as it appears on the wire.
#[derive(Deserialize)]
struct LineCoefficients {
    a: f64,
    b: f64,
    c: f64,
}

impl TryFrom<LineCoefficients> for Line {
    type Error = Error;

    fn try_from(raw: LineCoefficients) -> Result<Self> {
        Line::new(raw.a, raw.b, raw.c)
    }
}

impl Line {
    /// Create a line from its coefficients.
    ///
    /// Fails with [`Error::DegenerateLine`] when `a` and `b` are both zero.
    pub fn new(a: f64, b: f64, c: f64) -> Result<Self> {
        if a == 0.0 && b == 0.0 {
            return Err(Error::DegenerateLine { a, b });
        }
        Ok(Self { a, b, c })
    }

    /// Line through `point` perpendicular to `normal`.
    ///
    /// # Example
    /// ```
    /// use drishti_view::core::{Line, Point2D};
    ///
    /// // Vertical line x = 2
    /// let line = Line::from_normal(Point2D::new(1.0, 0.0), Point2D::new(2.0, 5.0)).unwrap();
    /// assert_eq!((line.a(), line.b(), line.c()), (1.0, 0.0, -2.0));
    /// ```
    pub fn from_normal(normal: Point2D, point: Point2D) -> Result<Self> {
        Self::new(normal.x, normal.y, -normal.dot(&point))
    }

    /// X coefficient.
    #[inline]
    pub fn a(&self) -> f64 {
        self.a
    }

    /// Y coefficient.
    #[inline]
    pub fn b(&self) -> f64 {
        self.b
    }

    /// Constant term.
    #[inline]
    pub fn c(&self) -> f64 {
        self.c
    }

    /// Normal vector `(a, b)`.
    #[inline]
    pub fn normal(&self) -> Point2D {
        Point2D::new(self.a, self.b)
    }

    /// Value of `a*x + b*y + c` at `point` (zero on the line).
    #[inline]
    pub fn evaluate(&self, point: Point2D) -> f64 {
        self.a * point.x + self.b * point.y + self.c
    }

    /// True if `point` is within `tolerance` (perpendicular distance) of the line.
    #[inline]
    pub fn contains(&self, point: Point2D, tolerance: f64) -> bool {
        self.evaluate(point).abs() <= tolerance * self.normal().length()
    }

    /// Perpendicular distance from `point` to the line.
    #[inline]
    pub fn distance_to(&self, point: Point2D) -> f64 {
        self.evaluate(point).abs() / self.normal().length()
    }

    /// Intersection point with another line.
    ///
    /// Solves the 2x2 system with Cramer's rule. Returns `None` when the
    /// lines are parallel or coincident (zero determinant).
    pub fn intersection(&self, other: &Line) -> Option<Point2D> {
        let det = self.a * other.b - other.a * self.b;
        if det == 0.0 {
            trace!("No unique intersection: {:?} and {:?} are parallel", self, other);
            return None;
        }

        let point = Point2D::new(
            (self.b * other.c - other.b * self.c) / det,
            (other.a * self.c - self.a * other.c) / det,
        );
        if !point.is_finite() {
            trace!("Intersection of {:?} and {:?} is not finite", self, other);
            return None;
        }
        Some(point)
    }
}

/// Intersection point of two lines, `None` if they are parallel.
#[inline]
pub fn intersection_point(line1: &Line, line2: &Line) -> Option<Point2D> {
    line1.intersection(line2)
}
