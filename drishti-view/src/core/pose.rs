//! Vehicle pose (ADC position and heading).

use serde::{Deserialize, Serialize};

use super::point::Point2D;

/// A 2D pose of the ego vehicle.
///
/// Field names serialize in the frontend's camelCase form
/// (`positionX`, `positionY`, `heading`).
///
/// The heading is stored as received and is not normalized.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pose {
    /// X position in meters.
    pub position_x: f64,
    /// Y position in meters.
    pub position_y: f64,
    /// Heading angle in radians, CCW positive from X-axis.
    pub heading: f64,
}

impl Pose {
    /// Create a new pose.
    #[inline]
    pub const fn new(position_x: f64, position_y: f64, heading: f64) -> Self {
        Self {
            position_x,
            position_y,
            heading,
        }
    }

    /// Get the position as a Point2D.
    #[inline]
    pub fn position(self) -> Point2D {
        Point2D::new(self.position_x, self.position_y)
    }

    /// Transform a point from the vehicle frame to the world frame.
    ///
    /// # Example
    /// ```
    /// use drishti_view::core::{Pose, Point2D};
    /// use std::f64::consts::FRAC_PI_2;
    ///
    /// let pose = Pose::new(1.0, 0.0, FRAC_PI_2); // At (1,0), facing +Y
    /// let world = pose.transform_point(Point2D::new(1.0, 0.0));
    /// assert!((world.x - 1.0).abs() < 1e-12);
    /// assert!((world.y - 1.0).abs() < 1e-12);
    /// ```
    #[inline]
    pub fn transform_point(self, point: Point2D) -> Point2D {
        let (sin, cos) = self.heading.sin_cos();
        Point2D {
            x: self.position_x + point.x * cos - point.y * sin,
            y: self.position_y + point.y * cos + point.x * sin,
        }
    }

    /// Transform a point from the world frame to the vehicle frame.
    #[inline]
    pub fn inverse_transform_point(self, point: Point2D) -> Point2D {
        let (sin, cos) = self.heading.sin_cos();
        let dx = point.x - self.position_x;
        let dy = point.y - self.position_y;
        Point2D {
            x: dx * cos + dy * sin,
            y: -dx * sin + dy * cos,
        }
    }
}
