//! Lane marker sampling.
//!
//! Perception publishes each lane boundary as a cubic polynomial in the
//! vehicle frame:
//!
//! ```text
//! y = c3 * x^3 + c2 * x^2 + c1 * x + c0      for 0 <= x < view_range
//! ```
//!
//! For rendering, the curve is sampled once per meter of `x` and each
//! sample is moved into the world frame using the vehicle pose.

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::core::{Point2D, Pose, polyval};

/// Upper bound on samples per marker (one per meter of view range).
pub const MAX_SAMPLES: usize = 10_000;

/// Cubic lane-marker model relative to the ego vehicle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LaneMarker {
    /// Lateral offset at the vehicle (c0).
    pub c0_position: f64,
    /// Heading angle term (c1).
    pub c1_heading_angle: f64,
    /// Curvature term (c2).
    pub c2_curvature: f64,
    /// Curvature derivative term (c3).
    pub c3_curvature_derivative: f64,
    /// Longitudinal range covered by the model, in meters.
    pub view_range: f64,
}

impl LaneMarker {
    /// Create a lane marker from its coefficients and view range.
    pub const fn new(
        c0_position: f64,
        c1_heading_angle: f64,
        c2_curvature: f64,
        c3_curvature_derivative: f64,
        view_range: f64,
    ) -> Self {
        Self {
            c0_position,
            c1_heading_angle,
            c2_curvature,
            c3_curvature_derivative,
            view_range,
        }
    }

    /// Polynomial coefficients, highest degree first.
    #[inline]
    pub fn coefficients(&self) -> [f64; 4] {
        [
            self.c3_curvature_derivative,
            self.c2_curvature,
            self.c1_heading_angle,
            self.c0_position,
        ]
    }

    /// Lateral offset `y` at longitudinal distance `x` (vehicle frame).
    #[inline]
    pub fn y_at(&self, x: f64) -> f64 {
        polyval(&self.coefficients(), x)
    }

    /// Number of integer samples `x` with `0 <= x < view_range`.
    ///
    /// Capped at [`MAX_SAMPLES`]. Non-finite and non-positive ranges give 0.
    pub fn sample_count(&self) -> usize {
        if !self.view_range.is_finite() || self.view_range <= 0.0 {
            return 0;
        }
        if self.view_range >= MAX_SAMPLES as f64 {
            return MAX_SAMPLES;
        }
        self.view_range.ceil() as usize
    }

    /// Iterate the sampled marker points in world frame.
    ///
    /// The iterator is `Clone`, so the same sequence can be replayed.
    pub fn points(&self, pose: &Pose) -> LaneMarkerPoints {
        LaneMarkerPoints {
            pose: *pose,
            coefficients: self.coefficients(),
            next: 0,
            count: self.sample_count(),
        }
    }
}

/// Iterator over world-frame lane marker samples, one per meter.
#[derive(Clone, Debug)]
pub struct LaneMarkerPoints {
    pose: Pose,
    coefficients: [f64; 4],
    next: usize,
    count: usize,
}

impl Iterator for LaneMarkerPoints {
    type Item = Point2D;

    fn next(&mut self) -> Option<Point2D> {
        if self.next >= self.count {
            return None;
        }
        let x = self.next as f64;
        self.next += 1;
        let y = polyval(&self.coefficients, x);
        Some(self.pose.transform_point(Point2D::new(x, y)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.count - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for LaneMarkerPoints {}

/// Sample a lane marker into world-frame points for the given vehicle.
///
/// Returns an empty vector when either the vehicle pose or the marker is
/// missing, e.g. before the first localization or perception message.
pub fn calculate_lane_marker_points(
    car: Option<&Pose>,
    lane_marker: Option<&LaneMarker>,
) -> Vec<Point2D> {
    let (Some(car), Some(lane_marker)) = (car, lane_marker) else {
        return Vec::new();
    };

    if !lane_marker.view_range.is_finite() || lane_marker.view_range > MAX_SAMPLES as f64 {
        warn!(
            "Lane marker view range {} outside sampling limit, using {} samples",
            lane_marker.view_range,
            lane_marker.sample_count()
        );
    }

    let points: Vec<Point2D> = lane_marker.points(car).collect();
    debug!(
        "Sampled {} lane marker points (view range {:.1} m)",
        points.len(),
        lane_marker.view_range
    );
    points
}
