//! Core geometry types for the drishti-view library.
//!
//! This module provides the primitives used throughout the library:
//! - [`Point2D`]: 2D point / direction vector
//! - [`Pose`]: Ego vehicle position and heading
//! - [`Line`]: Infinite line in `a*x + b*y + c = 0` form
//! - Cross products, polynomial evaluation and quadrilateral tests

mod line;
mod point;
mod pose;
mod quad;

pub mod math;

pub use line::{Line, intersection_point};
pub use math::{abs_cross_product, cross_product, polyval};
pub use point::Point2D;
pub use pose::Pose;
pub use quad::{is_point_in_quad, point_with_direction_vector};
