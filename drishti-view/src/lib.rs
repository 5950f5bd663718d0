//! # Drishti-View: Vehicle Visualization Helpers
//!
//! Stateless helpers used by a vehicle visualization frontend: 2D geometry
//! for lane markers and obstacle footprints, time formatting for the
//! status bar, and small utilities for render-object pools.
//!
//! ## Quick Start
//!
//! ```rust
//! use drishti_view::core::Pose;
//! use drishti_view::lane::{calculate_lane_marker_points, LaneMarker};
//!
//! let car = Pose::new(0.0, 0.0, 0.0);
//! let marker = LaneMarker::new(1.0, 0.0, 0.0, 0.0, 3.0);
//! let points = calculate_lane_marker_points(Some(&car), Some(&marker));
//! assert_eq!(points.len(), 3);
//! ```
//!
//! ## Coordinate Frame
//!
//! - **X-forward**: Positive X is in front of the vehicle
//! - **Y-left**: Positive Y is to the left of the vehicle
//! - **Rotation**: Counter-clockwise positive, radians
//!
//! ## Modules
//!
//! - [`core`]: Point, pose, line and quadrilateral primitives
//! - [`lane`]: Cubic lane-marker sampling in world frame
//! - [`time`]: Duration and timestamp formatting
//! - [`visibility`]: Bulk show/hide over render objects
//! - [`props`]: Typed property records and merging
//! - [`config`]: YAML configuration

pub mod config;
pub mod core;
pub mod error;
pub mod lane;
pub mod props;
pub mod time;
pub mod visibility;

pub use config::{Clock, ConfigLoadError, DrishtiConfig, TimeSection};
pub use error::{Error, Result};
pub use lane::{LaneMarker, LaneMarkerPoints, calculate_lane_marker_points};
pub use props::{Properties, PropertyValue, copy_properties};
pub use time::{milliseconds_to_time, timestamp_ms_to_time_string};
pub use visibility::{Visible, hide_objects, show_objects};
