//! End-to-end frontend workflow: pose and lane messages to display data.

use approx::assert_relative_eq;
use drishti_view::core::{
    Line, Point2D, Pose, abs_cross_product, cross_product, intersection_point, is_point_in_quad,
    point_with_direction_vector,
};
use drishti_view::lane::MAX_SAMPLES;
use drishti_view::time::milliseconds_to_time;
use drishti_view::{
    DrishtiConfig, LaneMarker, Properties, PropertyValue, Visible, calculate_lane_marker_points,
    copy_properties, hide_objects,
};

struct LanePoint {
    position: Point2D,
    visible: bool,
}

impl Visible for LanePoint {
    fn is_visible(&self) -> bool {
        self.visible
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
}

#[test]
fn test_lane_marker_from_json_messages() {
    env_logger::try_init().ok();

    let car: Pose =
        serde_json::from_str(r#"{"positionX": 100.0, "positionY": 50.0, "heading": 0.0}"#).unwrap();
    let marker: LaneMarker = serde_json::from_str(
        r#"{"c0Position": -1.75, "c1HeadingAngle": 0.0, "c2Curvature": 0.0,
            "c3CurvatureDerivative": 0.0, "viewRange": 30.0}"#,
    )
    .unwrap();

    let points = calculate_lane_marker_points(Some(&car), Some(&marker));
    assert_eq!(points.len(), 30);
    assert_eq!(points[0], Point2D::new(100.0, 48.25));
    assert_eq!(points[29], Point2D::new(129.0, 48.25));
}

#[test]
fn test_oversized_view_range_from_json_is_capped() {
    let marker: LaneMarker = serde_json::from_str(
        r#"{"c0Position": 0.0, "c1HeadingAngle": 0.0, "c2Curvature": 0.0,
            "c3CurvatureDerivative": 0.0, "viewRange": 1e300}"#,
    )
    .unwrap();

    let points = calculate_lane_marker_points(Some(&Pose::default()), Some(&marker));
    assert_eq!(points.len(), MAX_SAMPLES);
}

#[test]
fn test_degenerate_line_message_rejected() {
    assert!(serde_json::from_str::<Line>(r#"{"a": 0.0, "b": 0.0, "c": 1.0}"#).is_err());
}

#[test]
fn test_render_pool_shrinks_to_lane_length() {
    let car = Pose::new(0.0, 0.0, 0.4);
    let long = LaneMarker::new(0.0, 0.02, 0.001, 0.0, 12.0);
    let short = LaneMarker { view_range: 5.0, ..long };

    let mut pool: Vec<LanePoint> = calculate_lane_marker_points(Some(&car), Some(&long))
        .into_iter()
        .map(|position| LanePoint {
            position,
            visible: true,
        })
        .collect();

    let fresh = calculate_lane_marker_points(Some(&car), Some(&short));
    for (slot, point) in pool.iter_mut().zip(&fresh) {
        slot.position = *point;
    }
    assert_eq!(hide_objects(&mut pool, fresh.len()), 7);
    assert_eq!(pool.iter().filter(|p| p.visible).count(), 5);
    assert_eq!(pool[4].position, fresh[4]);
}

#[test]
fn test_obstacle_footprint_queries() {
    // Footprint of a 4m x 2m obstacle centred 10m ahead of a car heading +Y
    let car = Pose::new(0.0, 0.0, std::f64::consts::FRAC_PI_2);
    let corners = [
        car.transform_point(Point2D::new(8.0, -1.0)),
        car.transform_point(Point2D::new(12.0, -1.0)),
        car.transform_point(Point2D::new(12.0, 1.0)),
        car.transform_point(Point2D::new(8.0, 1.0)),
    ];

    assert!(is_point_in_quad(&corners, Point2D::new(0.0, 10.0)));
    assert!(!is_point_in_quad(&corners, Point2D::new(0.0, 5.0)));
    assert!(!is_point_in_quad(&corners, Point2D::new(3.0, 10.0)));

    // Left-hand corner is not on the clockwise side of the forward ray
    let ahead = car.transform_point(Point2D::new(1.0, 0.0));
    assert!(!point_with_direction_vector(corners[2], car.position(), ahead));
    assert!(point_with_direction_vector(corners[0], car.position(), ahead));

    // Footprint area via the cross product of two edges
    let area = abs_cross_product(corners[1] - corners[0], corners[3] - corners[0]);
    assert_relative_eq!(area, 8.0, epsilon = 1e-9);
}

#[test]
fn test_stop_line_intersection() {
    let x_zero = Line::new(1.0, 0.0, 0.0).unwrap();
    let y_zero = Line::new(0.0, 1.0, 0.0).unwrap();
    assert_eq!(intersection_point(&x_zero, &y_zero), Some(Point2D::new(0.0, 0.0)));

    // Car path along heading, stop line perpendicular to the road direction
    let heading = Point2D::new(1.0, 1.0);
    let path = Line::from_normal(Point2D::new(1.0, -1.0), Point2D::ZERO).unwrap();
    let stop_line = Line::from_normal(heading, Point2D::new(3.0, 3.0)).unwrap();
    let hit = path.intersection(&stop_line).unwrap();
    assert_relative_eq!(hit.x, 3.0, epsilon = 1e-12);
    assert_relative_eq!(hit.y, 3.0, epsilon = 1e-12);

    let parallel = Line::from_normal(Point2D::new(1.0, -1.0), Point2D::new(0.0, 2.0)).unwrap();
    assert_eq!(path.intersection(&parallel), None);

    assert_eq!(cross_product(Point2D::new(1.0, 0.0), Point2D::new(0.0, 1.0)), 1.0);
}

#[test]
fn test_status_bar_strings() {
    let config = DrishtiConfig::from_yaml("time: {clock: utc, show_milliseconds: false}").unwrap();
    assert_eq!(config.time.format_timestamp(1_609_506_245_007).unwrap(), "13:04:05");
    assert_eq!(milliseconds_to_time(61005), "01:01.005");

    let mut style = Properties::new();
    style.insert("color".into(), "white".into());
    let overrides: Properties = serde_json::from_str(r#"{"color": "yellow", "dashed": true}"#).unwrap();
    copy_properties(&mut style, &overrides);
    assert_eq!(style["color"], PropertyValue::from("yellow"));
    assert_eq!(style["dashed"], PropertyValue::Bool(true));
}
