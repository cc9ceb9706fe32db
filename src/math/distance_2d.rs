use super::{project, Point2, Point3};

/// Euclidean distance between two planar points.
#[must_use]
pub fn planar_distance(a: &Point2, b: &Point2) -> f64 {
    nalgebra::distance(a, b)
}

/// Euclidean distance between two spatial points.
#[must_use]
pub fn spatial_distance(a: &Point3, b: &Point3) -> f64 {
    nalgebra::distance(a, b)
}

/// Distance between the XY projection of `point` and a planar point.
#[must_use]
pub fn projected_distance(point: &Point3, target: &Point2) -> f64 {
    planar_distance(&project(point), target)
}
