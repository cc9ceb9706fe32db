pub mod distance_2d;
pub mod line_2d;
pub mod reflect_2d;

/// 2D (planar) point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 3D (spatial) point type.
pub type Point3 = nalgebra::Point3<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Projects a spatial point onto the horizontal (XY) plane.
#[must_use]
pub fn project(point: &Point3) -> Point2 {
    Point2::new(point.x, point.y)
}

/// Lifts a planar point into space at height `z`.
#[must_use]
pub fn lift(point: &Point2, z: f64) -> Point3 {
    Point3::new(point.x, point.y, z)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_drops_z() {
        let p = project(&Point3::new(1.0, 2.0, 3.0));
        assert_eq!(p, Point2::new(1.0, 2.0));
    }

    #[test]
    fn lift_then_project_is_identity() {
        let p = Point2::new(-4.5, 7.25);
        assert_eq!(project(&lift(&p, 9.0)), p);
        assert_eq!(lift(&p, 9.0).z, 9.0);
    }
}
