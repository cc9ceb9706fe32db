use crate::error::Result;
use crate::geometry::Surface;
use crate::math::Point3;

/// Mirrors a point across a surface, treated as an infinite vertical wall.
///
/// The finite extent of the surface is ignored, so the reflection point of
/// the resulting path may lie outside the physical wall.
pub struct ReflectPoint<'a> {
    point: Point3,
    surface: &'a Surface,
}

impl<'a> ReflectPoint<'a> {
    /// Creates a new `ReflectPoint` operation.
    #[must_use]
    pub fn new(point: Point3, surface: &'a Surface) -> Self {
        Self { point, surface }
    }

    /// Executes the reflection, returning the mirrored point with unchanged `z`.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::DegenerateSurface` if the surface line is undefined.
    pub fn execute(&self) -> Result<Point3> {
        self.surface.reflect(&self.point)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Point2;
    use approx::assert_relative_eq;

    #[test]
    fn reflects_beyond_segment_extent() {
        // Short wall on x = 1 for y in [0, 1]; point far above still mirrors.
        let wall = Surface::new(Point2::new(1.0, 0.0), Point2::new(1.0, 1.0)).unwrap();
        let r = ReflectPoint::new(Point3::new(3.0, 50.0, 2.0), &wall)
            .execute()
            .unwrap();
        assert_eq!(r, Point3::new(-1.0, 50.0, 2.0));
    }

    #[test]
    fn twice_returns_original() {
        let wall = Surface::new(Point2::new(22.5, 25.0), Point2::new(15.0, 37.5)).unwrap();
        let p = Point3::new(-12.0, 61.0, 4.5);
        let once = ReflectPoint::new(p, &wall).execute().unwrap();
        let twice = ReflectPoint::new(once, &wall).execute().unwrap();
        assert_relative_eq!(twice.x, p.x, epsilon = 1e-9);
        assert_relative_eq!(twice.y, p.y, epsilon = 1e-9);
        assert_eq!(twice.z, p.z);
    }
}
