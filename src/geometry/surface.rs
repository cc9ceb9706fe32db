use crate::error::{GeometryError, Result};
use crate::math::line_2d::LineCoefficients;
use crate::math::reflect_2d::reflect_across_line;
use crate::math::{Point2, Point3};

/// A reflecting wall segment in the XY plane.
///
/// Stored with its implicit line `a * x + b * y = c` and its midpoint. The
/// wall is treated as an infinite vertical plane when reflecting.
#[derive(Debug, Clone, PartialEq)]
pub struct Surface {
    start: Point2,
    end: Point2,
    center: Point2,
    line: LineCoefficients,
}

impl Surface {
    /// Creates a surface between two endpoints.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::DegenerateSurface` if the endpoints coincide or
    /// a coordinate is not finite.
    pub fn new(start: Point2, end: Point2) -> Result<Self> {
        let line = LineCoefficients::through(&start, &end);
        let finite = start.iter().chain(end.iter()).all(|v| v.is_finite());
        if !finite || line.is_degenerate() {
            return Err(GeometryError::DegenerateSurface.into());
        }
        Ok(Self {
            start,
            end,
            center: nalgebra::center(&start, &end),
            line,
        })
    }

    /// Returns the starting endpoint.
    #[must_use]
    pub fn start(&self) -> &Point2 {
        &self.start
    }

    /// Returns the ending endpoint.
    #[must_use]
    pub fn end(&self) -> &Point2 {
        &self.end
    }

    /// Returns the midpoint of the two endpoints.
    #[must_use]
    pub fn center(&self) -> &Point2 {
        &self.center
    }

    /// Returns the implicit line coefficients.
    #[must_use]
    pub fn line(&self) -> &LineCoefficients {
        &self.line
    }

    /// Mirrors a point across this surface's line, keeping its height.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::DegenerateSurface` if the line is undefined.
    pub fn reflect(&self, point: &Point3) -> Result<Point3> {
        reflect_across_line(point, &self.line)
    }
}
