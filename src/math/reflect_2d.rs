use super::line_2d::LineCoefficients;
use super::Point3;
use crate::error::{GeometryError, Result};

/// Mirrors `point` across the infinite vertical plane whose trace in the XY
/// plane is `line`. The `z` coordinate is kept.
///
/// Axis-parallel lines are handled directly; oblique lines go through the
/// foot of the perpendicular dropped from the point onto the line.
///
/// # Errors
///
/// Returns `GeometryError::DegenerateSurface` if both `a` and `b` vanish.
pub fn reflect_across_line(point: &Point3, line: &LineCoefficients) -> Result<Point3> {
    if line.is_degenerate() {
        return Err(GeometryError::DegenerateSurface.into());
    }

    if line.is_vertical() {
        let x0 = line.c / line.a;
        return Ok(Point3::new(2.0 * x0 - point.x, point.y, point.z));
    }

    if line.is_horizontal() {
        let y0 = line.c / line.b;
        return Ok(Point3::new(point.x, 2.0 * y0 - point.y, point.z));
    }

    // Surface line y = m * x + b0, perpendicular y = -x / m + b1.
    let slope = -line.a / line.b;
    let intercept = line.c / line.b;
    let perp_slope = -1.0 / slope;
    let perp_intercept = point.y - perp_slope * point.x;

    let foot_x = (perp_intercept - intercept) / (slope - perp_slope);
    let foot_y = perp_slope * foot_x + perp_intercept;

    Ok(Point3::new(
        2.0 * foot_x - point.x,
        2.0 * foot_y - point.y,
        point.z,
    ))
}
