use super::{Point2, TOLERANCE};

/// Implicit form `a * x + b * y = c` of an infinite line in the XY plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineCoefficients {
    /// Coefficient of `x`.
    pub a: f64,
    /// Coefficient of `y`.
    pub b: f64,
    /// Right-hand side constant.
    pub c: f64,
}

impl LineCoefficients {
    /// Computes the coefficients of the line through `start` and `end`.
    ///
    /// `a = end.y - start.y`, `b = start.x - end.x`, `c = a * start.x + b * start.y`.
    /// Coincident points yield `a = b = 0`; check with [`Self::is_degenerate`].
    #[must_use]
    pub fn through(start: &Point2, end: &Point2) -> Self {
        let a = end.y - start.y;
        let b = start.x - end.x;
        let c = a * start.x + b * start.y;
        Self { a, b, c }
    }

    /// Returns `true` if the line is undefined: `a` and `b` are both zero, or
    /// a coefficient is not finite.
    ///
    /// Any two distinct finite endpoints give a valid line, however short.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        !(self.a.is_finite() && self.b.is_finite() && self.c.is_finite()) || self.scale() == 0.0
    }

    /// Returns `true` if the line is parallel to the Y axis (`x = c / a`).
    ///
    /// `b` is compared against `TOLERANCE` relative to the larger coefficient.
    #[must_use]
    pub fn is_vertical(&self) -> bool {
        !self.is_degenerate() && self.b.abs() <= TOLERANCE * self.scale()
    }

    /// Returns `true` if the line is parallel to the X axis (`y = c / b`).
    ///
    /// `a` is compared against `TOLERANCE` relative to the larger coefficient.
    #[must_use]
    pub fn is_horizontal(&self) -> bool {
        !self.is_degenerate() && self.a.abs() <= TOLERANCE * self.scale()
    }

    fn scale(&self) -> f64 {
        self.a.abs().max(self.b.abs())
    }

    /// Evaluates `a * x + b * y - c`, zero for points on the line.
    #[must_use]
    pub fn residual(&self, point: &Point2) -> f64 {
        self.a * point.x + self.b * point.y - self.c
    }
}
